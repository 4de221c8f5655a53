//! Package parts

use super::content_types::normalize_content_type;
use super::relationships::{Relationship, resolve_target};
use super::validation::{self, split_last_segment, validate_part_name};
use crate::error::{DuplicateRelationshipId, Result};
use std::borrow::Cow;
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

/// Compression requested for a part's archive entry
///
/// `Normal` is the default: a part that was never explicitly built reports
/// `Normal`, while an explicitly built part keeps the option it was given,
/// including `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompressionOption {
    /// Store the entry uncompressed
    None,
    /// Deflate with the default level
    #[default]
    Normal,
    /// Deflate with the best compression
    Maximum,
    /// Deflate favoring speed
    Fast,
    /// Deflate with the fastest setting
    SuperFast,
}

impl CompressionOption {
    /// Deflate level for this option, `None` meaning the backend default
    pub fn deflate_level(&self) -> Option<i64> {
        match self {
            CompressionOption::None | CompressionOption::Normal => None,
            CompressionOption::Maximum => Some(9),
            CompressionOption::Fast => Some(3),
            CompressionOption::SuperFast => Some(1),
        }
    }

    /// ZIP compression method for this option
    pub fn compression_method(&self) -> CompressionMethod {
        match self {
            CompressionOption::None => CompressionMethod::Stored,
            _ => CompressionMethod::Deflated,
        }
    }

    /// ZIP entry options for writing a part with this compression
    ///
    /// # Example
    ///
    /// ```
    /// use libopc::CompressionOption;
    /// use zip::CompressionMethod;
    ///
    /// let options = CompressionOption::None.file_options();
    /// # let _ = options;
    /// assert_eq!(CompressionOption::None.compression_method(), CompressionMethod::Stored);
    /// ```
    pub fn file_options(&self) -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(self.compression_method())
            .compression_level(self.deflate_level())
    }
}

/// A named, typed payload within a package
///
/// The part name and content type are validated once, by [`Part::new`], and
/// are trusted from then on. Only the relationship list changes after
/// construction.
///
/// `Part::default()` is the zero state: empty name and content type,
/// [`CompressionOption::Normal`], no relationships.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Part {
    uri: String,
    content_type: String,
    compression_option: CompressionOption,
    relationships: Vec<Relationship>,
}

impl Part {
    /// Create a new part
    ///
    /// The part name is checked against the OPC part name grammar and the
    /// content type is normalized. Nothing is returned unless both succeed.
    ///
    /// # Arguments
    ///
    /// * `uri` - The part name (e.g. `/word/document.xml`)
    /// * `content_type` - The media type of the payload
    /// * `compression_option` - Compression for the part's archive entry
    ///
    /// # Example
    ///
    /// ```
    /// use libopc::{CompressionOption, Part};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let part = Part::new("/doc/a.xml", "application/HTML", CompressionOption::None)?;
    /// assert_eq!(part.content_type(), "application/html");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        uri: impl Into<String>,
        content_type: &str,
        compression_option: CompressionOption,
    ) -> Result<Self> {
        let uri = uri.into();
        validate_part_name(&uri)?;
        let content_type = normalize_content_type(content_type)?;
        Ok(Self {
            uri,
            content_type,
            compression_option,
            relationships: Vec::new(),
        })
    }

    /// Part name
    #[inline]
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Normalized content type, empty for a default part
    #[inline]
    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Compression requested for the part's archive entry
    #[inline]
    pub fn compression_option(&self) -> CompressionOption {
        self.compression_option
    }

    /// Relationships in insertion order
    #[inline]
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    /// Check if the part has any relationship
    #[inline]
    pub fn has_relationship(&self) -> bool {
        !self.relationships.is_empty()
    }

    /// Add a relationship from this part
    ///
    /// Fails without touching the part if another relationship already uses
    /// `id`. The target mode is derived from `target_uri`.
    ///
    /// # Example
    ///
    /// ```
    /// use libopc::{CompressionOption, Part, TargetMode};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut part = Part::new("/word/document.xml", "application/xml", CompressionOption::Normal)?;
    /// let rel = part.add_relationship("rId1", "http://example.com/link", "https://example.com")?;
    /// assert_eq!(rel.target_mode(), TargetMode::External);
    /// assert!(part.add_relationship("rId1", "http://example.com/link", "a.xml").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn add_relationship(
        &mut self,
        id: impl Into<String>,
        rel_type: impl Into<String>,
        target_uri: impl Into<String>,
    ) -> std::result::Result<&Relationship, DuplicateRelationshipId> {
        let id = id.into();
        if self.relationships.iter().any(|r| r.id() == id) {
            return Err(DuplicateRelationshipId(id));
        }
        self.relationships
            .push(Relationship::new(id, rel_type.into(), target_uri.into()));
        Ok(&self.relationships[self.relationships.len() - 1])
    }

    /// Find a relationship by ID
    pub fn find_relationship(&self, id: &str) -> Option<&Relationship> {
        self.relationships.iter().find(|r| r.id() == id)
    }

    /// Relationships of a given type, in insertion order
    pub fn relationships_by_type<'a>(
        &'a self,
        rel_type: &'a str,
    ) -> impl Iterator<Item = &'a Relationship> + 'a {
        self.relationships
            .iter()
            .filter(move |r| r.rel_type() == rel_type)
    }

    /// Resolve an internal relationship's target to a part name
    pub fn resolve_target(&self, relationship: &Relationship) -> Option<String> {
        resolve_target(&self.uri, relationship.target_uri())
    }

    /// Archive entry name: the part name without its leading `/`, percent-decoded
    pub fn member_name(&self) -> Cow<'_, str> {
        validation::member_name(&self.uri)
    }

    /// Name of the relationships part for this part
    pub fn relationships_part_name(&self) -> String {
        validation::relationships_part_name(&self.uri)
    }

    /// Extension of the part name, without the dot
    pub fn extension(&self) -> &str {
        let (_, file) = split_last_segment(&self.uri);
        file.rfind('.').map_or("", |pos| &file[pos + 1..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ContentTypeError, Error, PartNameError};
    use crate::opc::TargetMode;

    const FAKE_URL: &str = "/doc/a.xml";

    #[test]
    fn test_new_part() {
        let cases = [
            ("application/HTML", "application/html"),
            ("TEXT/html; charset=ISO-8859-4", "text/html; charset=ISO-8859-4"),
            (
                "TEXT/html; charset=ISO-8859-4;q=2",
                "text/html; charset=ISO-8859-4; q=2",
            ),
        ];
        for (raw, expected) in cases {
            let part = Part::new(FAKE_URL, raw, CompressionOption::None).unwrap();
            assert_eq!(part.uri(), FAKE_URL);
            assert_eq!(part.content_type(), expected);
            assert_eq!(part.compression_option(), CompressionOption::None);
            assert!(part.relationships().is_empty());
        }
    }

    #[test]
    fn test_new_part_invalid_content_type() {
        for raw in [
            "TEXT/html; charset=ISO-8859-4 q=2",
            "TEXT/html; =ISO-8859-4",
            "TEXT/html; charset=ISO-8859-4; charset=ISO-8859-4",
            "application",
            "application/html/html",
            "/html",
            "application/",
        ] {
            let result = Part::new(FAKE_URL, raw, CompressionOption::None);
            assert!(matches!(result, Err(Error::ContentType(_))), "{raw}");
        }
    }

    #[test]
    fn test_new_part_invalid_uri_reported_first() {
        let result = Part::new("", "fakeContentType", CompressionOption::None);
        assert_eq!(result, Err(Error::PartName(PartNameError::Empty)));
    }

    #[test]
    fn test_new_part_empty_content_type() {
        let result = Part::new(FAKE_URL, "", CompressionOption::Normal);
        assert!(matches!(
            result,
            Err(Error::ContentType(ContentTypeError::NoMediaType(_)))
        ));
    }

    #[test]
    fn test_add_relationship() {
        let mut part = Part::new(FAKE_URL, "application/xml", CompressionOption::None).unwrap();
        let rel = part
            .add_relationship("fakeId", "fakeType", "fakeTarget")
            .unwrap();
        assert_eq!(rel.id(), "fakeId");
        assert_eq!(rel.target_mode(), TargetMode::Internal);
        assert_eq!(part.relationships().len(), 1);
        assert!(part.has_relationship());
    }

    #[test]
    fn test_add_relationship_existing_id() {
        let mut part = Part::new(FAKE_URL, "application/xml", CompressionOption::None).unwrap();
        part.add_relationship("fakeId", "fakeType", "fakeTarget")
            .unwrap();
        let before = part.clone();

        let err = part
            .add_relationship("fakeId", "otherType", "http://example.com")
            .unwrap_err();
        assert_eq!(err, DuplicateRelationshipId("fakeId".to_string()));
        assert_eq!(part, before);
    }

    #[test]
    fn test_relationships_keep_insertion_order() {
        let mut part = Part::new(FAKE_URL, "application/xml", CompressionOption::None).unwrap();
        for id in ["rId3", "rId1", "rId2"] {
            part.add_relationship(id, "t", "x.xml").unwrap();
        }
        let ids: Vec<&str> = part.relationships().iter().map(|r| r.id()).collect();
        assert_eq!(ids, ["rId3", "rId1", "rId2"]);
    }

    #[test]
    fn test_default_part() {
        let part = Part::default();
        assert_eq!(part.uri(), "");
        assert_eq!(part.content_type(), "");
        assert_eq!(part.compression_option(), CompressionOption::Normal);
        assert!(part.relationships().is_empty());
        assert!(!part.has_relationship());
    }

    #[test]
    fn test_compression_option_preserved() {
        for option in [
            CompressionOption::None,
            CompressionOption::Normal,
            CompressionOption::Maximum,
            CompressionOption::Fast,
            CompressionOption::SuperFast,
        ] {
            let part = Part::new(FAKE_URL, "application/xml", option).unwrap();
            assert_eq!(part.compression_option(), option);
        }
    }

    #[test]
    fn test_compression_mapping() {
        assert_eq!(
            CompressionOption::None.compression_method(),
            CompressionMethod::Stored
        );
        assert_eq!(
            CompressionOption::Maximum.compression_method(),
            CompressionMethod::Deflated
        );
        assert_eq!(CompressionOption::Normal.deflate_level(), None);
        assert_eq!(CompressionOption::Maximum.deflate_level(), Some(9));
        assert_eq!(CompressionOption::SuperFast.deflate_level(), Some(1));
    }

    #[test]
    fn test_lookups() {
        let mut part =
            Part::new("/word/document.xml", "application/xml", CompressionOption::Normal).unwrap();
        part.add_relationship("rId1", "styles", "styles.xml").unwrap();
        part.add_relationship("rId2", "image", "media/a.png").unwrap();
        part.add_relationship("rId3", "image", "../media/b.png").unwrap();

        assert_eq!(part.find_relationship("rId2").map(|r| r.target_uri()), Some("media/a.png"));
        assert!(part.find_relationship("rId9").is_none());

        let images: Vec<&str> = part.relationships_by_type("image").map(|r| r.id()).collect();
        assert_eq!(images, ["rId2", "rId3"]);

        let rel = part.find_relationship("rId3").unwrap();
        assert_eq!(part.resolve_target(rel).as_deref(), Some("/media/b.png"));
    }

    #[test]
    fn test_naming_helpers() {
        let part =
            Part::new("/word/document.xml", "application/xml", CompressionOption::Normal).unwrap();
        assert_eq!(part.member_name(), "word/document.xml");
        assert_eq!(part.relationships_part_name(), "/word/_rels/document.xml.rels");
        assert_eq!(part.extension(), "xml");

        let part = Part::new("/%E2%82%AC/data", "application/octet-stream", CompressionOption::None)
            .unwrap();
        assert_eq!(part.member_name(), "€/data");
        assert_eq!(part.extension(), "");
    }
}
