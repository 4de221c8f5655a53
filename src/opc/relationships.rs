//! Relationships between parts and their targets

use super::validation::{is_absolute_reference, split_last_segment};

/// Whether a relationship target lives inside the package
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetMode {
    /// The target is a part of the same package
    #[default]
    Internal,
    /// The target is a resource outside the package
    External,
}

impl TargetMode {
    /// Classify a target reference
    ///
    /// Absolute references (with a scheme) and network-path references
    /// (`//authority`) leave the package; everything else is a part reference.
    pub fn classify(target_uri: &str) -> Self {
        if is_absolute_reference(target_uri) {
            TargetMode::External
        } else {
            TargetMode::Internal
        }
    }

    /// Name of the mode as written in relationships parts
    pub fn as_str(&self) -> &'static str {
        match self {
            TargetMode::Internal => "Internal",
            TargetMode::External => "External",
        }
    }
}

/// A typed link from a part to another part or an external resource
///
/// Relationships are only created by [`Part::add_relationship`](super::Part::add_relationship),
/// which guarantees the ID is unique within the owning part.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    id: String,
    rel_type: String,
    target_uri: String,
    target_mode: TargetMode,
}

impl Relationship {
    pub(crate) fn new(id: String, rel_type: String, target_uri: String) -> Self {
        let target_mode = TargetMode::classify(&target_uri);
        Self {
            id,
            rel_type,
            target_uri,
            target_mode,
        }
    }

    /// Relationship ID, unique within the source part
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Relationship type URI
    #[inline]
    pub fn rel_type(&self) -> &str {
        &self.rel_type
    }

    /// Target reference as supplied
    #[inline]
    pub fn target_uri(&self) -> &str {
        &self.target_uri
    }

    /// Target mode, fixed when the relationship was created
    #[inline]
    pub fn target_mode(&self) -> TargetMode {
        self.target_mode
    }

    /// Check if this relationship points outside the package
    #[inline]
    pub fn is_external(&self) -> bool {
        self.target_mode == TargetMode::External
    }
}

/// Resolve a relationship target against its source part
///
/// Absolute paths are returned as is; relative references are joined onto
/// the source part's directory and `.`/`..` segments are collapsed, never
/// climbing above the package root. Returns `None` for external targets and
/// for targets that resolve to the package root itself.
///
/// # Example
///
/// ```
/// use libopc::resolve_target;
///
/// assert_eq!(
///     resolve_target("/word/document.xml", "../media/image1.png").as_deref(),
///     Some("/media/image1.png")
/// );
/// assert_eq!(resolve_target("/word/document.xml", "https://example.com"), None);
/// ```
pub fn resolve_target(source_part: &str, target: &str) -> Option<String> {
    if TargetMode::classify(target) == TargetMode::External {
        return None;
    }

    // Fragments and queries never name a part
    let path = target.split(['#', '?']).next().unwrap_or_default();

    let joined = if path.starts_with('/') {
        path.to_string()
    } else {
        let (base, _) = split_last_segment(source_part);
        format!("{}/{}", base, path)
    };

    let mut segments: Vec<&str> = Vec::new();
    for segment in joined.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            _ => segments.push(segment),
        }
    }

    if segments.is_empty() {
        return None;
    }
    Some(format!("/{}", segments.join("/")))
}
