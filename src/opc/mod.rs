//! OPC (Open Packaging Conventions) parts and relationships
//!
//! An OPC package is a ZIP archive holding named parts. Each part has a
//! strict part name, a normalized content type, a compression preference and
//! an ordered list of relationships to other parts or external resources.
//!
//! This module validates and models parts; reading and writing the archive,
//! `[Content_Types].xml` and `.rels` streams is left to the package layer,
//! which can rely on every [`Part`] being valid.

mod content_types;
mod part;
mod relationships;
mod validation;

// Re-export public types and functions
pub use content_types::normalize_content_type;
pub use part::{CompressionOption, Part};
pub use relationships::{Relationship, TargetMode, resolve_target};
pub use validation::{part_names_equivalent, relationships_part_name, validate_part_name};

/// Package root pseudo part name, the source of package-level relationships
pub const PACKAGE_ROOT: &str = "/";

/// Content types stream path (not a valid part name)
pub const CONTENT_TYPES_PART_NAME: &str = "/[Content_Types].xml";

/// Package relationships part name
pub const PACKAGE_RELATIONSHIPS_PART_NAME: &str = "/_rels/.rels";

/// Relationships part content type
pub const RELATIONSHIPS_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-package.relationships+xml";

/// Core properties part content type
pub const CORE_PROPERTIES_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-package.core-properties+xml";

/// Core properties relationship type
pub const CORE_PROPERTIES_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";

/// Extended properties relationship type
pub const EXTENDED_PROPERTIES_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";

/// Thumbnail relationship type (OPC standard)
pub const THUMBNAIL_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships/metadata/thumbnail";

/// Main office document relationship type
pub const OFFICE_DOCUMENT_REL_TYPE: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
