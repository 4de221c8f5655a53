//! Error types for OPC part validation
//!
//! Every check performed by this crate happens once, when a value enters the
//! model, and reports the exact rule it violated. All errors carry a stable
//! error code for categorization and the offending input for diagnostics.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: Part name errors
//! - **E2xxx**: Content type (media type) errors
//! - **E3xxx**: Relationship errors
//!
//! ## Common Error Codes
//!
//! - `E1001`: Empty part name
//! - `E1002`: Part name is not a relative reference with an absolute path
//! - `E1009`: Percent-encoded character that must not be encoded
//! - `E1011`: Percent-encoded bytes that are not UTF-8
//! - `E2001`: Media type has no `/`
//! - `E2005`: Duplicate media type parameter
//! - `E3001`: Duplicate relationship ID

use thiserror::Error;

/// Result type for OPC part operations
pub type Result<T> = std::result::Result<T, Error>;

/// Violations of the OPC part name grammar
///
/// Positions are byte offsets into the rejected name.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PartNameError {
    /// The part name is the empty string
    #[error("[E1001] Part name cannot be empty")]
    Empty,

    /// The part name has a scheme or authority, or does not start with `/`
    #[error("[E1002] Part name must be a relative reference with an absolute path: '{0}'")]
    NotRelativePathOnly(String),

    /// Two consecutive `/` characters
    #[error("[E1003] Part name cannot contain empty segments: '{0}'")]
    EmptySegment(String),

    /// A `.` or `..` segment
    #[error("[E1004] Part name cannot contain '{segment}' segments: '{name}'")]
    TraversalSegment {
        /// The full part name
        name: String,
        /// The offending segment (`.` or `..`)
        segment: String,
    },

    /// The part name ends with `/`
    #[error("[E1005] Part name cannot end with '/': '{0}'")]
    TrailingSlash(String),

    /// The last segment ends with `.`
    #[error("[E1006] Part name cannot end with '.': '{0}'")]
    TrailingDot(String),

    /// A character that must be percent-encoded, or is never allowed
    #[error("[E1007] Part name contains disallowed character {ch:?} at position {position}")]
    DisallowedLiteralChar {
        /// The offending character
        ch: char,
        /// Byte offset of the character
        position: usize,
    },

    /// A `%` not followed by two hex digits
    #[error("[E1008] Part name contains invalid percent-encoding at position {0}")]
    InvalidPercentEncoding(usize),

    /// A percent-encoded octet that must appear unescaped or not at all
    /// (`/`, `\`, unreserved characters, control characters)
    #[error("[E1009] Part name contains percent-encoded {decoded:?} (0x{byte:02X}) at position {position}")]
    AmbiguousPercentEncoding {
        /// The decoded octet
        byte: u8,
        /// The decoded octet as a character
        decoded: char,
        /// Byte offset of the `%`
        position: usize,
    },

    /// A `?` query component
    #[error("[E1010] Part name cannot contain a query component: '{0}'")]
    HasQuery(String),

    /// Percent-encoded octets that do not decode to UTF-8
    #[error("[E1011] Part name percent-encodes bytes that are not valid UTF-8: '{0}'")]
    NonUtf8PercentEncoding(String),
}

impl PartNameError {
    /// Stable error code of this error
    pub fn code(&self) -> &'static str {
        match self {
            PartNameError::Empty => "E1001",
            PartNameError::NotRelativePathOnly(_) => "E1002",
            PartNameError::EmptySegment(_) => "E1003",
            PartNameError::TraversalSegment { .. } => "E1004",
            PartNameError::TrailingSlash(_) => "E1005",
            PartNameError::TrailingDot(_) => "E1006",
            PartNameError::DisallowedLiteralChar { .. } => "E1007",
            PartNameError::InvalidPercentEncoding(_) => "E1008",
            PartNameError::AmbiguousPercentEncoding { .. } => "E1009",
            PartNameError::HasQuery(_) => "E1010",
            PartNameError::NonUtf8PercentEncoding(_) => "E1011",
        }
    }
}

/// Violations of the media type grammar
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentTypeError {
    /// No `/` between type and subtype
    #[error("[E2001] Media type has no '/' separator: '{0}'")]
    NoSlash(String),

    /// Empty type before the `/`
    #[error("[E2002] Media type is missing the type: '{0}'")]
    NoMediaType(String),

    /// Content that cannot appear at this position
    #[error("[E2003] Unexpected content in media type '{content_type}' at position {position}")]
    UnexpectedContent {
        /// The full media type
        content_type: String,
        /// Byte offset of the unexpected content
        position: usize,
    },

    /// A parameter of the form `=value`
    #[error("[E2004] Media type parameter has an empty name: '{0}'")]
    EmptyParameterName(String),

    /// A parameter name appearing more than once
    #[error("[E2005] Duplicate media type parameter '{name}' in '{content_type}'")]
    DuplicateParameterName {
        /// The full media type
        content_type: String,
        /// The repeated parameter name
        name: String,
    },

    /// A parameter that is not `attribute=value`
    #[error("[E2006] Malformed media type parameter in '{content_type}' at position {position}")]
    MalformedParameter {
        /// The full media type
        content_type: String,
        /// Byte offset where the parameter went wrong
        position: usize,
    },
}

impl ContentTypeError {
    /// Stable error code of this error
    pub fn code(&self) -> &'static str {
        match self {
            ContentTypeError::NoSlash(_) => "E2001",
            ContentTypeError::NoMediaType(_) => "E2002",
            ContentTypeError::UnexpectedContent { .. } => "E2003",
            ContentTypeError::EmptyParameterName(_) => "E2004",
            ContentTypeError::DuplicateParameterName { .. } => "E2005",
            ContentTypeError::MalformedParameter { .. } => "E2006",
        }
    }
}

/// A relationship ID already used by another relationship of the same part
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[E3001] Relationship ID '{0}' is already used by this part")]
pub struct DuplicateRelationshipId(pub String);

/// Errors that can occur when building OPC parts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid part name
    ///
    /// **Error Codes**: E1001-E1011
    ///
    /// **Common Causes**:
    /// - Missing leading `/` (`word/document.xml`)
    /// - Absolute URIs (`http://example.com/a.xml`)
    /// - Raw non-ASCII characters instead of percent-encoded UTF-8
    /// - `.`/`..` segments or a trailing `/`
    ///
    /// **Suggestions**:
    /// - Percent-encode non-ASCII characters (`€` → `%E2%82%AC`)
    /// - Use canonical, already resolved paths
    #[error(transparent)]
    PartName(#[from] PartNameError),

    /// Invalid content type
    ///
    /// **Error Codes**: E2001-E2006
    ///
    /// **Common Causes**:
    /// - Missing subtype (`application`)
    /// - Parameters without a `;` separator
    /// - Repeated parameters
    #[error(transparent)]
    ContentType(#[from] ContentTypeError),

    /// Duplicate relationship ID
    ///
    /// **Error Code**: E3001
    ///
    /// **Suggestions**:
    /// - Generate IDs from a per-part counter (`rId1`, `rId2`, ...)
    #[error(transparent)]
    DuplicateRelationshipId(#[from] DuplicateRelationshipId),
}

impl Error {
    /// Stable error code of this error
    pub fn code(&self) -> &'static str {
        match self {
            Error::PartName(e) => e.code(),
            Error::ContentType(e) => e.code(),
            Error::DuplicateRelationshipId(_) => "E3001",
        }
    }
}
