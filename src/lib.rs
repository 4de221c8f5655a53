//! # libopc
//!
//! A pure Rust implementation of the Open Packaging Conventions (OPC) part
//! model used by word-processing, spreadsheet, presentation and 3D
//! manufacturing packages.
//!
//! This library validates and models the parts of an OPC package:
//!
//! - Part name validation against the OPC part name grammar
//! - Content type (media type) parsing and normalization
//! - Parts with a compression preference and an ordered relationship list
//! - Relationship target classification (internal/external) and resolution
//!
//! Every value is validated once, when it enters the model. Archive and XML
//! writers can trust a [`Part`] without checking it again.
//!
//! ## Example
//!
//! ```
//! use libopc::{CompressionOption, Part, TargetMode};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut part = Part::new(
//!     "/word/document.xml",
//!     "Application/VND.OpenXMLFormats-OfficeDocument.WordprocessingML.Document.Main+XML",
//!     CompressionOption::Normal,
//! )?;
//! part.add_relationship(
//!     "rId1",
//!     "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles",
//!     "styles.xml",
//! )?;
//!
//! assert_eq!(
//!     part.content_type(),
//!     "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"
//! );
//! assert_eq!(part.relationships()[0].target_mode(), TargetMode::Internal);
//! assert_eq!(part.relationships_part_name(), "/word/_rels/document.xml.rels");
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod opc;

pub use error::{ContentTypeError, DuplicateRelationshipId, Error, PartNameError, Result};
pub use opc::{
    CompressionOption, Part, Relationship, TargetMode, normalize_content_type,
    part_names_equivalent, relationships_part_name, resolve_target, validate_part_name,
};
