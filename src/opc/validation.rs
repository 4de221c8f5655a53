//! OPC part name validation utilities

use crate::error::PartNameError;
use std::borrow::Cow;

/// How a percent-encoded octet is treated inside a part name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EncodedOctet {
    Allowed,
    /// Decodes to `/`, `\` or an unreserved character, which must never be encoded
    Ambiguous,
    /// Decodes to a control character, never allowed in a part name
    Control,
}

/// Decision table for percent-encoded octets, indexed by decoded byte value
const ENCODED_OCTETS: [EncodedOctet; 256] = {
    let mut table = [EncodedOctet::Allowed; 256];
    let mut b = 0;
    while b < 256 {
        let byte = b as u8;
        if is_unreserved(byte) || byte == b'/' || byte == b'\\' {
            table[b] = EncodedOctet::Ambiguous;
        } else if byte.is_ascii_control() {
            table[b] = EncodedOctet::Control;
        }
        b += 1;
    }
    table
};

const fn is_unreserved(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~')
}

/// Characters allowed unescaped in a part name segment (RFC 3986 `pchar`
/// without percent-encoding)
const fn is_segment_literal(b: u8) -> bool {
    is_unreserved(b)
        || matches!(
            b,
            b'!' | b'$' | b'&' | b'\'' | b'(' | b')' | b'*' | b'+' | b',' | b';' | b'=' | b':' | b'@'
        )
}

/// Check whether a reference starts with a URI scheme (`ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"`)
pub(crate) fn has_scheme(reference: &str) -> bool {
    let bytes = reference.as_bytes();
    match bytes.first() {
        Some(b) if b.is_ascii_alphabetic() => {}
        _ => return false,
    }
    for &b in &bytes[1..] {
        match b {
            b':' => return true,
            b if b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.') => {}
            _ => return false,
        }
    }
    false
}

/// Check whether a reference is absolute (has a scheme) or network-path (`//authority`)
pub(crate) fn is_absolute_reference(reference: &str) -> bool {
    has_scheme(reference) || reference.starts_with("//")
}

/// Validate a part name against the OPC part name grammar
///
/// A valid part name is a relative reference with an absolute path: it starts
/// with `/`, has no scheme, authority or query, and is made of non-empty
/// segments other than `.` and `..`. Characters outside the unreserved and
/// sub-delimiter sets must be percent-encoded, while `/`, `\` and unreserved
/// characters must never be.
///
/// The first violated rule is reported.
///
/// # Example
///
/// ```
/// use libopc::validate_part_name;
///
/// assert!(validate_part_name("/word/document.xml").is_ok());
/// assert!(validate_part_name("/%E2%82%AC/a.xml").is_ok());
/// assert!(validate_part_name("/docs/../a.xml").is_err());
/// ```
pub fn validate_part_name(name: &str) -> Result<(), PartNameError> {
    if name.is_empty() {
        return Err(PartNameError::Empty);
    }

    if !name.starts_with('/') || is_absolute_reference(name) {
        return Err(PartNameError::NotRelativePathOnly(name.to_string()));
    }

    if name.ends_with('/') {
        return Err(PartNameError::TrailingSlash(name.to_string()));
    }

    // Leading slash creates an empty first segment, skip it
    for segment in name[1..].split('/') {
        if segment.is_empty() {
            return Err(PartNameError::EmptySegment(name.to_string()));
        }
        if segment == "." || segment == ".." {
            return Err(PartNameError::TraversalSegment {
                name: name.to_string(),
                segment: segment.to_string(),
            });
        }
    }

    if name.ends_with('.') {
        return Err(PartNameError::TrailingDot(name.to_string()));
    }

    if name.contains('?') {
        return Err(PartNameError::HasQuery(name.to_string()));
    }

    validate_characters(name)
}

fn validate_characters(name: &str) -> Result<(), PartNameError> {
    let bytes = name.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b == b'%' {
            let byte = decode_triplet(bytes, i).ok_or(PartNameError::InvalidPercentEncoding(i))?;
            if ENCODED_OCTETS[byte as usize] != EncodedOctet::Allowed {
                return Err(PartNameError::AmbiguousPercentEncoding {
                    byte,
                    decoded: byte as char,
                    position: i,
                });
            }
            i += 3;
        } else if b == b'/' || is_segment_literal(b) {
            i += 1;
        } else {
            // Report the whole character, not just its first UTF-8 byte
            let ch = name[i..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
            return Err(PartNameError::DisallowedLiteralChar { ch, position: i });
        }
    }

    // Encoded octets must spell UTF-8, so every name maps to one archive entry
    if std::str::from_utf8(&urlencoding::decode_binary(bytes)).is_err() {
        return Err(PartNameError::NonUtf8PercentEncoding(name.to_string()));
    }
    Ok(())
}

/// Decode the `%XX` triplet starting at `pos`
fn decode_triplet(bytes: &[u8], pos: usize) -> Option<u8> {
    let hi = hex_value(*bytes.get(pos + 1)?)?;
    let lo = hex_value(*bytes.get(pos + 2)?)?;
    Some(hi << 4 | lo)
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Compare two part names for equivalence
///
/// OPC part names are compared ASCII case-insensitively. Percent-encoded
/// triplets only differ in hex digit case, so they compare correctly too.
pub fn part_names_equivalent(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Get the name of the relationships part belonging to a part
///
/// `/word/document.xml` maps to `/word/_rels/document.xml.rels`.
pub fn relationships_part_name(part_name: &str) -> String {
    let (dir, file) = split_last_segment(part_name);
    format!("{}/_rels/{}.rels", dir, file)
}

/// Split a part name into its directory (without trailing `/`) and final segment
pub(crate) fn split_last_segment(part_name: &str) -> (&str, &str) {
    match part_name.rfind('/') {
        Some(pos) => (&part_name[..pos], &part_name[pos + 1..]),
        None => ("", part_name),
    }
}

/// Map a part name to its archive entry name
///
/// Strips the leading slash and decodes percent-encoded UTF-8. Validated
/// part names always decode to valid UTF-8.
pub(crate) fn member_name(part_name: &str) -> Cow<'_, str> {
    let path = part_name.strip_prefix('/').unwrap_or(part_name);
    match urlencoding::decode_binary(path.as_bytes()) {
        Cow::Borrowed(_) => Cow::Borrowed(path),
        Cow::Owned(bytes) => Cow::Owned(String::from_utf8_lossy(&bytes).into_owned()),
    }
}
