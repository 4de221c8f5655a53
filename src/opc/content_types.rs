//! Content type (media type) parsing and normalization

use crate::error::ContentTypeError;

/// RFC 2045 `token` characters: any visible ASCII except `tspecials`
fn is_token_char(b: u8) -> bool {
    b.is_ascii_graphic()
        && !matches!(
            b,
            b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'"' | b'/' | b'['
                | b']' | b'?' | b'='
        )
}

fn is_ows(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Byte cursor over the raw media type
struct Scanner<'a> {
    raw: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(raw: &'a str) -> Self {
        Self {
            raw,
            bytes: raw.as_bytes(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn token(&mut self) -> &'a str {
        let start = self.pos;
        while self.peek().is_some_and(is_token_char) {
            self.pos += 1;
        }
        &self.raw[start..self.pos]
    }

    /// Consume a quoted string, returning it verbatim including the quotes
    fn quoted_string(&mut self) -> Option<&'a str> {
        let start = self.pos;
        self.pos += 1;
        while let Some(b) = self.peek() {
            match b {
                b'"' => {
                    self.pos += 1;
                    return Some(&self.raw[start..self.pos]);
                }
                b'\\' => {
                    self.pos += 1;
                    self.peek()?;
                    self.pos += 1;
                }
                _ => self.pos += 1,
            }
        }
        None
    }

    fn skip_ows(&mut self) -> bool {
        let start = self.pos;
        while self.peek().is_some_and(is_ows) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn unexpected(&self) -> ContentTypeError {
        ContentTypeError::UnexpectedContent {
            content_type: self.raw.to_string(),
            position: self.pos,
        }
    }

    fn malformed(&self) -> ContentTypeError {
        ContentTypeError::MalformedParameter {
            content_type: self.raw.to_string(),
            position: self.pos,
        }
    }
}

/// Parse, validate and canonicalize a media type
///
/// The grammar is `type "/" subtype *( OWS ";" OWS attribute "=" value )`.
/// Type and subtype are lowercased; parameters keep their order and their
/// case, and are joined with `"; "`. Values may be tokens or quoted strings.
/// A parameter name may appear only once.
///
/// Normalizing an already normalized media type returns it unchanged.
///
/// # Example
///
/// ```
/// use libopc::normalize_content_type;
///
/// assert_eq!(
///     normalize_content_type("TEXT/html; charset=ISO-8859-4;q=2").unwrap(),
///     "text/html; charset=ISO-8859-4; q=2"
/// );
/// assert!(normalize_content_type("application").is_err());
/// ```
pub fn normalize_content_type(raw: &str) -> Result<String, ContentTypeError> {
    if raw.trim().is_empty() {
        return Err(ContentTypeError::NoMediaType(raw.to_string()));
    }

    let mut scanner = Scanner::new(raw);

    let media_type = scanner.token();
    match scanner.peek() {
        Some(b'/') if media_type.is_empty() => {
            return Err(ContentTypeError::NoMediaType(raw.to_string()));
        }
        Some(b'/') => scanner.pos += 1,
        _ if !raw.contains('/') => return Err(ContentTypeError::NoSlash(raw.to_string())),
        _ => return Err(scanner.unexpected()),
    }

    let subtype = scanner.token();
    if subtype.is_empty() {
        return Err(scanner.unexpected());
    }

    let mut normalized = String::with_capacity(raw.len() + 4);
    normalized.push_str(&media_type.to_ascii_lowercase());
    normalized.push('/');
    normalized.push_str(&subtype.to_ascii_lowercase());

    let mut names: Vec<&str> = Vec::new();
    let mut after_subtype = true;
    while !scanner.at_end() {
        scanner.skip_ows();
        if scanner.peek() != Some(b';') {
            return Err(if after_subtype {
                scanner.unexpected()
            } else {
                scanner.malformed()
            });
        }
        after_subtype = false;
        scanner.pos += 1;
        scanner.skip_ows();

        let name = scanner.token();
        if scanner.peek() != Some(b'=') {
            return Err(scanner.malformed());
        }
        if name.is_empty() {
            return Err(ContentTypeError::EmptyParameterName(raw.to_string()));
        }
        if names.contains(&name) {
            return Err(ContentTypeError::DuplicateParameterName {
                content_type: raw.to_string(),
                name: name.to_string(),
            });
        }
        scanner.pos += 1;

        let value = match scanner.peek() {
            Some(b'"') => scanner.quoted_string().ok_or_else(|| scanner.malformed())?,
            _ => scanner.token(),
        };
        if value.is_empty() {
            return Err(scanner.malformed());
        }

        names.push(name);
        normalized.push_str("; ");
        normalized.push_str(name);
        normalized.push('=');
        normalized.push_str(value);
    }

    Ok(normalized)
}
