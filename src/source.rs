//! Where the HTML comes from: a file, a URL or standard input.

use std::borrow::Cow;
use std::io::Read;
use std::path::PathBuf;

use crate::error::{Error, Result};

/// An HTML input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
    Stdin,
}

impl Source {
    /// Read the source and decode it to text.
    ///
    /// Fails with [`Error::EmptyDocument`] when there is nothing but
    /// whitespace to parse.
    pub fn load(&self) -> Result<String> {
        let bytes = match self {
            Source::File(path) => std::fs::read(path)?,
            Source::Url(url) => fetch(url)?,
            Source::Stdin => {
                let mut buf = Vec::new();
                std::io::stdin().lock().read_to_end(&mut buf)?;
                buf
            }
        };
        tracing::debug!(source = ?self, bytes = bytes.len(), "loaded html source");

        let html = decode_html(&bytes).into_owned();
        if html.trim().is_empty() {
            return Err(Error::EmptyDocument);
        }
        Ok(html)
    }
}

#[cfg(feature = "fetch")]
fn fetch(url: &str) -> Result<Vec<u8>> {
    let response = reqwest::blocking::get(url)?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}

#[cfg(not(feature = "fetch"))]
fn fetch(url: &str) -> Result<Vec<u8>> {
    Err(Error::UnsupportedFormat(format!(
        "cannot fetch {url}: built without the `fetch` feature"
    )))
}

/// Decode HTML bytes to a string.
///
/// 1. Valid UTF-8 (BOM handled by encoding_rs) is used as is
/// 2. Otherwise the declared charset (`<meta charset>`, `http-equiv` content
///    type or XML declaration) is tried
/// 3. Windows-1252 is the fallback, like browsers do for legacy pages
pub fn decode_html(bytes: &[u8]) -> Cow<'_, str> {
    let (result, _encoding, malformed) = encoding_rs::UTF_8.decode(bytes);
    if !malformed {
        return result;
    }

    if let Some(name) = declared_charset(bytes)
        && let Some(encoding) = encoding_rs::Encoding::for_label(name.as_bytes())
    {
        let (result, _, _) = encoding.decode(bytes);
        return result;
    }

    let (result, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
    result
}

/// Find a charset declaration in the first kilobyte of a document.
///
/// Matches both `charset="..."` in meta tags and `encoding="..."` in an XML
/// declaration. Quotes are optional for `charset=`.
pub fn declared_charset(bytes: &[u8]) -> Option<&str> {
    let prefix = &bytes[..bytes.len().min(1024)];

    for key in [&b"charset="[..], &b"encoding="[..]] {
        let Some(pos) = prefix
            .windows(key.len())
            .position(|w| w.eq_ignore_ascii_case(key))
        else {
            continue;
        };

        let mut value = &prefix[pos + key.len()..];
        if let Some(&quote) = value.first()
            && (quote == b'"' || quote == b'\'')
        {
            value = &value[1..];
        }
        let end = value
            .iter()
            .position(|&b| matches!(b, b'"' | b'\'' | b';' | b'>' | b'/') || b.is_ascii_whitespace())
            .unwrap_or(value.len());

        if end > 0 {
            return std::str::from_utf8(&value[..end]).ok();
        }
    }
    None
}
