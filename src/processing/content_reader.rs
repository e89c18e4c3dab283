// src/processing/content_reader.rs

use content_inspector::ContentType;
use encoding_rs::{Encoding, GB18030, GBK, UTF_16BE, UTF_16LE, UTF_8};
use log::{debug, trace};
use std::{fs, path::Path};

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// How file bytes are turned into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingChoice {
    /// Try the automatic fallback chain.
    Auto,
    /// Decode with one encoding, replacing invalid sequences.
    Named(&'static Encoding),
}

/// Result of one strict decoding attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    Decoded(String),
    Failed,
}

/// One step of the automatic fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attempt {
    /// UTF-8, with an optional byte-order mark stripped.
    Utf8Sig,
    /// UTF-16 LE/BE, only when a UTF-16 byte-order mark is present.
    Utf16,
    Gbk,
    Gb18030,
}

/// The automatic chain, in order. When every attempt fails the content is
/// decoded as lossy UTF-8.
pub const AUTO_ATTEMPTS: &[Attempt] = &[
    Attempt::Utf8Sig,
    Attempt::Utf16,
    Attempt::Gbk,
    Attempt::Gb18030,
];

impl Attempt {
    /// Decodes `bytes` strictly; any malformed sequence fails the attempt.
    pub fn decode(self, bytes: &[u8]) -> DecodeOutcome {
        let (encoding, body) = match self {
            Attempt::Utf8Sig => (UTF_8, bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)),
            Attempt::Utf16 => match content_inspector::inspect(bytes) {
                ContentType::UTF_16LE => (UTF_16LE, &bytes[2..]),
                ContentType::UTF_16BE => (UTF_16BE, &bytes[2..]),
                _ => return DecodeOutcome::Failed,
            },
            Attempt::Gbk => (GBK, bytes),
            Attempt::Gb18030 => (GB18030, bytes),
        };
        match encoding.decode_without_bom_handling_and_without_replacement(body) {
            Some(text) => DecodeOutcome::Decoded(text.into_owned()),
            None => DecodeOutcome::Failed,
        }
    }
}

/// Decodes raw bytes according to `choice`. Never fails.
///
/// # Examples
/// ```
/// use ccdoc::processing::{decode_bytes, EncodingChoice};
///
/// // "中文" in GBK is not valid UTF-8; the automatic chain falls through to GBK.
/// let gbk = [0xD6, 0xD0, 0xCE, 0xC4];
/// assert_eq!(decode_bytes(&gbk, EncodingChoice::Auto), "中文");
///
/// let with_bom = b"\xEF\xBB\xBFx = 1";
/// assert_eq!(decode_bytes(with_bom, EncodingChoice::Named(encoding_rs::UTF_8)), "x = 1");
/// ```
pub fn decode_bytes(bytes: &[u8], choice: EncodingChoice) -> String {
    match choice {
        EncodingChoice::Named(encoding) => {
            let (text, had_errors) = encoding.decode_with_bom_removal(bytes);
            if had_errors {
                trace!("Replaced malformed {} sequences", encoding.name());
            }
            text.into_owned()
        }
        EncodingChoice::Auto => AUTO_ATTEMPTS
            .iter()
            .find_map(|attempt| match attempt.decode(bytes) {
                DecodeOutcome::Decoded(text) => {
                    trace!("Decoded with {:?}", attempt);
                    Some(text)
                }
                DecodeOutcome::Failed => None,
            })
            .unwrap_or_else(|| lossy_utf8(bytes)),
    }
}

/// The terminal case of the automatic chain.
fn lossy_utf8(bytes: &[u8]) -> String {
    let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    String::from_utf8_lossy(body).into_owned()
}

/// Reads and decodes a whole file.
///
/// An unreadable file yields empty text; the failure is logged and the run
/// continues with the next file.
pub fn decode_file(path: &Path, choice: EncodingChoice) -> String {
    match fs::read(path) {
        Ok(bytes) => decode_bytes(&bytes, choice),
        Err(e) => {
            debug!("Could not read {}: {}", path.display(), e);
            String::new()
        }
    }
}
