//! Text encodings for script signables.
//!
//! Script formats carry their encoding either as a caller declaration or as
//! a byte-order mark at the start of the file. Detection is deliberately
//! small: UTF-8 (with or without BOM) and the two UTF-16 byte orders, which
//! covers what signed script files actually ship with. Unknown charset names
//! are rejected rather than guessed.

use crate::errors::{SignetError, SignetResult};

/// Text encoding of a script file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    Utf8,
    Utf16Le,
    Utf16Be,
}

impl Encoding {
    /// Parse a caller-declared charset name (e.g. "utf-8", "UTF-16LE").
    ///
    /// Dashes and underscores are ignored, case is not significant.
    pub fn parse(name: &str) -> SignetResult<Self> {
        let normalized: String = name
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "utf8" => Ok(Self::Utf8),
            "utf16" | "utf16le" => Ok(Self::Utf16Le),
            "utf16be" => Ok(Self::Utf16Be),
            _ => Err(SignetError::invalid_argument(format!(
                "unsupported encoding: {name}"
            ))),
        }
    }

    /// Canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16Le => "utf-16le",
            Self::Utf16Be => "utf-16be",
        }
    }

    /// Byte-order mark for this encoding.
    pub fn bom(&self) -> &'static [u8] {
        match self {
            Self::Utf8 => &[0xEF, 0xBB, 0xBF],
            Self::Utf16Le => &[0xFF, 0xFE],
            Self::Utf16Be => &[0xFE, 0xFF],
        }
    }

    /// Detect the encoding of `prefix` from its BOM. Defaults to UTF-8 when
    /// no BOM is present. Pure; never touches the filesystem.
    pub fn detect(prefix: &[u8]) -> Self {
        if prefix.starts_with(Self::Utf8.bom()) {
            Self::Utf8
        } else if prefix.starts_with(Self::Utf16Be.bom()) {
            Self::Utf16Be
        } else if prefix.starts_with(Self::Utf16Le.bom()) {
            Self::Utf16Le
        } else {
            Self::Utf8
        }
    }

    /// Decode `bytes` into text, stripping a leading BOM if present.
    pub fn decode(&self, bytes: &[u8]) -> SignetResult<String> {
        let body = bytes.strip_prefix(self.bom()).unwrap_or(bytes);
        match self {
            Self::Utf8 => String::from_utf8(body.to_vec())
                .map_err(|_| SignetError::encoding("invalid utf-8 data")),
            Self::Utf16Le => decode_utf16(body, u16::from_le_bytes),
            Self::Utf16Be => decode_utf16(body, u16::from_be_bytes),
        }
    }

    /// Encode `text` in this encoding, optionally with a leading BOM.
    pub fn encode(&self, text: &str, with_bom: bool) -> Vec<u8> {
        let mut out = Vec::new();
        if with_bom {
            out.extend_from_slice(self.bom());
        }
        match self {
            Self::Utf8 => out.extend_from_slice(text.as_bytes()),
            Self::Utf16Le => {
                for unit in text.encode_utf16() {
                    out.extend_from_slice(&unit.to_le_bytes());
                }
            }
            Self::Utf16Be => {
                for unit in text.encode_utf16() {
                    out.extend_from_slice(&unit.to_be_bytes());
                }
            }
        }
        out
    }
}

fn decode_utf16(body: &[u8], unit: fn([u8; 2]) -> u16) -> SignetResult<String> {
    if body.len() % 2 != 0 {
        return Err(SignetError::encoding("utf-16 data has odd byte length"));
    }
    let units: Vec<u16> = body.chunks_exact(2).map(|c| unit([c[0], c[1]])).collect();
    String::from_utf16(&units).map_err(|_| SignetError::encoding("invalid utf-16 data"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn detect_prefers_bom() {
        assert_eq!(Encoding::detect(&[0xEF, 0xBB, 0xBF, b'a']), Encoding::Utf8);
        assert_eq!(Encoding::detect(&[0xFF, 0xFE, b'a', 0]), Encoding::Utf16Le);
        assert_eq!(Encoding::detect(&[0xFE, 0xFF, 0, b'a']), Encoding::Utf16Be);
        assert_eq!(Encoding::detect(b"plain"), Encoding::Utf8);
        assert_eq!(Encoding::detect(&[]), Encoding::Utf8);
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!(Encoding::parse("UTF-8").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::parse("utf8").unwrap(), Encoding::Utf8);
        assert_eq!(Encoding::parse("utf-16le").unwrap(), Encoding::Utf16Le);
        assert_eq!(Encoding::parse("UTF_16BE").unwrap(), Encoding::Utf16Be);
        assert_matches!(
            Encoding::parse("koi8-r"),
            Err(SignetError::InvalidArgument(_))
        );
    }

    #[test]
    fn utf16le_round_trip_with_bom() {
        let text = "Write-Output 'héllo'\n";
        let bytes = Encoding::Utf16Le.encode(text, true);
        assert!(bytes.starts_with(&[0xFF, 0xFE]));
        assert_eq!(Encoding::Utf16Le.decode(&bytes).unwrap(), text);
    }

    #[test]
    fn utf8_decode_strips_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"echo hi\n");
        assert_eq!(Encoding::Utf8.decode(&bytes).unwrap(), "echo hi\n");
    }

    #[test]
    fn odd_utf16_length_is_rejected() {
        assert_matches!(
            Encoding::Utf16Le.decode(&[0x41, 0x00, 0x42]),
            Err(SignetError::Encoding(_))
        );
    }
}
