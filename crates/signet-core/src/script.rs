//! Script signables.
//!
//! Script-like text formats store their signature as a trailing comment
//! block: a begin marker line, base64 payload lines wrapped at 64 columns,
//! and an end marker line. Only the comment syntax differs per language;
//! everything else is shared, so one signable type covers the whole family.
//!
//! The signed content is everything before the begin marker. Digesting an
//! unsigned file and digesting the same file after embedding a signature
//! therefore produce the same value.

use std::fs;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::digest::{hash_bytes, DigestAlgorithm};
use crate::encoding::Encoding;
use crate::errors::{SignetError, SignetResult};
use crate::signable::Signable;

/// Base64 payload lines wrap at this many characters.
const BASE64_LINE_WIDTH: usize = 64;

/// Comment conventions for a script signature block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStyle {
    line_prefix: &'static str,
    begin_marker: &'static str,
    end_marker: &'static str,
}

impl ScriptStyle {
    /// PowerShell comment style (`.ps1`, `.psd1`, `.psm1`).
    pub fn powershell() -> Self {
        Self {
            line_prefix: "# ",
            begin_marker: "# SIG # Begin signature block",
            end_marker: "# SIG # End signature block",
        }
    }

    /// VBScript comment style (`.vbs`, `.vbe`).
    pub fn vbscript() -> Self {
        Self {
            line_prefix: "'' ",
            begin_marker: "'' SIG '' Begin signature block",
            end_marker: "'' SIG '' End signature block",
        }
    }

    /// JScript comment style (`.js`, `.jse`).
    pub fn jscript() -> Self {
        Self {
            line_prefix: "// ",
            begin_marker: "// SIG // Begin signature block",
            end_marker: "// SIG // End signature block",
        }
    }

    pub fn begin_marker(&self) -> &'static str {
        self.begin_marker
    }

    pub fn end_marker(&self) -> &'static str {
        self.end_marker
    }
}

/// A script file plus the state needed to digest and re-sign it.
///
/// The file is read once, in a scoped call, when the signable is opened;
/// nothing stays open between operations, so a construction failure leaks no
/// handle. Two signables opened on the same file are fully independent.
pub struct ScriptSignable {
    path: PathBuf,
    style: ScriptStyle,
    encoding: Encoding,
    had_bom: bool,
    content: String,
}

impl ScriptSignable {
    /// Open a script file.
    ///
    /// When `declared` is `None` the encoding is detected from the byte-order
    /// mark, defaulting to UTF-8. Fails with a typed I/O error when the file
    /// cannot be read, and with an encoding error when the bytes do not
    /// decode.
    pub fn open(
        path: impl AsRef<Path>,
        declared: Option<Encoding>,
        style: ScriptStyle,
    ) -> SignetResult<Self> {
        let path = path.as_ref().to_path_buf();
        let bytes = fs::read(&path).map_err(|e| SignetError::io(&path, e))?;
        let encoding = declared.unwrap_or_else(|| Encoding::detect(&bytes));
        let had_bom = bytes.starts_with(encoding.bom());
        let content = encoding.decode(&bytes)?;
        Ok(Self {
            path,
            style,
            encoding,
            had_bom,
            content,
        })
    }

    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    pub fn style(&self) -> &ScriptStyle {
        &self.style
    }

    /// The content covered by the signature: everything before the begin
    /// marker, or the whole file when unsigned.
    pub fn content_without_signature_block(&self) -> &str {
        match self.content.find(self.style.begin_marker) {
            Some(pos) => &self.content[..pos],
            None => &self.content,
        }
    }

    /// The existing signature block, markers included, if any.
    pub fn signature_block(&self) -> Option<&str> {
        let start = self.content.find(self.style.begin_marker)?;
        Some(&self.content[start..])
    }

    /// Decode the base64 payload of the existing signature block.
    pub fn embedded_signature(&self) -> SignetResult<Option<Vec<u8>>> {
        let Some(block) = self.signature_block() else {
            return Ok(None);
        };
        let mut payload = String::new();
        for line in block.lines() {
            if line == self.style.begin_marker {
                continue;
            }
            if line == self.style.end_marker {
                let der = BASE64.decode(payload.as_bytes()).map_err(|_| {
                    SignetError::malformed_signature_block(&self.path, "invalid base64 payload")
                })?;
                return Ok(Some(der));
            }
            let data = line.strip_prefix(self.style.line_prefix).ok_or_else(|| {
                SignetError::malformed_signature_block(
                    &self.path,
                    "payload line without comment prefix",
                )
            })?;
            payload.push_str(data.trim_end());
        }
        Err(SignetError::malformed_signature_block(
            &self.path,
            "missing end marker",
        ))
    }

    fn render_block(&self, signature: &[u8]) -> String {
        let encoded = BASE64.encode(signature);
        let chars: Vec<char> = encoded.chars().collect();

        let mut block = String::new();
        block.push_str(self.style.begin_marker);
        block.push('\n');
        for chunk in chars.chunks(BASE64_LINE_WIDTH) {
            block.push_str(self.style.line_prefix);
            block.extend(chunk.iter());
            block.push('\n');
        }
        block.push_str(self.style.end_marker);
        block.push('\n');
        block
    }
}

impl Signable for ScriptSignable {
    fn path(&self) -> &Path {
        &self.path
    }

    fn digest(&self, alg: DigestAlgorithm) -> SignetResult<Vec<u8>> {
        let signed = self.content_without_signature_block();
        let bytes = self.encoding.encode(signed, false);
        Ok(hash_bytes(alg, &bytes))
    }

    fn embed_signature(&mut self, signature: &[u8]) -> SignetResult<()> {
        let mut new_content = self.content_without_signature_block().to_string();
        if !new_content.is_empty() && !new_content.ends_with('\n') {
            new_content.push('\n');
        }
        new_content.push_str(&self.render_block(signature));

        let bytes = self.encoding.encode(&new_content, self.had_bom);
        fs::write(&self.path, bytes).map_err(|e| SignetError::io(&self.path, e))?;
        self.content = new_content;
        Ok(())
    }
}
