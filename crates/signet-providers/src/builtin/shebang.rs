//! Shebang-sniffing provider for extensionless PowerShell scripts.
//!
//! Unix-style scripts often carry no extension; the only reliable signal is
//! the interpreter line. This provider reads at most the first
//! [`SHEBANG_PREFIX_LEN`] bytes and matches `#!` lines naming `pwsh` or
//! `powershell`. It registers last in the built-in catalog, so an explicit
//! extension always takes precedence over the sniff.

use std::path::Path;

use signet_core::encoding::Encoding;
use signet_core::errors::SignetResult;
use signet_core::script::{ScriptSignable, ScriptStyle};
use signet_core::signable::Signable;

use crate::matcher::ContentMatcher;
use crate::provider::SignableProvider;
use crate::registry::RegistryBuilder;

/// Bytes read when sniffing for an interpreter line.
pub const SHEBANG_PREFIX_LEN: usize = 160;

/// Register the shebang provider.
pub fn register(builder: &mut RegistryBuilder) {
    builder.register(Box::new(ShebangProvider::new()));
}

fn is_powershell_shebang(prefix: &[u8]) -> bool {
    if !prefix.starts_with(b"#!") {
        return false;
    }
    let line = match prefix.iter().position(|&b| b == b'\n') {
        Some(end) => &prefix[..end],
        None => prefix,
    };
    let line = String::from_utf8_lossy(line).to_ascii_lowercase();
    line.contains("pwsh") || line.contains("powershell")
}

/// Content-sniffing provider for PowerShell scripts without an extension.
pub struct ShebangProvider {
    matcher: ContentMatcher,
}

impl ShebangProvider {
    pub fn new() -> Self {
        Self {
            matcher: ContentMatcher::new(SHEBANG_PREFIX_LEN, is_powershell_shebang),
        }
    }
}

impl Default for ShebangProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SignableProvider for ShebangProvider {
    fn name(&self) -> &str {
        "shebang"
    }

    fn supports(&self, file: &Path) -> bool {
        self.matcher.supports(file)
    }

    fn create(
        &self,
        file: &Path,
        encoding: Option<Encoding>,
    ) -> SignetResult<Box<dyn Signable>> {
        let script = ScriptSignable::open(file, encoding, ScriptStyle::powershell())?;
        Ok(Box::new(script))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn shebang_line_parsing() {
        assert!(is_powershell_shebang(b"#!/usr/bin/env pwsh\nGet-Date\n"));
        assert!(is_powershell_shebang(b"#!/usr/bin/powershell\n"));
        assert!(is_powershell_shebang(b"#!/usr/bin/env PWSH"));
        assert!(!is_powershell_shebang(b"#!/bin/sh\necho pwsh\n"));
        assert!(!is_powershell_shebang(b"Get-Date\n"));
        assert!(!is_powershell_shebang(b""));
    }

    #[test]
    fn sniffs_extensionless_scripts() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deploy");
        fs::write(&path, "#!/usr/bin/env pwsh\nGet-Date\n").unwrap();

        let p = ShebangProvider::new();
        assert!(p.supports(&path));
        assert!(!p.supports(&dir.path().join("missing")));
    }

    #[test]
    fn plain_text_is_not_claimed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("README");
        fs::write(&path, "just some docs\n").unwrap();

        let p = ShebangProvider::new();
        assert!(!p.supports(&path));
    }
}
