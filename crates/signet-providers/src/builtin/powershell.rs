//! PowerShell provider.
//!
//! Recognizes scripts (`.ps1`), data files (`.psd1`), and modules (`.psm1`)
//! by extension and opens them as script signables with the PowerShell
//! comment style.

use std::path::Path;

use signet_core::encoding::Encoding;
use signet_core::errors::SignetResult;
use signet_core::script::{ScriptSignable, ScriptStyle};
use signet_core::signable::Signable;

use crate::matcher::ExtensionMatcher;
use crate::provider::SignableProvider;
use crate::registry::RegistryBuilder;

/// Register the PowerShell provider.
pub fn register(builder: &mut RegistryBuilder) {
    builder.register(Box::new(PowerShellProvider::new()));
}

/// Extension-based provider for the PowerShell script family.
pub struct PowerShellProvider {
    matcher: ExtensionMatcher,
}

impl PowerShellProvider {
    pub fn new() -> Self {
        Self {
            matcher: ExtensionMatcher::new(["ps1", "psd1", "psm1"]),
        }
    }
}

impl Default for PowerShellProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SignableProvider for PowerShellProvider {
    fn name(&self) -> &str {
        "powershell"
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
