//! VBScript provider.
//!
//! Recognizes `.vbs` and `.vbe` files by extension; the signable uses the
//! VBScript comment style for its signature block.

use std::path::Path;

use signet_core::encoding::Encoding;
use signet_core::errors::SignetResult;
use signet_core::script::{ScriptSignable, ScriptStyle};
use signet_core::signable::Signable;

use crate::matcher::ExtensionMatcher;
use crate::provider::SignableProvider;
use crate::registry::RegistryBuilder;

/// Register the VBScript provider.
pub fn register(builder: &mut RegistryBuilder) {
    builder.register(Box::new(VbScriptProvider::new()));
}

/// Extension-based provider for VBScript files.
pub struct VbScriptProvider {
    matcher: ExtensionMatcher,
}

impl VbScriptProvider {
    pub fn new() -> Self {
        Self {
            matcher: ExtensionMatcher::new(["vbs", "vbe"]),
        }
    }
}

impl Default for VbScriptProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SignableProvider for VbScriptProvider {
    fn name(&self) -> &str {
        "vbscript"
    }

    fn supports(&self, file: &Path) -> bool {
        self.matcher.supports(file)
    }

    fn create(
        &self,
        file: &Path,
        encoding: Option<Encoding>,
    ) -> SignetResult<Box<dyn Signable>> {
        let script = ScriptSignable::open(file, encoding, ScriptStyle::vbscript())?;
        Ok(Box::new(script))
    }
}
