//! JScript provider.
//!
//! Recognizes `.js` and `.jse` files by extension; the signable uses the
//! JScript comment style for its signature block.

use std::path::Path;

use signet_core::encoding::Encoding;
use signet_core::errors::SignetResult;
use signet_core::script::{ScriptSignable, ScriptStyle};
use signet_core::signable::Signable;

use crate::matcher::ExtensionMatcher;
use crate::provider::SignableProvider;
use crate::registry::RegistryBuilder;

/// Register the JScript provider.
pub fn register(builder: &mut RegistryBuilder) {
    builder.register(Box::new(JScriptProvider::new()));
}

/// Extension-based provider for JScript files.
pub struct JScriptProvider {
    matcher: ExtensionMatcher,
}

impl JScriptProvider {
    pub fn new() -> Self {
        Self {
            matcher: ExtensionMatcher::new(["js", "jse"]),
        }
    }
}

impl Default for JScriptProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SignableProvider for JScriptProvider {
    fn name(&self) -> &str {
        "jscript"
    }

    fn supports(&self, file: &Path) -> bool {
        self.matcher.supports(file)
    }

    fn create(
        &self,
        file: &Path,
        encoding: Option<Encoding>,
    ) -> SignetResult<Box<dyn Signable>> {
        let script = ScriptSignable::open(file, encoding, ScriptStyle::jscript())?;
        Ok(Box::new(script))
    }
}
