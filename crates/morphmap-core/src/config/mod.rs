//! Configuration for the alignment engine
//!
//! Settings are read from a JSON, TOML or YAML file discovered by walking up
//! from the working directory:
//!
//! ```json
//! {
//!   "align": {
//!     "identityLeaves": true,
//!     "parentheses": true,
//!     "diagnostics": {
//!       "unsupportedPairing": "warn",
//!       "ambiguousStructure": "error"
//!     }
//!   }
//! }
//! ```
//!
//! Every field is optional; [`MorphConfig::align_options`] resolves the
//! file into the concrete [`AlignOptions`] the engine runs with.

mod loader;
mod morph_config;

pub use loader::{CONFIG_FILE_NAMES, ConfigLoader};
pub use morph_config::{
    AlignConfiguration, AlignOptions, DiagnosticsConfiguration, MorphConfig, RuleSeverity,
};
