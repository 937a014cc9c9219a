//! Morphmap Core
//!
//! Data model for aligning a source syntax tree with the tree reparsed from
//! a compiler's output: text buffers and bounded scanning, the node arena,
//! the provenance side-table and its capture hook, anchor pairs,
//! diagnostics and configuration.

pub mod anchor;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod fixture;
pub mod provenance;
pub mod result;
pub mod text;
pub mod tree;

pub use anchor::{AnchorPair, Substitution};
pub use config::{AlignOptions, ConfigLoader, MorphConfig, RuleSeverity};
pub use diagnostics::{AlignDiagnostic, DiagnosticCode, DiagnosticKind, Severity};
pub use error::{ErrorKind, MorphError};
pub use fixture::AlignmentFixture;
pub use provenance::{
    HostKey, Predecessor, ProvenanceLink, ProvenanceRecorder, ProvenanceTable, TransformStep,
};
pub use result::Result;
pub use text::SourceText;
pub use tree::{NodeData, NodeId, SyntaxKind, SyntaxNode, SyntaxTree, TreeBuilder};

pub use biome_text_size::{TextRange, TextSize};

/// Initialize tracing with a default directive, overridable through `RUST_LOG`
pub fn init_tracing_with(default_directive: &str) {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init();
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
