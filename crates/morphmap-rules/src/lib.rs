//! Morphmap Rules
//!
//! The alignment engine: per-construct rules that anchor fixed tokens,
//! remappers for constructs whose shape a transform changed, and the walker
//! that aggregates everything into ordered correspondence ranges and
//! character classes.
//!
//! ```no_run
//! use morphmap_core::{AlignmentFixture, TextSize};
//! use morphmap_rules::{Aligner, Coordinate};
//! # fn main() -> morphmap_core::Result<()> {
//! let fixture = AlignmentFixture::load("fixture.json".as_ref())?;
//! let result = Aligner::default().align_fixture(&fixture);
//! if let Some(range) = result.ranges.closest_enclosing(Coordinate::Output, TextSize::from(4)) {
//!     println!("{} maps back to {:?}", range.output_kind, range.source);
//! }
//! # Ok(())
//! # }
//! ```

pub mod classes;
pub mod context;
pub mod engine;
pub mod ranges;
mod remap;
pub mod rules;

pub use classes::{CharClass, CharacterClasses};
pub use context::{RuleContext, RuleProblem, Side};
pub use engine::{Aligner, AlignmentInput, AlignmentResult, SynthesizedNode};
pub use ranges::{Coordinate, CorrespondenceRange, RangeConflict, RangeSet};
pub use rules::align_node;
