//! Result type alias for morphmap operations

use crate::error::MorphError;

/// Standard Result type for morphmap operations
pub type Result<T> = std::result::Result<T, MorphError>;
