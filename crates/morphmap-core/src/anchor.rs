//! Single-character correspondence points

use crate::text::offset_serde;
use biome_text_size::TextSize;
use serde::{Deserialize, Serialize};

/// Characters on each side of a substitution
///
/// A `None` side means the character has no counterpart of its own (a
/// keyword grew or shrank, or a delimiter vanished) and the pair only gives
/// the animation a target offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Substitution {
    #[serde(default)]
    pub source_char: Option<char>,
    #[serde(default)]
    pub output_char: Option<char>,
}

/// `(sourceOffset, outputOffset)`, optionally marking a character change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnchorPair {
    #[serde(with = "offset_serde")]
    pub source: TextSize,
    #[serde(with = "offset_serde")]
    pub output: TextSize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub substitution: Option<Substitution>,
}

impl AnchorPair {
    pub fn new(source: TextSize, output: TextSize) -> Self {
        Self {
            source,
            output,
            substitution: None,
        }
    }

    pub fn substitution(
        source: TextSize,
        output: TextSize,
        source_char: Option<char>,
        output_char: Option<char>,
    ) -> Self {
        Self {
            source,
            output,
            substitution: Some(Substitution {
                source_char,
                output_char,
            }),
        }
    }

    pub fn is_substitution(&self) -> bool {
        self.substitution.is_some()
    }

    /// Output offset minus source offset
    pub fn delta(&self) -> i64 {
        i64::from(u32::from(self.output)) - i64::from(u32::from(self.source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_pair_json() {
        let pair = AnchorPair::new(TextSize::from(3), TextSize::from(2));
        assert_eq!(serde_json::to_string(&pair).unwrap(), r#"{"source":3,"output":2}"#);
        assert_eq!(pair.delta(), -1);
        assert!(!pair.is_substitution());
    }

    #[test]
    fn test_substitution_pair_json() {
        let pair = AnchorPair::substitution(TextSize::from(1), TextSize::from(1), Some('='), Some(':'));
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(
            json,
            r#"{"source":1,"output":1,"substitution":{"sourceChar":"=","outputChar":":"}}"#
        );
        let back: AnchorPair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);
    }
}
