//! Text buffers and bounded scanning
//!
//! Every lookup is confined to a caller-supplied window and reports absolute
//! offsets. Windows that fall outside the buffer or split a UTF-8 sequence
//! simply produce no match.

use biome_text_size::{TextRange, TextSize};

/// Read-only view over one of the two buffers being aligned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceText<'a> {
    text: &'a str,
}

impl<'a> SourceText<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Total length of the buffer
    pub fn len(&self) -> TextSize {
        TextSize::try_from(self.text.len()).unwrap_or(TextSize::from(u32::MAX))
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The whole buffer as a range
    pub fn full_range(&self) -> TextRange {
        TextRange::up_to(self.len())
    }

    /// Text covered by `range`, or `None` when the range is not addressable
    pub fn slice(&self, range: TextRange) -> Option<&'a str> {
        self.text
            .get(usize::from(range.start())..usize::from(range.end()))
    }

    /// First occurrence of `needle` fully inside `window`
    pub fn find(&self, window: TextRange, needle: &str) -> Option<TextSize> {
        if needle.is_empty() {
            return None;
        }
        let hay = self.slice(window)?;
        let at = hay.find(needle)?;
        Some(window.start() + to_size(at)?)
    }

    /// Last occurrence of `needle` fully inside `window`
    pub fn rfind(&self, window: TextRange, needle: &str) -> Option<TextSize> {
        if needle.is_empty() {
            return None;
        }
        let hay = self.slice(window)?;
        let at = hay.rfind(needle)?;
        Some(window.start() + to_size(at)?)
    }

    /// First occurrence of `needle` in `[start, end)`
    pub fn find_between(&self, start: TextSize, end: TextSize, needle: &str) -> Option<TextSize> {
        self.find(checked_range(start, end)?, needle)
    }

    /// Last occurrence of `needle` in `[start, end)`
    pub fn rfind_between(
        &self,
        start: TextSize,
        end: TextSize,
        needle: &str,
    ) -> Option<TextSize> {
        self.rfind(checked_range(start, end)?, needle)
    }

    /// Whether `needle` appears verbatim at `offset`
    pub fn starts_with_at(&self, offset: TextSize, needle: &str) -> bool {
        self.text
            .get(usize::from(offset)..)
            .is_some_and(|rest| rest.starts_with(needle))
    }

    /// Whether the text ending right before `end` is `needle`
    pub fn ends_with_at(&self, end: TextSize, needle: &str) -> bool {
        self.text
            .get(..usize::from(end))
            .is_some_and(|head| head.ends_with(needle))
    }

    /// Character starting at `offset`
    pub fn char_at(&self, offset: TextSize) -> Option<char> {
        self.text.get(usize::from(offset)..)?.chars().next()
    }

    /// Start offsets of every character within `range`
    pub fn char_offsets(&self, range: TextRange) -> Vec<(TextSize, char)> {
        let Some(body) = self.slice(range) else {
            return Vec::new();
        };
        body.char_indices()
            .filter_map(|(i, c)| Some((range.start() + to_size(i)?, c)))
            .collect()
    }
}

/// Build `start..end`, returning `None` when the bounds are inverted
pub fn checked_range(start: TextSize, end: TextSize) -> Option<TextRange> {
    (start <= end).then(|| TextRange::new(start, end))
}

/// Smallest range covering every range in the iterator
pub fn hull(ranges: impl IntoIterator<Item = TextRange>) -> Option<TextRange> {
    ranges.into_iter().reduce(|acc, r| acc.cover(r))
}

/// Length of a token as a `TextSize`
pub fn size_of(token: &str) -> TextSize {
    TextSize::of(token)
}

fn to_size(n: usize) -> Option<TextSize> {
    TextSize::try_from(n).ok()
}

/// Serde adapter storing a `TextRange` as `[start, end]`
pub mod span_serde {
    use biome_text_size::{TextRange, TextSize};
    use serde::{Deserialize, Deserializer, Serialize, Serializer, de::Error};

    pub fn serialize<S: Serializer>(range: &TextRange, serializer: S) -> Result<S::Ok, S::Error> {
        [u32::from(range.start()), u32::from(range.end())].serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TextRange, D::Error> {
        let [start, end] = <[u32; 2]>::deserialize(deserializer)?;
        if start > end {
            return Err(D::Error::custom(format!(
                "span start {start} is after end {end}"
            )));
        }
        Ok(TextRange::new(TextSize::from(start), TextSize::from(end)))
    }
}

/// Serde adapter for a list of spans
pub mod spans_serde {
    use biome_text_size::TextRange;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(transparent)]
    struct Span(#[serde(with = "super::span_serde")] TextRange);

    pub fn serialize<S: Serializer>(ranges: &[TextRange], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(ranges.iter().map(|r| Span(*r)))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Vec<TextRange>, D::Error> {
        let spans = Vec::<Span>::deserialize(deserializer)?;
        Ok(spans.into_iter().map(|s| s.0).collect())
    }
}

/// Serde adapter storing a `TextSize` as a plain integer
pub mod offset_serde {
    use biome_text_size::TextSize;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(offset: &TextSize, serializer: S) -> Result<S::Ok, S::Error> {
        u32::from(*offset).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<TextSize, D::Error> {
        u32::deserialize(deserializer).map(TextSize::from)
    }
}
