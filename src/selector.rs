//! Flag-string selector parsing
//!
//! Turns the raw flag value (e.g. `"sa2"`, `"-f"`) into a signed selector:
//! a negated bit plus the cleaned set of flag characters. A leading `-` or
//! `^` marks a negative selector ("everything except the named flags").

/// A parsed selector over a raw flag value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    raw: String,
    negated: bool,
    chars: Vec<char>,
}

impl Selector {
    /// Parse a raw flag value.
    ///
    /// No validation happens against any declared flag set; unknown
    /// characters are harmless no-ops during membership tests.
    pub fn parse(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let negated = raw.starts_with('-') || raw.starts_with('^');
        let cleaned = if negated { &raw[1..] } else { raw.as_str() };
        let chars = cleaned.chars().collect();
        Self {
            raw,
            negated,
            chars,
        }
    }

    /// The original flag value, marker included.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Whether the value began with a negation marker.
    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Membership of a flag character in the cleaned selector set.
    pub fn contains(&self, flag: char) -> bool {
        self.chars.contains(&flag)
    }

    /// Whether the selector picks the given flag character.
    ///
    /// Positive selectors pick listed characters; negative selectors pick
    /// everything except the listed characters.
    pub fn selects(&self, flag: char) -> bool {
        self.negated ^ self.contains(flag)
    }
}
