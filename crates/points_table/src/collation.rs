//! Locale-aware ordering for team names

use feruca::Collator;
use std::cmp::Ordering;

/// Orders team names with the Unicode Collation Algorithm (CLDR root).
///
/// Accented letters sort next to their base letters, case is a
/// lower-level difference with lowercase first, and exact ties fall back
/// to code-point order so the ordering stays total.
#[derive(Default)]
pub struct NameCollator {
    inner: Collator,
}

impl NameCollator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compare(&mut self, a: &str, b: &str) -> Ordering {
        self.inner.collate(a, b)
    }
}

/// One-off comparison. Sorting many names should reuse a [`NameCollator`].
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    NameCollator::new().compare(a, b)
}
