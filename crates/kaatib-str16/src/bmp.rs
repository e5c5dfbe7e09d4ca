//! The BMP string type and its UTF-8 to UTF-16 transcoder.

use std::fmt;

/// Highest scalar value representable as a single UTF-16 code unit.
const BMP_MAX: u32 = 0xFFFF;

/// An immutable-length, BMP-only UTF-16 string.
///
/// The buffer holds exactly `len + 1` code units: one unit per codepoint
/// followed by a terminating zero unit. Because every accepted codepoint
/// fits in a single unit, `units()[i]` is always the i-th character of the
/// string - there are no surrogate pairs to skip over.
///
/// The length is fixed at construction and never changes. The characters
/// themselves may be overwritten in place through [`BmpString::units_mut`],
/// which is bounded so the terminator stays out of reach.
///
/// # Invariants
///
/// - `units.len() == len + 1`
/// - `units[len] == 0`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BmpString {
    units: Box<[u16]>,
    len: usize,
}

impl BmpString {
    /// Builds a `BmpString` from raw UTF-8 bytes.
    ///
    /// Returns `None` if the bytes are not valid UTF-8 or if any decoded
    /// codepoint lies above U+FFFF. The two failure cases are deliberately
    /// collapsed: either way the input cannot be represented and no partial
    /// string is produced.
    pub fn from_utf8(bytes: &[u8]) -> Option<Self> {
        let text = std::str::from_utf8(bytes).ok()?;
        Self::from_text(text)
    }

    /// Builds a `BmpString` from already-validated UTF-8 text.
    ///
    /// Returns `None` if any codepoint lies above U+FFFF. The whole input
    /// is checked before a single unit is allocated, so a rejected input
    /// leaves nothing behind.
    pub fn from_text(text: &str) -> Option<Self> {
        // Validation pre-pass: reject anything outside the BMP before
        // allocating. Surrogate values cannot occur in a `char`, so every
        // accepted codepoint maps to exactly one code unit.
        let mut len = 0usize;
        for ch in text.chars() {
            if u32::from(ch) > BMP_MAX {
                return None;
            }
            len += 1;
        }

        let mut units = Vec::with_capacity(len + 1);
        units.extend(text.chars().map(|ch| ch as u16));
        units.push(0);

        Some(Self { units: units.into_boxed_slice(), len })
    }

    /// Number of codepoints in the string (the terminator is not counted).
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the string holds no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Read-only view of the character units, terminator excluded.
    #[must_use]
    pub fn units(&self) -> &[u16] {
        &self.units[..self.len]
    }

    /// Read-only view including the terminating zero unit.
    ///
    /// Intended for consumers that expect null-terminated UTF-16, such as
    /// platform text APIs.
    #[must_use]
    pub fn units_with_nul(&self) -> &[u16] {
        &self.units
    }

    /// Mutable view of the character units, bounded to `[0, len)`.
    ///
    /// Allows in-place character overwrites without reallocation. The
    /// terminator is outside the returned slice, so it cannot be altered
    /// and the length cannot change.
    pub fn units_mut(&mut self) -> &mut [u16] {
        &mut self.units[..self.len]
    }
}

impl fmt::Display for BmpString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // In-place edits may have written lone surrogate values; render
        // those as U+FFFD rather than failing.
        f.write_str(&String::from_utf16_lossy(self.units()))
    }
}
