use serde::{Deserialize, Serialize};
use specta::Type;

pub const CODE_DELIMITER: char = '-';

/// Numeric sort key of a structured project code (`141168-00` → `(141168, 0)`).
///
/// Field order matters: the derived `Ord` compares `primary` first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Type,
)]
pub struct ProjectCode {
    pub primary: u64,
    pub suffix: u64,
}

impl ProjectCode {
    pub fn new(primary: u64, suffix: u64) -> Self {
        Self { primary, suffix }
    }

    /// Parse a code, never failing: segments without digits read as `0`
    pub fn parse(code: &str) -> Self {
        let (primary, suffix) = match code.split_once(CODE_DELIMITER) {
            Some((primary, suffix)) => (primary, suffix),
            None => (code, ""),
        };

        Self {
            primary: digits_value(primary),
            suffix: digits_value(suffix),
        }
    }
}

/// Value of the ASCII digits in `segment`, ignoring everything else.
/// Saturates at `u64::MAX` instead of overflowing.
fn digits_value(segment: &str) -> u64 {
    segment
        .bytes()
        .filter(u8::is_ascii_digit)
        .fold(0u64, |acc, digit| {
            acc.saturating_mul(10).saturating_add(u64::from(digit - b'0'))
        })
}
