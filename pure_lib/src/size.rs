//! Human-readable byte counts.
//!
//! Sizes are scaled by 1024 until the magnitude is no larger than 1024, then
//! rounded: to a whole number at the first step (KB), to one decimal place
//! elsewhere. Rounding is exact and ties go to the even digit.
//!
//! ```
//! use pure_lib::{ToSize, UnitLabels, to_size, to_size_with};
//!
//! assert_eq!(to_size(1_500_000), "1.4 MB");
//! assert_eq!(to_size_with(1_500_000, UnitLabels::Binary), "1.4 MiB");
//! assert_eq!((-10_000_500_000_i64).to_size(), "-9.3 GB");
//! assert_eq!(1024_i64.to_size(), "1024 B");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

const STEP: u128 = 1024;

const DECIMAL_LABELS: [&str; 7] = ["B", "KB", "MB", "GB", "TB", "PB", "EB"];
const BINARY_LABELS: [&str; 7] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB", "EiB"];

/// Unit label family. Both families scale by 1024; only the labels differ.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitLabels {
    /// `KB`, `MB`, `GB`, ...
    #[default]
    Decimal,
    /// `KiB`, `MiB`, `GiB`, ...
    Binary,
}

impl UnitLabels {
    /// Label for the unit reached after `steps` divisions by 1024.
    fn label(self, steps: usize) -> &'static str {
        let ladder = match self {
            Self::Decimal => &DECIMAL_LABELS,
            Self::Binary => &BINARY_LABELS,
        };
        ladder
            .get(steps)
            .or_else(|| ladder.last())
            .copied()
            .unwrap_or_default()
    }
}

/// A signed byte count rendered through [`fmt::Display`].
///
/// # Examples
///
/// ```
/// use pure_lib::{ByteSize, UnitLabels};
///
/// let size = ByteSize::new(3 * 1024 * 1024).with_labels(UnitLabels::Binary);
/// assert_eq!(size.to_string(), "3 MiB");
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ByteSize {
    bytes: i64,
    labels: UnitLabels,
}

impl ByteSize {
    /// Wrap `bytes` using decimal-style labels.
    #[must_use]
    pub const fn new(bytes: i64) -> Self {
        Self {
            bytes,
            labels: UnitLabels::Decimal,
        }
    }

    /// Select the label family.
    #[must_use]
    pub const fn with_labels(self, labels: UnitLabels) -> Self {
        Self { labels, ..self }
    }

    /// The wrapped byte count.
    #[must_use]
    pub const fn bytes(self) -> i64 {
        self.bytes
    }
}

impl From<i64> for ByteSize {
    fn from(bytes: i64) -> Self {
        Self::new(bytes)
    }
}

#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "fixed-point rounding needs exact quotients and remainders"
)]
fn round_half_even(numerator: u128, denominator: u128) -> u128 {
    let quotient = numerator / denominator;
    let twice_remainder = (numerator % denominator) * 2;
    let round_up = twice_remainder > denominator
        || (twice_remainder == denominator && quotient % 2 == 1);
    if round_up { quotient + 1 } else { quotient }
}

impl fmt::Display for ByteSize {
    #[expect(
        clippy::integer_division,
        clippy::integer_division_remainder_used,
        reason = "magnitudes are split into whole and fractional digits exactly"
    )]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = u128::from(self.bytes.unsigned_abs());
        let mut scale = 1;
        let mut steps = 0;
        while magnitude > scale * STEP {
            scale *= STEP;
            steps += 1;
        }

        let sign = if self.bytes < 0 { "-" } else { "" };
        let label = self.labels.label(steps);

        if magnitude % scale == 0 {
            return write!(f, "{sign}{} {label}", magnitude / scale);
        }
        if steps == 1 {
            let whole = round_half_even(magnitude, scale);
            return write!(f, "{sign}{whole} {label}");
        }
        let tenths = round_half_even(magnitude * 10, scale);
        write!(f, "{sign}{}.{} {label}", tenths / 10, tenths % 10)
    }
}

/// Format `bytes` with decimal-style labels (`KB`, `MB`, ...).
#[must_use]
pub fn to_size(bytes: i64) -> String {
    ByteSize::new(bytes).to_string()
}

/// Format `bytes` with the chosen label family.
#[must_use]
pub fn to_size_with(bytes: i64, labels: UnitLabels) -> String {
    ByteSize::new(bytes).with_labels(labels).to_string()
}

/// Extension methods formatting a byte count in place.
pub trait ToSize {
    /// Format with decimal-style labels (`KB`, `MB`, ...).
    #[must_use]
    fn to_size(self) -> String;

    /// Format with binary prefixes (`KiB`, `MiB`, ...).
    #[must_use]
    fn to_size_binary(self) -> String;
}

impl ToSize for i64 {
    fn to_size(self) -> String {
        to_size(self)
    }

    fn to_size_binary(self) -> String {
        to_size_with(self, UnitLabels::Binary)
    }
}
