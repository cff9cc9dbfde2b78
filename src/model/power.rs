//! Derived "power" column (pure).
//!
//! Power is `round(multiplier * height * mass)` and is recomputed every time a
//! row is rendered. Nothing here is memoized.

use crate::model::entity::Entity;
use std::fmt;

/// Text shown in place of a power value when height or mass is unknown.
pub const MISSING_MARKER: &str = "-";

/// Result of [`compute_power`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Power {
    /// Height or mass is the `"unknown"` sentinel.
    Missing,
    /// Rounded product. `NaN` when a field is not numeric.
    Value(f64),
}

impl Power {
    /// The numeric value, if any.
    pub fn value(self) -> Option<f64> {
        match self {
            Power::Missing => None,
            Power::Value(v) => Some(v),
        }
    }
}

impl fmt::Display for Power {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Power::Missing => f.write_str(MISSING_MARKER),
            Power::Value(v) if v.is_nan() => f.write_str("NaN"),
            Power::Value(v) if v.is_infinite() => {
                f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" })
            }
            // -0.0 prints as "0"
            Power::Value(v) if v == 0.0 => f.write_str("0"),
            Power::Value(v) => write!(f, "{v:.0}"),
        }
    }
}

/// Compute the power of `entity` under `multiplier`.
///
/// Returns [`Power::Missing`] iff either field is exactly `"unknown"`.
/// Otherwise both fields are parsed with [`parse_measure`] and the product is
/// rounded half-up. Non-numeric text yields `Power::Value(NaN)`; it is never an
/// error.
pub fn compute_power(entity: &Entity, multiplier: f64) -> Power {
    if entity.has_missing_data() {
        return Power::Missing;
    }

    let height = parse_measure(&entity.height);
    let mass = parse_measure(&entity.mass);

    Power::Value(round_half_up(multiplier * height * mass))
}

/// Parse a numeric-as-text field.
///
/// The first comma is treated as the decimal separator. Surrounding
/// whitespace is ignored and blank text counts as zero. Anything else that
/// does not parse gives `NaN`.
pub fn parse_measure(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let normalized = if trimmed.contains(',') {
        trimmed.replacen(',', ".", 1)
    } else {
        trimmed.to_string()
    };

    normalized.parse::<f64>().unwrap_or(f64::NAN)
}

/// Round to the nearest integer, ties toward positive infinity.
fn round_half_up(x: f64) -> f64 {
    (x + 0.5).floor()
}
