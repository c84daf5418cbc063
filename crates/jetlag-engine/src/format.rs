//! Number formatting shared by the generated text.

/// Format with one decimal place, rounding halves away from zero.
///
/// `format!("{:.1}")` rounds exact halves to even (`1.25` → `1.2`), which
/// reads oddly in advice text.
pub(crate) fn one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}
