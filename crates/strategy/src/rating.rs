/// Star rating shown next to a strategy's CP value.
///
/// Non-positive values get no stars.
pub fn cp_stars(cp_value: f64) -> &'static str {
    if cp_value <= 0.0 || cp_value.is_nan() {
        ""
    } else if cp_value >= 4.0 {
        "⭐⭐⭐⭐⭐"
    } else if cp_value >= 3.0 {
        "⭐⭐⭐⭐"
    } else if cp_value >= 2.0 {
        "⭐⭐⭐"
    } else if cp_value >= 1.0 {
        "⭐⭐"
    } else {
        "⭐"
    }
}
