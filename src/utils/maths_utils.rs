use argminmax::ArgMinMax;

/// Round to 2 decimal places, half-up (ties go towards +infinity).
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

/// Lenient price parse. Surrounding whitespace is ignored; anything unparseable is `NaN`.
pub fn parse_price(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Smallest and largest finite values, or `None` if there are none.
pub fn finite_min_max(values: &[f64]) -> Option<(f64, f64)> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    let (min_index, max_index) = finite.as_slice().argminmax();
    Some((finite[min_index], finite[max_index]))
}
