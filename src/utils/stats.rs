/// `part / total * 100` rounded to 2 decimal places, and exactly 0 when
/// `total` is 0. Every aggregate endpoint computes its percentage here.
pub fn percentage(part: i64, total: i64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(part as f64 / total as f64 * 100.0)
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
