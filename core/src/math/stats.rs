pub struct StatsHelper;

impl StatsHelper {
    pub fn mean(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().sum::<f64>() / values.len() as f64
    }

    pub fn max(values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        values.iter().cloned().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Round to a fixed number of decimals, as chart labels expect.
    pub fn round_to(value: f64, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        (value * factor).round() / factor
    }
}
