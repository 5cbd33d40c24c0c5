/// Arithmetic mean, `None` for an empty slice
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Mean with the empty case pinned to 0.0 so every scenario still gets a bar
pub fn mean_or_zero(samples: &[f64]) -> f64 {
    mean(samples).unwrap_or(0.0)
}

/// Compute descriptive metrics (mean, median, 25th percentile, 75th percentile) from samples
pub fn compute_metrics(samples: &[f64]) -> Option<(f64, f64, f64, f64)> {
    if samples.len() < 2 {
        return None;
    }
    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    let mean = mean(samples)?;
    let median = sorted[n / 2];
    let p25 = sorted[n / 4];
    let p75 = sorted[3 * n / 4];
    Some((mean, median, p25, p75))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_mean_is_absent_or_zero() {
        assert_eq!(mean(&[]), None);
        assert_eq!(mean_or_zero(&[]), 0.0);
    }

    #[test]
    fn descriptive_metrics_need_two_samples() {
        assert_eq!(compute_metrics(&[1.0]), None);
        let (mean, median, p25, p75) = compute_metrics(&[4.0, 1.0, 3.0, 2.0]).unwrap();
        assert_eq!(mean, 2.5);
        assert_eq!(median, 3.0);
        assert_eq!(p25, 2.0);
        assert_eq!(p75, 4.0);
    }
}
