//! Degree-weighted discomfort hours against the adaptive comfort band.

use std::collections::VecDeque;

/// Running mean below which the upper limit is fixed.
const COLD_RUNNING_MEAN: f64 = 10.0;
const COLD_UPPER_LIMIT: f64 = 18.0;
const MAX_UPPER_LIMIT: f64 = 32.7;
const TOLERANCE: f64 = 4.0;

/// Trailing mean over the last `window` samples, ignoring missing ones.
///
/// A position whose window holds no sample yields `None`.
pub fn trailing_mean(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let window = window.max(1);
    let mut buffer: VecDeque<Option<f64>> = VecDeque::with_capacity(window);
    let mut sum = 0.0;
    let mut count = 0usize;
    let mut means = Vec::with_capacity(values.len());
    for value in values {
        if buffer.len() == window
            && let Some(Some(old)) = buffer.pop_front()
        {
            count -= 1;
            sum = if count == 0 { 0.0 } else { sum - old };
        }
        buffer.push_back(*value);
        if let Some(new) = value {
            sum += new;
            count += 1;
        }
        means.push(if count == 0 {
            None
        } else {
            Some(sum / count as f64)
        });
    }
    means
}

/// Neutral operative temperature for an outdoor running mean.
pub fn neutral_temperature(running_mean: f64) -> f64 {
    0.33 * running_mean + 18.8
}

/// Upper operative-temperature limit of the comfort band.
pub fn upper_limit(running_mean: f64) -> f64 {
    if running_mean < COLD_RUNNING_MEAN {
        COLD_UPPER_LIMIT
    } else {
        (neutral_temperature(running_mean) + TOLERANCE).min(MAX_UPPER_LIMIT)
    }
}

/// Hourly contribution: exceedance above the upper limit while occupied.
pub fn contribution(
    operative: Option<f64>,
    running_mean: Option<f64>,
    occupied: bool,
) -> Option<f64> {
    let exceedance = (operative? - upper_limit(running_mean?)).max(0.0);
    Some(if occupied { exceedance } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_mean_window() {
        let values = [Some(1.0), Some(3.0), None, Some(5.0)];
        assert_eq!(
            trailing_mean(&values, 2),
            vec![Some(1.0), Some(2.0), Some(3.0), Some(5.0)]
        );
        assert_eq!(trailing_mean(&[None, Some(4.0)], 1), vec![None, Some(4.0)]);
    }

    #[test]
    fn test_upper_limit_branches() {
        assert_eq!(upper_limit(9.99), 18.0);
        assert!((upper_limit(20.0) - 29.4).abs() < 1e-9);
        assert_eq!(upper_limit(40.0), 32.7);
    }

    #[test]
    fn test_contribution() {
        let limit = upper_limit(20.0);
        let got = contribution(Some(limit + 2.0), Some(20.0), true).unwrap();
        assert!((got - 2.0).abs() < 1e-9);
        assert_eq!(contribution(Some(limit + 2.0), Some(20.0), false), Some(0.0));
        assert_eq!(contribution(Some(20.0), Some(20.0), true), Some(0.0));
        assert_eq!(contribution(None, Some(20.0), true), None);
        assert_eq!(contribution(Some(30.0), None, true), None);
    }
}
