//! Discrete level generation and nearest-level lookup.

use super::config::SliderConfig;
use crate::constants::{LEVEL_PRECISION, round_to};

/// Generates the discrete levels for a quantized configuration.
///
/// Levels are `min + i * step` for `i in 0..value_count`, except the last one,
/// which is pinned to exactly `max` so rounding error in `step` never moves the
/// top of the scale. Returns an empty set in continuous mode or when
/// `value_count <= 0`; a single level at `min` when `value_count == 1`.
pub fn discrete_levels(config: &SliderConfig) -> Vec<f64> {
    if !config.enabled || config.value_count <= 0 {
        return Vec::new();
    }
    if config.value_count == 1 {
        return vec![round_to(config.min, LEVEL_PRECISION)];
    }

    let count = config.value_count as usize;
    let step = config.effective_step().unwrap_or(0.0);

    (0..count)
        .map(|index| {
            let scalar = if index == count - 1 {
                config.max
            } else {
                config.min + step * index as f64
            };
            round_to(scalar, LEVEL_PRECISION)
        })
        .collect()
}

/// Index of the level closest to `value`.
///
/// Uses a strict `<` so that an exact midpoint resolves to the lower index.
/// Returns `None` for an empty level set or a non-finite value.
pub fn nearest_level_index(levels: &[f64], value: f64) -> Option<usize> {
    if !value.is_finite() {
        return None;
    }
    let first = levels.first()?;

    let mut closest = 0;
    let mut smallest_diff = (value - first).abs();
    for (index, level) in levels.iter().enumerate().skip(1) {
        let diff = (value - level).abs();
        if diff < smallest_diff {
            smallest_diff = diff;
            closest = index;
        }
    }
    Some(closest)
}

/// Snaps `value` onto the nearest level, or returns it unchanged when there
/// are no levels.
pub fn snap_to_levels(levels: &[f64], value: f64) -> f64 {
    nearest_level_index(levels, value)
        .map(|index| levels[index])
        .unwrap_or(value)
}
