//! Discrete gradient sampling and vertical line positions.

use crate::style::Color;

/// Returned when sampling a gradient with no entries.
const EMPTY_GRADIENT_COLOR: Color = Color(7);

/// Pick the gradient entry at `fraction` of the way through.
///
/// Floor-based index lookup, no blending: palette indices are not a
/// continuous space. `fraction` is clamped to `[0, 1]`; NaN counts as 0.
pub fn sample(gradient: &[Color], fraction: f64) -> Color {
    let Some(last) = gradient.len().checked_sub(1) else {
        return EMPTY_GRADIENT_COLOR;
    };
    let fraction = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let index = ((fraction * last as f64).floor() as usize).min(last);
    gradient[index]
}

/// Position of one emitted line within a box of `total` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinePosition {
    pub index: usize,
    pub total: usize,
}

impl LinePosition {
    pub fn new(index: usize, total: usize) -> Self {
        Self { index, total }
    }

    /// `index / (total - 1)`, or 0 for single-line (or empty) boxes.
    pub fn fraction(&self) -> f64 {
        if self.total <= 1 {
            return 0.0;
        }
        self.index as f64 / (self.total - 1) as f64
    }

    pub fn color_in(&self, gradient: &[Color]) -> Color {
        sample(gradient, self.fraction())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const RAMP: [Color; 8] = [
        Color(1),
        Color(2),
        Color(3),
        Color(4),
        Color(5),
        Color(6),
        Color(7),
        Color(8),
    ];

    #[test]
    fn sample_hits_endpoints() {
        assert_eq!(sample(&RAMP, 0.0), Color(1));
        assert_eq!(sample(&RAMP, 1.0), Color(8));
    }

    #[test]
    fn sample_uses_floor_index() {
        // 0.5 * 7 = 3.5 -> index 3
        assert_eq!(sample(&RAMP, 0.5), Color(4));
        assert_eq!(sample(&RAMP, 0.99), Color(7));
    }

    #[test]
    fn sample_clamps_out_of_range() {
        assert_eq!(sample(&RAMP, -3.0), Color(1));
        assert_eq!(sample(&RAMP, 42.0), Color(8));
        assert_eq!(sample(&RAMP, f64::NAN), Color(1));
        assert_eq!(sample(&RAMP, f64::INFINITY), Color(8));
        assert_eq!(sample(&RAMP, f64::NEG_INFINITY), Color(1));
    }

    #[test]
    fn sample_handles_degenerate_gradients() {
        assert_eq!(sample(&[Color(99)], 0.7), Color(99));
        assert_eq!(sample(&[], 0.7), EMPTY_GRADIENT_COLOR);
    }

    #[test]
    fn line_position_fraction() {
        assert_eq!(LinePosition::new(0, 5).fraction(), 0.0);
        assert_eq!(LinePosition::new(4, 5).fraction(), 1.0);
        assert_eq!(LinePosition::new(2, 5).fraction(), 0.5);
    }

    #[test]
    fn single_line_box_uses_gradient_start() {
        assert_eq!(LinePosition::new(0, 1).fraction(), 0.0);
        assert_eq!(LinePosition::new(0, 1).color_in(&RAMP), Color(1));
    }

    proptest! {
        #[test]
        fn sample_returns_member(fraction in -2.0f64..3.0) {
            prop_assert!(RAMP.contains(&sample(&RAMP, fraction)));
        }

        #[test]
        fn sample_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            // RAMP values increase with index, so colors compare like indices.
            prop_assert!(sample(&RAMP, lo).0 <= sample(&RAMP, hi).0);
        }
    }
}
