//! Numeric helpers shared across effects

/// Constrain a value to the given range
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Linear interpolation between two values
pub fn lerp(a: f32, b: f32, amount: f32) -> f32 {
    a + (b - a) * amount
}

/// Scale a value from one range to another
///
/// The input is clamped to the source range first.
pub fn scale(value: f32, src_min: f32, src_max: f32, dst_min: f32, dst_max: f32) -> f32 {
    let value = clamp(value, src_min, src_max);
    lerp(dst_min, dst_max, (value - src_min) / (src_max - src_min))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn clamp_constrains() {
        assert_eq!(clamp(5, 1, 9), 5);
        assert_eq!(clamp(0, 1, 9), 1);
        assert_eq!(clamp(12, 1, 9), 9);
        assert_relative_eq!(clamp(1.5f32, 0.0, 1.0), 1.0);
    }

    #[test]
    fn lerp_endpoints() {
        assert_relative_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_relative_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_relative_eq!(lerp(0.0, 10.0, 0.25), 2.5);
    }

    #[test]
    fn scale_ranges() {
        assert_relative_eq!(scale(0.5, 0.0, 1.0, 0.0, 255.0), 127.5);
        assert_relative_eq!(scale(-1.0, 0.0, 1.0, 0.0, 255.0), 0.0);
        assert_relative_eq!(scale(2.0, 0.0, 1.0, 0.0, 255.0), 255.0);
    }
}
