//! Interval arithmetic for ray parameter ranges.
//!
//! Intersection tests accept roots in the open interval (min, max), so the
//! primary operation is the exclusive `surrounds` check.

/// Interval between min and max for range checking.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    /// Minimum value of the interval
    pub min: f32,
    /// Maximum value of the interval
    pub max: f32,
}

impl Interval {
    /// Create a new interval with given min and max values
    pub fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Check if the interval surrounds the given value (exclusive bounds)
    pub fn surrounds(&self, x: f32) -> bool {
        self.min < x && x < self.max
    }

    /// Check if the interval contains the given value (inclusive bounds)
    pub fn contains(&self, x: f32) -> bool {
        self.min <= x && x <= self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn surrounds_is_exclusive_at_both_ends() {
        let i = Interval::new(0.001, 4.0);
        assert!(!i.surrounds(0.001));
        assert!(!i.surrounds(4.0));
        assert!(i.surrounds(0.0011));
        assert!(i.surrounds(3.9999));
        assert!(!i.surrounds(-1.0));
        assert!(!i.surrounds(5.0));
    }

    #[test]
    fn contains_is_inclusive_at_both_ends() {
        let i = Interval::new(0.0, 1.0);
        assert!(i.contains(0.0));
        assert!(i.contains(1.0));
        assert!(!i.contains(1.0000001));
        assert!(!i.contains(-0.0000001));
    }
}
