/// Trait for values that can be animated by interpolating between two ends
pub trait Animatable: Copy + PartialEq + 'static {
    /// Linear interpolation between two values
    /// t = 0.0 returns `from`, t = 1.0 returns `to`
    fn interpolate(from: Self, to: Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn interpolate(from: Self, to: Self, t: f32) -> Self {
        from + (to - from) * t
    }
}
