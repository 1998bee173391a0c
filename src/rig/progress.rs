/// Anything that reports a normalized scroll offset
pub trait ScrollSource {
    /// Current offset, nominally in [0, 1]. May leave that range.
    fn offset(&self) -> f32;
}

/// A fixed offset
impl ScrollSource for f32 {
    fn offset(&self) -> f32 {
        *self
    }
}

impl<S: ScrollSource + ?Sized> ScrollSource for &S {
    fn offset(&self) -> f32 {
        (**self).offset()
    }
}

/// Curve progress for this frame.
///
/// Only the lower bound is clamped; callers bound their own queries.
pub fn progress(source: &dyn ScrollSource) -> f32 {
    source.offset().max(0.0)
}
