/// Collapses many requests within one refresh tick into a single
/// recomputation. The latest requested value wins.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
}

impl<T> Default for FrameCoalescer<T> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` for the next tick. Returns true when no tick was
    /// pending yet, i.e. the caller must schedule one.
    pub fn request(&mut self, value: T) -> bool {
        self.pending.replace(value).is_none()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Called on the refresh tick: the value to recompute with, if any
    pub fn take(&mut self) -> Option<T> {
        self.pending.take()
    }
}
