//! Host notification policy for resize lifecycle events.

use std::fmt;

use crate::fraction::Fraction;

type ResizeHandler<M> = Box<dyn Fn(Fraction) -> Option<M> + Send + Sync>;

/// Which host notifications a transition may produce.
///
/// Every part is independently optional. `on_resize` additionally receives the
/// new fraction and may decline per call by returning `None`.
pub struct UpdateConfig<M> {
    on_resize: Option<ResizeHandler<M>>,
    on_resize_started: Option<M>,
    on_resize_ended: Option<M>,
}

impl<M> UpdateConfig<M> {
    /// A config that never notifies.
    #[must_use]
    pub fn none() -> Self {
        Self {
            on_resize: None,
            on_resize_started: None,
            on_resize_ended: None,
        }
    }

    /// Notify on every drag move, including moves pinned at a limit.
    #[must_use]
    pub fn on_resize(
        mut self,
        handler: impl Fn(Fraction) -> Option<M> + Send + Sync + 'static,
    ) -> Self {
        self.on_resize = Some(Box::new(handler));
        self
    }

    /// Notify when a drag starts.
    #[must_use]
    pub fn on_resize_started(mut self, message: M) -> Self {
        self.on_resize_started = Some(message);
        self
    }

    /// Notify when a drag ends.
    #[must_use]
    pub fn on_resize_ended(mut self, message: M) -> Self {
        self.on_resize_ended = Some(message);
        self
    }

    pub(crate) fn resized(&self, fraction: Fraction) -> Option<M> {
        self.on_resize.as_ref().and_then(|make_msg| make_msg(fraction))
    }
}

impl<M: Clone> UpdateConfig<M> {
    pub(crate) fn started(&self) -> Option<M> {
        self.on_resize_started.clone()
    }

    pub(crate) fn ended(&self) -> Option<M> {
        self.on_resize_ended.clone()
    }
}

impl<M> Default for UpdateConfig<M> {
    fn default() -> Self {
        Self::none()
    }
}

impl<M: fmt::Debug> fmt::Debug for UpdateConfig<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateConfig")
            .field("on_resize", &self.on_resize.as_ref().map(|_| "<handler>"))
            .field("on_resize_started", &self.on_resize_started)
            .field("on_resize_ended", &self.on_resize_ended)
            .finish()
    }
}
