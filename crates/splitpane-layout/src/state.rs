//! Drag-resize state machine for a single two-pane splitter.
//!
//! ```text
//! Idle --DragStart--> Dragging --DragMove--> Dragging --DragEnd--> Idle
//!   \--DragMove: noop    \--DragStart: restart
//! ```
//!
//! Every operation consumes the state and returns a new one. The host owns the
//! value and decides where it lives.

use serde::{Deserialize, Serialize};

use crate::fraction::{Fraction, ResizeLimits};
use crate::geometry::{ContainerSize, PointerPosition};
use crate::gesture::GestureEvent;
use crate::notify::UpdateConfig;

/// Axis along which the two panes are arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Side-by-side panes; the divider moves along x.
    Horizontal,
    /// Stacked panes; the divider moves along y.
    Vertical,
}

impl Orientation {
    /// The other orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}

/// Transient record of an in-progress drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragInfo {
    /// Last pointer position, bounded to the splitter's pixel position.
    pub position: PointerPosition,
    /// Container size measured when the drag started.
    pub container: ContainerSize,
}

/// Why a gesture left the state untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeNoopReason {
    NotDraggable,
    NoActiveDrag,
}

/// Effect of one state machine step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum ResizeEffect {
    Started {
        position: PointerPosition,
        container: ContainerSize,
    },
    Resized {
        from: Fraction,
        to: Fraction,
        position: PointerPosition,
    },
    /// Drag cleared. `was_dragging` is false when no drag was active.
    Ended {
        was_dragging: bool,
    },
    Noop {
        reason: ResizeNoopReason,
    },
}

impl ResizeEffect {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Started { .. } => "started",
            Self::Resized { .. } => "resized",
            Self::Ended { .. } => "ended",
            Self::Noop { .. } => "noop",
        }
    }
}

/// New state plus the effect that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeStep {
    pub state: ResizeState,
    pub effect: ResizeEffect,
}

/// Splitter state owned by the host application.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResizeState {
    draggable: bool,
    orientation: Orientation,
    splitter_fraction: Fraction,
    resize_limits: ResizeLimits,
    #[serde(default)]
    drag_info: Option<DragInfo>,
}

impl ResizeState {
    /// Draggable, evenly split, unrestricted, idle.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            draggable: true,
            orientation,
            splitter_fraction: Fraction::HALF,
            resize_limits: ResizeLimits::FULL,
            drag_info: None,
        }
    }

    #[must_use]
    pub const fn draggable(&self) -> bool {
        self.draggable
    }

    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    #[must_use]
    pub const fn splitter_fraction(&self) -> Fraction {
        self.splitter_fraction
    }

    #[must_use]
    pub const fn resize_limits(&self) -> ResizeLimits {
        self.resize_limits
    }

    #[must_use]
    pub const fn drag_info(&self) -> Option<DragInfo> {
        self.drag_info
    }

    /// Whether a drag is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        self.drag_info.is_some()
    }

    /// Enable or disable dragging.
    ///
    /// An in-flight drag is not cancelled; its drag info stays until the next
    /// gesture, which is then ignored like every other gesture.
    #[must_use]
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    #[must_use]
    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Place the splitter directly. Clamps into `[0, 1]`, ignoring the resize
    /// limits.
    #[must_use]
    pub fn with_splitter_fraction(mut self, fraction: f64) -> Self {
        self.splitter_fraction = Fraction::new(fraction);
        self
    }

    /// Replace the resize limits. Swapped bounds are reordered; the current
    /// fraction is not re-clamped.
    #[must_use]
    pub fn with_resize_limits(mut self, min: f64, max: f64) -> Self {
        self.resize_limits = ResizeLimits::new(min, max);
        self
    }

    /// Apply one gesture and collect the host notification it produces.
    pub fn transition<M: Clone>(
        self,
        event: GestureEvent,
        update: &UpdateConfig<M>,
    ) -> (Self, Option<M>) {
        let (step, notification) = self.step_notify(event, update);
        (step.state, notification)
    }

    /// [`Self::transition`] that also reports the effect.
    pub fn step_notify<M: Clone>(
        self,
        event: GestureEvent,
        update: &UpdateConfig<M>,
    ) -> (ResizeStep, Option<M>) {
        let step = self.step(event);
        let notification = match step.effect {
            ResizeEffect::Started { .. } => update.started(),
            ResizeEffect::Resized { to, .. } => update.resized(to),
            ResizeEffect::Ended { .. } => update.ended(),
            ResizeEffect::Noop { .. } => None,
        };
        (step, notification)
    }

    /// Apply one gesture, reporting the effect instead of notifying.
    #[must_use]
    pub fn step(self, event: GestureEvent) -> ResizeStep {
        let step = self.step_inner(event);
        #[cfg(feature = "tracing")]
        log_step(&event, &step);
        step
    }

    fn step_inner(self, event: GestureEvent) -> ResizeStep {
        if !self.draggable {
            return self.noop(ResizeNoopReason::NotDraggable);
        }
        match event {
            GestureEvent::DragStart {
                position,
                container,
            } => ResizeStep {
                state: Self {
                    drag_info: Some(DragInfo {
                        position,
                        container,
                    }),
                    ..self
                },
                effect: ResizeEffect::Started {
                    position,
                    container,
                },
            },
            GestureEvent::DragMove { position } => {
                let Some(drag) = self.drag_info else {
                    return self.noop(ResizeNoopReason::NoActiveDrag);
                };
                let (fraction, bounded) = resize(
                    self.orientation,
                    self.splitter_fraction,
                    drag.position,
                    position,
                    drag.container,
                    self.resize_limits,
                );
                ResizeStep {
                    state: Self {
                        splitter_fraction: fraction,
                        drag_info: Some(DragInfo {
                            position: bounded,
                            ..drag
                        }),
                        ..self
                    },
                    effect: ResizeEffect::Resized {
                        from: self.splitter_fraction,
                        to: fraction,
                        position: bounded,
                    },
                }
            }
            GestureEvent::DragEnd { .. } => ResizeStep {
                state: Self {
                    drag_info: None,
                    ..self
                },
                effect: ResizeEffect::Ended {
                    was_dragging: self.drag_info.is_some(),
                },
            },
        }
    }

    const fn noop(self, reason: ResizeNoopReason) -> ResizeStep {
        ResizeStep {
            state: self,
            effect: ResizeEffect::Noop { reason },
        }
    }
}

/// Incremental resize against the previous pointer position.
///
/// Returns the bounded fraction and the pointer position recomputed from it, so
/// the next delta starts from the splitter's actual pixel position rather than
/// wherever the pointer wandered past a limit. A zero container extent yields a
/// zero delta. The recomputed coordinate saturates at `i32::MAX` for extents
/// too large to address in device pixels.
#[must_use]
pub fn resize(
    orientation: Orientation,
    fraction: Fraction,
    previous: PointerPosition,
    current: PointerPosition,
    container: ContainerSize,
    limits: ResizeLimits,
) -> (Fraction, PointerPosition) {
    match orientation {
        Orientation::Horizontal => {
            let next = limits.clamp(fraction.get() + delta(previous.x, current.x, container.width));
            (
                next,
                PointerPosition::new(pixel_offset(container.width, next), current.y),
            )
        }
        Orientation::Vertical => {
            let next =
                limits.clamp(fraction.get() + delta(previous.y, current.y, container.height));
            (
                next,
                PointerPosition::new(current.x, pixel_offset(container.height, next)),
            )
        }
    }
}

fn delta(previous: i32, current: i32, extent: u32) -> f64 {
    if extent == 0 {
        return 0.0;
    }
    (f64::from(current) - f64::from(previous)) / f64::from(extent)
}

// Extents past `i32::MAX` saturate at the far edge.
fn pixel_offset(extent: u32, fraction: Fraction) -> i32 {
    (f64::from(extent) * fraction.get()).round() as i32
}

#[cfg(feature = "tracing")]
fn log_step(event: &GestureEvent, step: &ResizeStep) {
    tracing::debug!(
        message = "splitpane.transition",
        gesture = event.name(),
        effect = step.effect.name(),
        fraction = step.state.splitter_fraction.get(),
        dragging = step.state.is_dragging()
    );
}
