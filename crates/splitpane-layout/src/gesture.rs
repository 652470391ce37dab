//! Abstract gesture events and the seam platform input adapters implement.
//!
//! The state machine never sees raw device events. A platform adapter
//! (browser pointer/touch, terminal mouse, ...) implements [`GestureInput`]
//! for its own event type and the host feeds the resulting
//! [`GestureEvent`] into [`crate::ResizeState::transition`].

use serde::{Deserialize, Serialize};

use crate::geometry::{ContainerSize, PointerPosition};

/// Logical drag gesture consumed by the resize state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "gesture", rename_all = "snake_case")]
pub enum GestureEvent {
    /// Pointer pressed on the splitter. Carries the container size measured at
    /// press time.
    DragStart {
        position: PointerPosition,
        container: ContainerSize,
    },
    DragMove {
        position: PointerPosition,
    },
    /// Pointer released or touch cancelled. The position is accepted but unused.
    DragEnd {
        position: PointerPosition,
    },
}

impl GestureEvent {
    #[must_use]
    pub const fn position(&self) -> PointerPosition {
        match *self {
            Self::DragStart { position, .. }
            | Self::DragMove { position }
            | Self::DragEnd { position } => position,
        }
    }

    /// Stable lowercase name used in logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DragStart { .. } => "drag_start",
            Self::DragMove { .. } => "drag_move",
            Self::DragEnd { .. } => "drag_end",
        }
    }
}

/// Where an input was delivered from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputScope {
    /// Delivered by the splitter element itself.
    Splitter,
    /// Delivered by a document/window-level subscription held for the drag.
    Document,
}

/// Platform input that can be translated into a [`GestureEvent`].
pub trait GestureInput {
    /// Scope the input was delivered from.
    fn scope(&self) -> InputScope;

    /// The logical gesture, or `None` if this input carries no drag meaning.
    fn gesture(&self) -> Option<GestureEvent>;

    /// Whether the host should suppress the platform's default handling.
    fn prevents_default(&self) -> bool {
        matches!(self.scope(), InputScope::Splitter)
    }
}

impl GestureInput for GestureEvent {
    fn scope(&self) -> InputScope {
        InputScope::Splitter
    }

    fn gesture(&self) -> Option<GestureEvent> {
        Some(*self)
    }
}
