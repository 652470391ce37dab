#![forbid(unsafe_code)]

//! Drag-resize state and geometry for a two-pane split view.
//!
//! The crate is host-agnostic. A platform adapter turns raw device input into
//! [`GestureEvent`]s (see [`GestureInput`]), the host folds them into its
//! [`ResizeState`] with [`ResizeState::transition`], and the renderer asks
//! [`ViewConfig::layout`] where the panes and the splitter go.
//!
//! Nothing here fails: out-of-range fractions and limits are clamped or
//! reordered, and gestures that make no sense in the current state are no-ops.

pub mod fraction;
pub mod geometry;
pub mod gesture;
pub mod notify;
pub mod state;
pub mod view;

pub use fraction::{Fraction, ResizeLimits};
pub use geometry::{ContainerSize, PointerPosition, Rect};
pub use gesture::{GestureEvent, GestureInput, InputScope};
pub use notify::UpdateConfig;
pub use state::{
    DragInfo, Orientation, ResizeEffect, ResizeNoopReason, ResizeState, ResizeStep, resize,
};
pub use view::{
    CustomSplitter, DEFAULT_SPLITTER_THICKNESS, SplitViewLayout, SplitterCursor, SplitterStyle,
    ViewConfig,
};
