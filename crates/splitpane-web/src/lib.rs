#![forbid(unsafe_code)]

//! `splitpane-web` adapts browser pointer and touch input to the
//! [`splitpane_layout`] drag-resize state machine.
//!
//! Design goals:
//! - **Host-driven I/O**: the embedding environment pushes raw events in and
//!   applies the returned capture commands and prevent-default flags.
//! - **Explicit resources**: the document-scope pointer subscription is a
//!   handle the adapter tracks, acquired and released by command.
//! - **No blocking / no threads**: suitable for `wasm32-unknown-unknown`.

#[cfg(feature = "input-parser")]
pub mod input_parser;
pub mod pointer_capture;
pub mod raw_input;

#[cfg(feature = "input-parser")]
pub use input_parser::{InputParseError, parse_raw_input};
pub use pointer_capture::{
    CaptureCommand, SplitterCaptureAdapter, SplitterDispatch, SplitterIgnoredReason,
    SplitterLogEntry, SplitterLogOutcome,
};
pub use raw_input::{RawInputEvent, RawInputKind, RawPoint, SplitterHandlers};
