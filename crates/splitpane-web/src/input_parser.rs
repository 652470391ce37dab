#![forbid(unsafe_code)]

//! JSON parser for DOM-shaped raw input events.
//!
//! Hosts that cannot call into Rust with typed values (a JS bridge, a replay
//! file) hand over each event as a small JSON object:
//!
//! ```json
//! {"type":"touchstart","touches":[{"clientX":12,"clientY":40}],
//!  "container":{"width":640,"height":480}}
//! ```
//!
//! Event types outside the splitter's vocabulary decode to `Ok(None)`.

use serde::Deserialize;
use splitpane_layout::ContainerSize;

use crate::raw_input::{RawInputEvent, RawInputKind, RawPoint};

/// Errors from parsing encoded input JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputParseError {
    /// Malformed JSON.
    Json(String),
}

impl core::fmt::Display for InputParseError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Json(msg) => write!(f, "JSON parse error: {msg}"),
        }
    }
}

impl std::error::Error for InputParseError {}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawJsonInput {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    touches: Vec<RawJsonPoint>,
    #[serde(default)]
    client_x: Option<f64>,
    #[serde(default)]
    client_y: Option<f64>,
    #[serde(default)]
    container: Option<RawJsonContainer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawJsonPoint {
    #[serde(default)]
    client_x: Option<f64>,
    #[serde(default)]
    client_y: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct RawJsonContainer {
    width: f64,
    height: f64,
}

fn point(x: Option<f64>, y: Option<f64>) -> Option<RawPoint> {
    Some(RawPoint::new(x?, y?))
}

fn parse_kind(kind: &str) -> Option<RawInputKind> {
    match kind {
        "mousedown" | "pointerdown" => Some(RawInputKind::PointerDown),
        "touchstart" => Some(RawInputKind::TouchStart),
        "touchmove" => Some(RawInputKind::TouchMove),
        "touchend" => Some(RawInputKind::TouchEnd),
        "touchcancel" => Some(RawInputKind::TouchCancel),
        "mousemove" | "pointermove" => Some(RawInputKind::DocumentPointerMove),
        "mouseup" | "pointerup" => Some(RawInputKind::DocumentPointerUp),
        _ => None,
    }
}

fn measured(extent: f64) -> u32 {
    // Layout boxes may be fractional; negative or NaN sizes collapse to 0.
    extent.max(0.0).round() as u32
}

/// Parse one JSON-encoded raw input event.
///
/// Touches missing either coordinate are skipped, so precedence falls through
/// to the next touch or to the client coordinates.
pub fn parse_raw_input(json: &str) -> Result<Option<RawInputEvent>, InputParseError> {
    let raw: RawJsonInput =
        serde_json::from_str(json).map_err(|e| InputParseError::Json(e.to_string()))?;
    let Some(kind) = parse_kind(&raw.kind) else {
        return Ok(None);
    };

    let mut event = RawInputEvent::new(kind);
    event.touches = raw
        .touches
        .iter()
        .filter_map(|touch| point(touch.client_x, touch.client_y))
        .collect();
    event.client = point(raw.client_x, raw.client_y);
    if kind.starts_drag() {
        event.container = raw
            .container
            .map(|c| ContainerSize::new(measured(c.width), measured(c.height)));
    }
    Ok(Some(event))
}
