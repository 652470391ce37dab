//! Renderer contract: pane rectangles and splitter affordance for a state.
//!
//! Rendering itself belongs to the host. This module only decides where the
//! two panes and the splitter go and what the splitter should look like.

use serde::{Deserialize, Serialize};

use crate::fraction::Fraction;
use crate::geometry::Rect;
use crate::state::{Orientation, ResizeState};

/// Default splitter thickness in pixels.
pub const DEFAULT_SPLITTER_THICKNESS: u32 = 10;

/// Pointer cursor shown over the splitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitterCursor {
    /// Horizontal drag affordance.
    ColResize,
    /// Vertical drag affordance.
    RowResize,
    /// No drag affordance.
    Default,
}

impl SplitterCursor {
    /// CSS cursor keyword.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::ColResize => "col-resize",
            Self::RowResize => "row-resize",
            Self::Default => "default",
        }
    }

    #[must_use]
    pub const fn for_state(orientation: Orientation, draggable: bool) -> Self {
        match (draggable, orientation) {
            (false, _) => Self::Default,
            (true, Orientation::Horizontal) => Self::ColResize,
            (true, Orientation::Vertical) => Self::RowResize,
        }
    }
}

/// Resolved splitter appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SplitterStyle {
    pub cursor: SplitterCursor,
    /// Extent along the split axis, in pixels.
    pub thickness: u32,
    /// Extra host attributes, passed through untouched.
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
}

/// Host-supplied replacement for the default splitter.
///
/// A custom splitter still has to wire the splitter-scope gesture handlers;
/// only its look is replaced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomSplitter {
    pub thickness: u32,
    /// Overrides the orientation-derived cursor when set.
    #[serde(default)]
    pub cursor: Option<SplitterCursor>,
    #[serde(default)]
    pub attributes: Vec<(String, String)>,
}

/// View configuration for the split view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewConfig {
    #[serde(default)]
    splitter: Option<CustomSplitter>,
}

/// Computed rectangles and splitter style for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitViewLayout {
    pub first: Rect,
    pub splitter: Rect,
    pub second: Rect,
    pub style: SplitterStyle,
}

impl ViewConfig {
    /// Default splitter, styled from orientation and draggable flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default splitter.
    #[must_use]
    pub fn with_custom_splitter(mut self, splitter: CustomSplitter) -> Self {
        self.splitter = Some(splitter);
        self
    }

    #[must_use]
    pub fn custom_splitter(&self) -> Option<&CustomSplitter> {
        self.splitter.as_ref()
    }

    /// Splitter appearance for a state.
    #[must_use]
    pub fn splitter_style(&self, state: &ResizeState) -> SplitterStyle {
        let derived = SplitterCursor::for_state(state.orientation(), state.draggable());
        match &self.splitter {
            None => SplitterStyle {
                cursor: derived,
                thickness: DEFAULT_SPLITTER_THICKNESS,
                attributes: Vec::new(),
            },
            Some(custom) => SplitterStyle {
                cursor: custom.cursor.unwrap_or(derived),
                thickness: custom.thickness,
                attributes: custom.attributes.clone(),
            },
        }
    }

    /// Lay out both panes and the splitter inside `area`.
    ///
    /// The splitter takes its thickness first (capped at the available
    /// extent); the first pane gets `fraction` of the rest, rounded, and the
    /// second pane whatever remains.
    #[must_use]
    pub fn layout(&self, state: &ResizeState, area: Rect) -> SplitViewLayout {
        let style = self.splitter_style(state);
        let (first, splitter, second) = split_area(
            area,
            state.orientation(),
            state.splitter_fraction(),
            style.thickness,
        );
        SplitViewLayout {
            first,
            splitter,
            second,
            style,
        }
    }
}

fn split_area(
    area: Rect,
    orientation: Orientation,
    fraction: Fraction,
    thickness: u32,
) -> (Rect, Rect, Rect) {
    let extent = match orientation {
        Orientation::Horizontal => area.width,
        Orientation::Vertical => area.height,
    };
    let thickness = thickness.min(extent);
    let available = extent - thickness;
    let first_len = ((f64::from(available) * fraction.get()).round() as u32).min(available);
    let second_len = available - first_len;

    match orientation {
        Orientation::Horizontal => {
            let splitter_x = area.x.saturating_add(first_len);
            let second_x = splitter_x.saturating_add(thickness);
            (
                Rect::new(area.x, area.y, first_len, area.height),
                Rect::new(splitter_x, area.y, thickness, area.height),
                Rect::new(second_x, area.y, second_len, area.height),
            )
        }
        Orientation::Vertical => {
            let splitter_y = area.y.saturating_add(first_len);
            let second_y = splitter_y.saturating_add(thickness);
            (
                Rect::new(area.x, area.y, area.width, first_len),
                Rect::new(area.x, splitter_y, area.width, thickness),
                Rect::new(area.x, second_y, area.width, second_len),
            )
        }
    }
}
