#![forbid(unsafe_code)]

//! Browser-shaped raw input events and their gesture translation.
//!
//! Coordinates are extracted with a fixed precedence: the first active touch,
//! then the event's client coordinates, then the origin. Fractional device
//! coordinates are rounded to whole pixels.

use splitpane_layout::{ContainerSize, GestureEvent, GestureInput, InputScope, PointerPosition};

/// Raw input kinds the splitter and its document subscription receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawInputKind {
    PointerDown,
    TouchStart,
    TouchMove,
    TouchEnd,
    TouchCancel,
    /// Pointer move delivered through the document subscription.
    DocumentPointerMove,
    /// Pointer release delivered through the document subscription.
    DocumentPointerUp,
}

impl RawInputKind {
    #[must_use]
    pub const fn scope(self) -> InputScope {
        match self {
            Self::DocumentPointerMove | Self::DocumentPointerUp => InputScope::Document,
            _ => InputScope::Splitter,
        }
    }

    /// Whether this input begins a drag and so carries a container size.
    #[must_use]
    pub const fn starts_drag(self) -> bool {
        matches!(self, Self::PointerDown | Self::TouchStart)
    }
}

/// Handlers a splitter element must wire, default or custom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitterHandlers;

impl SplitterHandlers {
    /// Splitter-scope inputs; each one prevents the platform default.
    pub const REQUIRED: [RawInputKind; 5] = [
        RawInputKind::PointerDown,
        RawInputKind::TouchStart,
        RawInputKind::TouchMove,
        RawInputKind::TouchEnd,
        RawInputKind::TouchCancel,
    ];

    /// Inputs delivered by the document subscription while a drag is active.
    pub const DOCUMENT: [RawInputKind; 2] = [
        RawInputKind::DocumentPointerMove,
        RawInputKind::DocumentPointerUp,
    ];
}

/// A device coordinate pair as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawPoint {
    pub x: f64,
    pub y: f64,
}

impl RawPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn to_pointer(self) -> PointerPosition {
        // `as` saturates and maps NaN to 0.
        PointerPosition::new(self.x.round() as i32, self.y.round() as i32)
    }
}

/// One raw input event as handed over by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct RawInputEvent {
    pub kind: RawInputKind,
    /// Active touches, first one wins.
    pub touches: Vec<RawPoint>,
    /// Direct client coordinates, if the event has them.
    pub client: Option<RawPoint>,
    /// Splitter parent's measured content size, read on drag start.
    pub container: Option<ContainerSize>,
}

impl RawInputEvent {
    #[must_use]
    pub fn new(kind: RawInputKind) -> Self {
        Self {
            kind,
            touches: Vec::new(),
            client: None,
            container: None,
        }
    }

    /// Mouse/pointer event at client coordinates.
    #[must_use]
    pub fn pointer(kind: RawInputKind, x: f64, y: f64) -> Self {
        Self::new(kind).with_client(RawPoint::new(x, y))
    }

    /// Touch event with a single active touch.
    #[must_use]
    pub fn touch(kind: RawInputKind, x: f64, y: f64) -> Self {
        Self::new(kind).with_touch(RawPoint::new(x, y))
    }

    #[must_use]
    pub fn with_touch(mut self, point: RawPoint) -> Self {
        self.touches.push(point);
        self
    }

    #[must_use]
    pub fn with_client(mut self, point: RawPoint) -> Self {
        self.client = Some(point);
        self
    }

    #[must_use]
    pub fn with_container(mut self, container: ContainerSize) -> Self {
        self.container = Some(container);
        self
    }

    /// Pointer position by precedence: touch, client, origin.
    #[must_use]
    pub fn position(&self) -> PointerPosition {
        self.touches
            .first()
            .copied()
            .or(self.client)
            .map_or(PointerPosition::ORIGIN, RawPoint::to_pointer)
    }
}

impl GestureInput for RawInputEvent {
    fn scope(&self) -> InputScope {
        self.kind.scope()
    }

    fn gesture(&self) -> Option<GestureEvent> {
        let position = self.position();
        let gesture = match self.kind {
            RawInputKind::PointerDown | RawInputKind::TouchStart => GestureEvent::DragStart {
                position,
                container: self.container.unwrap_or_default(),
            },
            RawInputKind::TouchMove | RawInputKind::DocumentPointerMove => {
                GestureEvent::DragMove { position }
            }
            RawInputKind::TouchEnd
            | RawInputKind::TouchCancel
            | RawInputKind::DocumentPointerUp => GestureEvent::DragEnd { position },
        };
        Some(gesture)
    }
}
