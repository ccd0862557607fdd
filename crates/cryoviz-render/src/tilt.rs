//! Drag-to-tilt for the chip diagram.
//!
//! The host forwards pointer events in screen pixels. Small movements are ignored until the
//! pointer has travelled [`DRAG_THRESHOLD`] pixels; after that each axis follows the drag
//! independently, clamped to +/- [`MAX_ROTATION`] degrees. A release that followed a drag
//! must not count as a click on whatever sits under the pointer.

use cryoviz_core::geom::Point;
use cryoviz_core::utils::fmt_js_number;
use serde::Serialize;

pub const DRAG_THRESHOLD: f64 = 3.0;
pub const MAX_ROTATION: f64 = 25.0;
/// Degrees per pixel.
pub const SENSITIVITY: f64 = 0.3;
pub const PERSPECTIVE_PX: f64 = 800.0;

/// Tilt in degrees: `x` about the horizontal axis, `y` about the vertical axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PointerRelease {
    /// No drag happened since the pointer went down; the host may dispatch a click.
    Click,
    /// A drag ended; the click must be suppressed.
    DragEnd,
}

#[derive(Debug, Clone, Copy)]
struct DragStart {
    pointer: Point,
    rotation: Rotation,
}

#[derive(Debug, Clone, Default)]
pub struct TiltController {
    rotation: Rotation,
    start: Option<DragStart>,
    dragging: bool,
    has_dragged: bool,
}

fn clamp_rotation(v: f64) -> f64 {
    v.clamp(-MAX_ROTATION, MAX_ROTATION)
}

impl TiltController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Whether a click at this moment should select something.
    pub fn click_allowed(&self) -> bool {
        !self.has_dragged
    }

    pub fn pointer_down(&mut self, pointer: Point) {
        self.start = Some(DragStart {
            pointer,
            rotation: self.rotation,
        });
        self.has_dragged = false;
    }

    /// Returns `true` when the rotation changed.
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        let Some(start) = self.start else {
            return false;
        };
        let delta = pointer - start.pointer;
        if !self.has_dragged && delta.length() < DRAG_THRESHOLD {
            return false;
        }
        self.has_dragged = true;
        self.dragging = true;

        let next = Rotation {
            x: clamp_rotation(start.rotation.x - delta.y * SENSITIVITY),
            y: clamp_rotation(start.rotation.y + delta.x * SENSITIVITY),
        };
        let changed = next != self.rotation;
        self.rotation = next;
        changed
    }

    /// Pointer up or pointer leaving the diagram.
    pub fn pointer_up(&mut self) -> PointerRelease {
        self.start = None;
        self.dragging = false;
        if self.has_dragged {
            PointerRelease::DragEnd
        } else {
            PointerRelease::Click
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn css_transform(&self) -> String {
        format!(
            "perspective({}px) rotateX({}deg) rotateY({}deg)",
            fmt_js_number(PERSPECTIVE_PX),
            fmt_js_number(self.rotation.x),
            fmt_js_number(self.rotation.y)
        )
    }

    /// Shadow offset follows the tilt so the chip appears lit from above.
    pub fn css_drop_shadow(&self) -> String {
        format!(
            "drop-shadow({}px {}px 8px rgba(0,0,0,0.5))",
            fmt_js_number(self.rotation.y * 0.3),
            fmt_js_number(-self.rotation.x * 0.3 + 4.0)
        )
    }

    pub fn css_transition(&self) -> &'static str {
        if self.dragging {
            "none"
        } else {
            "transform 0.3s ease-out"
        }
    }

    /// `transform`, `transition` and `filter` declarations for the wrapper element.
    pub fn css_style(&self) -> String {
        format!(
            "transform: {}; transition: {}; filter: {};",
            self.css_transform(),
            self.css_transition(),
            self.css_drop_shadow()
        )
    }
}
