//! Before/after compare slider.
//!
//! The slider position `p` is a percentage of the container width. The
//! overlay layer is clipped with `inset(0 0 0 p%)`, so the base image shows
//! to the left of the handle and the overlay to the right: `p = 0` reveals
//! the whole overlay, `p = 100` reveals the whole base image.

/// Leftmost handle position (overlay fully visible).
pub const SLIDER_MIN: f64 = 0.0;

/// Rightmost handle position (base image fully visible).
pub const SLIDER_MAX: f64 = 100.0;

/// Pointer sample, unified across mouse and touch input.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerInput {
    Mouse { client_x: f64 },
    /// `client_x` of every active touch point; the first one drives the handle.
    Touch { touches: Vec<f64> },
}

impl PointerInput {
    /// Horizontal viewport coordinate, if the sample carries one.
    pub fn client_x(&self) -> Option<f64> {
        match self {
            PointerInput::Mouse { client_x } => Some(*client_x),
            PointerInput::Touch { touches } => touches.first().copied(),
        }
    }
}

/// Horizontal extent of the image container in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerBounds {
    pub left: f64,
    pub width: f64,
}

impl ContainerBounds {
    /// Percentage of the width at viewport `client_x`, clamped to the container.
    pub fn percent_at(&self, client_x: f64) -> f64 {
        if self.width.is_nan() || self.width <= 0.0 {
            return SLIDER_MIN;
        }
        let x = (client_x - self.left).clamp(0.0, self.width);
        x / self.width * SLIDER_MAX
    }
}

/// Draggable reveal handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompareSlider {
    position: f64,
    dragging: bool,
}

impl Default for CompareSlider {
    fn default() -> Self {
        Self {
            position: SLIDER_MIN,
            dragging: false,
        }
    }
}

impl CompareSlider {
    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Move the handle, clamping to `[0, 100]`. NaN is ignored.
    pub fn set_position(&mut self, position: f64) {
        if position.is_nan() {
            return;
        }
        self.position = position.clamp(SLIDER_MIN, SLIDER_MAX);
    }

    /// Back to the fully-revealed overlay, drag state cleared.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn begin_drag(&mut self) {
        self.dragging = true;
    }

    /// Stop following the pointer. The handle stays where it is.
    pub fn end_drag(&mut self) {
        self.dragging = false;
    }

    /// Follow a pointer move. Returns the new position, or `None` when not
    /// dragging or the sample has no coordinate.
    pub fn drag(&mut self, input: &PointerInput, bounds: ContainerBounds) -> Option<f64> {
        if !self.dragging {
            return None;
        }
        let client_x = input.client_x()?;
        self.set_position(bounds.percent_at(client_x));
        Some(self.position)
    }

    /// CSS `clip-path` for the overlay layer.
    pub fn clip_path(&self) -> String {
        format!("inset(0 0 0 {}%)", self.position)
    }

    /// CSS `left` for the handle line.
    pub fn handle_left(&self) -> String {
        format!("{}%", self.position)
    }

    /// Fraction of the container width where the overlay is visible.
    pub fn overlay_visible_fraction(&self) -> f64 {
        (SLIDER_MAX - self.position) / SLIDER_MAX
    }

    /// Fraction of the container width where the base image is visible.
    pub fn base_visible_fraction(&self) -> f64 {
        self.position / SLIDER_MAX
    }
}
