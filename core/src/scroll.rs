pub const ROTATION_DEG_PER_PX: f64 = 0.1;
pub const FULL_TURN_DEG: f64 = 360.0;

/// Values derived from the page scroll offset on every scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    /// Percentage of the scrollable distance covered, in `[0, 100]`.
    pub progress: f64,
    /// Unwrapped logo rotation in degrees.
    pub rotation_deg: f64,
}

impl ScrollMetrics {
    pub fn measure(scrolled: f64, document_height: f64, viewport_height: f64) -> Self {
        let max_scroll = document_height - viewport_height;
        let progress = if max_scroll > 0.0 {
            (scrolled / max_scroll * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };
        Self {
            progress,
            rotation_deg: scrolled * ROTATION_DEG_PER_PX,
        }
    }

    pub fn display_rotation(&self) -> f64 {
        self.rotation_deg.rem_euclid(FULL_TURN_DEG)
    }

    pub fn progress_style(&self) -> String {
        format!("width: {}%", self.progress)
    }

    pub fn rotation_style(&self) -> String {
        format!("transform: rotate({}deg)", self.display_rotation())
    }
}
