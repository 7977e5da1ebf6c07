//! In-progress SVG path data
//!
//! Tokens accumulate between commits (fill/stroke). Only line, curve and
//! circle segments make a path drawable; a path of bare moves and closes
//! commits to nothing.

#[derive(Debug, Default, Clone, PartialEq)]
pub struct PathFragment {
    data: String,
    has_segments: bool,
}

impl PathFragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no drawable segment has been added since the last reset
    pub fn is_empty(&self) -> bool {
        !self.has_segments
    }

    /// Raw `d` attribute data accumulated so far
    pub fn data(&self) -> &str {
        &self.data
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        self.data.push_str(&format!(" M{},{}", x, y));
    }

    pub fn line_to(&mut self, x: f32, y: f32) {
        self.has_segments = true;
        self.data.push_str(&format!(" L{},{}", x, y));
    }

    pub fn quadratic_curve_to(&mut self, cpx: f32, cpy: f32, x: f32, y: f32) {
        self.has_segments = true;
        self.data.push_str(&format!(" Q{},{},{},{}", cpx, cpy, x, y));
    }

    pub fn bezier_curve_to(&mut self, cp1x: f32, cp1y: f32, cp2x: f32, cp2y: f32, x: f32, y: f32) {
        self.has_segments = true;
        self.data.push_str(&format!(
            " C{},{},{},{},{},{}",
            cp1x, cp1y, cp2x, cp2y, x, y
        ));
    }

    /// Closed circle made of two half arcs around (x, y)
    pub fn circle(&mut self, x: f32, y: f32, radius: f32) {
        self.has_segments = true;
        // Arc radii of 1 are scaled up by the renderer to span the diameter
        self.data.push_str(&format!(" M{},{}", x - radius, y));
        self.data.push_str(&format!(" A1,1 0 0,0 {},{}", x + radius, y));
        self.data.push_str(&format!(" A1,1 0 0,0 {},{}", x - radius, y));
        self.data.push_str(" z");
    }

    pub fn close(&mut self) {
        self.data.push_str(" z");
    }

    /// Reset to empty, returning the path data if it was drawable
    pub fn take(&mut self) -> Option<String> {
        let fragment = std::mem::take(self);
        fragment.has_segments.then_some(fragment.data)
    }
}
