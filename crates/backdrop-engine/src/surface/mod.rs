//! Drawing surfaces.

mod canvas;

use backdrop_core::{Rgb, Viewport};

pub use canvas::{CanvasSurface, DrawCommand};

/// A 2D drawing context in surface pixels, y growing downward.
pub trait Surface {
    /// Backing size of the surface.
    fn size(&self) -> Viewport;

    /// Resize the backing store. Discards the current contents.
    fn set_size(&mut self, size: Viewport);

    /// Position of the surface inside the host, used to translate
    /// absolute pointer coordinates.
    fn offset(&self) -> (f64, f64) {
        (0.0, 0.0)
    }

    /// Whether anything can be drawn right now.
    fn is_available(&self) -> bool {
        !self.size().is_empty()
    }

    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Fill style for subsequent circles. `alpha` is clamped to 0.0-1.0.
    fn set_fill(&mut self, color: Rgb, alpha: f64);

    /// Stroke style for subsequent lines. `alpha` is clamped to 0.0-1.0.
    fn set_stroke(&mut self, color: Rgb, alpha: f64, width: f64);

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64);
}
