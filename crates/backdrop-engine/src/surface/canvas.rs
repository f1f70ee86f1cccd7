//! Terminal surface rendered through ratatui's braille canvas.

use backdrop_core::{Rgb, Viewport};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        Widget,
        canvas::{Canvas, Line as CanvasLine, Painter, Shape},
    },
};

use super::Surface;

/// One recorded draw call with its color already blended over the background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Circle {
        x: f64,
        y: f64,
        radius: f64,
        color: Rgb,
    },
    Line {
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        width: f64,
        color: Rgb,
    },
}

/// A [`Surface`] that records the current frame as a display list and
/// renders it as a ratatui widget.
///
/// Terminals have no alpha channel, so opacity is applied by blending the
/// draw color over the background color at record time.
#[derive(Debug, Clone)]
pub struct CanvasSurface {
    size: Viewport,
    background: Rgb,
    /// Surface pixels covered by one braille dot (x, y).
    dot: (f64, f64),
    fill: Rgb,
    stroke: Rgb,
    stroke_width: f64,
    commands: Vec<DrawCommand>,
}

impl CanvasSurface {
    pub fn new(background: Rgb) -> Self {
        Self {
            size: Viewport::default(),
            background,
            dot: (1.0, 1.0),
            fill: background,
            stroke: background,
            stroke_width: 1.0,
            commands: Vec::new(),
        }
    }

    /// Set how many surface pixels one braille dot covers.
    pub fn with_dot_size(mut self, width: f64, height: f64) -> Self {
        self.dot = (width, height);
        self
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Draw calls recorded since the last full clear.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Viewport {
        self.size
    }

    fn set_size(&mut self, size: Viewport) {
        self.size = size;
        self.commands.clear();
    }

    fn clear(&mut self, x: f64, y: f64, width: f64, height: f64) {
        // Anything drawn off-surface goes with a full clear too.
        if x <= 0.0
            && y <= 0.0
            && x + width >= self.size.width as f64
            && y + height >= self.size.height as f64
        {
            self.commands.clear();
            return;
        }
        let inside = |px: f64, py: f64| px >= x && px <= x + width && py >= y && py <= y + height;
        self.commands.retain(|command| match *command {
            DrawCommand::Circle { x, y, .. } => !inside(x, y),
            DrawCommand::Line { x0, y0, x1, y1, .. } => !(inside(x0, y0) && inside(x1, y1)),
        });
    }

    fn set_fill(&mut self, color: Rgb, alpha: f64) {
        self.fill = color.blend_over(self.background, alpha);
    }

    fn set_stroke(&mut self, color: Rgb, alpha: f64, width: f64) {
        self.stroke = color.blend_over(self.background, alpha);
        self.stroke_width = width;
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        if !(x.is_finite() && y.is_finite() && radius.is_finite()) {
            return;
        }
        self.commands.push(DrawCommand::Circle {
            x,
            y,
            radius,
            color: self.fill,
        });
    }

    fn stroke_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        if !(x0.is_finite() && y0.is_finite() && x1.is_finite() && y1.is_finite()) {
            return;
        }
        self.commands.push(DrawCommand::Line {
            x0,
            y0,
            x1,
            y1,
            width: self.stroke_width,
            color: self.stroke,
        });
    }
}

/// Filled circle painted dot by dot.
struct Dot {
    x: f64,
    y: f64,
    radius: f64,
    step: (f64, f64),
    color: Color,
}

impl Shape for Dot {
    fn draw(&self, painter: &mut Painter) {
        if let Some((px, py)) = painter.get_point(self.x, self.y) {
            painter.paint(px, py, self.color);
        }
        let (sx, sy) = self.step;
        if sx <= 0.0 || sy <= 0.0 || self.radius <= 0.0 {
            return;
        }
        let nx = (self.radius / sx).floor() as i64;
        let ny = (self.radius / sy).floor() as i64;
        for i in -nx..=nx {
            for j in -ny..=ny {
                let dx = i as f64 * sx;
                let dy = j as f64 * sy;
                if dx.hypot(dy) > self.radius {
                    continue;
                }
                if let Some((px, py)) = painter.get_point(self.x + dx, self.y + dy) {
                    painter.paint(px, py, self.color);
                }
            }
        }
    }
}

impl Widget for &CanvasSurface {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.size.is_empty() || area.is_empty() {
            return;
        }
        let width = self.size.width as f64;
        let height = self.size.height as f64;
        let (dot_w, dot_h) = self.dot;

        // Canvas y grows upward; surface y grows downward.
        Canvas::default()
            .marker(Marker::Braille)
            .background_color(self.background.into())
            .x_bounds([0.0, width])
            .y_bounds([0.0, height])
            .paint(|ctx| {
                for command in &self.commands {
                    match *command {
                        DrawCommand::Circle {
                            x,
                            y,
                            radius,
                            color,
                        } => ctx.draw(&Dot {
                            x,
                            y: height - y,
                            radius,
                            step: (dot_w, dot_h),
                            color: color.into(),
                        }),
                        DrawCommand::Line {
                            x0,
                            y0,
                            x1,
                            y1,
                            width: line_width,
                            color,
                        } => {
                            let color: Color = color.into();
                            ctx.draw(&CanvasLine::new(x0, height - y0, x1, height - y1, color));
                            if line_width > 1.0 {
                                let (ox, oy) = if (x1 - x0).abs() >= (y1 - y0).abs() {
                                    (0.0, dot_h)
                                } else {
                                    (dot_w, 0.0)
                                };
                                ctx.draw(&CanvasLine::new(
                                    x0 + ox,
                                    height - y0 + oy,
                                    x1 + ox,
                                    height - y1 + oy,
                                    color,
                                ));
                            }
                        }
                    }
                }
            })
            .render(area, buf);
    }
}
