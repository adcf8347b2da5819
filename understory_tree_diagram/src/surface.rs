// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing-surface seam and a recording implementation.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Circle, Line, Point, Rect, Shape, Size};

use crate::style::{Color, FontSpec, LabelStyle};

/// Primitive drawing operations consumed by [`TreeDiagram`](crate::TreeDiagram).
///
/// Implementations are single-writer sinks: primitives arrive in paint order
/// and later primitives cover earlier ones. Every call is assumed to succeed.
pub trait DrawSurface {
    /// Size of the drawable area, used to derive the root anchor.
    fn canvas_size(&self) -> Size;

    /// Stroke a straight line.
    fn draw_line(&mut self, line: Line, color: Color);

    /// Fill a circle.
    fn draw_circle(&mut self, circle: Circle, color: Color);

    /// Measure the rendered extent of `text` in `font`.
    fn measure_text(&self, font: &FontSpec, text: &str) -> Size;

    /// Draw `text` with its bounding box's top-left corner at `origin`.
    fn draw_text(&mut self, origin: Point, text: &str, style: &LabelStyle);
}

impl<S: DrawSurface + ?Sized> DrawSurface for &mut S {
    fn canvas_size(&self) -> Size {
        (**self).canvas_size()
    }

    fn draw_line(&mut self, line: Line, color: Color) {
        (**self).draw_line(line, color);
    }

    fn draw_circle(&mut self, circle: Circle, color: Color) {
        (**self).draw_circle(circle, color);
    }

    fn measure_text(&self, font: &FontSpec, text: &str) -> Size {
        (**self).measure_text(font, text)
    }

    fn draw_text(&mut self, origin: Point, text: &str, style: &LabelStyle) {
        (**self).draw_text(origin, text, style);
    }
}

/// One recorded primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A stroked line.
    Line {
        /// Segment endpoints.
        line: Line,
        /// Stroke color.
        color: Color,
    },
    /// A filled circle.
    Circle {
        /// Center and radius.
        circle: Circle,
        /// Fill color.
        color: Color,
    },
    /// A text run.
    Text {
        /// Top-left corner of the text box.
        origin: Point,
        /// The text itself.
        text: String,
        /// Measured size at the time of drawing.
        size: Size,
        /// Color and font.
        style: LabelStyle,
    },
}

impl DrawCommand {
    /// Axis-aligned bounds of the primitive.
    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Line { line, .. } => line.bounding_box(),
            Self::Circle { circle, .. } => circle.bounding_box(),
            Self::Text { origin, size, .. } => Rect::from_origin_size(*origin, *size),
        }
    }
}

/// A [`DrawSurface`] that keeps every primitive it receives, in order.
///
/// Text is measured with a fixed advance per character (`advance_ratio`
/// times the font size) and a line height equal to the font size, which is
/// enough to make label placement deterministic.
///
/// ```rust
/// use kurbo::{Line, Size};
/// use understory_tree_diagram::{Color, DrawSurface, RecordingSurface};
///
/// let mut surface = RecordingSurface::new(Size::new(100.0, 100.0));
/// surface.draw_line(Line::new((0.0, 0.0), (10.0, 10.0)), Color::WHITE);
/// assert_eq!(surface.lines().count(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    advance_ratio: f64,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Advance per character used by [`RecordingSurface::new`], as a fraction of the font size.
    pub const DEFAULT_ADVANCE_RATIO: f64 = 0.5;

    /// Create an empty recording for a canvas of `size`.
    pub fn new(size: Size) -> Self {
        Self::with_advance_ratio(size, Self::DEFAULT_ADVANCE_RATIO)
    }

    /// Create an empty recording with a custom per-character advance.
    pub fn with_advance_ratio(size: Size, advance_ratio: f64) -> Self {
        Self {
            size,
            advance_ratio,
            commands: Vec::new(),
        }
    }

    /// Everything drawn so far, in paint order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the surface empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        core::mem::take(&mut self.commands)
    }

    /// Drawn lines, in paint order.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line { line, .. } => Some(*line),
            _ => None,
        })
    }

    /// Drawn circles, in paint order.
    pub fn markers(&self) -> impl Iterator<Item = Circle> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Circle { circle, .. } => Some(*circle),
            _ => None,
        })
    }

    /// Drawn text runs with their centers, in paint order.
    pub fn labels(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text {
                origin, text, size, ..
            } => Some((text.as_str(), Rect::from_origin_size(*origin, *size).center())),
            _ => None,
        })
    }

    /// Union of the bounds of everything drawn, or `None` if nothing was drawn.
    pub fn bounds(&self) -> Option<Rect> {
        let mut it = self.commands.iter().map(DrawCommand::bounding_box);
        let first = it.next()?;
        Some(it.fold(first, |acc, r| acc.union(r)))
    }
}

impl DrawSurface for RecordingSurface {
    fn canvas_size(&self) -> Size {
        self.size
    }

    fn draw_line(&mut self, line: Line, color: Color) {
        self.commands.push(DrawCommand::Line { line, color });
    }

    fn draw_circle(&mut self, circle: Circle, color: Color) {
        self.commands.push(DrawCommand::Circle { circle, color });
    }

    fn measure_text(&self, font: &FontSpec, text: &str) -> Size {
        let chars = text.chars().count() as f64;
        Size::new(chars * font.size * self.advance_ratio, font.size)
    }

    fn draw_text(&mut self, origin: Point, text: &str, style: &LabelStyle) {
        let size = self.measure_text(&style.font, text);
        self.commands.push(DrawCommand::Text {
            origin,
            text: text.to_string(),
            size,
            style: style.clone(),
        });
    }
}
