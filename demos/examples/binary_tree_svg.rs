// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Render the twelve-sample binary tree to SVG.
//!
//! This example shows how to:
//! - build a tree with `Node::add_children`,
//! - implement `DrawSurface` for a concrete backend (here, SVG markup),
//! - run a `TreeDiagram` pass and add a caption around it.
//!
//! Run:
//! - `cargo run -p understory_demos --example binary_tree_svg > tree.svg`
//! - `RUST_LOG=understory_tree_diagram=trace` shows the engine's events on stderr.

use std::borrow::Cow;
use std::fmt::Write as _;

use kurbo::{Circle, Line, Point, Size};
use tracing_subscriber::EnvFilter;
use understory_tree_diagram::{
    Color, DiagramConfig, DrawSurface, FontSpec, LabelStyle, Node, TreeDiagram,
};

/// Advance per character as a fraction of the font size; close enough for Arial digits.
const ADVANCE_RATIO: f64 = 0.55;

/// Accumulates SVG elements in paint order.
#[derive(Debug)]
struct SvgSurface {
    size: Size,
    body: String,
}

impl SvgSurface {
    fn new(size: Size) -> Self {
        Self {
            size,
            body: String::new(),
        }
    }

    fn finish(self) -> String {
        let Size { width, height } = self.size;
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
             viewBox=\"0 0 {width} {height}\">\n\
             <defs><linearGradient id=\"bg\" x1=\"0\" y1=\"0\" x2=\"0\" y2=\"1\">\
             <stop offset=\"0\" stop-color=\"black\"/><stop offset=\"1\" stop-color=\"#1e3c64\"/>\
             </linearGradient></defs>\n\
             <rect width=\"100%\" height=\"100%\" fill=\"url(#bg)\"/>\n{}</svg>\n",
            self.body
        )
    }
}

fn css(color: Color) -> String {
    format!(
        "rgba({},{},{},{:.3})",
        color.r,
        color.g,
        color.b,
        f64::from(color.a) / 255.0
    )
}

/// Escape text for use in SVG element content and double-quoted attributes.
fn escape_xml(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

impl DrawSurface for SvgSurface {
    fn canvas_size(&self) -> Size {
        self.size
    }

    fn draw_line(&mut self, line: Line, color: Color) {
        writeln!(
            self.body,
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\"/>",
            line.p0.x,
            line.p0.y,
            line.p1.x,
            line.p1.y,
            css(color)
        )
        .expect("writing to a String cannot fail");
    }

    fn draw_circle(&mut self, circle: Circle, color: Color) {
        writeln!(
            self.body,
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>",
            circle.center.x,
            circle.center.y,
            circle.radius,
            css(color)
        )
        .expect("writing to a String cannot fail");
    }

    fn measure_text(&self, font: &FontSpec, text: &str) -> Size {
        let chars = text.chars().count() as f64;
        Size::new(chars * font.size * ADVANCE_RATIO, font.size)
    }

    fn draw_text(&mut self, origin: Point, text: &str, style: &LabelStyle) {
        writeln!(
            self.body,
            "<text x=\"{}\" y=\"{}\" dominant-baseline=\"hanging\" font-family=\"{}\" \
             font-size=\"{}\" fill=\"{}\">{}</text>",
            origin.x,
            origin.y,
            escape_xml(&style.font.family),
            style.font.size,
            css(style.color),
            escape_xml(text)
        )
        .expect("writing to a String cannot fail");
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut surface = SvgSurface::new(Size::new(700.0, 320.0));

    // Caption: centered horizontally, 15 units from the top.
    let caption = "Binary Tree Example (12 Samples)";
    let caption_style = LabelStyle {
        color: Color::WHITE,
        font: FontSpec::new("Arial", 25.0),
    };
    let caption_size = surface.measure_text(&caption_style.font, caption);
    let caption_origin = Point::new((surface.size.width - caption_size.width) / 2.0, 15.0);
    surface.draw_text(caption_origin, caption, &caption_style);

    let diagram = match TreeDiagram::new(DiagramConfig::default()) {
        Ok(diagram) => diagram,
        Err(err) => {
            eprintln!("invalid diagram configuration: {err}");
            std::process::exit(1);
        }
    };
    let tree = Node::sample();
    let stats = diagram.draw(&mut surface, Some(&tree));
    tracing::info!(
        markers = stats.markers,
        edges = stats.edges,
        "rendered binary tree"
    );

    print!("{}", surface.finish());
}
