// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recursive layout and paint of a binary tree onto a [`DrawSurface`].

use alloc::string::ToString;

use kurbo::{Circle, Line, Point, Size, Vec2};

use crate::config::DiagramConfig;
use crate::error::Result;
use crate::node::Node;
use crate::surface::DrawSurface;

/// Counts of what a single draw pass produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    /// Node markers drawn, root included.
    pub markers: usize,
    /// Parent-to-child edges drawn.
    pub edges: usize,
    /// Nodes on the last allowed level whose children were left undrawn.
    pub truncated: usize,
}

/// Lays out and draws a binary tree with depth-tapered horizontal spacing.
///
/// Children of a node at depth `d` (root = 0) sit `level_height` below it and
/// [`half_spread(d)`](Self::half_spread) to either side. The spread halves at
/// every level, so sibling subtrees never overlap. Only
/// [`max_depth`](DiagramConfig::max_depth) levels are drawn; anything deeper
/// is silently cut off.
///
/// Within one node, edges to its children are drawn first, then the
/// children's subtrees, then the children's markers and labels. Markers
/// therefore paint over every line that ends at them.
///
/// ## Example
///
/// ```rust
/// use kurbo::Size;
/// use understory_tree_diagram::{DiagramConfig, Node, RecordingSurface, TreeDiagram};
///
/// let diagram = TreeDiagram::new(DiagramConfig::default()).unwrap();
/// let mut surface = RecordingSurface::new(Size::new(700.0, 320.0));
///
/// let stats = diagram.draw(&mut surface, Some(&Node::sample()));
/// assert_eq!(stats.markers, 12);
/// assert_eq!(stats.edges, 11);
/// ```
#[derive(Clone, Debug)]
pub struct TreeDiagram {
    config: DiagramConfig,
}

impl TreeDiagram {
    /// Create a diagram engine, rejecting configurations that cannot be laid out.
    pub fn new(config: DiagramConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration.
    pub fn config(&self) -> &DiagramConfig {
        &self.config
    }

    /// Where the root is centered on a canvas of the given size: horizontally
    /// centered, one marker radius plus the top margin down.
    pub fn root_anchor(&self, canvas: Size) -> Point {
        Point::new(
            canvas.width / 2.0,
            self.config.marker_radius + self.config.top_margin,
        )
    }

    /// Horizontal distance from a node at `depth` to each of its children.
    ///
    /// Equals `2^(max_depth - 1 - depth) * base_distance / 2`, bottoming out
    /// at `base_distance / 2` for depths at or past the last level.
    pub fn half_spread(&self, depth: u32) -> f64 {
        let exponent = self
            .config
            .max_depth
            .saturating_sub(1)
            .saturating_sub(depth);
        // `validate` caps max_depth at 64, so the shift stays in range.
        let scale = (1_u64 << exponent) as f64;
        scale * self.config.base_distance / 2.0
    }

    /// Draw `root` anchored at [`root_anchor`](Self::root_anchor) for the
    /// surface's canvas. Draws nothing for `None`.
    pub fn draw<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        root: Option<&Node>,
    ) -> DrawStats {
        let anchor = self.root_anchor(surface.canvas_size());
        self.draw_at(surface, anchor, root)
    }

    /// Draw `root` with its marker centered on `anchor`.
    pub fn draw_at<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        anchor: Point,
        root: Option<&Node>,
    ) -> DrawStats {
        let mut stats = DrawStats::default();
        let Some(root) = root else {
            tracing::debug!("no root node; nothing to draw");
            return stats;
        };

        self.draw_node(surface, anchor, root, 0, &mut stats);

        // The root has no parent pass to paint it.
        self.draw_marker(surface, anchor, &mut stats);
        self.draw_label(surface, anchor, root);

        tracing::debug!(
            x = anchor.x,
            y = anchor.y,
            max_depth = self.config.max_depth,
            markers = stats.markers,
            edges = stats.edges,
            truncated = stats.truncated,
            "drew tree diagram"
        );
        stats
    }

    /// Paint the edges, subtrees, and markers below `node`, which sits at `anchor`.
    fn draw_node<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        anchor: Point,
        node: &Node,
        depth: u32,
        stats: &mut DrawStats,
    ) {
        let offset = self.half_spread(depth);
        let left_anchor = anchor + Vec2::new(-offset, self.config.level_height);
        let right_anchor = anchor + Vec2::new(offset, self.config.level_height);
        let children = [(node.left(), left_anchor), (node.right(), right_anchor)];

        for (child, at) in children {
            if child.is_some() {
                surface.draw_line(Line::new(anchor, at), self.config.line_color);
                stats.edges += 1;
            }
        }

        let child_depth = depth + 1;
        for (child, at) in children {
            let Some(child) = child else { continue };
            if child_depth + 1 < self.config.max_depth {
                self.draw_node(surface, at, child, child_depth, stats);
            } else if !child.is_leaf() {
                stats.truncated += 1;
                tracing::trace!(
                    value = child.value(),
                    depth = child_depth,
                    "children below the last level are not drawn"
                );
            }
        }

        for (child, at) in children {
            if child.is_some() {
                self.draw_marker(surface, at, stats);
            }
        }
        for (child, at) in children {
            if let Some(child) = child {
                self.draw_label(surface, at, child);
            }
        }
    }

    fn draw_marker<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        at: Point,
        stats: &mut DrawStats,
    ) {
        surface.draw_circle(
            Circle::new(at, self.config.marker_radius),
            self.config.marker_color,
        );
        stats.markers += 1;
    }

    /// Center the node's value on `at`.
    fn draw_label<S: DrawSurface + ?Sized>(&self, surface: &mut S, at: Point, node: &Node) {
        let text = node.value().to_string();
        let size = surface.measure_text(&self.config.label.font, &text);
        let origin = at - size.to_vec2() / 2.0;
        surface.draw_text(origin, &text, &self.config.label);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiagramError;
    use crate::surface::{DrawCommand, RecordingSurface};
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;
    use kurbo::Rect;

    fn canvas() -> RecordingSurface {
        RecordingSurface::new(Size::new(700.0, 320.0))
    }

    fn diagram(max_depth: u32) -> TreeDiagram {
        TreeDiagram::new(DiagramConfig {
            max_depth,
            ..DiagramConfig::default()
        })
        .unwrap()
    }

    fn drawn_values(surface: &RecordingSurface) -> BTreeSet<i32> {
        surface
            .labels()
            .map(|(text, _)| text.parse().unwrap())
            .collect()
    }

    fn label_center(surface: &RecordingSurface, value: i32) -> Point {
        let text = value.to_string();
        surface
            .labels()
            .find(|(t, _)| *t == text)
            .map(|(_, center)| center)
            .unwrap()
    }

    /// Tree whose left spine runs `levels` deep: 1 -> 2 -> 3 -> ...
    fn left_spine(levels: i32) -> Node {
        let mut root = Node::new(1);
        let mut cursor = &mut root;
        for value in 2..=levels {
            cursor.add_children(value, -1);
            cursor = cursor.left_mut().unwrap();
        }
        root
    }

    #[test]
    fn half_spread_halves_per_level() {
        let diagram = TreeDiagram::new(DiagramConfig::default()).unwrap();
        assert_eq!(diagram.half_spread(0), 80.0);
        assert_eq!(diagram.half_spread(1), 40.0);
        assert_eq!(diagram.half_spread(2), 20.0);
        assert_eq!(diagram.half_spread(3), 10.0);
        assert_eq!(diagram.half_spread(9), 10.0);
    }

    #[test]
    fn rejects_zero_depth() {
        let err = TreeDiagram::new(DiagramConfig {
            max_depth: 0,
            ..DiagramConfig::default()
        })
        .unwrap_err();
        assert_eq!(err, DiagramError::ZeroMaxDepth);
    }

    #[test]
    fn sample_tree_draws_all_twelve_nodes() {
        let mut surface = canvas();
        let stats = diagram(4).draw(&mut surface, Some(&Node::sample()));

        assert_eq!(
            stats,
            DrawStats {
                markers: 12,
                edges: 11,
                truncated: 0,
            }
        );
        assert_eq!(drawn_values(&surface), (1..=12).collect::<BTreeSet<_>>());
        assert_eq!(surface.markers().count(), 12);
        assert_eq!(surface.lines().count(), 11);
    }

    #[test]
    fn sample_tree_positions() {
        let mut surface = canvas();
        let diagram = diagram(4);
        diagram.draw(&mut surface, Some(&Node::sample()));

        let root = diagram.root_anchor(Size::new(700.0, 320.0));
        assert_eq!(root, Point::new(350.0, 77.0));
        assert_eq!(label_center(&surface, 1), root);
        assert_eq!(label_center(&surface, 2), Point::new(270.0, 137.0));
        assert_eq!(label_center(&surface, 3), Point::new(430.0, 137.0));
        assert_eq!(label_center(&surface, 4), Point::new(230.0, 197.0));
        assert_eq!(label_center(&surface, 7), Point::new(470.0, 197.0));
        assert_eq!(label_center(&surface, 9), Point::new(210.0, 257.0));
        assert_eq!(label_center(&surface, 12), Point::new(330.0, 257.0));
        assert_eq!(label_center(&surface, 8), Point::new(450.0, 257.0));
    }

    #[test]
    fn labels_are_centered_on_markers() {
        let mut surface = canvas();
        diagram(4).draw(&mut surface, Some(&Node::sample()));

        let centers: Vec<Point> = surface.markers().map(|c| c.center).collect();
        for (text, center) in surface.labels() {
            assert!(
                centers.contains(&center),
                "label {text} is not centered on a marker"
            );
        }
    }

    #[test]
    fn markers_paint_over_incoming_edges() {
        let mut surface = canvas();
        diagram(4).draw(&mut surface, Some(&Node::sample()));
        let commands = surface.commands();

        for (marker_idx, command) in commands.iter().enumerate() {
            let DrawCommand::Circle { circle, .. } = command else {
                continue;
            };
            for (line_idx, other) in commands.iter().enumerate() {
                if let DrawCommand::Line { line, .. } = other
                    && (line.p0 == circle.center || line.p1 == circle.center)
                {
                    assert!(
                        line_idx < marker_idx,
                        "edge at {line_idx} drawn after marker at {marker_idx}"
                    );
                }
            }
        }
    }

    #[test]
    fn labels_paint_over_markers_and_edges() {
        let mut surface = canvas();
        diagram(4).draw(&mut surface, Some(&Node::sample()));
        let commands = surface.commands();

        let mut labels = 0;
        for (label_idx, command) in commands.iter().enumerate() {
            let DrawCommand::Text {
                origin, size, text, ..
            } = command
            else {
                continue;
            };
            labels += 1;
            let center = Rect::from_origin_size(*origin, *size).center();
            let marker_idx = commands
                .iter()
                .position(|c| {
                    matches!(c, DrawCommand::Circle { circle, .. } if circle.center == center)
                })
                .unwrap();
            assert!(
                marker_idx < label_idx,
                "label {text} drawn before its marker"
            );
            for (line_idx, other) in commands.iter().enumerate() {
                if let DrawCommand::Line { line, .. } = other
                    && (line.p0 == center || line.p1 == center)
                {
                    assert!(
                        line_idx < label_idx,
                        "edge at {line_idx} drawn after label {text}"
                    );
                }
            }
        }
        assert_eq!(labels, 12, "every node, root included, gets a label");

        // The root's marker and label close the pass, in that order.
        assert!(
            matches!(
                &commands[commands.len() - 2..],
                [DrawCommand::Circle { .. }, DrawCommand::Text { text, .. }] if text == "1"
            ),
            "root marker then root label must be painted last"
        );
    }

    #[test]
    fn last_level_children_are_truncated() {
        let mut tree = Node::sample();
        // Give leaf 9 (depth 3) children of its own.
        let nine = tree
            .left_mut()
            .and_then(Node::left_mut)
            .and_then(Node::left_mut)
            .unwrap();
        nine.add_children(13, 14);

        let mut surface = canvas();
        let stats = diagram(4).draw(&mut surface, Some(&tree));

        assert_eq!(drawn_values(&surface), (1..=12).collect::<BTreeSet<_>>());
        assert_eq!(stats.edges, 11);
        assert_eq!(stats.truncated, 1);
    }

    #[test]
    fn drawn_levels_follow_max_depth() {
        let tree = left_spine(6);
        for max_depth in 2..=6 {
            let mut surface = canvas();
            let stats = diagram(max_depth).draw(&mut surface, Some(&tree));
            let expected: BTreeSet<i32> = (1..=i32::try_from(max_depth).unwrap()).collect();
            assert_eq!(drawn_values(&surface), expected, "max_depth {max_depth}");
            assert_eq!(stats.edges, expected.len() - 1);
        }
    }

    #[test]
    fn depth_one_still_draws_immediate_children() {
        let mut tree = Node::new(1);
        tree.add_children(2, 3);
        if let Some(two) = tree.left_mut() {
            two.add_children(4, -1);
        }

        let mut surface = canvas();
        let stats = diagram(1).draw(&mut surface, Some(&tree));

        assert_eq!(drawn_values(&surface), BTreeSet::from([1, 2, 3]));
        assert_eq!(stats.edges, 2);
        assert_eq!(stats.truncated, 1);

        // Depth 2 stops at the same level, so only the spacing differs.
        let mut two_levels = canvas();
        diagram(2).draw(&mut two_levels, Some(&tree));
        assert_eq!(drawn_values(&two_levels), drawn_values(&surface));
        assert_eq!(two_levels.lines().count(), surface.lines().count());
    }

    #[test]
    fn absent_children_are_skipped_independently() {
        let mut tree = Node::new(1);
        tree.add_children(-1, 2);

        let mut surface = canvas();
        let diagram = diagram(4);
        let stats = diagram.draw(&mut surface, Some(&tree));

        assert_eq!(stats.edges, 1);
        let root = diagram.root_anchor(Size::new(700.0, 320.0));
        let lines: Vec<Line> = surface.lines().collect();
        assert_eq!(lines, [Line::new(root, root + Vec2::new(80.0, 60.0))]);
    }

    #[test]
    fn no_root_draws_nothing() {
        let mut surface = canvas();
        let stats = diagram(4).draw(&mut surface, None);
        assert_eq!(stats, DrawStats::default());
        assert!(surface.commands().is_empty());
    }

    #[test]
    fn repeated_passes_are_identical() {
        let tree = Node::sample();
        let diagram = diagram(4);

        let mut first = canvas();
        let mut second = canvas();
        diagram.draw(&mut first, Some(&tree));
        diagram.draw(&mut second, Some(&tree));
        assert_eq!(first.commands(), second.commands());
    }

    #[test]
    fn draw_at_uses_given_anchor_and_spacing() {
        let diagram = TreeDiagram::new(DiagramConfig {
            max_depth: 2,
            level_height: 10.0,
            base_distance: 4.0,
            ..DiagramConfig::default()
        })
        .unwrap();
        let mut tree = Node::new(1);
        tree.add_children(2, 3);

        let mut surface = canvas();
        diagram.draw_at(&mut surface, Point::new(0.0, 0.0), Some(&tree));

        assert_eq!(label_center(&surface, 2), Point::new(-4.0, 10.0));
        assert_eq!(label_center(&surface, 3), Point::new(4.0, 10.0));
        // Root marker is the last circle painted.
        assert_eq!(
            surface.markers().last().map(|c| c.center),
            Some(Point::ORIGIN)
        );
    }
}
