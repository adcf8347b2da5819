// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tree_diagram --heading-base-level=0

//! Understory Tree Diagram: a Kurbo-native binary tree renderer.
//!
//! This crate draws a binary tree as nodes (labelled circles) joined by straight edges. The
//! horizontal spread between siblings halves at every level, so a tree of bounded depth always
//! fits in a bounded width and sibling subtrees never overlap.
//!
//! - [`Node`]: integer-labelled node that owns its children. [`Node::add_children`] treats
//!   non-positive values as "no child here".
//! - [`DiagramConfig`]: marker radius, depth limit, level spacing, base distance, colors, and
//!   label font. Validated when a [`TreeDiagram`] is built.
//! - [`TreeDiagram`]: the layout-and-draw engine. [`TreeDiagram::draw`] anchors the root at the
//!   top center of the surface's canvas and paints the whole tree in one depth-first pass.
//! - [`DrawSurface`]: the primitive operations the engine needs (line, circle, text measure,
//!   text). Windowing and rasterization live behind this trait.
//! - [`RecordingSurface`]: a surface that records [`DrawCommand`]s, for tests and for replaying
//!   a pass elsewhere.
//!
//! ## Paint order
//!
//! For each node, edges to its children are drawn before descending, and the children's markers
//! and labels are drawn only after both child subtrees are complete. Every marker is therefore
//! painted after every line that touches it, and every label after its marker, so edges never
//! cover markers or labels.
//!
//! ## Depth limit
//!
//! [`DiagramConfig::max_depth`] counts levels with the root as level 1. Nodes on the last level
//! get their incoming edge, marker, and label, but their own children are never examined; deeper
//! subtrees are dropped without an error (a `trace` event is emitted for each one).
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_tree_diagram::{DiagramConfig, Node, RecordingSurface, TreeDiagram};
//!
//! let mut root = Node::new(1);
//! root.add_children(2, 3);
//!
//! let diagram = TreeDiagram::new(DiagramConfig::default()).unwrap();
//! let mut surface = RecordingSurface::new(Size::new(700.0, 320.0));
//! diagram.draw(&mut surface, Some(&root));
//!
//! // Root at the top center; children 60 units down and 80 units to either side.
//! let centers: Vec<Point> = surface.markers().map(|c| c.center).collect();
//! assert_eq!(
//!     centers,
//!     [Point::new(270.0, 137.0), Point::new(430.0, 137.0), Point::new(350.0, 77.0)]
//! );
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod diagram;
mod error;
mod node;
mod style;
mod surface;

pub use config::{DiagramConfig, MAX_SUPPORTED_DEPTH};
pub use diagram::{DrawStats, TreeDiagram};
pub use error::{DiagramError, Result};
pub use node::Node;
pub use style::{Color, FontSpec, LabelStyle};
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
