// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors reported when building a [`TreeDiagram`](crate::TreeDiagram).

/// Reasons a [`DiagramConfig`](crate::DiagramConfig) is rejected.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum DiagramError {
    /// The maximum depth must allow at least the root level.
    #[error("maximum depth must be at least 1")]
    ZeroMaxDepth,
    /// The horizontal spread is a power of two of the depth and would overflow.
    #[error("maximum depth {max_depth} exceeds the supported limit of {limit}")]
    MaxDepthTooLarge {
        /// The requested depth.
        max_depth: u32,
        /// The largest accepted depth.
        limit: u32,
    },
    /// A spacing value is negative, NaN, or infinite.
    #[error("`{field}` must be finite and non-negative, got {value}")]
    InvalidSpacing {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// The label font size is not a finite positive number.
    #[error("label font size must be finite and positive, got {0}")]
    InvalidFontSize(f64),
}

/// Result alias for fallible diagram construction.
pub type Result<T, E = DiagramError> = core::result::Result<T, E>;
