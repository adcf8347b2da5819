// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacing, depth, and style knobs for a tree diagram.

use crate::error::{DiagramError, Result};
use crate::style::{Color, LabelStyle};

/// Largest accepted [`DiagramConfig::max_depth`].
///
/// The root's horizontal spread is `2^(max_depth - 1)` base units, so the
/// exponent has to fit in a `u64` shift.
pub const MAX_SUPPORTED_DEPTH: u32 = 64;

/// Layout and style configuration for [`TreeDiagram`](crate::TreeDiagram).
///
/// The defaults reproduce the classic twelve-sample rendering: 12 unit
/// markers, four levels 60 units apart, and a 20 unit base distance.
#[derive(Clone, Debug, PartialEq)]
pub struct DiagramConfig {
    /// Radius of each node marker.
    pub marker_radius: f64,
    /// Number of levels drawn, counting the root as level 1.
    ///
    /// Every drawn node always gets edges, markers, and labels for its
    /// existing children; only descent past them is limited. Nodes deeper
    /// than `max_depth` levels are therefore never drawn, with one exception:
    /// at `max_depth == 1` the root still draws its immediate children, so
    /// depths 1 and 2 produce the same picture.
    pub max_depth: u32,
    /// Vertical distance between a parent and its children.
    pub level_height: f64,
    /// Horizontal unit; the root's children sit `2^(max_depth - 1) * base_distance / 2` away.
    pub base_distance: f64,
    /// Gap between the top of the canvas and the top of the root marker.
    pub top_margin: f64,
    /// Color of edges.
    pub line_color: Color,
    /// Fill color of markers.
    pub marker_color: Color,
    /// Label color and font.
    pub label: LabelStyle,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self {
            marker_radius: 12.0,
            max_depth: 4,
            level_height: 60.0,
            base_distance: 20.0,
            top_margin: 65.0,
            line_color: Color::WHITE,
            marker_color: Color::RED,
            label: LabelStyle::default(),
        }
    }
}

impl DiagramConfig {
    /// Check every value the layout depends on.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(DiagramError::ZeroMaxDepth);
        }
        if self.max_depth > MAX_SUPPORTED_DEPTH {
            return Err(DiagramError::MaxDepthTooLarge {
                max_depth: self.max_depth,
                limit: MAX_SUPPORTED_DEPTH,
            });
        }
        for (field, value) in [
            ("marker_radius", self.marker_radius),
            ("level_height", self.level_height),
            ("base_distance", self.base_distance),
            ("top_margin", self.top_margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(DiagramError::InvalidSpacing { field, value });
            }
        }
        let size = self.label.font.size;
        if !size.is_finite() || size <= 0.0 {
            return Err(DiagramError::InvalidFontSize(size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(DiagramConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_and_oversized_depth() {
        let zero = DiagramConfig {
            max_depth: 0,
            ..DiagramConfig::default()
        };
        assert_eq!(zero.validate(), Err(DiagramError::ZeroMaxDepth));

        let huge = DiagramConfig {
            max_depth: MAX_SUPPORTED_DEPTH + 1,
            ..DiagramConfig::default()
        };
        assert!(
            matches!(huge.validate(), Err(DiagramError::MaxDepthTooLarge { .. })),
            "depth above the limit must be rejected"
        );
    }

    #[test]
    fn rejects_bad_spacing_and_font() {
        let negative = DiagramConfig {
            level_height: -1.0,
            ..DiagramConfig::default()
        };
        assert_eq!(
            negative.validate(),
            Err(DiagramError::InvalidSpacing {
                field: "level_height",
                value: -1.0,
            })
        );

        let nan = DiagramConfig {
            base_distance: f64::NAN,
            ..DiagramConfig::default()
        };
        assert!(
            matches!(
                nan.validate(),
                Err(DiagramError::InvalidSpacing {
                    field: "base_distance",
                    ..
                })
            ),
            "NaN spacing must be rejected"
        );

        let mut tiny_font = DiagramConfig::default();
        tiny_font.label.font.size = 0.0;
        assert_eq!(tiny_font.validate(), Err(DiagramError::InvalidFontSize(0.0)));
    }
}
