// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Colors and text styling handed to a [`DrawSurface`](crate::DrawSurface).

use alloc::string::String;

/// An 8-bit RGBA color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 255 is opaque.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb8(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb8(0, 0, 0);
    /// Opaque red.
    pub const RED: Self = Self::rgb8(255, 0, 0);

    /// An opaque color.
    pub const fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// A color with explicit alpha.
    pub const fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

/// Font family and size used for node labels.
#[derive(Clone, Debug, PartialEq)]
pub struct FontSpec {
    /// Family name, resolved by the surface.
    pub family: String,
    /// Size in surface units.
    pub size: f64,
}

impl FontSpec {
    /// Create a font description.
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new("Arial", 15.0)
    }
}

/// Color and font of a label.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelStyle {
    /// Text color.
    pub color: Color,
    /// Text font.
    pub font: FontSpec,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            color: Color::WHITE,
            font: FontSpec::default(),
        }
    }
}
