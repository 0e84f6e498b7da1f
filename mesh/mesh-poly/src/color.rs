//! Corner color values.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color with `f32` components.
///
/// Components are nominally in `[0.0, 1.0]`. Randomly generated ID colors
/// keep RGB in `[0.0, 1.0)` and fix alpha at `1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CornerColor {
    /// Red component.
    pub r: f32,
    /// Green component.
    pub g: f32,
    /// Blue component.
    pub b: f32,
    /// Alpha component.
    pub a: f32,
}

impl CornerColor {
    /// Create a new color from RGBA components.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_poly::CornerColor;
    ///
    /// let c = CornerColor::new(0.2, 0.4, 0.6, 1.0);
    /// assert_eq!(c.g, 0.4);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_poly::CornerColor;
    ///
    /// let c = CornerColor::opaque(0.2, 0.4, 0.6);
    /// assert_eq!(c.a, 1.0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from 8-bit components.
    ///
    /// Hosts that store byte-encoded color attributes convert through this.
    #[inline]
    #[must_use]
    pub fn from_bytes(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f32::from(r) / 255.0,
            g: f32::from(g) / 255.0,
            b: f32::from(b) / 255.0,
            a: f32::from(a) / 255.0,
        }
    }

    /// Convert to 8-bit components.
    ///
    /// Values are clamped to `[0.0, 1.0]` before conversion.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_poly::CornerColor;
    ///
    /// let c = CornerColor::opaque(1.0, 0.5, 0.0);
    /// assert_eq!(c.to_bytes(), [255, 127, 0, 255]);
    /// ```
    #[inline]
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation and sign loss are safe: values are clamped to [0.0, 1.0] before * 255.0
    pub fn to_bytes(self) -> [u8; 4] {
        [
            (self.r.clamp(0.0, 1.0) * 255.0) as u8,
            (self.g.clamp(0.0, 1.0) * 255.0) as u8,
            (self.b.clamp(0.0, 1.0) * 255.0) as u8,
            (self.a.clamp(0.0, 1.0) * 255.0) as u8,
        ]
    }

    /// Opaque black (0, 0, 0).
    pub const BLACK: Self = Self::opaque(0.0, 0.0, 0.0);

    /// Opaque white (1, 1, 1).
    pub const WHITE: Self = Self::opaque(1.0, 1.0, 1.0);

    /// Opaque red (1, 0, 0).
    pub const RED: Self = Self::opaque(1.0, 0.0, 0.0);

    /// Opaque green (0, 1, 0).
    pub const GREEN: Self = Self::opaque(0.0, 1.0, 0.0);

    /// Opaque blue (0, 0, 1).
    pub const BLUE: Self = Self::opaque(0.0, 0.0, 1.0);
}

impl Default for CornerColor {
    fn default() -> Self {
        Self::WHITE
    }
}
