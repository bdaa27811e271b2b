pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Fractional RGBA color with components in `[0, 1]`.
///
/// This is the working representation for theme colors and for the per-pixel
/// tint-blend math, which operates componentwise on fractional values.
/// Intermediate blend results may leave `[0, 1]`; conversion back to bytes
/// rounds and clamps.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
    /// Alpha component.
    #[serde(default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Convert from straight-alpha byte components.
    pub fn from_bytes(px: [u8; 4]) -> Self {
        Self {
            r: f64::from(px[0]) / 255.0,
            g: f64::from(px[1]) / 255.0,
            b: f64::from(px[2]) / 255.0,
            a: f64::from(px[3]) / 255.0,
        }
    }

    /// Convert to straight-alpha bytes, rounding and clamping each component.
    pub fn to_bytes(self) -> [u8; 4] {
        fn byte(v: f64) -> u8 {
            (v * 255.0).round().clamp(0.0, 255.0) as u8
        }
        [byte(self.r), byte(self.g), byte(self.b), byte(self.a)]
    }
}

impl std::ops::Add for Rgba {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.r + rhs.r,
            self.g + rhs.g,
            self.b + rhs.b,
            self.a + rhs.a,
        )
    }
}

impl std::ops::Sub for Rgba {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(
            self.r - rhs.r,
            self.g - rhs.g,
            self.b - rhs.b,
            self.a - rhs.a,
        )
    }
}

impl std::ops::Mul for Rgba {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.r * rhs.r,
            self.g * rhs.g,
            self.b * rhs.b,
            self.a * rhs.a,
        )
    }
}

impl std::ops::Mul<f64> for Rgba {
    type Output = Self;

    fn mul(self, k: f64) -> Self {
        Self::new(self.r * k, self.g * k, self.b * k, self.a * k)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
