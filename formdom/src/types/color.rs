use std::fmt;

use crate::error::DomError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self::Rgba { r, g, b, a }
    }

    /// Parse a `#rrggbb` / `#rgb` hex color.
    pub fn hex(input: &str) -> Result<Self, DomError> {
        use palette::Srgb;

        let srgb: Srgb<u8> = input
            .trim()
            .parse()
            .map_err(|_| DomError::InvalidColor(input.to_string()))?;
        let (r, g, b) = srgb.into_components();

        Ok(Self::Rgb { r, g, b })
    }

    /// Same color with the given alpha channel.
    pub fn alpha(self, a: f32) -> Self {
        let Rgb { r, g, b } = self.to_rgb();
        Self::Rgba {
            r,
            g,
            b,
            a: a.clamp(0.0, 1.0),
        }
    }

    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Self::Rgb { r, g, b } | Self::Rgba { r, g, b, .. } => Rgb::new(r, g, b),
        }
    }

    /// CSS notation: `#rrggbb` when opaque, `rgba(...)` otherwise.
    pub fn to_css(&self) -> String {
        match *self {
            Self::Rgb { r, g, b } => format!("#{r:02x}{g:02x}{b:02x}"),
            Self::Rgba { r, g, b, a } => format!("rgba({r}, {g}, {b}, {a})"),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}
