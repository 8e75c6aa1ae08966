use super::Color;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Length {
    Px(i16),
    Rem(f32),
}

impl Length {
    pub fn to_css(&self) -> String {
        match self {
            Self::Px(v) => format!("{v}px"),
            Self::Rem(v) => format!("{v}rem"),
        }
    }
}

/// A single border side, e.g. `border-left: 3px solid #ff6b6b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Border {
    pub width: u16,
    pub color: Color,
}

impl Border {
    pub fn solid(width: u16, color: Color) -> Self {
        Self { width, color }
    }

    pub fn to_css(&self) -> String {
        format!("{}px solid {}", self.width, self.color.to_css())
    }
}

/// `box-shadow: <x> <y> <blur> <spread> <color>`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    pub x: i16,
    pub y: i16,
    pub blur: u16,
    pub spread: i16,
    pub color: Color,
}

impl BoxShadow {
    /// A ring around the box: no offset, no blur.
    pub fn ring(spread: i16, color: Color) -> Self {
        Self {
            x: 0,
            y: 0,
            blur: 0,
            spread,
            color,
        }
    }

    pub fn to_css(&self) -> String {
        let px = |v: i64| if v == 0 { "0".to_string() } else { format!("{v}px") };
        format!(
            "{} {} {} {} {}",
            px(self.x.into()),
            px(self.y.into()),
            px(self.blur.into()),
            px(self.spread.into()),
            self.color.to_css()
        )
    }
}
