use super::{Border, BoxShadow, Color, Edges, Length};

/// Inline style of an element.
///
/// Unset properties fall back to the page stylesheet, so "resetting" a
/// property means setting it back to `None`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub color: Option<Color>,
    pub background: Option<Color>,
    pub font_size: Option<Length>,
    pub margin_top: Option<Length>,
    pub padding: Option<Edges>,
    pub border_radius: Option<Length>,
    pub border_color: Option<Color>,
    pub border_left: Option<Border>,
    pub box_shadow: Option<BoxShadow>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    pub fn font_size(mut self, size: Length) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn margin_top(mut self, margin: Length) -> Self {
        self.margin_top = Some(margin);
        self
    }

    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn border_radius(mut self, radius: Length) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn border_left(mut self, border: Border) -> Self {
        self.border_left = Some(border);
        self
    }

    pub fn box_shadow(mut self, shadow: BoxShadow) -> Self {
        self.box_shadow = Some(shadow);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Render as the value of a `style` attribute.
    pub fn to_css(&self) -> String {
        let mut decls: Vec<String> = Vec::new();

        if let Some(color) = &self.color {
            decls.push(format!("color: {}", color.to_css()));
        }
        if let Some(size) = &self.font_size {
            decls.push(format!("font-size: {}", size.to_css()));
        }
        if let Some(margin) = &self.margin_top {
            decls.push(format!("margin-top: {}", margin.to_css()));
        }
        if let Some(padding) = &self.padding {
            decls.push(format!("padding: {}", padding.to_css()));
        }
        if let Some(background) = &self.background {
            decls.push(format!("background: {}", background.to_css()));
        }
        if let Some(radius) = &self.border_radius {
            decls.push(format!("border-radius: {}", radius.to_css()));
        }
        if let Some(border) = &self.border_left {
            decls.push(format!("border-left: {}", border.to_css()));
        }
        if let Some(color) = &self.border_color {
            decls.push(format!("border-color: {}", color.to_css()));
        }
        if let Some(shadow) = &self.box_shadow {
            decls.push(format!("box-shadow: {}", shadow.to_css()));
        }

        decls.join("; ")
    }
}
