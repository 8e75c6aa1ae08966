/// Box edges in CSS pixels (padding, margin).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Edges {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Edges {
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same vertical (top/bottom) and horizontal (left/right) values.
    pub const fn symmetric(vertical: u16, horizontal: u16) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Shortest CSS shorthand for these edges.
    pub fn to_css(&self) -> String {
        let Self {
            top,
            right,
            bottom,
            left,
        } = *self;

        if top == right && right == bottom && bottom == left {
            format!("{top}px")
        } else if top == bottom && left == right {
            format!("{top}px {right}px")
        } else {
            format!("{top}px {right}px {bottom}px {left}px")
        }
    }
}
