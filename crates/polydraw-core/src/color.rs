use serde::{Deserialize, Serialize};

/// RGBA color with components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

/// The stroke colors, in cycle order.
pub const PALETTE: [Color; 4] = [Color::BLACK, Color::RED, Color::GREEN, Color::BLUE];

/// Position in [`PALETTE`]; advancing wraps back to black.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorCycle {
    index: usize,
}

impl ColorCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Color {
        PALETTE[self.index]
    }

    /// Step to the next palette entry and return it.
    pub fn advance(&mut self) -> Color {
        self.index = (self.index + 1) % PALETTE.len();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        let mut cycle = ColorCycle::new();
        assert_eq!(cycle.current(), Color::BLACK);
        assert_eq!(cycle.advance(), Color::RED);
        assert_eq!(cycle.advance(), Color::GREEN);
        assert_eq!(cycle.advance(), Color::BLUE);
    }

    #[test]
    fn test_cycle_wraps_after_four() {
        let mut cycle = ColorCycle::new();
        for _ in 0..4 {
            cycle.advance();
        }
        assert_eq!(cycle.index(), 0);
        cycle.advance();
        assert_eq!(cycle.index(), 1);
    }
}
