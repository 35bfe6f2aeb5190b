//! RGB color type for prototypes and shape instances.

use serde::{Deserialize, Serialize};

/// An RGB color triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Pure red, the default "Tiny Red" prototype color.
    pub const RED: Color = Color::rgb(255, 0, 0);
    /// Dodger blue, the default "Blue Burst" prototype color.
    pub const DODGER_BLUE: Color = Color::rgb(30, 144, 255);
    /// Pale mint green, the default "Mint Medium" prototype color.
    pub const MINT: Color = Color::rgb(152, 251, 152);
    /// Neutral gray, used as the editor draft default.
    pub const GRAY: Color = Color::rgb(128, 128, 128);

    /// Creates a color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_display() {
        assert_eq!(Color::RED.to_string(), "#FF0000");
        assert_eq!(Color::DODGER_BLUE.to_string(), "#1E90FF");
    }
}
