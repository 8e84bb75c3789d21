use crossterm::style::Color;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    /// Board border color
    pub border: Color,
    /// Tree tile color
    pub tree: Color,
    /// Grass tile color
    pub grass: Color,
    /// Unset cell color (shown when generation ran out of attempts)
    pub unset: Color,
    /// Status/info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
    /// Successful generation color
    pub success: Color,
    /// Failed generation color
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            border: Color::Rgb { r: 70, g: 75, b: 90 },
            tree: Color::Rgb { r: 64, g: 160, b: 96 },
            grass: Color::Rgb { r: 168, g: 208, b: 80 },
            unset: Color::Rgb { r: 90, g: 95, b: 110 },
            info: Color::Rgb { r: 180, g: 190, b: 210 },
            key: Color::Rgb { r: 255, g: 200, b: 100 },
            success: Color::Rgb { r: 100, g: 220, b: 130 },
            error: Color::Rgb { r: 255, g: 100, b: 100 },
        }
    }
}
