//! Color theme for CLI output

use comfy_table::Color as TableColor;

#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub error: TableColor,
    pub info: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            error: TableColor::Red,
            info: TableColor::Cyan,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    /// Get color based on whether a template file is present
    pub fn get_template_color(&self, found: bool) -> TableColor {
        if found {
            self.success
        } else {
            self.error
        }
    }
}
