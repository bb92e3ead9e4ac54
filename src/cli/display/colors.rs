//! Color theme for CLI output

use crate::domain::definition::ResourceKind;
use comfy_table::Color as TableColor;

/// Color theme for terminal output
#[derive(Debug, Clone)]
pub struct ColorTheme {
    pub success: TableColor,
    pub error: TableColor,
    pub workload: TableColor,
    pub service: TableColor,
    pub muted: TableColor,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            success: TableColor::Green,
            error: TableColor::Red,
            workload: TableColor::Cyan,
            service: TableColor::Magenta,
            muted: TableColor::DarkGrey,
        }
    }
}

impl ColorTheme {
    pub fn get_kind_color(&self, kind: ResourceKind) -> TableColor {
        match kind {
            ResourceKind::Workload => self.workload,
            ResourceKind::Service => self.service,
        }
    }

    /// Get color for a name lookup result
    pub fn get_presence_color(&self, found: bool) -> TableColor {
        if found {
            self.success
        } else {
            self.error
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = ColorTheme::default();
        assert_eq!(theme.success, TableColor::Green);
        assert_eq!(theme.error, TableColor::Red);
        assert_eq!(theme.muted, TableColor::DarkGrey);
    }

    #[test]
    fn test_kind_and_presence_colors() {
        let theme = ColorTheme::default();
        assert_eq!(theme.get_kind_color(ResourceKind::Workload), TableColor::Cyan);
        assert_eq!(theme.get_kind_color(ResourceKind::Service), TableColor::Magenta);
        assert_eq!(theme.get_presence_color(true), TableColor::Green);
        assert_eq!(theme.get_presence_color(false), TableColor::Red);
    }
}
