// File: crates/chart-core/src/theme.rs
// Summary: Color presets for the chart background and foreground elements.

use crate::types::{rgb, Color};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub axis_line: Color,
    pub peg: Color,
    pub label: Color,
    pub title: Color,
    pub line_stroke: Color,
}

impl Theme {
    /// White on black.
    pub fn classic() -> Self {
        let white = rgb(255, 255, 255);
        Self {
            name: "classic",
            background: rgb(0, 0, 0),
            axis_line: white,
            peg: white,
            label: white,
            title: white,
            line_stroke: white,
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: rgb(250, 250, 252),
            axis_line: rgb(60, 60, 70),
            peg: rgb(100, 100, 110),
            label: rgb(20, 20, 30),
            title: rgb(20, 20, 30),
            line_stroke: rgb(32, 120, 200),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: rgb(0x00, 0x00, 0x00),
            axis_line: rgb(0xff, 0xff, 0xff),
            peg: rgb(0xcc, 0xcc, 0xcc),
            label: rgb(0xff, 0xff, 0xff),
            title: rgb(0xff, 0xff, 0x00),
            line_stroke: rgb(0x00, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::light(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::classic)
}
