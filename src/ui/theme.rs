use ratatui::style::Color;

use crate::cli::ThemeArg;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCapability {
    TrueColor,
    Basic16,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub surface: Color,
    pub popup_surface: Color,
    pub accent: Color,
    pub text: Color,
    pub muted_text: Color,
    pub popup_text: Color,
    pub border: Color,
    pub popup_border: Color,
    pub success: Color,
    pub warning: Color,
    pub danger: Color,
    pub threshold: Color,
    /// One color per compared location, in selection order.
    pub series: [Color; 2],
}

impl Theme {
    pub fn series_color(&self, idx: usize) -> Color {
        self.series[idx % self.series.len()]
    }
}

pub fn detect_color_capability() -> ColorCapability {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorCapability::Basic16;
    }
    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") {
        ColorCapability::TrueColor
    } else {
        ColorCapability::Basic16
    }
}

pub fn theme_for(mode: ThemeArg, capability: ColorCapability) -> Theme {
    match (mode, capability) {
        (ThemeArg::Light, ColorCapability::TrueColor) => Theme {
            surface: Color::Rgb(248, 249, 250),
            popup_surface: Color::Rgb(232, 236, 242),
            accent: Color::Rgb(49, 120, 198),
            text: Color::Rgb(33, 37, 41),
            muted_text: Color::Rgb(108, 117, 125),
            popup_text: Color::Rgb(33, 37, 41),
            border: Color::Rgb(173, 181, 189),
            popup_border: Color::Rgb(49, 120, 198),
            success: Color::Rgb(25, 135, 84),
            warning: Color::Rgb(204, 138, 0),
            danger: Color::Rgb(200, 35, 51),
            threshold: Color::Rgb(220, 53, 69),
            series: [Color::Rgb(75, 192, 192), Color::Rgb(255, 99, 132)],
        },
        (ThemeArg::Dark, ColorCapability::TrueColor) => Theme {
            surface: Color::Rgb(33, 37, 41),
            popup_surface: Color::Rgb(52, 58, 64),
            accent: Color::Rgb(109, 203, 250),
            text: Color::Rgb(233, 236, 239),
            muted_text: Color::Rgb(173, 181, 189),
            popup_text: Color::Rgb(248, 249, 250),
            border: Color::Rgb(73, 80, 87),
            popup_border: Color::Rgb(255, 210, 0),
            success: Color::Rgb(117, 183, 152),
            warning: Color::Rgb(255, 218, 106),
            danger: Color::Rgb(234, 134, 143),
            threshold: Color::Rgb(255, 159, 64),
            series: [Color::Rgb(102, 232, 242), Color::Rgb(255, 121, 198)],
        },
        (ThemeArg::Light, ColorCapability::Basic16) => Theme {
            surface: Color::White,
            popup_surface: Color::Gray,
            accent: Color::Blue,
            text: Color::Black,
            muted_text: Color::DarkGray,
            popup_text: Color::Black,
            border: Color::DarkGray,
            popup_border: Color::Blue,
            success: Color::Green,
            warning: Color::Yellow,
            danger: Color::Red,
            threshold: Color::Red,
            series: [Color::Cyan, Color::Magenta],
        },
        (ThemeArg::Dark, ColorCapability::Basic16) => Theme {
            surface: Color::Black,
            popup_surface: Color::DarkGray,
            accent: Color::LightCyan,
            text: Color::White,
            muted_text: Color::Gray,
            popup_text: Color::White,
            border: Color::Gray,
            popup_border: Color::Yellow,
            success: Color::LightGreen,
            warning: Color::Yellow,
            danger: Color::LightRed,
            threshold: Color::LightRed,
            series: [Color::LightCyan, Color::LightMagenta],
        },
    }
}
