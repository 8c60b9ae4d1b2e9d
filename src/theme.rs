use iced::widget::{button, container};
use iced::{Background, Border, Color};

use crate::activity::Rgb;

/// Which color set the planner uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    /// Warm pastel paper look.
    Light,
    Dark,
}

impl ThemeMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }
}

/// All colors used by the planner window, derived from the active theme.
pub struct ThemeColors {
    pub is_dark: bool,
    // Window and panels
    pub app_bg: Color,
    pub panel_bg: Color,
    pub text: Color,
    pub accent: Color,
    pub input_bg: Color,
    pub list_text: Color,
    pub selected: Color,
    // Buttons
    pub btn_add: Color,
    pub btn_delete: Color,
    pub btn_reset: Color,
    pub btn_text: Color,
    // Clock face
    pub clock_face: Color,
    pub clock_ring: Color,
    pub tick: Color,
    pub minute_label: Color,
    pub arc_label: Color,
    pub hand: Color,
    pub second_hand: Color,
    pub center_dot: Color,
    // Dialogs
    pub modal_bg: Color,
    pub backdrop: Color,
    pub error: Color,
    /// Cycled through as activities are added.
    pub palette: [Rgb; 6],
}

fn hex(r: u8, g: u8, b: u8) -> Color {
    Color::from_rgb8(r, g, b)
}

impl ThemeColors {
    pub fn light() -> Self {
        Self {
            is_dark: false,
            app_bg: hex(0xFD, 0xFC, 0xF0),
            panel_bg: hex(0xFF, 0xF8, 0xE7),
            text: hex(0x5D, 0x5C, 0x61),
            accent: hex(0xB2, 0xAB, 0x8C),
            input_bg: Color::WHITE,
            list_text: hex(0x55, 0x55, 0x55),
            selected: hex(0xEE, 0xE6, 0xCF),
            btn_add: hex(0xD4, 0xE2, 0xD4),
            btn_delete: hex(0xFF, 0xC6, 0xC6),
            btn_reset: hex(0xE0, 0xBB, 0xE4),
            btn_text: hex(0x44, 0x44, 0x44),
            clock_face: Color::WHITE,
            clock_ring: hex(0x55, 0x55, 0x55),
            tick: hex(0x33, 0x33, 0x33),
            minute_label: hex(0x99, 0x99, 0x99),
            arc_label: hex(0x44, 0x44, 0x44),
            hand: hex(0x4A, 0x4A, 0x4A),
            second_hand: hex(0xD9, 0x6C, 0x6C),
            center_dot: hex(0xD4, 0xAF, 0x37),
            modal_bg: hex(0xFF, 0xF8, 0xE7),
            backdrop: Color {
                r: 0.2,
                g: 0.2,
                b: 0.2,
                a: 0.35,
            },
            error: hex(0xC0, 0x39, 0x2B),
            palette: [
                Rgb::new(0xFF, 0xDA, 0xC1),
                Rgb::new(0xE2, 0xF0, 0xCB),
                Rgb::new(0xB5, 0xEA, 0xD7),
                Rgb::new(0xC7, 0xCE, 0xEA),
                Rgb::new(0xFF, 0xB7, 0xB2),
                Rgb::new(0xE0, 0xBB, 0xE4),
            ],
        }
    }

    pub fn dark() -> Self {
        Self {
            is_dark: true,
            app_bg: hex(0x1E, 0x1D, 0x22),
            panel_bg: hex(0x28, 0x27, 0x2D),
            text: hex(0xE6, 0xE2, 0xD6),
            accent: hex(0x8C, 0x86, 0x6A),
            input_bg: hex(0x35, 0x34, 0x3B),
            list_text: hex(0xD0, 0xCC, 0xC0),
            selected: hex(0x44, 0x42, 0x4C),
            btn_add: hex(0x4E, 0x6B, 0x4E),
            btn_delete: hex(0x8A, 0x4B, 0x4B),
            btn_reset: hex(0x6E, 0x4E, 0x74),
            btn_text: hex(0xF0, 0xF0, 0xF0),
            clock_face: hex(0x2E, 0x2D, 0x33),
            clock_ring: hex(0xAA, 0xAA, 0xAA),
            tick: hex(0xCC, 0xCC, 0xCC),
            minute_label: hex(0x88, 0x88, 0x88),
            arc_label: hex(0xF4, 0xF4, 0xF4),
            hand: hex(0xE0, 0xE0, 0xE0),
            second_hand: hex(0xE8, 0x7A, 0x7A),
            center_dot: hex(0xD4, 0xAF, 0x37),
            modal_bg: hex(0x28, 0x27, 0x2D),
            backdrop: Color {
                r: 0.0,
                g: 0.0,
                b: 0.0,
                a: 0.55,
            },
            error: hex(0xE5, 0x73, 0x73),
            palette: [
                Rgb::new(0xC9, 0x82, 0x5F),
                Rgb::new(0x8F, 0xA8, 0x67),
                Rgb::new(0x5F, 0xA8, 0x8C),
                Rgb::new(0x74, 0x80, 0xB8),
                Rgb::new(0xC2, 0x64, 0x5E),
                Rgb::new(0x9A, 0x6F, 0xA0),
            ],
        }
    }

    pub fn app_style(&self) -> impl Fn(&iced::Theme) -> container::Style {
        let color = self.app_bg;
        move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        }
    }

    pub fn panel_style(&self) -> impl Fn(&iced::Theme) -> container::Style {
        let color = self.panel_bg;
        move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        }
    }

    pub fn list_style(&self) -> impl Fn(&iced::Theme) -> container::Style {
        let color = self.input_bg;
        move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        }
    }

    pub fn selected_style(&self) -> impl Fn(&iced::Theme) -> container::Style {
        let color = self.selected;
        move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        }
    }

    pub fn modal_style(&self) -> impl Fn(&iced::Theme) -> container::Style {
        let color = self.modal_bg;
        let border = self.accent;
        move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                color: border,
                width: 1.0,
                radius: 6.0.into(),
            },
            ..Default::default()
        }
    }

    pub fn backdrop_style(&self) -> impl Fn(&iced::Theme) -> container::Style {
        let color = self.backdrop;
        move |_theme: &iced::Theme| container::Style {
            background: Some(Background::Color(color)),
            ..Default::default()
        }
    }

    /// Flat button filled with `fill`, slightly dimmed while hovered.
    pub fn button_style(
        &self,
        fill: Color,
    ) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
        let text_color = self.btn_text;
        move |_theme: &iced::Theme, status: button::Status| {
            let background = match status {
                button::Status::Hovered | button::Status::Pressed => Color {
                    a: 0.8,
                    ..fill
                },
                _ => fill,
            };
            button::Style {
                background: Some(Background::Color(background)),
                text_color,
                border: Border {
                    radius: 3.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            }
        }
    }

    /// Borderless button for list rows; the row container supplies color.
    pub fn row_button_style(&self) -> impl Fn(&iced::Theme, button::Status) -> button::Style {
        let text_color = self.list_text;
        let hover = self.selected;
        move |_theme: &iced::Theme, status: button::Status| button::Style {
            background: match status {
                button::Status::Hovered => Some(Background::Color(Color { a: 0.5, ..hover })),
                _ => None,
            },
            text_color,
            ..Default::default()
        }
    }
}

/// Resolve the ThemeColors for a given mode.
pub fn resolve(mode: ThemeMode) -> ThemeColors {
    match mode {
        ThemeMode::Light => ThemeColors::light(),
        ThemeMode::Dark => ThemeColors::dark(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_mode_is_case_insensitive() {
        assert_eq!(ThemeMode::parse(" Dark "), Some(ThemeMode::Dark));
        assert_eq!(ThemeMode::parse("LIGHT"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::parse("auto"), None);
    }

    #[test]
    fn light_palette_matches_plan_colors() {
        let palette: Vec<String> = ThemeColors::light()
            .palette
            .iter()
            .map(|c| c.to_string())
            .collect();
        assert_eq!(
            palette,
            ["#FFDAC1", "#E2F0CB", "#B5EAD7", "#C7CEEA", "#FFB7B2", "#E0BBE4"]
        );
    }

    #[test]
    fn resolve_picks_variant() {
        assert!(resolve(ThemeMode::Dark).is_dark);
        assert!(!resolve(ThemeMode::Light).is_dark);
    }
}
