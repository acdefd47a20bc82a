use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod glyphs;
pub mod nord;
pub mod palette;

pub use palette::{tint, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub card_border: Style,
    pub card_border_selected: Style,
    pub card_heading: Style,
    pub card_subheading: Style,
    pub card_label: Style,
    pub card_value: Style,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub header_logo: Style,
    pub header_user: Style,
    pub header_active: Style,
    pub header_item: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub footer: Style,

    pub highlight: Style,
    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
    pub input_focus: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
        }
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.outline),
            border_focus: Style::default().fg(p.accent),

            card_border: Style::default().fg(p.faint),
            card_border_selected: Style::default().fg(p.selection).add_modifier(Modifier::BOLD),
            card_heading: Style::default().fg(p.heading).add_modifier(Modifier::BOLD),
            card_subheading: Style::default().fg(p.subheading),
            card_label: Style::default().fg(p.muted).add_modifier(Modifier::DIM),
            card_value: Style::default().fg(p.text),

            status_ready: Style::default()
                .bg(p.ok)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_info: Style::default()
                .bg(p.accent)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_warn: Style::default()
                .bg(p.warn)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            status_error: Style::default()
                .bg(p.danger)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),

            header_logo: Style::default()
                .bg(p.accent)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_user: Style::default()
                .bg(p.selection)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_active: Style::default()
                .bg(p.ok)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            header_item: Style::default().bg(p.surface).fg(p.text),
            header: Style::default().bg(p.base).fg(p.text),

            footer_segment_key: Style::default()
                .bg(p.surface)
                .fg(p.accent)
                .add_modifier(Modifier::BOLD),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer_group_name: Style::default().fg(p.muted).add_modifier(Modifier::DIM),
            footer: Style::default().bg(p.crust).fg(p.muted),

            highlight: Style::default().bg(p.surface).add_modifier(Modifier::BOLD),
            list_selected: Style::default()
                .bg(p.accent)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.faint).add_modifier(Modifier::DIM),
            input_focus: Style::default().bg(tint(p.accent, 0.25)).fg(p.text),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        theme: PaletteType,
    }

    #[test]
    fn test_palette_names_in_config() {
        let parsed: Wrapper = toml::from_str("theme = \"catppuccin-mocha\"").unwrap();
        assert_eq!(parsed.theme, PaletteType::CatppuccinMocha);
        assert_ne!(
            Theme::from_palette_type(PaletteType::Nord),
            Theme::from_palette_type(PaletteType::CatppuccinMocha)
        );
    }
}
