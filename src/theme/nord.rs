use super::palette::Palette;
use ratatui::style::Color;

// Polar Night for surfaces, Snow Storm for text, Frost and Aurora for roles.
pub const NORD: Palette = Palette {
    base: Color::Rgb(46, 52, 64),
    crust: Color::Rgb(36, 41, 51),
    surface: Color::Rgb(59, 66, 82),
    outline: Color::Rgb(76, 86, 106),
    text: Color::Rgb(236, 239, 244),
    muted: Color::Rgb(216, 222, 233),
    faint: Color::Rgb(97, 110, 136),

    accent: Color::Rgb(136, 192, 208),
    selection: Color::Rgb(180, 142, 173),
    heading: Color::Rgb(143, 188, 187),
    subheading: Color::Rgb(208, 135, 112),

    ok: Color::Rgb(163, 190, 140),
    warn: Color::Rgb(235, 203, 139),
    danger: Color::Rgb(191, 97, 106),
};
