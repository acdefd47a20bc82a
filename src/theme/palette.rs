use ratatui::style::Color;

/// The colour roles the marketplace theme is built from.
pub struct Palette {
    pub base: Color,
    pub crust: Color,
    pub surface: Color,
    pub outline: Color,
    pub text: Color,
    pub muted: Color,
    pub faint: Color,

    pub accent: Color,
    pub selection: Color,
    pub heading: Color,
    pub subheading: Color,

    pub ok: Color,
    pub warn: Color,
    pub danger: Color,
}

/// Darkens an `Rgb` colour toward black by `factor` (1.0 keeps it as is).
/// Named colours pass through unchanged.
#[must_use]
pub fn tint(c: Color, factor: f32) -> Color {
    let factor = factor.clamp(0.0, 1.0);
    match c {
        Color::Rgb(r, g, b) => Color::Rgb(
            (f32::from(r) * factor) as u8,
            (f32::from(g) * factor) as u8,
            (f32::from(b) * factor) as u8,
        ),
        other => other,
    }
}
