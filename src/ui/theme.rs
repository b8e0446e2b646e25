use ratatui::style::Color;

pub const FLAME_ORANGE: Color = Color::Rgb(0xf9, 0x73, 0x16);
pub const FLAME_GOLD: Color = Color::Rgb(0xfb, 0xbf, 0x24);
pub const FLAME_RED: Color = Color::Rgb(0xdc, 0x26, 0x26);
pub const EMBER_DIM: Color = Color::Rgb(0x7c, 0x2d, 0x12);
pub const ICE_BLUE: Color = Color::Rgb(0x7d, 0xd3, 0xfc);
pub const DEEP_BLUE: Color = Color::Rgb(0x1e, 0x3a, 0x8a);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const MUTED_TEXT: Color = Color::Rgb(0x9c, 0xa3, 0xaf);
pub const CONFETTI: [Color; 5] = [FLAME_ORANGE, FLAME_GOLD, FLAME_RED, ICE_BLUE, HEADER_TEXT];

/// Linear blend between two RGB colours. Non-RGB input returns `from`.
pub fn blend(from: Color, to: Color, t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    match (from, to) {
        (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => {
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
            Color::Rgb(mix(r1, r2), mix(g1, g2), mix(b1, b2))
        }
        _ => from,
    }
}
