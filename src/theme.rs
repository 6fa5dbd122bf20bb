//! Static color tables: type palettes and stat severity

use ratatui::style::Color;

use crate::detail::Severity;

pub const BG_BASE: Color = Color::Rgb(12, 18, 28);
pub const BG_PANEL: Color = Color::Rgb(20, 32, 46);
pub const BG_HIGHLIGHT: Color = Color::Rgb(28, 92, 110);
pub const TEXT_MAIN: Color = Color::Rgb(232, 242, 244);
pub const TEXT_DIM: Color = Color::Rgb(176, 195, 207);
pub const ACCENT_TEAL: Color = Color::Rgb(72, 204, 184);
pub const ACCENT_GOLD: Color = Color::Rgb(228, 176, 88);
pub const ERROR_RED: Color = Color::Rgb(226, 88, 88);

/// Gradient pair for one type badge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TypePalette {
    pub base: Color,
    pub accent: Color,
}

const NEUTRAL: TypePalette = TypePalette {
    base: Color::Rgb(104, 112, 120),
    accent: Color::Rgb(150, 158, 166),
};

pub fn type_palette(name: &str) -> TypePalette {
    let (base, accent) = match name {
        "normal" => ((168, 167, 122), (198, 198, 167)),
        "fire" => ((238, 129, 48), (245, 172, 120)),
        "water" => ((99, 144, 240), (157, 183, 245)),
        "electric" => ((247, 208, 44), (250, 224, 120)),
        "grass" => ((122, 199, 76), (167, 219, 141)),
        "ice" => ((150, 217, 214), (188, 230, 230)),
        "fighting" => ((194, 46, 40), (214, 120, 115)),
        "poison" => ((163, 62, 161), (195, 122, 194)),
        "ground" => ((226, 191, 101), (235, 214, 157)),
        "flying" => ((169, 143, 243), (198, 183, 245)),
        "psychic" => ((249, 85, 135), (250, 146, 178)),
        "bug" => ((166, 185, 26), (198, 209, 110)),
        "rock" => ((182, 161, 54), (209, 193, 125)),
        "ghost" => ((115, 87, 151), (162, 146, 188)),
        "dragon" => ((111, 53, 252), (162, 125, 250)),
        "dark" => ((112, 87, 70), (162, 146, 136)),
        "steel" => ((183, 183, 206), (209, 209, 224)),
        "fairy" => ((214, 133, 173), (244, 189, 201)),
        _ => return NEUTRAL,
    };
    TypePalette {
        base: rgb(base),
        accent: rgb(accent),
    }
}

pub fn severity_color(severity: Severity) -> Color {
    match severity {
        Severity::Low => Color::Rgb(243, 68, 68),
        Severity::Fair => Color::Rgb(255, 127, 15),
        Severity::Good => Color::Rgb(255, 221, 87),
        Severity::Great => Color::Rgb(160, 229, 21),
        Severity::Excellent => Color::Rgb(35, 205, 94),
    }
}

/// Scale a color toward the panel background by `opacity` in `0.0..=1.0`
pub fn fade(color: Color, opacity: f32) -> Color {
    let opacity = opacity.clamp(0.0, 1.0);
    match (color, BG_PANEL) {
        (Color::Rgb(r, g, b), Color::Rgb(br, bg, bb)) => Color::Rgb(
            mix(br, r, opacity),
            mix(bg, g, opacity),
            mix(bb, b, opacity),
        ),
        (other, _) => other,
    }
}

fn mix(from: u8, to: u8, t: f32) -> u8 {
    let value = from as f32 + (to as f32 - from as f32) * t;
    value.round().clamp(0.0, 255.0) as u8
}

fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}
