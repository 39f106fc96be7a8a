use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub const DEFAULT_COLOR: &str = "white";

/// Colors offered by the picker, in display order.
pub const PALETTE: [(&str, Color); 12] = [
    ("white", Color::Rgb(255, 255, 255)),
    ("red", Color::Rgb(242, 139, 130)),
    ("orange", Color::Rgb(251, 188, 4)),
    ("yellow", Color::Rgb(255, 244, 117)),
    ("green", Color::Rgb(204, 255, 144)),
    ("teal", Color::Rgb(167, 255, 235)),
    ("blue", Color::Rgb(203, 240, 248)),
    ("darkblue", Color::Rgb(174, 203, 250)),
    ("purple", Color::Rgb(215, 174, 251)),
    ("pink", Color::Rgb(253, 207, 232)),
    ("brown", Color::Rgb(230, 201, 168)),
    ("gray", Color::Rgb(232, 234, 237)),
];

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub text: String,
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    DEFAULT_COLOR.to_string()
}

/// Terminal color for a named note color. Names outside the palette go
/// through ratatui's own parser and fall back to the terminal default.
pub fn color_for(name: &str) -> Color {
    PALETTE
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
        .or_else(|| name.parse::<Color>().ok())
        .unwrap_or(Color::Reset)
}

pub fn palette_index(name: &str) -> Option<usize> {
    PALETTE.iter().position(|(n, _)| n.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_color_defaults_to_white() {
        let note: Note = serde_json::from_str(r#"{"id":3,"title":"t","text":"b"}"#).unwrap();
        assert_eq!(note.color, "white");
    }

    #[test]
    fn test_color_for_palette_and_fallback() {
        assert_eq!(color_for("red"), Color::Rgb(242, 139, 130));
        assert_eq!(color_for("RED"), Color::Rgb(242, 139, 130));
        assert_eq!(color_for("magenta"), Color::Magenta);
        assert_eq!(color_for("not-a-color"), Color::Reset);
    }

    #[test]
    fn test_palette_index() {
        assert_eq!(palette_index("white"), Some(0));
        assert_eq!(palette_index("gray"), Some(PALETTE.len() - 1));
        assert_eq!(palette_index("chartreuse"), None);
    }
}
