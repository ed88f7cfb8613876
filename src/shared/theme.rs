use serde::Serialize;
use std::fmt;

/// A hex color value (`#RRGGBB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Color(pub &'static str);

impl Color {
    /// `#RRGGBBAA` form, used for tinted badge and bar backgrounds.
    pub fn with_alpha(self, alpha: u8) -> String {
        format!("{}{:02X}", self.0, alpha)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const BORDER: Color = Color("#E2E8F0");
pub const TEXT: Color = Color("#1E293B");
pub const MUTED: Color = Color("#64748B");
pub const DIM: Color = Color("#94A3B8");

pub const ACCENT: Color = Color("#FF9900");
pub const GREEN: Color = Color("#10B981");
pub const RED: Color = Color("#EF4444");
pub const PURPLE: Color = Color("#8B5CF6");
pub const BLUE: Color = Color("#3B82F6");
pub const CYAN: Color = Color("#06B6D4");
pub const GOLD: Color = Color("#F59E0B");
pub const PINK: Color = Color("#EC4899");
pub const LIME: Color = Color("#84CC16");
pub const TEAL: Color = Color("#14B8A6");

// Greys and the deep red that some datasets pin explicitly
pub const SLATE: Color = Color("#6B7280");
pub const CRIMSON: Color = Color("#B91C1C");
pub const NEUTRAL: Color = DIM;

/// Categorical palette. Order is significant: records without an explicit
/// color take `PALETTE[index % PALETTE.len()]`.
pub const PALETTE: [Color; 10] = [
    ACCENT, PURPLE, CYAN, GREEN, GOLD, BLUE, RED, PINK, LIME, TEAL,
];

/// Colors chosen by role rather than by hue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Semantic {
    Accent,
    Success,
    Warning,
    Danger,
    Muted,
}

impl Semantic {
    pub const fn color(self) -> Color {
        match self {
            Semantic::Accent => ACCENT,
            Semantic::Success => GREEN,
            Semantic::Warning => GOLD,
            Semantic::Danger => RED,
            Semantic::Muted => MUTED,
        }
    }
}

pub fn palette_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}

pub fn slice_color(explicit: Option<Color>, index: usize) -> Color {
    explicit.unwrap_or_else(|| palette_color(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn is_hex(c: Color) -> bool {
        let s = c.0;
        s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|ch| ch.is_ascii_hexdigit())
    }

    #[test]
    fn palette_order_is_fixed() {
        assert_eq!(palette_color(0), ACCENT);
        assert_eq!(palette_color(9), TEAL);
        assert_eq!(palette_color(10), ACCENT);
        assert_eq!(palette_color(13), GREEN);
    }

    #[test]
    fn explicit_color_wins_over_palette() {
        assert_eq!(slice_color(Some(SLATE), 0), SLATE);
        assert_eq!(slice_color(None, 1), PURPLE);
    }

    #[test]
    fn roles_resolve_to_theme_colors() {
        assert_eq!(Semantic::Accent.color(), ACCENT);
        assert_eq!(Semantic::Success.color(), GREEN);
        assert_eq!(Semantic::Danger.color(), RED);
        assert_eq!(Semantic::Warning.color(), GOLD);
        assert_eq!(Semantic::Muted.color(), MUTED);
    }

    #[test]
    fn alpha_suffix_is_two_hex_digits() {
        assert_eq!(BLUE.with_alpha(0x40), "#3B82F640");
        assert_eq!(RED.with_alpha(0x22), "#EF444422");
    }

    proptest! {
        #[test]
        fn palette_cycling_is_total(i in any::<usize>()) {
            let c = palette_color(i);
            prop_assert!(is_hex(c));
            prop_assert_eq!(c, PALETTE[i % PALETTE.len()]);
        }

        #[test]
        fn fallback_matches_palette(i in 0usize..10_000) {
            prop_assert_eq!(slice_color(None, i), palette_color(i));
        }
    }
}
