use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Padding};

pub struct Theme;

impl Theme {
    // ── Background ───────────────────────────────────────────────────
    pub const BG_SURFACE: Color = Color::Rgb(30, 35, 50);
    pub const BG_BADGE: Color = Color::Rgb(45, 50, 65);

    // ── Border ───────────────────────────────────────────────────────
    pub const BORDER_DIM: Color = Color::DarkGray;
    pub const BORDER_NORMAL: Color = Color::Rgb(60, 65, 80);
    pub const BORDER_ACCENT: Color = Color::Rgb(100, 180, 240);

    // ── Text hierarchy ───────────────────────────────────────────────
    pub const TEXT_PRIMARY: Color = Color::White;
    pub const TEXT_SECONDARY: Color = Color::Rgb(140, 145, 160);
    pub const TEXT_MUTED: Color = Color::Rgb(80, 85, 100);
    pub const TEXT_CONTENT: Color = Color::Rgb(170, 175, 190);

    // ── Key style (for footer hints) ─────────────────────────────────
    pub const TEXT_KEY: Color = Color::Rgb(140, 145, 160);
    pub const TEXT_KEY_DESC: Color = Color::DarkGray;

    // ── Accent ───────────────────────────────────────────────────────
    pub const ACCENT_BLUE: Color = Color::Rgb(100, 180, 240);
    pub const ACCENT_YELLOW: Color = Color::Rgb(220, 180, 60);
    pub const ACCENT_PURPLE: Color = Color::Rgb(180, 140, 220);
    pub const ACCENT_ORANGE: Color = Color::Rgb(217, 119, 80);
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 180, 160);

    // ── Summary sections ─────────────────────────────────────────────
    pub const SECTION_HEADER: Color = Color::Rgb(120, 125, 140);
    pub const QUOTE_MARK: Color = Color::Rgb(217, 119, 80);
    pub const TIMESTAMP: Color = Color::Rgb(100, 105, 120);

    // ── Model picker ─────────────────────────────────────────────────
    pub const MODEL_ACTIVE_FG: Color = Color::Black;
    pub const MODEL_ACTIVE_BG: Color = Color::Rgb(100, 180, 240);
    pub const MODEL_INACTIVE: Color = Color::Rgb(120, 125, 140);

    // ── Padding ──────────────────────────────────────────────────────
    pub const PADDING_CARD: Padding = Padding::new(2, 2, 1, 1);
    pub const PADDING_COMPACT: Padding = Padding::new(1, 1, 0, 0);

    // ── Block helpers ────────────────────────────────────────────────

    pub fn block() -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(Self::BORDER_NORMAL))
    }

    pub fn block_dim() -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(Self::BORDER_DIM))
    }

    pub fn block_accent() -> Block<'static> {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::new().fg(Self::BORDER_ACCENT))
    }

    /// Block for a panel that may hold scroll focus.
    pub fn block_focus(focused: bool) -> Block<'static> {
        if focused {
            Self::block_accent()
        } else {
            Self::block_dim()
        }
    }

    pub fn section_header(label: &str) -> Line<'static> {
        Line::from(Span::styled(
            label.to_uppercase(),
            Style::new().fg(Self::SECTION_HEADER).bold(),
        ))
    }
}

// ── Tag color palette ─────────────────────────────────────────────────

const TAG_PALETTE: [Color; 6] = [
    Color::Rgb(100, 180, 240), // blue
    Color::Rgb(80, 200, 120),  // green
    Color::Rgb(220, 180, 60),  // yellow
    Color::Rgb(180, 140, 220), // purple
    Color::Rgb(80, 200, 200),  // teal
    Color::Rgb(220, 100, 160), // pink
];

/// Stable color for a tag or keyword.
pub fn tag_color(tag: &str) -> Color {
    let hash = tag
        .bytes()
        .fold(0u32, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u32));
    TAG_PALETTE[(hash as usize) % TAG_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_color_is_stable_for_same_tag() {
        assert_eq!(tag_color("aliens"), tag_color("aliens"));
    }

    #[test]
    fn tag_color_uses_multiple_palette_slots() {
        let a = tag_color("aliens");
        let b = tag_color("nuclear war");
        let c = tag_color("journalism");
        assert!(a != b || b != c || a != c);
    }

    #[test]
    fn section_header_is_uppercase() {
        let line = Theme::section_header("Q&a");
        assert_eq!(line.spans[0].content, "Q&A");
    }
}
