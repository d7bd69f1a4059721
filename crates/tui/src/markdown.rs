//! Markdown rendering for generated summaries.

use ratatui::prelude::*;
use ratskin::RatSkin;
use std::sync::OnceLock;

use crate::theme::Theme;

/// RGB triple of a theme color; non-RGB colors fall back to light gray.
fn rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Rgb(r, g, b) => (r, g, b),
        _ => (200, 200, 200),
    }
}

fn summary_skin() -> &'static RatSkin {
    static SKIN: OnceLock<RatSkin> = OnceLock::new();
    SKIN.get_or_init(|| {
        let mut skin = RatSkin::default();
        skin.skin.paragraph.set_fg(rgb(Theme::TEXT_CONTENT).into());
        skin.skin.paragraph.right_margin = 0;
        skin.skin.bold.set_fg((255, 255, 255).into());
        skin.skin.italic.set_fg(rgb(Theme::TEXT_CONTENT).into());
        skin.skin.inline_code.set_fg(rgb(Theme::ACCENT_TEAL).into());
        skin.skin.code_block.left_margin = 0;
        for header in &mut skin.skin.headers {
            header.set_fg(rgb(Theme::ACCENT_BLUE).into());
            header.left_margin = 0;
            header.right_margin = 0;
        }
        skin
    })
}

/// Render Markdown into lines at most `width` columns wide.
pub fn render(markdown: &str, width: usize) -> Vec<Line<'static>> {
    if markdown.trim().is_empty() {
        return Vec::new();
    }
    let width = u16::try_from(width).unwrap_or(u16::MAX).max(1);
    summary_skin()
        .parse(RatSkin::parse_text(markdown), width)
        .into_iter()
        .map(|line| {
            Line::from(
                line.spans
                    .into_iter()
                    .map(|span| Span::styled(span.content.into_owned(), span.style))
                    .collect::<Vec<_>>(),
            )
        })
        .collect()
}
