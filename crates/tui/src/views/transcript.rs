use crate::app::{App, ScrollFocus};
use crate::text::wrap_text;
use crate::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

pub const SHOW_LABEL: &str = "▸ Show full transcript";
pub const HIDE_LABEL: &str = "▾ Hide full transcript";

/// Wrapped transcript body, or a placeholder when there is none.
pub fn transcript_lines(transcript: &str, width: usize) -> Vec<Line<'static>> {
    if transcript.trim().is_empty() {
        return vec![Line::from(Span::styled(
            "No transcript available.",
            Style::new().fg(Theme::TEXT_MUTED),
        ))];
    }
    wrap_text(transcript, width, Style::new().fg(Theme::TEXT_CONTENT), 0)
}

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let view = app.view();
    let key_hint = Span::styled(" (t) ", Style::new().fg(Theme::TEXT_KEY_DESC));

    if !view.transcript_visible {
        let block = Theme::block_dim().padding(Theme::PADDING_COMPACT);
        let line = Line::from(vec![
            Span::styled(SHOW_LABEL, Style::new().fg(Theme::ACCENT_BLUE)),
            key_hint,
        ]);
        frame.render_widget(Paragraph::new(line).block(block), area);
        return;
    }

    let title = Line::from(vec![
        Span::styled(format!(" {HIDE_LABEL}"), Style::new().fg(Theme::ACCENT_BLUE)),
        key_hint,
    ]);
    let block = Theme::block_focus(app.focus == ScrollFocus::Transcript)
        .title(title)
        .padding(Theme::PADDING_COMPACT);
    let inner = block.inner(area);

    let lines = transcript_lines(view.transcript, inner.width.max(1) as usize);
    let overflow = lines.len().saturating_sub(inner.height as usize);
    app.transcript_max_scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    app.transcript_scroll = app.transcript_scroll.min(app.transcript_max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.transcript_scroll, 0));
    frame.render_widget(paragraph, area);
}
