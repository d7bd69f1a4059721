use crate::app::App;
use crate::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

/// Badge row for the current episode's models, in catalog order.
pub fn badges(models: &[&str], active: &str) -> Line<'static> {
    let mut spans = Vec::with_capacity(models.len() * 2);
    for (i, model) in models.iter().enumerate() {
        let label = if i < 9 {
            format!(" {}:{} ", i + 1, model)
        } else {
            format!(" {} ", model)
        };
        let style = if *model == active {
            Style::new()
                .fg(Theme::MODEL_ACTIVE_FG)
                .bg(Theme::MODEL_ACTIVE_BG)
                .bold()
        } else {
            Style::new().fg(Theme::MODEL_INACTIVE).bg(Theme::BG_BADGE)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.view();
    let block = Theme::block_dim()
        .title(" Models ")
        .padding(Theme::PADDING_COMPACT);

    let line = if view.episode.is_none() {
        Line::from(Span::styled(
            "Select a podcast to view its summaries.",
            Style::new().fg(Theme::TEXT_MUTED),
        ))
    } else if view.models.is_empty() {
        Line::from(Span::styled(
            "No models available for this podcast.",
            Style::new().fg(Theme::TEXT_MUTED),
        ))
    } else {
        badges(&view.models, view.model)
    };

    let paragraph = Paragraph::new(line)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
