use crate::app::App;
use crate::text::truncate;
use crate::theme::{self, Theme};
use podview_core::Episode;
use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, Paragraph};

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = format!(" Episodes ({}) ", app.catalog().len());
    if app.catalog().is_empty() {
        let block = Theme::block_dim().title(title).padding(Theme::PADDING_COMPACT);
        let paragraph = Paragraph::new("No podcasts available yet.")
            .block(block)
            .style(Style::new().fg(Color::DarkGray));
        frame.render_widget(paragraph, area);
        return;
    }

    let text_width = area.width.saturating_sub(6) as usize;
    let tag_preview = app.display.tag_preview;
    let items: Vec<ListItem> = app
        .catalog()
        .iter()
        .map(|episode| episode_item(episode, text_width, tag_preview))
        .collect();

    let list = List::new(items)
        .block(Theme::block_dim().title(title))
        .highlight_style(
            Style::new()
                .bg(Theme::BG_SURFACE)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ")
        .highlight_spacing(ratatui::widgets::HighlightSpacing::Always);

    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn episode_item(episode: &Episode, width: usize, tag_preview: usize) -> ListItem<'static> {
    // Line 1: title
    let line1 = Line::from(Span::styled(
        truncate(&episode.title, width.max(1)),
        Style::new().fg(Theme::TEXT_PRIMARY).bold(),
    ));

    // Line 2: host • duration
    let meta = match (episode.host.is_empty(), episode.duration.is_empty()) {
        (false, false) => format!("{} • {}", episode.host, episode.duration),
        (false, true) => episode.host.clone(),
        (true, false) => episode.duration.clone(),
        (true, true) => String::new(),
    };
    let line2 = Line::from(Span::styled(
        truncate(&meta, width.max(1)),
        Style::new().fg(Theme::TEXT_SECONDARY),
    ));

    let mut lines = vec![line1, line2];

    // Line 3: tag preview
    let tags: Vec<Span> = episode
        .tags
        .iter()
        .take(tag_preview)
        .flat_map(|tag| {
            [
                Span::styled(
                    format!("#{}", truncate(tag, 18)),
                    Style::new().fg(theme::tag_color(tag)),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    if !tags.is_empty() {
        lines.push(Line::from(tags));
    }

    // Spacer
    lines.push(Line::raw(""));
    ListItem::new(lines)
}
