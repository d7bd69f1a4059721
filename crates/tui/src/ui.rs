use crate::app::{App, ScrollFocus};
use crate::theme::Theme;
use crate::views::{episode_list, help, model_picker, summary, transcript};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const SUBTITLE: &str =
    "Toggle models to compare summaries. Reveal the transcript to read the raw source.";

pub fn render(frame: &mut Frame, app: &mut App) {
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, app, header_area);

    let [sidebar_area, main_area] = Layout::horizontal([
        Constraint::Length(app.display.sidebar_width),
        Constraint::Fill(1),
    ])
    .areas(body_area);

    episode_list::render(frame, app, sidebar_area);

    let transcript_constraint = if app.view().transcript_visible {
        Constraint::Percentage(45)
    } else {
        Constraint::Length(3)
    };
    let [picker_area, summary_area, transcript_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Fill(1),
        transcript_constraint,
    ])
    .areas(main_area);

    model_picker::render(frame, app, picker_area);
    summary::render(frame, app, summary_area);
    transcript::render(frame, app, transcript_area);

    render_footer(frame, app, footer_area);

    if app.show_help {
        let area = frame.area();
        help::render(frame, area);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Theme::block();
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let view = app.view();
    let mut spans = vec![
        Span::styled(
            " PODCAST ",
            Style::new().fg(Color::Black).bg(Theme::ACCENT_ORANGE).bold(),
        ),
        Span::raw(" "),
    ];
    match view.episode {
        Some(episode) => {
            spans.push(Span::styled(
                episode.title.clone(),
                Style::new().fg(Theme::TEXT_PRIMARY).bold(),
            ));
            for (label, value) in [("Date", &episode.date), ("Duration", &episode.duration)] {
                if value.is_empty() {
                    continue;
                }
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    format!(" {label}: {value} "),
                    Style::new().fg(Theme::TEXT_CONTENT).bg(Theme::BG_BADGE),
                ));
            }
        }
        None => spans.push(Span::styled(
            "Select a podcast",
            Style::new().fg(Theme::TEXT_MUTED).italic(),
        )),
    }

    let lines = vec![
        Line::from(spans),
        Line::from(Span::styled(
            format!(" {SUBTITLE}"),
            Style::new().fg(Theme::TEXT_SECONDARY),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let key_style = Style::new().fg(Theme::TEXT_KEY);
    let desc_style = Style::new().fg(Theme::TEXT_KEY_DESC);

    let toggle = if app.view().transcript_visible {
        "hide transcript  "
    } else {
        "transcript  "
    };
    let mut spans = vec![
        Span::styled(" j/k ", key_style),
        Span::styled("episodes  ", desc_style),
        Span::styled("h/l ", key_style),
        Span::styled("models  ", desc_style),
        Span::styled("t ", key_style),
        Span::styled(toggle, desc_style),
        Span::styled("J/K ", key_style),
        Span::styled("scroll  ", desc_style),
    ];
    if app.view().transcript_visible {
        let target = match app.focus {
            ScrollFocus::Summary => "summary",
            ScrollFocus::Transcript => "transcript",
        };
        spans.push(Span::styled("Tab ", key_style));
        spans.push(Span::styled(format!("focus:{target}  "), desc_style));
    }
    spans.extend([
        Span::styled("? ", key_style),
        Span::styled("help  ", desc_style),
        Span::styled("q ", key_style),
        Span::styled("quit", desc_style),
    ]);
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
