use crate::app::{App, ScrollFocus};
use crate::markdown;
use crate::text::{wrap_spans, wrap_text};
use crate::theme::{self, Theme};
use podview_core::{CurrentView, Episode, QaItem, Snippet, StructuredSummary};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Lines of the summary panel for `view`, wrapped to `width` columns.
pub fn summary_lines(view: &CurrentView<'_>, keyword_limit: usize, width: usize) -> Vec<Line<'static>> {
    let Some(episode) = view.episode else {
        return vec![Line::from(Span::styled(
            "Select a podcast to view its summaries.",
            Style::new().fg(Theme::TEXT_MUTED),
        ))];
    };

    let mut lines = vec![Theme::section_header("Summary")];
    lines.extend(wrap_text(
        &episode.title,
        width,
        Style::new().fg(Theme::TEXT_PRIMARY).bold(),
        0,
    ));

    // Model badge
    lines.push(if view.model.is_empty() {
        Line::from(Span::styled(
            "Select a model",
            Style::new().fg(Theme::TEXT_MUTED).italic(),
        ))
    } else {
        Line::from(Span::styled(
            format!(" {} ", view.model),
            Style::new()
                .fg(Theme::MODEL_ACTIVE_FG)
                .bg(Theme::MODEL_ACTIVE_BG)
                .bold(),
        ))
    });
    lines.push(Line::raw(""));

    let abstract_text = view.summary.map(|s| s.abstract_text()).unwrap_or_default();
    if abstract_text.trim().is_empty() {
        lines.push(Line::from(Span::styled(
            "Pick a model to see its summary.",
            Style::new().fg(Theme::TEXT_MUTED),
        )));
    } else {
        lines.extend(markdown::render(abstract_text, width));
    }

    if let Some(structured) = view.summary.and_then(|s| s.structured()) {
        push_sections(&mut lines, structured, keyword_limit, width);
    }

    lines.push(Line::raw(""));
    push_footer(&mut lines, episode, view.summary.is_some_and(|s| s.is_structured()), width);
    lines
}

fn push_sections(
    lines: &mut Vec<Line<'static>>,
    summary: &StructuredSummary,
    keyword_limit: usize,
    width: usize,
) {
    let body = Style::new().fg(Theme::TEXT_CONTENT);

    if !summary.outline.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Theme::section_header("Outline"));
        for item in &summary.outline {
            let prefix = Span::styled("  • ", Style::new().fg(Theme::TEXT_SECONDARY));
            lines.extend(wrap_spans(&[Span::styled(item.clone(), body)], width, prefix, 4));
        }
    }

    if !summary.quotes.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Theme::section_header("Quotes"));
        for quote in &summary.quotes {
            let prefix = Span::styled("  ❝ ", Style::new().fg(Theme::QUOTE_MARK));
            let mut spans = vec![Span::styled(
                quote.text.clone(),
                body.italic(),
            )];
            spans.extend(timestamp_span(quote, "[", "]"));
            lines.extend(wrap_spans(&spans, width, prefix, 4));
        }
    }

    if !summary.q_and_a.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Theme::section_header("Q&A"));
        for (i, item) in summary.q_and_a.iter().enumerate() {
            if i > 0 {
                lines.push(Line::raw(""));
            }
            push_qa(lines, item, width);
        }
    }

    let keywords = summary.display_keywords(keyword_limit);
    if !keywords.is_empty() {
        lines.push(Line::raw(""));
        lines.push(Theme::section_header("Keywords"));
        let spans: Vec<Span> = keywords
            .iter()
            .map(|k| Span::styled(format!("#{k} "), Style::new().fg(theme::tag_color(k))))
            .collect();
        lines.extend(wrap_spans(&spans, width, Span::raw(""), 0));
    }
}

fn push_qa(lines: &mut Vec<Line<'static>>, item: &QaItem, width: usize) {
    let prefix = Span::styled("Q ", Style::new().fg(Theme::ACCENT_PURPLE).bold());
    let question = Style::new().fg(Theme::TEXT_PRIMARY).bold();
    lines.extend(wrap_spans(
        &[Span::styled(item.question.clone(), question)],
        width,
        prefix,
        2,
    ));
    if !item.answer.trim().is_empty() {
        lines.extend(markdown::render(&item.answer, width));
    }
    for evidence in &item.evidence {
        let prefix = Span::styled("    › ", Style::new().fg(Theme::TEXT_MUTED));
        let mut spans = vec![Span::styled(
            evidence.text.clone(),
            Style::new().fg(Theme::TEXT_SECONDARY),
        )];
        spans.extend(timestamp_span(evidence, "(", ")"));
        lines.extend(wrap_spans(&spans, width, prefix, 6));
    }
}

fn timestamp_span(snippet: &Snippet, open: &str, close: &str) -> Option<Span<'static>> {
    snippet
        .timestamp
        .as_deref()
        .filter(|ts| !ts.trim().is_empty())
        .map(|ts| Span::styled(format!(" {open}{ts}{close}"), Style::new().fg(Theme::TIMESTAMP)))
}

/// Host and duration, plus the episode tags when the summary has no keywords
/// section of its own.
fn push_footer(lines: &mut Vec<Line<'static>>, episode: &Episode, structured: bool, width: usize) {
    let meta: Vec<&str> = [episode.host.as_str(), episode.duration.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !meta.is_empty() {
        lines.push(Line::from(Span::styled(
            meta.join(" • "),
            Style::new().fg(Theme::TEXT_SECONDARY),
        )));
    }
    if !structured && !episode.tags.is_empty() {
        let spans: Vec<Span> = episode
            .tags
            .iter()
            .map(|t| Span::styled(format!("#{t} "), Style::new().fg(theme::tag_color(t))))
            .collect();
        lines.extend(wrap_spans(&spans, width, Span::raw(""), 0));
    }
}

pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Theme::block_focus(app.focus == ScrollFocus::Summary)
        .padding(Theme::PADDING_COMPACT);
    let inner = block.inner(area);

    let lines = summary_lines(
        &app.view(),
        app.display.keyword_limit,
        inner.width.max(1) as usize,
    );
    let overflow = lines.len().saturating_sub(inner.height as usize);
    app.summary_max_scroll = u16::try_from(overflow).unwrap_or(u16::MAX);
    app.summary_scroll = app.summary_scroll.min(app.summary_max_scroll);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.summary_scroll, 0));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::flatten;
    use podview_core::testing::two_model_catalog;
    use podview_core::{Catalog, Summary, ViewStateController};

    fn structured() -> Summary {
        Summary::Structured(StructuredSummary {
            abstract_text: "Talks about **aliens**.".into(),
            outline: vec!["Intro".into(), "SETI".into()],
            quotes: vec![Snippet::new("We are not alone", Some("00:12:01"))],
            q_and_a: vec![QaItem {
                question: "Are we alone?".into(),
                answer: "Probably not.".into(),
                evidence: vec![Snippet::new("the numbers say", Some("01:02:03"))],
            }],
            keywords: vec!["aliens".into(), "".into(), "SETI".into(), "aliens".into()],
        })
    }

    fn controller_with(summary: Summary) -> ViewStateController {
        let mut ep = Episode {
            title: "Adam Frank".into(),
            host: "Lex Fridman".into(),
            duration: "3h 26m".into(),
            tags: vec!["aliens".into()],
            ..Episode::new("adam")
        };
        ep.upsert_summary("GPT-3.5", summary);
        ViewStateController::with_catalog([ep].into_iter().collect())
    }

    #[test]
    fn no_episode_shows_placeholder() {
        let controller = ViewStateController::with_catalog(Catalog::new());
        let text = flatten(&summary_lines(&controller.current_view(), 7, 60));
        assert_eq!(text, "Select a podcast to view its summaries.\n");
    }

    #[test]
    fn structured_summary_lists_every_section() {
        let controller = controller_with(structured());
        let text = flatten(&summary_lines(&controller.current_view(), 7, 60));
        assert!(text.starts_with("SUMMARY\nAdam Frank\n GPT-3.5\n\n"));
        assert!(text.contains("Talks about aliens."));
        assert!(text.contains("OUTLINE\n  • Intro\n  • SETI\n"));
        assert!(text.contains("QUOTES\n  ❝ We are not alone [00:12:01]\n"));
        assert!(text.contains("Q&A\nQ Are we alone?\n"));
        assert!(text.contains("Probably not."));
        assert!(text.contains("    › the numbers say (01:02:03)\n"));
        assert!(text.contains("KEYWORDS\n#aliens #SETI\n"));
        assert!(text.ends_with("\nLex Fridman • 3h 26m\n"));

        let order: Vec<usize> = ["Talks about", "OUTLINE", "QUOTES", "Q&A", "Probably", "KEYWORDS"]
            .iter()
            .map(|needle| text.find(needle).expect("section present"))
            .collect();
        assert!(order.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn plain_text_summary_shows_episode_tags() {
        let controller = controller_with(Summary::PlainText("Just text.".into()));
        let text = flatten(&summary_lines(&controller.current_view(), 7, 60));
        assert!(text.contains("Just text.\n"));
        assert!(text.ends_with("Lex Fridman • 3h 26m\n#aliens\n"));
        assert!(!text.contains("KEYWORDS"));
    }

    #[test]
    fn missing_summary_asks_for_a_model() {
        let mut controller = ViewStateController::with_catalog(two_model_catalog());
        controller.select_model("GPT-4o");
        let text = flatten(&summary_lines(&controller.current_view(), 7, 60));
        assert!(text.contains("GPT-4o\n"));
        assert!(text.contains("Pick a model to see its summary.\n"));
    }

    #[test]
    fn keyword_limit_caps_display() {
        let controller = controller_with(structured());
        let text = flatten(&summary_lines(&controller.current_view(), 1, 60));
        assert!(text.contains("KEYWORDS\n#aliens\n"));
    }
}
