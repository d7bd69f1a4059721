//! Plain-text rendering of a view for non-interactive output.

use podview_core::CurrentView;
use podview_core::summary::DEFAULT_KEYWORD_LIMIT;

use crate::text::flatten;
use crate::views::summary::summary_lines;
use crate::views::transcript::transcript_lines;

#[derive(Debug, Clone)]
pub struct PlainExportOptions {
    pub keyword_limit: usize,
    pub include_transcript: bool,
    /// Wrap width in columns.
    pub width: usize,
}

impl Default for PlainExportOptions {
    fn default() -> Self {
        Self {
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
            include_transcript: false,
            width: 80,
        }
    }
}

/// Render the same content the summary panel shows, as plain text.
pub fn render_plain(view: &CurrentView<'_>, options: &PlainExportOptions) -> String {
    let width = options.width.max(20);
    let mut out = String::new();

    if let Some(episode) = view.episode {
        let mut meta = Vec::new();
        if !episode.date.is_empty() {
            meta.push(format!("Date: {}", episode.date));
        }
        if !episode.duration.is_empty() {
            meta.push(format!("Duration: {}", episode.duration));
        }
        if !meta.is_empty() {
            out.push_str(&meta.join("  "));
            out.push('\n');
        }
        if view.models.is_empty() {
            out.push_str("No models available for this podcast.\n");
        } else {
            let models: Vec<String> = view
                .models
                .iter()
                .map(|m| {
                    if *m == view.model {
                        format!("[{m}]")
                    } else {
                        m.to_string()
                    }
                })
                .collect();
            out.push_str(&format!("Models: {}\n", models.join(" ")));
        }
        out.push('\n');
    }

    out.push_str(&flatten(&summary_lines(view, options.keyword_limit, width)));

    if options.include_transcript && view.episode.is_some() {
        out.push_str("\nTRANSCRIPT\n");
        out.push_str(&flatten(&transcript_lines(view.transcript, width)));
    }
    out
}
