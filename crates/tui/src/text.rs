//! Width-aware text helpers shared by the views and the plain export.

use ratatui::prelude::*;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

/// A run of non-whitespace text that may span several styles, e.g.
/// `**bold**,` is one word of two pieces.
struct Word {
    pieces: Vec<(String, Style)>,
    space_before: bool,
}

impl Word {
    fn width(&self) -> usize {
        self.pieces
            .iter()
            .map(|(text, _)| UnicodeWidthStr::width(text.as_str()))
            .sum()
    }
}

fn split_words(spans: &[Span<'_>]) -> Vec<Word> {
    let mut words: Vec<Word> = Vec::new();
    let mut pending_space = false;
    let mut in_word = false;

    for span in spans {
        let mut piece = String::new();
        for ch in span.content.chars() {
            if ch.is_whitespace() {
                if !piece.is_empty() {
                    push_piece(&mut words, std::mem::take(&mut piece), span.style, in_word, pending_space);
                    pending_space = false;
                }
                in_word = false;
                pending_space = true;
                continue;
            }
            piece.push(ch);
        }
        if !piece.is_empty() {
            push_piece(&mut words, piece, span.style, in_word, pending_space);
            pending_space = false;
            in_word = true;
        }
    }
    words
}

fn push_piece(words: &mut Vec<Word>, text: String, style: Style, glue: bool, space_before: bool) {
    match words.last_mut() {
        Some(word) if glue && !space_before => word.pieces.push((text, style)),
        _ => words.push(Word {
            pieces: vec![(text, style)],
            space_before,
        }),
    }
}

struct LineBuilder {
    width: usize,
    indent: usize,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    current_width: usize,
    has_content: bool,
}

impl LineBuilder {
    fn new(width: usize, prefix: Span<'static>, indent: usize) -> Self {
        let prefix_width = UnicodeWidthStr::width(prefix.content.as_ref());
        Self {
            width: width.max(1),
            indent,
            lines: Vec::new(),
            current: vec![prefix],
            current_width: prefix_width,
            has_content: false,
        }
    }

    fn remaining(&self) -> usize {
        self.width.saturating_sub(self.current_width)
    }

    fn break_line(&mut self) {
        let spans = std::mem::take(&mut self.current);
        self.lines.push(Line::from(spans));
        self.current.push(Span::raw(" ".repeat(self.indent)));
        self.current_width = self.indent;
        self.has_content = false;
    }

    fn push_word(&mut self, word: Word) {
        let sep = usize::from(self.has_content && word.space_before);
        let word_width = word.width();

        if sep + word_width <= self.remaining() {
            if sep == 1 {
                self.current.push(Span::raw(" "));
                self.current_width += 1;
            }
            for (text, style) in word.pieces {
                self.current.push(Span::styled(text, style));
            }
            self.current_width += word_width;
            self.has_content = true;
            return;
        }

        if self.has_content {
            self.break_line();
            if word_width <= self.remaining() {
                self.push_word(Word {
                    space_before: false,
                    ..word
                });
                return;
            }
        }
        self.push_hard_split(word);
    }

    /// Lay out a word longer than a full line character by character.
    fn push_hard_split(&mut self, word: Word) {
        for (text, style) in word.pieces {
            let mut chunk = String::new();
            for ch in text.chars() {
                let ch_width = UnicodeWidthChar::width(ch).unwrap_or(1);
                if ch_width > self.remaining() && (self.has_content || !chunk.is_empty()) {
                    if !chunk.is_empty() {
                        self.current.push(Span::styled(std::mem::take(&mut chunk), style));
                    }
                    self.break_line();
                }
                chunk.push(ch);
                self.current_width += ch_width;
                self.has_content = true;
            }
            if !chunk.is_empty() {
                self.current.push(Span::styled(chunk, style));
            }
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.lines.push(Line::from(self.current));
        self.lines
    }
}

/// Word-wrap styled spans into lines of at most `width` columns.
///
/// The first line starts with `prefix`; continuation lines are indented by
/// `indent` spaces. Runs of whitespace collapse to a single space.
pub fn wrap_spans(
    spans: &[Span<'_>],
    width: usize,
    prefix: Span<'static>,
    indent: usize,
) -> Vec<Line<'static>> {
    let mut builder = LineBuilder::new(width, prefix, indent);
    for word in split_words(spans) {
        builder.push_word(word);
    }
    builder.finish()
}

/// Wrap plain text, keeping its line breaks (blank lines included).
pub fn wrap_text(text: &str, width: usize, style: Style, indent: usize) -> Vec<Line<'static>> {
    let pad = " ".repeat(indent);
    text.split('\n')
        .flat_map(|line| {
            let span = Span::styled(line.trim_end_matches('\r').to_string(), style);
            wrap_spans(&[span], width, Span::raw(pad.clone()), indent)
        })
        .collect()
}

/// Plain text of rendered lines, trailing whitespace trimmed.
pub fn flatten(lines: &[Line<'_>]) -> String {
    let mut out = String::new();
    for line in lines {
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        out.push_str(text.trim_end());
        out.push('\n');
    }
    out
}
