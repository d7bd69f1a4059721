use crate::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Clear, Paragraph};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Episodes",
        &[
            ("j/k ↓/↑", "Next / previous episode"),
            ("g/G", "Jump to first / last"),
        ],
    ),
    (
        "Models",
        &[
            ("h/l ←/→", "Previous / next model"),
            ("1-9", "Pick model by position"),
        ],
    ),
    (
        "Reading",
        &[
            ("t/Enter", "Show / hide full transcript"),
            ("Tab", "Switch scroll focus"),
            ("J/K", "Scroll 10 lines (PgDn/PgUp)"),
            ("d/u", "Scroll 1 line"),
            ("Home/End", "Scroll to top / bottom"),
        ],
    ),
    (
        "Global",
        &[("?", "Toggle this help"), ("q/Esc", "Quit")],
    ),
];

pub fn render(frame: &mut Frame, area: Rect) {
    // Center the help overlay
    let popup_width = 56u16.min(area.width.saturating_sub(4));
    let popup_height = 24u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let block = Theme::block_accent()
        .title(" Keyboard Shortcuts ")
        .padding(Theme::PADDING_CARD);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let key_style = Style::new().fg(Theme::ACCENT_YELLOW).bold();
    let desc_style = Style::new().fg(Theme::TEXT_CONTENT);
    let header_style = Style::new().fg(Theme::ACCENT_BLUE).bold();

    let mut lines = Vec::new();
    for (i, (title, keys)) in SECTIONS.iter().enumerate() {
        if i > 0 {
            lines.push(Line::raw(""));
        }
        lines.push(Line::from(Span::styled(
            format!("── {title} ──"),
            header_style,
        )));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<10}"), key_style),
                Span::styled(*desc, desc_style),
            ]));
        }
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        Style::new().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
