use crate::ui::theme::{ACCENT, ERROR_RED, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

/// Rows a text field occupies: three for the bordered input, one for the
/// error line beneath it.
pub const FIELD_HEIGHT: u16 = 4;

pub struct TextField<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub placeholder: &'a str,
    pub focused: bool,
    pub error: Option<&'a str>,
    pub masked: bool,
}

/// Draw a labeled input with its error line into a `FIELD_HEIGHT`-row area.
pub fn render_text_field(frame: &mut Frame<'_>, area: Rect, field: TextField<'_>) {
    if area.height < FIELD_HEIGHT {
        return;
    }

    let border_color = if field.error.is_some() {
        ERROR_RED
    } else if field.focused {
        ACCENT
    } else {
        GLOBAL_BORDER
    };

    let input_area = Rect {
        height: 3,
        ..area
    };

    let content = if field.value.is_empty() {
        Line::from(Span::styled(
            field.placeholder.to_string(),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ))
    } else {
        let shown = if field.masked {
            "•".repeat(field.value.chars().count())
        } else {
            field.value.to_string()
        };
        let mut spans = vec![Span::styled(shown, Style::default().fg(HEADER_TEXT))];
        if field.focused {
            spans.push(Span::styled("▌", Style::default().fg(ACCENT)));
        }
        Line::from(spans)
    };

    let block = Block::default()
        .title(Span::styled(
            field.label.to_string(),
            Style::default().fg(HEADER_TEXT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(Paragraph::new(content).block(block), input_area);

    if let Some(message) = field.error {
        let error_area = Rect {
            y: area.y + 3,
            height: 1,
            ..area
        };
        frame.render_widget(
            Paragraph::new(Span::styled(
                message.to_string(),
                Style::default().fg(ERROR_RED),
            )),
            error_area,
        );
    }
}

/// Centered submit row: a button-ish label, or progress text while the
/// submission is in flight.
pub fn render_submit_row(
    frame: &mut Frame<'_>,
    area: Rect,
    label: &str,
    busy_label: &str,
    busy: bool,
) {
    let line = if busy {
        Line::from(Span::styled(
            busy_label.to_string(),
            Style::default().fg(MUTED_TEXT),
        ))
    } else {
        Line::from(Span::styled(
            format!("[ {label} ]"),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(
        Paragraph::new(line).alignment(ratatui::layout::Alignment::Center),
        area,
    );
}
