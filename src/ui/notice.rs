use crate::ui::app::Notice;
use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const MIN_WIDTH: u16 = 40;
const MAX_WIDTH: u16 = 60;

/// Dismissible message box drawn over whatever screen is active.
pub fn render_notice(frame: &mut Frame<'_>, notice: &Notice) {
    let area = frame.area();

    let width = (notice.body.chars().count() as u16 + 4)
        .clamp(MIN_WIDTH, MAX_WIDTH)
        .min(area.width);
    let inner_width = width.saturating_sub(2).max(1) as usize;
    let body_lines = (notice.body.chars().count() + inner_width - 1) / inner_width;
    let height = (body_lines as u16 + 4).min(area.height);

    let popup_area = centered_rect_by_size(area, width, height);

    let mut lines: Vec<Line> = vec![Line::from(Span::styled(
        notice.body.clone(),
        Style::default().fg(HEADER_TEXT),
    ))];
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Enter: OK",
        Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
    )));

    frame.render_widget(Clear, popup_area);
    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", notice.title),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let widget = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
    frame.render_widget(widget, popup_area);
}
