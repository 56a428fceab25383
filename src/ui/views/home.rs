use crate::catalog::{Badge, Book};
use crate::ui::app::App;
use crate::ui::home::{DashboardPhase, QUICK_ACTIONS};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BADGE_NEW, BADGE_POPULAR, BADGE_RECOMMENDED, GLOBAL_BORDER,
    HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, PRICE_GREEN,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

pub fn render(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let home = app.home();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // greeting
            Constraint::Length(4), // stats cards
            Constraint::Length(1), // "Quick Actions"
            Constraint::Length(4), // action grid
            Constraint::Length(1), // "Featured Books"
            Constraint::Min(0),    // featured rail
        ])
        .split(body);

    render_greeting(frame, rows[0], app);
    render_stats(frame, rows[1], app);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Quick Actions",
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        rows[2],
    );
    render_actions(frame, rows[3], home.action_focus);
    frame.render_widget(
        Paragraph::new(Span::styled(
            "Featured Books",
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        rows[4],
    );
    render_featured(frame, rows[5], app);

    if home.menu_open {
        render_profile_menu(frame, body);
    }
}

fn render_greeting(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let name = app
        .session()
        .map(|s| s.display_name.as_str())
        .unwrap_or("Reader");
    let lines = vec![
        Line::from(Span::styled(
            " Welcome back,",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            format!(" {name}! 👋"),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_stats(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let home = app.home();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let total = match home.phase {
        DashboardPhase::Ready => format_count(home.stats.total_books),
        _ => "—".to_string(),
    };
    let read = match home.phase {
        DashboardPhase::Ready => home.stats.read_books.to_string(),
        _ => "—".to_string(),
    };

    render_stat_card(frame, columns[0], "Total Books", &total);
    render_stat_card(frame, columns[1], "Books Read", &read);
}

fn render_stat_card(frame: &mut Frame<'_>, area: Rect, label: &str, value: &str) {
    let block = Block::default()
        .title(Span::styled(
            label.to_string(),
            Style::default().fg(MUTED_TEXT),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let value_line = Line::from(Span::styled(
        value.to_string(),
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(Paragraph::new(value_line).block(block), area);
}

fn render_actions(frame: &mut Frame<'_>, area: Rect, focus: usize) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for (idx, action) in QUICK_ACTIONS.iter().enumerate() {
        let border = if idx == focus { ACCENT } else { GLOBAL_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border));
        let width = columns[idx].width.saturating_sub(2) as usize;
        let lines = vec![
            Line::from(Span::styled(
                truncate(&format!("{} {}", action.icon, action.title), width),
                Style::default().fg(HEADER_TEXT),
            )),
            Line::from(Span::styled(
                truncate(action.description, width),
                Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
            )),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), columns[idx]);
    }
}

fn render_featured(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let home = app.home();

    if home.phase != DashboardPhase::Ready {
        let message = format!("Loading{}", app.loading_dots());
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(MUTED_TEXT))),
            area,
        );
        return;
    }

    if home.featured.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Nothing featured right now",
                Style::default().fg(MUTED_TEXT),
            )),
            area,
        );
        return;
    }

    let count = home.featured.len() as u32;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            home.featured
                .iter()
                .map(|_| Constraint::Ratio(1, count))
                .collect::<Vec<_>>(),
        )
        .split(area);

    for (idx, book) in home.featured.iter().enumerate() {
        render_featured_card(frame, columns[idx], book);
    }
}

fn render_featured_card(frame: &mut Frame<'_>, area: Rect, book: &Book) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    if let Some(tag) = book.badge.tag() {
        block = block.title(Span::styled(
            format!(" {tag} "),
            Style::default()
                .fg(badge_color(book.badge))
                .add_modifier(Modifier::BOLD),
        ));
    }

    let width = area.width.saturating_sub(2) as usize;
    let lines = vec![
        Line::from(Span::styled(
            truncate(&book.title, width),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate(&book.author, width),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            format!("${:.2}", book.price),
            Style::default().fg(PRICE_GREEN),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_profile_menu(frame: &mut Frame<'_>, body: Rect) {
    let width = 22u16.min(body.width);
    // Anchored top-right, under the greeting, like the original header menu.
    let menu_area = Rect {
        x: body.x + body.width.saturating_sub(width),
        y: body.y,
        width,
        height: 4.min(body.height),
    };

    frame.render_widget(Clear, menu_area);
    let block = Block::default()
        .title(Span::styled(" Profile ", Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let lines = vec![
        Line::from(Span::styled(
            " Logout ",
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT),
        )),
        Line::from(Span::styled(
            " Enter: Confirm  Esc: Close",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(block), menu_area);
}

fn badge_color(badge: Badge) -> ratatui::style::Color {
    match badge {
        Badge::New => BADGE_NEW,
        Badge::Popular => BADGE_POPULAR,
        Badge::Recommended => BADGE_RECOMMENDED,
        Badge::None => MUTED_TEXT,
    }
}

fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::new();
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let kept: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{kept}…")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(23), "23");
        assert_eq!(format_count(1247), "1,247");
        assert_eq!(format_count(1_000_000), "1,000,000");
    }

    #[test]
    fn truncate_keeps_short_strings_intact() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 8), "a longe…");
    }
}
