use crate::catalog::{star_line, Badge, Book, Category, CategoryFilter};
use crate::ui::app::App;
use crate::ui::books::CatalogPhase;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, BADGE_NEW, BADGE_POPULAR, BADGE_RECOMMENDED, ERROR_RED,
    GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, PRICE_GREEN, STAR_YELLOW,
};
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs};
use ratatui::Frame;

pub fn render(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let books = app.books();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search
            Constraint::Length(1), // categories
            Constraint::Length(1), // count / status
            Constraint::Min(0),    // list
        ])
        .split(body);

    render_search(frame, rows[0], &books.query);
    render_categories(frame, rows[1], books.category);
    render_status_line(frame, rows[2], app);
    render_list(frame, rows[3], app);
}

fn render_search(frame: &mut Frame<'_>, area: Rect, query: &str) {
    let content = if query.is_empty() {
        Line::from(Span::styled(
            "Search books or authors...",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        ))
    } else {
        Line::from(vec![
            Span::styled(query.to_string(), Style::default().fg(HEADER_TEXT)),
            Span::styled("▌", Style::default().fg(ACCENT)),
        ])
    };
    let block = Block::default()
        .title(Span::styled("Search", Style::default().fg(HEADER_TEXT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn render_categories(frame: &mut Frame<'_>, area: Rect, active: CategoryFilter) {
    let mut titles = vec!["All".to_string()];
    titles.extend(Category::ALL.iter().map(|c| c.label().to_string()));

    let selected = match active {
        CategoryFilter::All => 0,
        CategoryFilter::Only(category) => {
            1 + Category::ALL
                .iter()
                .position(|c| *c == category)
                .unwrap_or(0)
        }
    };

    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(MUTED_TEXT))
        .highlight_style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

fn render_status_line(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let books = app.books();
    let line = match &books.phase {
        CatalogPhase::Failed(message) => Line::from(Span::styled(
            format!("Load failed: {message}"),
            Style::default().fg(ERROR_RED),
        )),
        CatalogPhase::Loading if !books.books.is_empty() => Line::from(Span::styled(
            format!("Refreshing{}", app.loading_dots()),
            Style::default().fg(MUTED_TEXT),
        )),
        _ => Line::from(Span::styled(
            format!("{} books found", books.visible.len()),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let books = app.books();

    if books.is_loading() && books.books.is_empty() {
        let message = format!("Loading books{}", app.loading_dots());
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(MUTED_TEXT)))
                .alignment(Alignment::Center),
            area,
        );
        return;
    }

    if books.visible.is_empty() {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "No books found",
                Style::default().fg(HEADER_TEXT),
            )),
            Line::from(Span::styled(
                "Try adjusting your search or category filter",
                Style::default().fg(MUTED_TEXT),
            )),
        ];
        frame.render_widget(
            Paragraph::new(lines).alignment(Alignment::Center),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = books.visible.iter().map(book_item).collect();
    let list = List::new(items).highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut state = ListState::default();
    state.select(Some(books.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn book_item(book: &Book) -> ListItem<'static> {
    let mut title_spans = vec![Span::styled(
        book.title.clone(),
        Style::default()
            .fg(HEADER_TEXT)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(tag) = book.badge.tag() {
        title_spans.push(Span::raw("  "));
        title_spans.push(Span::styled(
            format!("[{tag}]"),
            Style::default().fg(badge_color(book.badge)),
        ));
    }

    let mut lines = vec![Line::from(title_spans)];
    lines.push(Line::from(vec![
        Span::styled(
            format!("by {}", book.author),
            Style::default().fg(MUTED_TEXT),
        ),
        Span::raw("  "),
        Span::styled(star_line(book.rating), Style::default().fg(STAR_YELLOW)),
        Span::styled(
            format!(" ({})", book.rating),
            Style::default().fg(MUTED_TEXT),
        ),
    ]));
    if let Some(description) = &book.description {
        lines.push(Line::from(Span::styled(
            description.clone(),
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        )));
    }
    lines.push(Line::from(Span::styled(
        format!("${:.2}", book.price),
        Style::default()
            .fg(PRICE_GREEN)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    ListItem::new(Text::from(lines))
}

fn badge_color(badge: Badge) -> ratatui::style::Color {
    match badge {
        Badge::New => BADGE_NEW,
        Badge::Popular => BADGE_POPULAR,
        Badge::Recommended => BADGE_RECOMMENDED,
        Badge::None => MUTED_TEXT,
    }
}
