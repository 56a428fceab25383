use crate::ui::app::{Screen, Tab};
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, screen: Screen, tab: Tab, user: Option<&str>) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let brand_style = Style::default().fg(ACCENT).add_modifier(Modifier::BOLD);

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled("📚 Paperback", brand_style),
            Span::styled("  │  ", separator_style),
        ];

        match screen {
            Screen::Login => spans.push(Span::styled("Sign In", text_style)),
            Screen::Register => spans.push(Span::styled("Create Account", text_style)),
            Screen::Tabs => {
                let (home_style, books_style) = match tab {
                    Tab::Home => (brand_style, Style::default().fg(MUTED_TEXT)),
                    Tab::Books => (Style::default().fg(MUTED_TEXT), brand_style),
                };
                spans.push(Span::styled("Home", home_style));
                spans.push(Span::styled("   ", text_style));
                spans.push(Span::styled("Books", books_style));
            }
        }

        if let Some(name) = user {
            spans.push(Span::styled("  │  ", separator_style));
            spans.push(Span::styled(name.to_string(), text_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
