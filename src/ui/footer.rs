use crate::ui::app::{Screen, Tab};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, area: Rect, screen: Screen, tab: Tab) -> Paragraph<'static> {
        let hints = hints_for(screen, tab);
        let version = format!("v{} ", VERSION);

        // Pad by char count, not byte count, so the version stays flush
        // right with unicode hints.
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

fn hints_for(screen: Screen, tab: Tab) -> &'static str {
    match (screen, tab) {
        (Screen::Login, _) => " Enter: Sign In │ Tab: Next Field │ Ctrl+N: Sign Up │ Ctrl+Q: Quit",
        (Screen::Register, _) => {
            " Enter: Create Account │ Tab: Next Field │ Esc: Back │ Ctrl+Q: Quit"
        }
        (Screen::Tabs, Tab::Home) => {
            " Tab: Switch Tab │ ←/→: Actions │ Enter: Open │ Ctrl+P: Profile │ Ctrl+Q: Quit"
        }
        (Screen::Tabs, Tab::Books) => {
            " Type: Search │ ←/→: Category │ ↑/↓: Select │ Enter: Add to Cart │ Ctrl+R: Refresh"
        }
    }
}
