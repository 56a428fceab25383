use crate::catalog::{Book, ReadingStats};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum HomeIntent {
    LoadStarted,
    DashboardLoaded {
        featured: Vec<Book>,
        stats: ReadingStats,
    },
    ActionNext,
    ActionPrev,
    ToggleMenu,
    CloseMenu,
}

impl Intent for HomeIntent {}
