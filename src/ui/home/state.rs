use crate::catalog::{Book, ReadingStats};
use crate::ui::mvi::UiState;

/// One entry in the quick-action grid.
#[derive(Clone, Copy)]
pub struct QuickAction {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub kind: QuickActionKind,
}

#[derive(Clone, Copy)]
pub enum QuickActionKind {
    /// Jump straight to the books tab.
    BrowseBooks,
    /// Not built yet; activating it surfaces this notice.
    ComingSoon(&'static str),
}

pub const QUICK_ACTIONS: [QuickAction; 4] = [
    QuickAction {
        icon: "📚",
        title: "Browse Books",
        description: "Explore our collection",
        kind: QuickActionKind::BrowseBooks,
    },
    QuickAction {
        icon: "📖",
        title: "My Reading List",
        description: "Books you want to read",
        kind: QuickActionKind::ComingSoon("Reading list feature is coming soon!"),
    },
    QuickAction {
        icon: "⭐",
        title: "Recommendations",
        description: "Personalized for you",
        kind: QuickActionKind::ComingSoon("Recommendations feature is coming soon!"),
    },
    QuickAction {
        icon: "🆕",
        title: "New Releases",
        description: "Latest additions",
        kind: QuickActionKind::ComingSoon("New releases section is coming soon!"),
    },
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DashboardPhase {
    #[default]
    Idle,
    Loading,
    Ready,
}

/// State of the home tab: dashboard data, the quick-action cursor, and the
/// profile menu toggle.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    pub phase: DashboardPhase,
    pub featured: Vec<Book>,
    pub stats: ReadingStats,
    pub action_focus: usize,
    pub menu_open: bool,
}

impl UiState for HomeState {}
