use crate::catalog::{Book, CategoryFilter};
use crate::ui::mvi::UiState;

/// Where the browsing catalog stands between loads.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogPhase {
    /// Nothing requested yet; the first visit to the tab triggers a load.
    #[default]
    Idle,
    Loading,
    Ready,
    /// The last load failed; any previously loaded books stay visible.
    Failed(String),
}

/// State of the books tab: the loaded catalog, the active filters, and the
/// subset they leave visible.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BooksState {
    pub phase: CatalogPhase,
    /// Full catalog snapshot from the most recent successful load.
    pub books: Vec<Book>,
    /// `books` narrowed by query and category, in catalog order.
    pub visible: Vec<Book>,
    pub query: String,
    pub category: CategoryFilter,
    /// Index into `visible`; meaningless when it is empty.
    pub selected: usize,
    /// Load generation this state last requested; stale replies are dropped.
    pub generation: u64,
}

impl UiState for BooksState {}

impl BooksState {
    pub fn selected_book(&self) -> Option<&Book> {
        self.visible.get(self.selected)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, CatalogPhase::Loading)
    }
}
