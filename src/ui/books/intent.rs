use crate::catalog::Book;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum BooksIntent {
    /// A catalog request went out under this generation.
    LoadStarted { generation: u64 },
    /// The worker replied. Only the generation last requested is applied;
    /// anything older lost the race and is dropped.
    CatalogLoaded {
        generation: u64,
        result: Result<Vec<Book>, String>,
    },
    /// Printable character appended to the search query.
    QueryInput(char),
    QueryBackspace,
    QueryClear,
    CategoryNext,
    CategoryPrev,
    SelectNext,
    SelectPrev,
}

impl Intent for BooksIntent {}
