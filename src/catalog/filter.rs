use super::item::{Book, CategoryFilter};

/// Produce the visible subset of `items` for the given search query and
/// category selection.
///
/// Both constraints AND-combine: the category narrows first, then the query
/// is matched case-insensitively as a substring of the title or the author.
/// A query that trims to nothing applies no text filter at all. The relative
/// order of survivors is the input order; nothing is re-sorted.
///
/// Zero survivors is an ordinary outcome: the caller renders an empty
/// state, not an error.
pub fn filter_catalog(items: &[Book], query: &str, category: CategoryFilter) -> Vec<Book> {
    let needle = query.trim().to_lowercase();

    items
        .iter()
        .filter(|book| category.matches(book.category))
        .filter(|book| {
            needle.is_empty()
                || book.title.to_lowercase().contains(&needle)
                || book.author.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}
