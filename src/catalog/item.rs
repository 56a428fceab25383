use serde::{Deserialize, Serialize};

/// A single sellable book record shown in listings.
///
/// Records are immutable for the duration of a screen session and replaced
/// wholesale when the catalog is reloaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Unique identifier within one catalog load.
    pub id: String,
    pub title: String,
    pub author: String,
    /// Non-negative, currency-agnostic.
    pub price: f64,
    #[serde(default)]
    pub category: Option<Category>,
    /// In [0, 5]; halves are common.
    pub rating: f64,
    #[serde(default)]
    pub description: Option<String>,
    /// Promotional marker rendered on the item, if any.
    #[serde(default)]
    pub badge: Badge,
}

/// The fixed genre enumeration the catalog is tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Fiction,
    Science,
    History,
    Technology,
    Biography,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Fiction,
        Category::Science,
        Category::History,
        Category::Technology,
        Category::Biography,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::Fiction => "Fiction",
            Category::Science => "Science",
            Category::History => "History",
            Category::Technology => "Technology",
            Category::Biography => "Biography",
        }
    }
}

/// Single-select facet narrowing the catalog to one genre, or everything.
///
/// Exactly one filter is active at a time; the owning screen holds the
/// current value and passes it into [`filter_catalog`](super::filter_catalog)
/// on every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Option<Category>) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => category == Some(wanted),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Cycle forward through All and the five categories, wrapping around.
    pub fn next(self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::ALL[0]),
            CategoryFilter::Only(current) => {
                let idx = Category::ALL.iter().position(|c| *c == current);
                match idx {
                    Some(i) if i + 1 < Category::ALL.len() => {
                        CategoryFilter::Only(Category::ALL[i + 1])
                    }
                    _ => CategoryFilter::All,
                }
            }
        }
    }

    /// Cycle backward, wrapping around.
    pub fn prev(self) -> Self {
        match self {
            CategoryFilter::All => CategoryFilter::Only(Category::ALL[Category::ALL.len() - 1]),
            CategoryFilter::Only(current) => {
                let idx = Category::ALL.iter().position(|c| *c == current);
                match idx {
                    Some(0) | None => CategoryFilter::All,
                    Some(i) => CategoryFilter::Only(Category::ALL[i - 1]),
                }
            }
        }
    }
}

/// Promotional marker on a catalog item.
///
/// The upstream data shape allowed independent new/popular/recommended
/// flags; they were never meaningfully combined, so a single variant
/// resolves which one renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Badge {
    #[default]
    None,
    New,
    Popular,
    Recommended,
}

impl Badge {
    /// Short tag rendered on featured items, if any.
    pub fn tag(self) -> Option<&'static str> {
        match self {
            Badge::None => None,
            Badge::New => Some("NEW"),
            Badge::Popular => Some("HOT"),
            Badge::Recommended => Some("★"),
        }
    }
}

/// Aggregate numbers shown on the home dashboard.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReadingStats {
    pub total_books: u32,
    pub read_books: u32,
    pub favorite_genre: String,
}
