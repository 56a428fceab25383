use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use serde::Deserialize;

use crate::catalog::{Badge, Book, Category, ReadingStats};

/// Errors surfaced when a catalog load fails.
///
/// These reach the user as a dismissible notice on the books screen; a load
/// failure is never fatal to the application.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Catalog validation failed: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    books: Vec<Book>,
}

/// Supplies the ordered book collections the screens render.
///
/// The built-in mock set stands in for a backend; an optional TOML file can
/// replace the browsing catalog wholesale. Each load returns a fresh copy,
/// so callers own their snapshot for the duration of a screen session.
#[derive(Debug, Clone, Default)]
pub struct BookStore {
    catalog_file: Option<PathBuf>,
}

impl BookStore {
    pub fn new(catalog_file: Option<PathBuf>) -> Self {
        Self { catalog_file }
    }

    /// The full browsing catalog, in display order.
    pub fn catalog(&self) -> Result<Vec<Book>, LoadError> {
        match &self.catalog_file {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| LoadError::ReadError {
                    path: path.clone(),
                    source: e,
                })?;
                let parsed: CatalogFile =
                    toml::from_str(&content).map_err(|e| LoadError::ParseError {
                        path: path.clone(),
                        source: e,
                    })?;
                validate_books(&parsed.books)?;
                Ok(parsed.books)
            }
            None => Ok(mock_catalog()),
        }
    }

    /// The badge-carrying rail on the home dashboard.
    pub fn featured(&self) -> Vec<Book> {
        mock_featured()
    }

    pub fn stats(&self) -> ReadingStats {
        ReadingStats {
            total_books: 1247,
            read_books: 23,
            favorite_genre: "Science Fiction".to_string(),
        }
    }
}

fn validate_books(books: &[Book]) -> Result<(), LoadError> {
    for book in books {
        if book.id.trim().is_empty() {
            return Err(LoadError::ValidationError {
                message: "Every book needs a non-empty id".to_string(),
            });
        }
        if book.title.trim().is_empty() || book.author.trim().is_empty() {
            return Err(LoadError::ValidationError {
                message: format!("Book '{}' needs a title and an author", book.id),
            });
        }
        if book.price < 0.0 {
            return Err(LoadError::ValidationError {
                message: format!("Book '{}' has a negative price", book.id),
            });
        }
        if !(0.0..=5.0).contains(&book.rating) {
            return Err(LoadError::ValidationError {
                message: format!("Book '{}' has a rating outside 0-5", book.id),
            });
        }
    }
    Ok(())
}

fn book(
    id: &str,
    title: &str,
    author: &str,
    price: f64,
    category: Option<Category>,
    rating: f64,
    description: &str,
    badge: Badge,
) -> Book {
    Book {
        id: id.to_string(),
        title: title.to_string(),
        author: author.to_string(),
        price,
        category,
        rating,
        description: (!description.is_empty()).then(|| description.to_string()),
        badge,
    }
}

fn mock_catalog() -> Vec<Book> {
    vec![
        book(
            "1",
            "The Great Gatsby",
            "F. Scott Fitzgerald",
            12.99,
            Some(Category::Fiction),
            4.5,
            "A classic American novel set in the Jazz Age",
            Badge::None,
        ),
        book(
            "2",
            "A Brief History of Time",
            "Stephen Hawking",
            15.99,
            Some(Category::Science),
            4.8,
            "An exploration of cosmology and theoretical physics",
            Badge::None,
        ),
        book(
            "3",
            "Steve Jobs",
            "Walter Isaacson",
            18.99,
            Some(Category::Biography),
            4.6,
            "The official biography of Apple co-founder Steve Jobs",
            Badge::None,
        ),
        book(
            "4",
            "Clean Code",
            "Robert C. Martin",
            24.99,
            Some(Category::Technology),
            4.7,
            "A handbook of agile software craftsmanship",
            Badge::None,
        ),
        book(
            "5",
            "Sapiens",
            "Yuval Noah Harari",
            16.99,
            Some(Category::History),
            4.4,
            "A brief history of humankind",
            Badge::None,
        ),
        book(
            "6",
            "To Kill a Mockingbird",
            "Harper Lee",
            13.99,
            Some(Category::Fiction),
            4.9,
            "A timeless story of racial injustice and childhood",
            Badge::None,
        ),
    ]
}

fn mock_featured() -> Vec<Book> {
    vec![
        book(
            "f1",
            "The Midnight Library",
            "Matt Haig",
            14.99,
            None,
            4.5,
            "",
            Badge::New,
        ),
        book(
            "f2",
            "Atomic Habits",
            "James Clear",
            16.99,
            None,
            4.8,
            "",
            Badge::Popular,
        ),
        book(
            "f3",
            "The Silent Patient",
            "Alex Michaelides",
            13.99,
            None,
            4.2,
            "",
            Badge::Recommended,
        ),
    ]
}
