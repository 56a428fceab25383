//! Catalog domain: book records and the pure filtering helpers the
//! browsing screens are built on.

mod filter;
mod item;
mod rating;

pub use filter::filter_catalog;
pub use item::{Badge, Book, Category, CategoryFilter, ReadingStats};
pub use rating::{star_glyphs, star_line, StarGlyph};
