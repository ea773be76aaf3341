//! Shared matching utilities used across rules: property lookup with
//! fallback chains, string normalization, keyword tables, regex
//! classification, and WCAG color math.

pub mod color;
pub mod keywords;
pub mod patterns;
pub mod properties;
pub mod text;

pub use color::{contrast_ratio, Rgba};
pub use keywords::KeywordTable;
pub use properties::TextSource;
