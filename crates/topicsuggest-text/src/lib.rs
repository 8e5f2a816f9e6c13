//! topicsuggest-text
//!
//! Tantivy-backed heading and thesaurus term indexes plus the term-source
//! adapters the suggestion engine consumes. See `index` for building and
//! `terms` for the dictionary scans.

pub mod index;
pub mod schema;
pub mod terms;

pub use index::{HeadingIndexer, ThesaurusIndexer};
pub use terms::{HeadingTerms, ThesaurusTerms};
