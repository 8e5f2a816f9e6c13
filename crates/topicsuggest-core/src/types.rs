//! Domain types shared by the term sources and the suggestion engine.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Field name of the heading full-text index.
pub const FIELD_HEADING: &str = "heading";
/// Root-term field of the thesaurus index.
pub const FIELD_ROOT: &str = "root";
/// Full-term field of the thesaurus index.
pub const FIELD_FULL_TERM: &str = "fullTerm";

/// Indicates which term source produced a suggestion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "UPPERCASE")]
pub enum SearchType {
    /// Heading-index prefix scan.
    Simple,
    /// Thesaurus `root` field.
    Extended,
    /// Thesaurus `fullTerm` field.
    Full,
}

/// A single type-ahead suggestion.
///
/// Two suggestions are the same entity iff their stems are equal; `value`
/// holds the shortest surface form observed among all equivalent terms, and
/// `search_types` unions every source that contributed one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub value: String,
    pub search_types: BTreeSet<SearchType>,
}

impl Suggestion {
    pub fn new(value: impl Into<String>, search_type: SearchType) -> Self {
        Self { value: value.into(), search_types: BTreeSet::from([search_type]) }
    }
}

/// Raw terms matched by one source for a prefix, with the source's own
/// total match count. `total_count` may exceed `terms.len()` when the
/// source caps the returned terms below its real match count, never the
/// other way around.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TermBatch {
    pub terms: Vec<String>,
    pub total_count: usize,
}

impl TermBatch {
    pub fn new(terms: Vec<String>, total_count: usize) -> Self {
        let total_count = total_count.max(terms.len());
        Self { terms, total_count }
    }

    /// A batch whose source reports no matches beyond the terms themselves.
    pub fn exact(terms: Vec<String>) -> Self {
        let total_count = terms.len();
        Self { terms, total_count }
    }
}

/// Remaining-count accumulator threaded by the caller across pagination
/// calls. Each paginated round returns a fresh value; nothing is shared.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunningTotal {
    pub remaining: usize,
}

impl RunningTotal {
    /// Seed an accumulator for a page that will request up to
    /// `left_to_collect` terms per source.
    pub fn for_page(left_to_collect: usize) -> Self {
        Self { remaining: left_to_collect }
    }
}
