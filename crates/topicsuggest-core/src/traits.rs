use crate::types::{RunningTotal, Suggestion, TermBatch};

/// Prefix scan over one field of a full-text index.
pub trait PrefixSearch: Send + Sync {
    fn prefix_terms(&self, field: &str, prefix: &str, max: usize) -> anyhow::Result<TermBatch>;
}

/// Term lookup against a named field of the thesaurus index.
///
/// `exact` restricts the scan to straight prefix completions; the non-exact
/// variant may match the prefix deeper inside a term. `with_counts` asks the
/// source to report its real match total alongside the capped term list.
pub trait FieldTermLookup: Send + Sync {
    fn field_terms(
        &self,
        exact: bool,
        with_counts: bool,
        field: &str,
        prefix: &str,
        max: usize,
    ) -> anyhow::Result<TermBatch>;
}

/// Deterministic reduction of a surface term to its canonical stem.
/// Same input always yields the same output; no other contract.
pub trait Stemmer: Send + Sync {
    fn stem(&self, term: &str) -> String;
}

/// The suggestion boundary exposed to callers: a first page of exact
/// completions, then incremental "give me N more" rounds threading a
/// [`RunningTotal`] accumulator by value.
pub trait SuggestionService: Send + Sync {
    fn exact_terms(&self, prefix: &str, max: usize) -> anyhow::Result<Vec<Suggestion>>;
    fn collect_non_exact(
        &self,
        totals: RunningTotal,
        prefix: &str,
        already_retrieved: &[Suggestion],
        left_to_collect: usize,
    ) -> anyhow::Result<(Vec<Suggestion>, RunningTotal)>;
}
