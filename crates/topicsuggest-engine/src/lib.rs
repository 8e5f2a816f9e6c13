//! Suggestion aggregation over the heading index and the two thesaurus
//! term fields.
//!
//! Raw candidate terms stream in from three independent sources and are
//! collapsed onto a stem-keyed map: equivalent terms merge into one
//! [`Suggestion`] carrying the union of their source tags and the shortest
//! surface form seen. Paginated rounds seed the map from the previously
//! returned batch, so nothing already surfaced is ever duplicated and a
//! later source can still attach its tag to a known suggestion. Each round
//! also corrects every source's reported match total by the number of
//! stems that source genuinely introduced, which is what keeps "give me N
//! more" requests honest after deduplication.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use anyhow::Result;
use tracing::debug;

use topicsuggest_core::traits::{FieldTermLookup, PrefixSearch, Stemmer, SuggestionService};
use topicsuggest_core::types::{
    RunningTotal, SearchType, Suggestion, TermBatch, FIELD_FULL_TERM, FIELD_HEADING, FIELD_ROOT,
};

/// How the per-source remaining-count correction is computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountCorrection {
    /// Subtract the number of stems each source inserted during the merge
    /// pass. A term that collapses into an already-known stem is not a new
    /// remaining match, so it must not be paid for twice.
    #[default]
    MergeInsertions,
    /// Merge first, then replay each fetched batch and subtract the replay
    /// pass's insertion count. Insertion is idempotent, so the replay finds
    /// every stem already present and the subtraction is always zero,
    /// leaving the raw source totals uncorrected. Kept selectable for
    /// callers that depend on that accounting.
    Replay,
}

impl CountCorrection {
    /// Parse the `suggest.count_correction` config value.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "merge" => Some(Self::MergeInsertions),
            "replay" => Some(Self::Replay),
            _ => None,
        }
    }
}

/// Aggregates type-ahead suggestions from a heading index and a thesaurus.
///
/// Sources are merged in a fixed priority order: heading terms first
/// (tagged [`SearchType::Simple`]), then thesaurus `root` terms
/// ([`SearchType::Extended`]), then thesaurus `fullTerm` terms
/// ([`SearchType::Full`]). The working map is owned by each call and the
/// output is always ascending by stem, so identical inputs produce
/// identical pages.
pub struct TopicSuggester<H, T>
where
    H: PrefixSearch,
    T: FieldTermLookup,
{
    headings: H,
    thesaurus: T,
    stemmer: Box<dyn Stemmer>,
    correction: CountCorrection,
}

impl<H, T> TopicSuggester<H, T>
where
    H: PrefixSearch,
    T: FieldTermLookup,
{
    pub fn new(headings: H, thesaurus: T, stemmer: Box<dyn Stemmer>) -> Self {
        Self { headings, thesaurus, stemmer, correction: CountCorrection::default() }
    }

    pub fn with_correction(mut self, correction: CountCorrection) -> Self {
        self.correction = correction;
        self
    }

    /// First page: straight prefix completions from all three sources,
    /// merged and deduplicated. `max` bounds each source query, not the
    /// merged result, so the page holds at most 3×`max` suggestions.
    pub fn exact_terms(&self, prefix: &str, max: usize) -> Result<Vec<Suggestion>> {
        let mut suggestions = BTreeMap::new();

        let headings = self.headings.prefix_terms(FIELD_HEADING, prefix, max)?;
        let roots = self.thesaurus.field_terms(true, false, FIELD_ROOT, prefix, max)?;
        let fulls = self.thesaurus.field_terms(true, false, FIELD_FULL_TERM, prefix, max)?;

        self.merge_terms(&mut suggestions, &headings.terms, SearchType::Simple);
        self.merge_terms(&mut suggestions, &roots.terms, SearchType::Extended);
        self.merge_terms(&mut suggestions, &fulls.terms, SearchType::Full);

        debug!(prefix, merged = suggestions.len(), "exact-terms page assembled");
        Ok(suggestions.into_values().collect())
    }

    /// Subsequent pages: seed the working map with everything already
    /// surfaced, fetch up to `left_to_collect` further terms per source,
    /// merge, and return the full set alongside the updated accumulator.
    ///
    /// The returned [`RunningTotal`] carries this round's summed corrected
    /// counts: each source's reported total minus the stems it genuinely
    /// introduced (under [`CountCorrection::MergeInsertions`]).
    pub fn collect_non_exact(
        &self,
        totals: RunningTotal,
        prefix: &str,
        already_retrieved: &[Suggestion],
        left_to_collect: usize,
    ) -> Result<(Vec<Suggestion>, RunningTotal)> {
        let mut suggestions = BTreeMap::new();
        self.seed_existing(&mut suggestions, already_retrieved);

        let headings = self.headings.prefix_terms(FIELD_HEADING, prefix, left_to_collect)?;
        let roots = self.thesaurus.field_terms(false, true, FIELD_ROOT, prefix, left_to_collect)?;
        let fulls =
            self.thesaurus.field_terms(false, true, FIELD_FULL_TERM, prefix, left_to_collect)?;

        let added_simple = self.merge_terms(&mut suggestions, &headings.terms, SearchType::Simple);
        let added_extended = self.merge_terms(&mut suggestions, &roots.terms, SearchType::Extended);
        let added_full = self.merge_terms(&mut suggestions, &fulls.terms, SearchType::Full);

        let remaining = match self.correction {
            CountCorrection::MergeInsertions => {
                corrected(&headings, added_simple)
                    + corrected(&roots, added_extended)
                    + corrected(&fulls, added_full)
            }
            CountCorrection::Replay => {
                let re_simple =
                    self.merge_terms(&mut suggestions, &headings.terms, SearchType::Simple);
                let re_extended =
                    self.merge_terms(&mut suggestions, &roots.terms, SearchType::Extended);
                let re_full = self.merge_terms(&mut suggestions, &fulls.terms, SearchType::Full);
                corrected(&headings, re_simple)
                    + corrected(&roots, re_extended)
                    + corrected(&fulls, re_full)
            }
        };

        debug!(
            prefix,
            seeded = already_retrieved.len(),
            merged = suggestions.len(),
            previous_remaining = totals.remaining,
            remaining,
            "non-exact page assembled"
        );
        Ok((suggestions.into_values().collect(), RunningTotal { remaining }))
    }

    /// Re-insert previously surfaced suggestions under their stems so new
    /// batches merge into them instead of duplicating them.
    fn seed_existing(
        &self,
        suggestions: &mut BTreeMap<String, Suggestion>,
        already_retrieved: &[Suggestion],
    ) {
        for suggestion in already_retrieved {
            let stem = self.stemmer.stem(&suggestion.value);
            suggestions.insert(stem, suggestion.clone());
        }
    }

    /// Merge a batch of raw terms under one source tag. Returns how many
    /// terms introduced a previously unseen stem; terms collapsing into a
    /// known stem only union the tag and may shorten the surface form.
    fn merge_terms(
        &self,
        suggestions: &mut BTreeMap<String, Suggestion>,
        terms: &[String],
        search_type: SearchType,
    ) -> usize {
        let mut added = 0;
        for term in terms {
            let stem = self.stemmer.stem(term);
            match suggestions.entry(stem) {
                Entry::Vacant(slot) => {
                    added += 1;
                    slot.insert(Suggestion::new(term.clone(), search_type));
                }
                Entry::Occupied(mut slot) => {
                    let existing = slot.get_mut();
                    existing.search_types.insert(search_type);
                    // Strictly shorter in characters; ties keep the
                    // earliest-seen form.
                    if char_len(term) < char_len(&existing.value) {
                        existing.value = term.clone();
                    }
                }
            }
        }
        added
    }
}

impl<H, T> SuggestionService for TopicSuggester<H, T>
where
    H: PrefixSearch,
    T: FieldTermLookup,
{
    fn exact_terms(&self, prefix: &str, max: usize) -> Result<Vec<Suggestion>> {
        Self::exact_terms(self, prefix, max)
    }

    fn collect_non_exact(
        &self,
        totals: RunningTotal,
        prefix: &str,
        already_retrieved: &[Suggestion],
        left_to_collect: usize,
    ) -> Result<(Vec<Suggestion>, RunningTotal)> {
        Self::collect_non_exact(self, totals, prefix, already_retrieved, left_to_collect)
    }
}

/// The externally returned page for a paginated round. Seeding already
/// folded every previously surfaced suggestion into the collected batch,
/// so the earlier exact-match pass is dropped rather than merged twice.
pub fn format_page(_exact_pass: &[Suggestion], collected: Vec<Suggestion>) -> Vec<Suggestion> {
    collected
}

fn corrected(batch: &TermBatch, added: usize) -> usize {
    batch.total_count.saturating_sub(added)
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}
