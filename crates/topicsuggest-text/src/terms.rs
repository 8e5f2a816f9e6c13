//! Term-source adapters over the on-disk indexes.
//!
//! Candidate terms come straight out of the tantivy term dictionaries, not
//! from document search: a suggestion prefix needs the distinct indexed
//! terms, and the dictionary already stores them sorted and deduplicated
//! per segment. Totals report the distinct matching terms before the `max`
//! cap is applied.

use anyhow::Result;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tantivy::{Index, IndexReader, Searcher};
use tracing::debug;

use topicsuggest_core::error::Error;
use topicsuggest_core::traits::{FieldTermLookup, PrefixSearch};
use topicsuggest_core::types::{TermBatch, FIELD_FULL_TERM, FIELD_ROOT};

use crate::schema::register_tokenizers;

/// Prefix scans over the heading index term dictionary.
pub struct HeadingTerms {
	reader: IndexReader,
}

impl HeadingTerms {
	pub fn open(index_dir: PathBuf) -> Result<Self, anyhow::Error> {
		let index = Index::open_in_dir(&index_dir)?;
		register_tokenizers(&index);
		let reader = index.reader()?;
		Ok(Self { reader })
	}
}

impl PrefixSearch for HeadingTerms {
	fn prefix_terms(&self, field: &str, prefix: &str, max: usize) -> anyhow::Result<TermBatch> {
		let searcher = self.reader.searcher();
		let batch = scan_prefix(&searcher, field, &prefix.to_lowercase(), max, true)?;
		debug!(field, prefix, matched = batch.total_count, "heading prefix scan");
		Ok(batch)
	}
}

/// Term lookups against the `root` and `fullTerm` fields of the thesaurus
/// index. An exact lookup is a straight prefix scan of the dictionary; a
/// non-exact lookup widens to entries containing any word that starts with
/// the prefix, which requires walking the whole dictionary for the field.
pub struct ThesaurusTerms {
	reader: IndexReader,
}

impl ThesaurusTerms {
	pub fn open(index_dir: PathBuf) -> Result<Self, anyhow::Error> {
		let index = Index::open_in_dir(&index_dir)?;
		register_tokenizers(&index);
		let reader = index.reader()?;
		Ok(Self { reader })
	}
}

impl FieldTermLookup for ThesaurusTerms {
	fn field_terms(
		&self,
		exact: bool,
		with_counts: bool,
		field: &str,
		prefix: &str,
		max: usize,
	) -> anyhow::Result<TermBatch> {
		if field != FIELD_ROOT && field != FIELD_FULL_TERM {
			return Err(Error::UnknownField(field.to_string()).into());
		}
		let searcher = self.reader.searcher();
		let prefix = prefix.to_lowercase();
		let batch = if exact {
			scan_prefix(&searcher, field, &prefix, max, with_counts)?
		} else {
			scan_word_starts(&searcher, field, &prefix, max, with_counts)?
		};
		debug!(field, prefix, exact, matched = batch.total_count, "thesaurus term scan");
		Ok(batch)
	}
}

fn scan_prefix(
	searcher: &Searcher,
	field_name: &str,
	prefix: &str,
	max: usize,
	with_counts: bool,
) -> Result<TermBatch, anyhow::Error> {
	let field = searcher.schema().get_field(field_name)?;
	let mut matched = BTreeSet::new();
	for segment_reader in searcher.segment_readers() {
		let inverted = segment_reader.inverted_index(field)?;
		let mut stream = inverted.terms().range().ge(prefix.as_bytes()).into_stream()?;
		let mut segment_matches = 0usize;
		while stream.advance() {
			let key = stream.key();
			if !key.starts_with(prefix.as_bytes()) {
				break;
			}
			// Without a count request the walk can stop at the cap; the
			// merged first `max` terms are still correct because each
			// segment streams ascending.
			if !with_counts && segment_matches >= max {
				break;
			}
			matched.insert(String::from_utf8_lossy(key).into_owned());
			segment_matches += 1;
		}
	}
	Ok(batch_from(matched, max, with_counts))
}

fn scan_word_starts(
	searcher: &Searcher,
	field_name: &str,
	prefix: &str,
	max: usize,
	with_counts: bool,
) -> Result<TermBatch, anyhow::Error> {
	let field = searcher.schema().get_field(field_name)?;
	let mut matched = BTreeSet::new();
	for segment_reader in searcher.segment_readers() {
		let inverted = segment_reader.inverted_index(field)?;
		let mut stream = inverted.terms().stream()?;
		let mut segment_matches = 0usize;
		while stream.advance() {
			if !with_counts && segment_matches >= max {
				break;
			}
			let term = String::from_utf8_lossy(stream.key());
			if word_starts_with(&term, prefix) {
				matched.insert(term.into_owned());
				segment_matches += 1;
			}
		}
	}
	Ok(batch_from(matched, max, with_counts))
}

fn word_starts_with(term: &str, prefix: &str) -> bool {
	term.starts_with(prefix)
		|| term
			.split_whitespace()
			.any(|word| word.trim_start_matches(|c: char| !c.is_alphanumeric()).starts_with(prefix))
}

fn batch_from(matched: BTreeSet<String>, max: usize, with_counts: bool) -> TermBatch {
	let total = matched.len();
	let terms: Vec<String> = matched.into_iter().take(max).collect();
	if with_counts {
		TermBatch::new(terms, total)
	} else {
		TermBatch::exact(terms)
	}
}
