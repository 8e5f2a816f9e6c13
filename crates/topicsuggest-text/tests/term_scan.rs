use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use topicsuggest_core::stem::SnowballStemmer;
use topicsuggest_core::traits::{FieldTermLookup, PrefixSearch};
use topicsuggest_core::types::{
    RunningTotal, SearchType, FIELD_FULL_TERM, FIELD_HEADING, FIELD_ROOT,
};
use topicsuggest_engine::TopicSuggester;
use topicsuggest_text::{HeadingIndexer, HeadingTerms, ThesaurusIndexer, ThesaurusTerms};

fn build_indexes(tmp: &TempDir) -> (PathBuf, PathBuf) {
    let data_dir = tmp.path().join("data");
    fs::create_dir_all(data_dir.join("headings")).expect("mkdir");
    fs::create_dir_all(data_dir.join("thesaurus")).expect("mkdir");
    fs::write(
        data_dir.join("headings/headings.txt"),
        "Faith of our fathers\nFaithful servants\nGrace abounding\nHope\n",
    )
    .expect("write headings");
    fs::write(
        data_dir.join("thesaurus/entries.tsv"),
        "Faith\tFaith, trial of\nGrace\tGrace, divine\nMercy\n",
    )
    .expect("write thesaurus");

    let heading_index = tmp.path().join("indexes/heading");
    let thesaurus_index = tmp.path().join("indexes/thesaurus");
    let indexer = HeadingIndexer::new(heading_index.clone()).expect("heading indexer");
    let count = indexer.index_lines(&data_dir.join("headings")).expect("index headings");
    assert_eq!(count, 4);
    let indexer = ThesaurusIndexer::new(thesaurus_index.clone()).expect("thesaurus indexer");
    let count = indexer.index_entries(&data_dir.join("thesaurus")).expect("index entries");
    assert_eq!(count, 3);
    (heading_index, thesaurus_index)
}

#[test]
fn heading_prefix_scan_caps_terms_but_counts_all() {
    let tmp = TempDir::new().expect("tempdir");
    let (heading_index, _) = build_indexes(&tmp);
    let headings = HeadingTerms::open(heading_index).expect("open");

    let batch = headings.prefix_terms(FIELD_HEADING, "Fai", 10).expect("scan");
    assert_eq!(batch.terms, vec!["faith", "faithful"], "lowercased, ascending");
    assert_eq!(batch.total_count, 2);

    // "f" matches faith, faithful and fathers; the cap trims the terms,
    // the total still reports every match.
    let batch = headings.prefix_terms(FIELD_HEADING, "f", 1).expect("scan");
    assert_eq!(batch.terms, vec!["faith"]);
    assert_eq!(batch.total_count, 3);
}

#[test]
fn thesaurus_exact_scan_is_straight_prefix_completion() {
    let tmp = TempDir::new().expect("tempdir");
    let (_, thesaurus_index) = build_indexes(&tmp);
    let thesaurus = ThesaurusTerms::open(thesaurus_index).expect("open");

    let batch = thesaurus.field_terms(true, false, FIELD_ROOT, "Fa", 10).expect("scan");
    assert_eq!(batch.terms, vec!["faith"]);
    assert_eq!(batch.total_count, 1);

    let batch = thesaurus.field_terms(true, true, FIELD_FULL_TERM, "grace", 10).expect("scan");
    assert_eq!(batch.terms, vec!["grace, divine"]);
    assert_eq!(batch.total_count, 1);

    // Mid-term words are invisible to the exact variant.
    let batch = thesaurus.field_terms(true, true, FIELD_FULL_TERM, "trial", 10).expect("scan");
    assert!(batch.terms.is_empty());
    assert_eq!(batch.total_count, 0);
}

#[test]
fn thesaurus_non_exact_scan_matches_word_starts() {
    let tmp = TempDir::new().expect("tempdir");
    let (_, thesaurus_index) = build_indexes(&tmp);
    let thesaurus = ThesaurusTerms::open(thesaurus_index).expect("open");

    let batch = thesaurus.field_terms(false, true, FIELD_FULL_TERM, "trial", 10).expect("scan");
    assert_eq!(batch.terms, vec!["faith, trial of"]);
    assert_eq!(batch.total_count, 1);
}

#[test]
fn single_column_entries_index_both_fields() {
    let tmp = TempDir::new().expect("tempdir");
    let (_, thesaurus_index) = build_indexes(&tmp);
    let thesaurus = ThesaurusTerms::open(thesaurus_index).expect("open");

    let roots = thesaurus.field_terms(true, false, FIELD_ROOT, "mer", 10).expect("scan");
    assert_eq!(roots.terms, vec!["mercy"]);
    let fulls = thesaurus.field_terms(true, false, FIELD_FULL_TERM, "mer", 10).expect("scan");
    assert_eq!(fulls.terms, vec!["mercy"]);
}

#[test]
fn unknown_field_is_rejected() {
    let tmp = TempDir::new().expect("tempdir");
    let (_, thesaurus_index) = build_indexes(&tmp);
    let thesaurus = ThesaurusTerms::open(thesaurus_index).expect("open");

    let err = thesaurus.field_terms(true, false, "bogus", "fa", 10).expect_err("must fail");
    assert!(err.to_string().contains("Unknown term field"));
}

#[test]
fn suggestion_flow_over_real_indexes() {
    let tmp = TempDir::new().expect("tempdir");
    let (heading_index, thesaurus_index) = build_indexes(&tmp);
    let suggester = TopicSuggester::new(
        HeadingTerms::open(heading_index).expect("open headings"),
        ThesaurusTerms::open(thesaurus_index).expect("open thesaurus"),
        Box::new(SnowballStemmer::english()),
    );

    // First page: the heading tokens faith/faithful and the root entry
    // collapse onto one stem; the fullTerm entry is its own phrase.
    let page = suggester.exact_terms("fai", 20).expect("exact terms");
    let faith = page.iter().find(|s| s.value == "faith").expect("merged suggestion");
    assert!(faith.search_types.contains(&SearchType::Simple));
    assert!(faith.search_types.contains(&SearchType::Extended));
    assert!(!faith.search_types.contains(&SearchType::Full));

    // Paginated round for a fresh prefix: "grace" arrives from the heading
    // index and the root field (one stem, two tags) plus the fullTerm
    // phrase (a second stem). Only the root fetch has leftover capacity
    // after the correction: its term collapsed into an existing stem.
    let (page, totals) = suggester
        .collect_non_exact(RunningTotal::for_page(20), "grace", &[], 20)
        .expect("collect");
    assert_eq!(page.len(), 2);
    let grace = page.iter().find(|s| s.value == "grace").expect("grace");
    assert!(grace.search_types.contains(&SearchType::Simple));
    assert!(grace.search_types.contains(&SearchType::Extended));
    let phrase = page.iter().find(|s| s.value == "grace, divine").expect("phrase");
    assert!(phrase.search_types.contains(&SearchType::Full));
    assert_eq!(totals.remaining, 1);
}
