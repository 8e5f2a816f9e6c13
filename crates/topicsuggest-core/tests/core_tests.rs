use serde_json::json;

use topicsuggest_core::config::{expand_path, resolve_with_base};
use topicsuggest_core::stem::SnowballStemmer;
use topicsuggest_core::traits::Stemmer;
use topicsuggest_core::types::{RunningTotal, SearchType, Suggestion, TermBatch};

#[test]
fn suggestion_wire_shape() {
    let mut suggestion = Suggestion::new("faith", SearchType::Simple);
    suggestion.search_types.insert(SearchType::Extended);

    let value = serde_json::to_value(&suggestion).expect("serialize");
    assert_eq!(
        value,
        json!({"value": "faith", "searchTypes": ["SIMPLE", "EXTENDED"]})
    );

    let back: Suggestion = serde_json::from_value(value).expect("deserialize");
    assert_eq!(back, suggestion);
}

#[test]
fn search_type_tags_serialize_uppercase() {
    assert_eq!(serde_json::to_value(SearchType::Simple).unwrap(), json!("SIMPLE"));
    assert_eq!(serde_json::to_value(SearchType::Extended).unwrap(), json!("EXTENDED"));
    assert_eq!(serde_json::to_value(SearchType::Full).unwrap(), json!("FULL"));
}

#[test]
fn term_batch_total_never_below_term_count() {
    let batch = TermBatch::new(vec!["a".into(), "b".into(), "c".into()], 1);
    assert_eq!(batch.total_count, 3);

    let batch = TermBatch::new(vec!["a".into()], 10);
    assert_eq!(batch.total_count, 10);

    let batch = TermBatch::exact(vec!["a".into(), "b".into()]);
    assert_eq!(batch.total_count, 2);
}

#[test]
fn running_total_seeds_from_left_to_collect() {
    assert_eq!(RunningTotal::for_page(25), RunningTotal { remaining: 25 });
}

#[test]
fn stemmer_is_deterministic() {
    let stemmer = SnowballStemmer::english();
    let first = stemmer.stem("faithfulness");
    let second = stemmer.stem("faithfulness");
    assert_eq!(first, second);
}

#[test]
fn stemmer_collapses_inflections() {
    let stemmer = SnowballStemmer::english();
    assert_eq!(stemmer.stem("faith"), stemmer.stem("faithful"));
    assert_eq!(stemmer.stem("faith"), stemmer.stem("faithfulness"));
    assert_eq!(stemmer.stem("running"), "run");
    assert_eq!(stemmer.stem("connected"), stemmer.stem("connection"));
}

#[test]
fn stemmer_language_table() {
    assert!(SnowballStemmer::supports("english"));
    assert!(SnowballStemmer::supports("german"));
    assert!(!SnowballStemmer::supports("klingon"));
    assert!(SnowballStemmer::for_language("klingon").is_none());
    assert!(SnowballStemmer::for_language("spanish").is_some());
}

#[test]
fn path_helpers_resolve_relative_against_base() {
    let base = std::path::Path::new("/srv/data");
    assert_eq!(resolve_with_base(base, "indexes/heading"), base.join("indexes/heading"));
    assert_eq!(resolve_with_base(base, "/abs/path"), std::path::PathBuf::from("/abs/path"));
    assert!(!expand_path("plain/relative").is_absolute());
}
