use std::env;

use topicsuggest_core::config::{expand_path, Config};
use topicsuggest_core::stem::SnowballStemmer;
use topicsuggest_core::traits::SuggestionService;
use topicsuggest_core::types::{RunningTotal, SearchType, Suggestion};
use topicsuggest_engine::{format_page, CountCorrection, TopicSuggester};
use topicsuggest_text::{HeadingTerms, ThesaurusTerms};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <prefix> [extra_pages]", args[0]);
        eprintln!("Example: {} fai 2", args[0]);
        std::process::exit(1);
    }
    let prefix = &args[1];
    let extra_pages: usize = args.get(2).map(|s| s.parse()).transpose()?.unwrap_or(0);

    let config = Config::load()?;
    let heading_index_dir: String = config
        .get("data.headings_index_dir")
        .unwrap_or_else(|_| "./dev_data/indexes/heading".to_string());
    let thesaurus_index_dir: String = config
        .get("data.thesaurus_index_dir")
        .unwrap_or_else(|_| "./dev_data/indexes/thesaurus".to_string());
    let language: String =
        config.get("suggest.language").unwrap_or_else(|_| "english".to_string());
    let page_size: usize = config.get("suggest.max_exact").unwrap_or_else(|_| 20);
    let correction: String =
        config.get("suggest.count_correction").unwrap_or_else(|_| "merge".to_string());

    let stemmer = SnowballStemmer::for_language(&language)
        .ok_or_else(|| format!("unsupported stemmer language '{}'", language))?;
    let engine = TopicSuggester::new(
        HeadingTerms::open(expand_path(&heading_index_dir))?,
        ThesaurusTerms::open(expand_path(&thesaurus_index_dir))?,
        Box::new(stemmer),
    )
    .with_correction(CountCorrection::from_name(&correction).unwrap_or_default());
    let suggester: &dyn SuggestionService = &engine;

    println!("🔎 topicsuggest\n===============");
    println!("Prefix: \"{}\"  (page size {}, stemmer {})", prefix, page_size, language);

    let exact = suggester.exact_terms(prefix, page_size)?;
    println!("\n🔎 {} exact suggestions", exact.len());
    print_suggestions(&exact);

    let mut already = exact;
    let mut totals = RunningTotal::for_page(page_size);
    for page in 0..extra_pages {
        let (collected, updated) =
            suggester.collect_non_exact(totals, prefix, &already, page_size)?;
        let shown = format_page(&already, collected);
        totals = updated;
        println!("\n📄 Page {}: {} suggestions, {} more available", page + 2, shown.len(), totals.remaining);
        print_suggestions(&shown);
        already = shown;
    }
    Ok(())
}

fn print_suggestions(suggestions: &[Suggestion]) {
    for (i, suggestion) in suggestions.iter().enumerate() {
        let tags: Vec<&str> = suggestion.search_types.iter().map(tag_name).collect();
        println!("  {}. {}  [{}]", i + 1, suggestion.value, tags.join(", "));
    }
}

fn tag_name(search_type: &SearchType) -> &'static str {
    match search_type {
        SearchType::Simple => "SIMPLE",
        SearchType::Extended => "EXTENDED",
        SearchType::Full => "FULL",
    }
}
