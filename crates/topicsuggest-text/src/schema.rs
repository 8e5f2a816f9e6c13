use tantivy::schema::{IndexRecordOption, Schema, TextFieldIndexing, TextOptions};
use tantivy::tokenizer::{LowerCaser, RawTokenizer, SimpleTokenizer, TextAnalyzer};
use tantivy::Index;

use topicsuggest_core::types::{FIELD_FULL_TERM, FIELD_HEADING, FIELD_ROOT};

/// Tokenizer for the heading field: word-split and lowercased, so the term
/// dictionary holds individual lowercase heading words.
pub const HEADING_TOKENIZER: &str = "heading_words";
/// Tokenizer for the thesaurus fields: each entry indexed whole, lowercased.
pub const TERM_TOKENIZER: &str = "term_lower";

pub fn build_heading_schema() -> Schema {
	let mut schema_builder = Schema::builder();
	let heading_indexing = TextFieldIndexing::default()
		.set_tokenizer(HEADING_TOKENIZER)
		.set_index_option(IndexRecordOption::Basic);
	let heading_options = TextOptions::default().set_indexing_options(heading_indexing).set_stored();
	let _heading_field = schema_builder.add_text_field(FIELD_HEADING, heading_options);
	schema_builder.build()
}

pub fn build_thesaurus_schema() -> Schema {
	let mut schema_builder = Schema::builder();
	let term_indexing = TextFieldIndexing::default()
		.set_tokenizer(TERM_TOKENIZER)
		.set_index_option(IndexRecordOption::Basic);
	let term_options = TextOptions::default().set_indexing_options(term_indexing).set_stored();
	let _root_field = schema_builder.add_text_field(FIELD_ROOT, term_options.clone());
	let _full_term_field = schema_builder.add_text_field(FIELD_FULL_TERM, term_options);
	schema_builder.build()
}

pub fn register_tokenizers(index: &Index) {
	let heading = TextAnalyzer::builder(SimpleTokenizer::default()).filter(LowerCaser).build();
	index.tokenizers().register(HEADING_TOKENIZER, heading);

	let term = TextAnalyzer::builder(RawTokenizer::default()).filter(LowerCaser).build();
	index.tokenizers().register(TERM_TOKENIZER, term);
}
