use anyhow::Result;
use std::path::Path;
use tantivy::{doc, Index};

use topicsuggest_core::types::{FIELD_FULL_TERM, FIELD_HEADING, FIELD_ROOT};

use crate::schema::{build_heading_schema, build_thesaurus_schema, register_tokenizers};

/// Builds the heading index from `*.txt` files, one heading per line.
pub struct HeadingIndexer {
	index: Index,
	heading_field: tantivy::schema::Field,
}

impl HeadingIndexer {
	pub fn new(index_dir: std::path::PathBuf) -> Result<Self, anyhow::Error> {
		let schema = build_heading_schema();
		if index_dir.exists() { std::fs::remove_dir_all(&index_dir)?; }
		std::fs::create_dir_all(&index_dir)?;
		let index = Index::create_in_dir(&index_dir, schema.clone())?;
		register_tokenizers(&index);
		let heading_field = schema.get_field(FIELD_HEADING)?;
		Ok(Self { index, heading_field })
	}

	/// Indexes every non-empty line of every `.txt` file under `data_dir`
	/// as one heading document. Returns the number of headings indexed.
	pub fn index_lines(&self, data_dir: &Path) -> Result<usize, anyhow::Error> {
		let mut index_writer = self.index.writer(50_000_000)?;
		let mut heading_count = 0;
		for file_path in files_with_extension(data_dir, "txt") {
			let content = std::fs::read_to_string(&file_path)?;
			for line in content.lines() {
				let heading = line.trim();
				if heading.is_empty() { continue; }
				index_writer.add_document(doc!(self.heading_field => heading))?;
				heading_count += 1;
			}
		}
		index_writer.commit()?; Ok(heading_count)
	}
}

/// Builds the thesaurus index from `*.tsv` files with `root<TAB>fullTerm`
/// lines. A line without a tab indexes its value as both fields.
pub struct ThesaurusIndexer {
	index: Index,
	root_field: tantivy::schema::Field,
	full_term_field: tantivy::schema::Field,
}

impl ThesaurusIndexer {
	pub fn new(index_dir: std::path::PathBuf) -> Result<Self, anyhow::Error> {
		let schema = build_thesaurus_schema();
		if index_dir.exists() { std::fs::remove_dir_all(&index_dir)?; }
		std::fs::create_dir_all(&index_dir)?;
		let index = Index::create_in_dir(&index_dir, schema.clone())?;
		register_tokenizers(&index);
		let root_field = schema.get_field(FIELD_ROOT)?;
		let full_term_field = schema.get_field(FIELD_FULL_TERM)?;
		Ok(Self { index, root_field, full_term_field })
	}

	/// Returns the number of thesaurus entries indexed.
	pub fn index_entries(&self, data_dir: &Path) -> Result<usize, anyhow::Error> {
		let mut index_writer = self.index.writer(50_000_000)?;
		let mut entry_count = 0;
		for file_path in files_with_extension(data_dir, "tsv") {
			let content = std::fs::read_to_string(&file_path)?;
			for line in content.lines() {
				let line = line.trim();
				if line.is_empty() { continue; }
				let (root, full_term) = match line.split_once('\t') {
					Some((root, full_term)) => (root.trim(), full_term.trim()),
					None => (line, line),
				};
				index_writer.add_document(doc!(
					self.root_field => root,
					self.full_term_field => full_term,
				))?;
				entry_count += 1;
			}
		}
		index_writer.commit()?; Ok(entry_count)
	}
}

fn files_with_extension(root: &Path, extension: &str) -> Vec<std::path::PathBuf> {
	let mut files = Vec::new();
	for entry in walkdir::WalkDir::new(root).into_iter().filter_map(|e| e.ok()).filter(|e| e.file_type().is_file()) {
		let path = entry.path();
		if path.extension().and_then(|s| s.to_str()) == Some(extension) { files.push(path.to_path_buf()); }
	}
	files.sort();
	files
}
