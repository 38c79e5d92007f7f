use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use rayon::prelude::*;
use regex::Regex;
use thiserror::Error;

use crate::extract::Extractor;
use crate::extract::registry::ExtractorRegistry;
use crate::node::SyntaxTree;
use crate::parse::source::SourceFile;
use crate::parse::{self, ParseError};
use crate::record::MatchRecord;

/// Fatal setup errors. Both are raised before any file is touched;
/// per-file parse failures are not errors at this level.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
    #[error("unknown extractor: {name}")]
    InvalidConfiguration { name: String },
}

/// One compiled pattern plus one resolved extractor subset, reused across
/// every file of a run. Send + Sync, so the parallel driver can share it
/// across rayon workers.
#[derive(Debug)]
pub struct SearchEngine<'r> {
    rx: Regex,
    extractors: Vec<&'r dyn Extractor>,
}

impl<'r> SearchEngine<'r> {
    /// Compile the pattern and resolve the extractor toggles. An empty
    /// toggle set selects every registered extractor.
    pub fn new(
        pattern: &str,
        registry: &'r ExtractorRegistry,
        toggles: &[String],
    ) -> Result<Self, SearchError> {
        let extractors = registry.resolve(toggles)?;
        let rx = Regex::new(pattern)?;
        Ok(Self { rx, extractors })
    }

    pub fn extractor_count(&self) -> usize {
        self.extractors.len()
    }

    /// Parse one source file and search its tree.
    pub fn search_source(&self, source: &SourceFile) -> Result<Vec<MatchRecord>, ParseError> {
        let tree = parse::parse_source(source.text())?;
        Ok(self.search_tree(source, &tree))
    }

    /// One pass over a lowered tree. Per node: union the candidate strings
    /// from every extractor, test them against the pattern, and emit the
    /// node's line on the first hit. A line already emitted is skipped
    /// without candidate testing, so records come out deduplicated and in
    /// first-hit order.
    pub fn search_tree(&self, source: &SourceFile, tree: &SyntaxTree) -> Vec<MatchRecord> {
        let mut seen: HashSet<usize> = HashSet::new();
        let mut records = Vec::new();

        for node in tree.nodes() {
            let Some(row) = node.row else { continue };
            if seen.contains(&row) {
                continue;
            }

            let mut candidates: HashSet<String> = HashSet::new();
            for extractor in &self.extractors {
                candidates.extend(extractor.candidates(node));
            }

            if candidates.iter().any(|c| self.rx.is_match(c)) {
                seen.insert(row);
                records.push(MatchRecord {
                    path: source.path_str().to_string(),
                    line: row + 1,
                    text: source.line(row).unwrap_or_default().to_string(),
                });
            }
        }

        records
    }
}

static DEFAULT_REGISTRY: LazyLock<ExtractorRegistry> =
    LazyLock::new(ExtractorRegistry::default_registry);

/// Lazy search over an in-memory stream of files: the core operation,
/// using the built-in extractor set.
///
/// Validation happens up front: an invalid pattern or toggle fails before
/// the file stream is consumed at all. Files are then parsed one at a time
/// as the iterator is advanced; a caller that stops early never pays for
/// the remaining files.
pub fn search<I>(
    pattern: &str,
    files: I,
    toggles: &[String],
) -> Result<Search<'static, I::IntoIter>, SearchError>
where
    I: IntoIterator<Item = (PathBuf, String)>,
{
    search_with(pattern, files, &DEFAULT_REGISTRY, toggles)
}

/// `search` against a caller-supplied registry.
pub fn search_with<'r, I>(
    pattern: &str,
    files: I,
    registry: &'r ExtractorRegistry,
    toggles: &[String],
) -> Result<Search<'r, I::IntoIter>, SearchError>
where
    I: IntoIterator<Item = (PathBuf, String)>,
{
    let engine = SearchEngine::new(pattern, registry, toggles)?;
    Ok(Search {
        engine,
        files: files.into_iter(),
        pending: Vec::new().into_iter(),
        skipped: 0,
    })
}

pub struct Search<'r, I> {
    engine: SearchEngine<'r>,
    files: I,
    pending: std::vec::IntoIter<MatchRecord>,
    skipped: usize,
}

impl<I> Search<'_, I> {
    /// Files skipped so far because they failed to parse.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<I: Iterator<Item = (PathBuf, String)>> Iterator for Search<'_, I> {
    type Item = MatchRecord;

    fn next(&mut self) -> Option<MatchRecord> {
        loop {
            if let Some(record) = self.pending.next() {
                return Some(record);
            }
            let (path, text) = self.files.next()?;
            let source = SourceFile::from_string(path, text);
            match self.engine.search_source(&source) {
                Ok(records) => self.pending = records.into_iter(),
                Err(_) => self.skipped += 1,
            }
        }
    }
}

pub struct SearchResult {
    pub records: Vec<MatchRecord>,
    pub file_count: usize,
}

/// Scan files from disk in parallel. Dedup state is per file, which is
/// safe because record keys include the path; output order is restored by
/// sorting on (path, line).
pub fn run_search(files: &[PathBuf], engine: &SearchEngine<'_>, debug: bool) -> SearchResult {
    let records: Vec<MatchRecord> = files
        .par_iter()
        .flat_map(|path| scan_path(path, engine, debug))
        .collect();

    let mut sorted = records;
    sorted.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));

    SearchResult {
        records: sorted,
        file_count: files.len(),
    }
}

fn scan_path(path: &Path, engine: &SearchEngine<'_>, debug: bool) -> Vec<MatchRecord> {
    let source = match SourceFile::from_path(path) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {e:#}");
            return Vec::new();
        }
    };
    match engine.search_source(&source) {
        Ok(records) => records,
        Err(e) => {
            if debug {
                eprintln!("debug: skipping {}: {e}", path.display());
            }
            Vec::new()
        }
    }
}
