pub mod cli;
pub mod config;
pub mod engine;
pub mod extract;
pub mod formatter;
pub mod fs;
pub mod node;
pub mod parse;
pub mod record;

use std::io::Read;

use anyhow::Result;

use cli::Args;
use config::load_config;
use engine::{SearchEngine, run_search};
use extract::registry::ExtractorRegistry;
use formatter::create_formatter;
use fs::discover_files;
use parse::source::SourceFile;

/// Run a search. Returns the exit code: 0 = matches found, 1 = no matches.
/// Fatal errors bubble up as Err and are mapped to exit code 2 by main.
pub fn run(args: Args) -> Result<i32> {
    let target_dir = args.paths.first().map(|p| {
        if p.is_file() {
            p.parent().unwrap_or(p)
        } else {
            p.as_path()
        }
    });
    let config = load_config(args.config.as_deref(), target_dir)?;

    let registry = ExtractorRegistry::default_registry();

    // --list-extractors: print all registered extractor names and exit
    if args.list_extractors {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(0);
    }

    // --list-target-files: print files that would be searched and exit
    if args.list_target_files {
        let files = discover_files(&args.paths, &config)?;
        for file in &files {
            println!("{}", file.display());
        }
        return Ok(0);
    }

    let pattern = args.pattern.as_deref().unwrap_or_default();
    let toggles = if args.only.is_empty() {
        config.extractors.clone()
    } else {
        args.only.clone()
    };
    // Pattern and toggle validation happens here, before any file is read
    let engine = SearchEngine::new(pattern, &registry, &toggles)?;

    // --stdin: read from stdin and search a single buffer
    if let Some(ref display_path) = args.stdin {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        let source = SourceFile::from_string(display_path.clone(), input);
        let records = match engine.search_source(&source) {
            Ok(records) => records,
            Err(e) => {
                if args.debug {
                    eprintln!("debug: skipping {}: {e}", display_path.display());
                }
                Vec::new()
            }
        };
        let formatter = create_formatter(&args.format);
        formatter.print(&records, 1);
        return Ok(if records.is_empty() { 1 } else { 0 });
    }

    let files = discover_files(&args.paths, &config)?;

    if args.debug {
        eprintln!("debug: {} files to search", files.len());
        eprintln!("debug: {} extractors selected", engine.extractor_count());
    }

    let result = run_search(&files, &engine, args.debug);
    let formatter = create_formatter(&args.format);
    formatter.print(&result.records, result.file_count);

    Ok(if result.records.is_empty() { 1 } else { 0 })
}
