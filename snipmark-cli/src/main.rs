//! Command-line interface for snipmark
//! This binary extracts the display and preview artifacts from annotated demo sources.
//!
//! Usage:
//!   snipmark <path> [--tab <tab>] [--format <format>]  - Extract one source's artifacts
//!   snipmark <dir> --scan                              - List snippet sources under a directory
//!   snipmark --list-types                              - List supported file types

use clap::{Arg, ArgAction, Command};

fn main() {
    let matches = Command::new("snipmark")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for extracting annotated code snippets")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the snippet source (a directory with --scan)")
                .required_unless_present("list-types")
                .index(1),
        )
        .arg(
            Arg::new("tab")
                .long("tab")
                .short('t')
                .help("Artifact to print: 'code', 'preview' or 'original'")
                .default_value("code"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format: 'text' prints the selected artifact, 'json' prints all three")
                .default_value("text"),
        )
        .arg(
            Arg::new("file-type")
                .long("file-type")
                .help("Override the file type resolved from the extension (e.g. 'markup', 'script')"),
        )
        .arg(
            Arg::new("scan")
                .long("scan")
                .help("Treat the path as a directory and list the snippet sources under it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Print extraction diagnostics to stderr")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("list-types")
                .long("list-types")
                .help("List supported file types and their comment tokens")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    if matches.get_flag("list-types") {
        handle_list_types_command();
        return;
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is required unless listing types");

    if matches.get_flag("scan") {
        handle_scan_command(path);
        return;
    }

    let tab = matches.get_one::<String>("tab").unwrap();
    let format = matches.get_one::<String>("format").unwrap();
    let file_type = matches.get_one::<String>("file-type").map(String::as_str);
    handle_extract_command(path, tab, format, file_type, matches.get_flag("verbose"));
}

/// Handle the extract command
fn handle_extract_command(
    path: &str,
    tab: &str,
    format: &str,
    file_type_override: Option<&str>,
    verbose: bool,
) {
    use snipmark_parser::snipmark::file_type::FileType;
    use snipmark_parser::snipmark::loader::SnippetLoader;

    let mut loader = SnippetLoader::from_path(path).unwrap_or_else(|e| {
        eprintln!("Error loading {}: {}", path, e);
        std::process::exit(1);
    });
    if let Some(tag) = file_type_override {
        loader = loader.with_file_type(FileType::from_tag(tag));
    }

    let file_type = loader.file_type();
    let parsed = loader.extract();

    if verbose {
        eprintln!("File type: {}", file_type);
        eprintln!("Input: {} bytes", loader.content().len());
        eprintln!("Display code: {} bytes", parsed.code_for_display.len());
        eprintln!(
            "Preview content: {} bytes",
            parsed.renderable_preview_content.len()
        );
    }

    let output = match format {
        "json" => serde_json::to_string_pretty(&parsed).unwrap_or_else(|e| {
            eprintln!("Error formatting output: {}", e);
            std::process::exit(1);
        }),
        "text" => match tab {
            "code" => parsed.code_for_display,
            "preview" => parsed.renderable_preview_content,
            "original" => parsed.original_preview_code,
            other => {
                eprintln!("Unknown tab '{}'", other);
                eprintln!("Available tabs: code, preview, original");
                std::process::exit(1);
            }
        },
        other => {
            eprintln!("Unknown format '{}'", other);
            eprintln!("Available formats: text, json");
            std::process::exit(1);
        }
    };

    println!("{}", output);
}

/// Handle the scan command
fn handle_scan_command(path: &str) {
    use snipmark_parser::snipmark::registry::SourceRegistry;

    let root = path.trim_end_matches('/');
    let mut registry = SourceRegistry::new();
    let registered = registry.mount(root, path).unwrap_or_else(|e| {
        eprintln!("Scan error: {}", e);
        std::process::exit(1);
    });

    println!("Found {} snippet sources:\n", registered);
    for key in registry.keys() {
        let tag = registry.file_type(key).map(|t| t.tag()).unwrap_or("unknown");
        println!("  {}  [{}]", key, tag);
    }
}

/// Handle the list-types command
fn handle_list_types_command() {
    use snipmark_parser::snipmark::comment_style::CommentStyle;
    use snipmark_parser::snipmark::file_type::FileType;

    println!("Supported file types:\n");
    for file_type in FileType::all() {
        let style = CommentStyle::for_file_type(*file_type);
        println!("  {}", file_type.tag());
        println!(
            "    comments: '{}' and '{} ... {}'",
            style.single_line, style.block_start, style.block_end
        );
        println!();
    }
}
