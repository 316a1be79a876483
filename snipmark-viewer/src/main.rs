//! Standalone binary for the snipmark interactive viewer.
//! Usage:
//!   snipv <path>

mod viewer;

use clap::{Arg, Command, ValueHint};
use snipmark_parser::snipmark::file_type::FileType;
use std::path::PathBuf;

fn main() {
    let matches = Command::new("snipv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal viewer for annotated code snippets")
        .arg(
            Arg::new("path")
                .help("Path to the snippet source file to open")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("file-type")
                .long("file-type")
                .value_name("TYPE")
                .help("Treat the file as this type instead of resolving it from the extension"),
        )
        .get_matches();

    let path = matches.get_one::<String>("path").unwrap();
    let file_type = matches
        .get_one::<String>("file-type")
        .map(|tag| FileType::from_tag(tag));
    if let Err(err) = viewer::viewer::run_viewer(PathBuf::from(path), file_type) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
