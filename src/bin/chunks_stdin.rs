//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//! Debugging shim over the library boundary, not a product surface.

use rs_htmlchunks::{to_text_chunks, ArticleDetector, Chunk};
use serde::Serialize;
use std::io::{self, Read};

#[derive(Serialize)]
struct Output {
    article: bool,
    chunks: Vec<Chunk>,
}

fn main() {
    // Read HTML from stdin
    let mut html = String::new();
    if io::stdin().read_to_string(&mut html).is_err() {
        eprintln!("Failed to read from stdin");
        std::process::exit(1);
    }

    let chunks = to_text_chunks(&html);
    let article = ArticleDetector::default().is_article(&chunks);

    let output = Output { article, chunks };
    println!("{}", serde_json::to_string(&output).unwrap_or_default());
}
