//! Simple CLI that reads HTML from stdin and outputs JSON to stdout.
//!
//! Usage: `extract_stdin [page_url] < page.html`
//!
//! Prints every inferred rule and the articles extracted with the best one.
//! When `page_url` is given, article links are resolved against it.
//! Logging goes to stderr; set `RUST_LOG=rs_feedrules=debug` for stage details.

use std::io::{self, Read};

use rs_feedrules::{encoding, infer_rules, extract_with_rule, ArticleRecord, ArticleRule, Options};
use serde::Serialize;
use tracing::{info, warn};

#[derive(Serialize)]
struct Output {
    rules: Vec<ArticleRule>,
    articles: Vec<ArticleRecord>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let base_url = std::env::args().nth(1);

    // Read raw bytes so non-UTF-8 pages are decoded by their declared charset
    let mut raw = Vec::new();
    if let Err(e) = io::stdin().read_to_end(&mut raw) {
        warn!(error = %e, "failed to read from stdin");
        std::process::exit(1);
    }
    let html = encoding::decode_html(&raw);

    let options = Options::default();
    let document = rs_feedrules::dom::parse(&html);
    let rules = infer_rules(&document, &options);

    let mut articles = rules
        .first()
        .map(|rule| extract_with_rule(&document, rule, &options).records)
        .unwrap_or_default();

    if let Some(base) = base_url.as_deref() {
        for article in &mut articles {
            if let Some(absolute) = article.absolute_link(base) {
                article.link = absolute;
            }
        }
    }

    info!(rules = rules.len(), articles = articles.len(), "extraction finished");

    let output = Output { rules, articles };
    match serde_json::to_string_pretty(&output) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            warn!(error = %e, "failed to serialize output");
            std::process::exit(1);
        }
    }
}
