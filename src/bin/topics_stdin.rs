//! Reads a listing page from stdin and prints its topics as JSON.
//!
//! Usage:
//!   topics_stdin tab <key>
//!   topics_stdin node <name> [title]
//!   topics_stdin favorites
//!
//! Flags: `--authenticated` (document was fetched while signed in),
//! `--absolute-avatars` (resolve avatar URLs against the base URL).
//! `V2EX_BASE_URL` overrides the site root; `RUST_LOG` controls logging.

use std::env;
use std::io::{self, Read};
use std::process;

use tracing_subscriber::EnvFilter;
use v2ex_topics::{parse_topic_list_bytes, Node, Options, Page, Tab};

fn usage() -> ! {
    eprintln!("usage: topics_stdin [--authenticated] [--absolute-avatars] (tab <key> | node <name> [title] | favorites)");
    process::exit(2);
}

fn page_from_args(args: &[String]) -> Option<Page> {
    match args {
        [kind, key] if kind == "tab" => Tab::from_key(key).map(Page::Tab),
        [kind, name] if kind == "node" => Some(Page::Node(Node::new(name.clone(), name.clone()))),
        [kind, name, title] if kind == "node" => {
            Some(Page::Node(Node::new(name.clone(), title.clone())))
        }
        [kind] if kind == "favorites" => Some(Page::FavoriteTopics),
        _ => None,
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut options = Options::default();
    if let Ok(base_url) = env::var("V2EX_BASE_URL") {
        options.base_url = base_url;
    }

    let mut positional = Vec::new();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--authenticated" => options.authenticated = true,
            "--absolute-avatars" => options.absolute_avatar_urls = true,
            "-h" | "--help" => usage(),
            _ => positional.push(arg),
        }
    }

    let Some(page) = page_from_args(&positional) else {
        usage();
    };

    let mut html = Vec::new();
    if let Err(err) = io::stdin().read_to_end(&mut html) {
        eprintln!("Failed to read from stdin: {err}");
        process::exit(1);
    }

    match parse_topic_list_bytes(&html, &page, &options) {
        Ok(list) => match serde_json::to_string_pretty(&list) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("Failed to serialize topics: {err}");
                process::exit(1);
            }
        },
        Err(err) => {
            eprintln!("Failed to parse {} ({}): {err}", page, page.url(&options.base_url));
            process::exit(1);
        }
    }
}
