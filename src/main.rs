use anyhow::{bail, Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use bktrees::{normalize, Algorithm, BkTree, Match, Metric};

mod cli;
use cli::{dictionary, display, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(if cli.verbose { "debug" } else { "warn" });

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` when set.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let algorithm = Algorithm::from(cli.algorithm);
    let fold = |s: &str| if cli.normalize { normalize(s) } else { s.to_owned() };

    match cli.command {
        Commands::Distance { a, b } => {
            println!("{}", algorithm.distance(&fold(&a), &fold(&b)));
        }
        Commands::Lookup {
            dict,
            max_distance,
            root,
            json,
            queries,
        } => {
            let words = dictionary::load(&dict, cli.normalize)?;
            let tree = build_tree(algorithm, root.as_deref().map(fold), &words)?;
            warn_if_not_metric(&algorithm);

            let folded: Vec<String> = queries.iter().map(|q| fold(q)).collect();
            let results: Vec<LookupResult<'_>> = queries
                .iter()
                .zip(&folded)
                .map(|(query, key)| LookupResult {
                    query,
                    found: tree.closest(key, max_distance),
                })
                .collect();

            if json {
                let out = serde_json::to_string_pretty(&results)
                    .context("Failed to serialize lookup results")?;
                println!("{}", out);
            } else {
                for result in &results {
                    println!("{}", display::format_match(result.query, result.found));
                }
            }
        }
        Commands::Inspect { dict, tree: show_tree } => {
            let words = dictionary::load(&dict, cli.normalize)?;
            let tree = build_tree(algorithm, None, &words)?;

            println!("{}", display::section(&dict.display().to_string()));
            if show_tree {
                print!("{}", tree);
            }
            let report = tree.verify().context("Tree failed verification")?;
            println!("{}", display::format_report(&report));
        }
    }

    Ok(())
}

#[derive(Serialize)]
struct LookupResult<'a> {
    query: &'a str,
    found: Option<Match<'a>>,
}

fn build_tree(algorithm: Algorithm, root: Option<String>, words: &[String]) -> Result<BkTree> {
    let root = match root.as_deref().or_else(|| words.first().map(String::as_str)) {
        Some(root) => root.to_owned(),
        None => bail!("Dictionary is empty and no --root was given"),
    };

    let mut tree = BkTree::new(&root, algorithm);
    tree.extend(words);
    tracing::info!(words = words.len(), stored = tree.len(), depth = tree.depth(), "tree built");
    Ok(tree)
}

fn warn_if_not_metric(algorithm: &Algorithm) {
    if !algorithm.is_true_metric() {
        tracing::warn!(
            ?algorithm,
            "not a true metric: lookups may miss the closest word"
        );
    }
}
