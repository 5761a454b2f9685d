//! Aidlint CLI binary entry point.
//! Resolves configuration, loads the target, runs the catalogue, prints.

use aidlint::cli::Cli;
use aidlint::document::Document;
use aidlint::{config, lint, output, rules, utils};
use clap::Parser;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();
    let eff = config::resolve_effective(
        cli.repo_root.as_deref(),
        cli.path.as_deref(),
        cli.output.as_deref(),
        &cli.disable,
    );
    // Friendly note if no aidlint config was found
    if eff.output != "json" && config::load_config(&eff.config_root).is_none() {
        eprintln!(
            "{} {}",
            utils::note_prefix(),
            "No aidlint.toml found; using defaults."
        );
    }
    for id in &eff.disabled {
        if rules::find(id).is_none() {
            eprintln!(
                "{} {}",
                utils::note_prefix(),
                format!("Unknown rule id in disable list: {id}")
            );
        }
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let shown = utils::display_path(&cwd, &eff.target);
    let doc = match Document::load(&eff.target) {
        Ok(d) => d,
        Err(err) => {
            // NotFound and unexpected failures both abort before any check runs.
            eprintln!("{} {}", utils::error_prefix(), err);
            std::process::exit(1);
        }
    };
    let result = lint::run_lint(&doc, &eff.disabled);
    output::print_lint(&result, &shown, &eff.output);
}
