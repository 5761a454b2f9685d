//! CLI argument parsing via `clap`.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "aidlint",
    version,
    about = "Lint Dockerfiles for AI/ML workload best practices",
    long_about = "aidlint — a tiny, fast linter for Dockerfiles that build AI/ML images.\n\nScans one file against a fixed rule catalogue (GPU base image, layer-cache ordering, image-size hygiene) and prints a report.\n\nConfiguration precedence: CLI > aidlint.toml > defaults.",
    after_help = "Examples:\n  aidlint\n  aidlint docker/Dockerfile --output json\n  aidlint --disable AID04 --disable AID05"
)]
/// Top-level CLI options.
pub struct Cli {
    #[arg(help = "Path to the Dockerfile to lint (default: Dockerfile)")]
    pub path: Option<String>,
    #[arg(long, help = "Directory to start config discovery from (default: current dir)")]
    pub repo_root: Option<String>,
    #[arg(long, help = "Output mode: human|json (default: human)")]
    pub output: Option<String>,
    #[arg(
        long = "disable",
        value_name = "RULE",
        help = "Disable a rule by id (repeatable); replaces any config list"
    )]
    pub disable: Vec<String>,
}
