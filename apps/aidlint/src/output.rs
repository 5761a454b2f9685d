//! Report rendering for scan results.
//!
//! Supports `human` (default) and `json` outputs. The JSON form includes
//! per-finding fields and a top-level summary. Anything other than `json`
//! renders human.

use crate::models::{Category, LintResult};
use crate::utils;
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

fn use_colors(output: &str) -> bool {
    output != "json" && utils::color_enabled()
}

/// Print the scan report for `file` in the requested format.
pub fn print_lint(res: &LintResult, file: &str, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_lint_json(res, file)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            let header = format!("Scanning Dockerfile: {file}");
            if color {
                println!("{}", header.bold());
            } else {
                println!("{header}");
            }
            println!("{}", "-".repeat(50));

            if res.findings.is_empty() {
                let ok = "No issues found. Your Dockerfile follows AI best practices.";
                if color {
                    println!("{}", ok.green());
                } else {
                    println!("{ok}");
                }
                return;
            }

            for f in &res.findings {
                let label = f.category.label();
                let head = if color {
                    let tag = match f.category {
                        Category::Warning => label.yellow().bold().to_string(),
                        Category::Optimization => label.blue().bold().to_string(),
                        Category::Size => label.cyan().bold().to_string(),
                    };
                    format!("[{}] {}: {}", f.rule, tag, f.name.bold())
                } else {
                    format!("[{}] {}: {}", f.rule, label, f.name)
                };
                println!("{head}");
                println!("      {}\n", f.message);
            }
            let summary = format!(
                "— Summary — warnings={} optimizations={} size={} rules={}",
                res.summary.warnings,
                res.summary.optimizations,
                res.summary.size,
                res.summary.rules
            );
            if color {
                println!("{}", summary.bold());
            } else {
                println!("{summary}");
            }
        }
    }
}

/// Compose the lint JSON object (pure) for testing/snapshot purposes.
pub fn compose_lint_json(res: &LintResult, file: &str) -> JsonVal {
    json!({
        "file": file,
        "findings": serde_json::to_value(&res.findings).unwrap(),
        "summary": serde_json::to_value(&res.summary).unwrap(),
    })
}
