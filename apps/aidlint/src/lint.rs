//! Catalogue-ordered rule evaluation.
//!
//! Produces a `LintResult` with findings and a summary. Rules run in
//! catalogue order so repeated runs on identical input render identically;
//! each rule fires at most once per run.

use crate::document::Document;
use crate::models::{Category, Finding, LintResult, Summary};
use crate::rules::CATALOGUE;

/// Run every enabled catalogue rule against `doc`.
///
/// `disabled` holds rule ids excluded from this run (config `disable` list
/// or `--disable` flags). Findings carry the resolved rule metadata;
/// category counts feed the final summary.
pub fn run_lint(doc: &Document, disabled: &[String]) -> LintResult {
    let mut findings: Vec<Finding> = Vec::new();
    let mut rules_run = 0usize;
    for rule in CATALOGUE.iter() {
        if disabled.iter().any(|d| d == rule.id) {
            continue;
        }
        rules_run += 1;
        if rule.kind.applies(doc) {
            findings.push(Finding {
                rule: rule.id.to_string(),
                category: rule.category,
                name: rule.name.to_string(),
                message: rule.message.to_string(),
            });
        }
    }

    let mut warnings = 0usize;
    let mut optimizations = 0usize;
    let mut size = 0usize;
    for f in &findings {
        match f.category {
            Category::Warning => warnings += 1,
            Category::Optimization => optimizations += 1,
            Category::Size => size += 1,
        }
    }
    LintResult {
        findings,
        summary: Summary {
            warnings,
            optimizations,
            size,
            rules: rules_run,
        },
    }
}
