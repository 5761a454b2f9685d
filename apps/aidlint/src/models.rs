//! Shared data models for findings and report output.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Category label attached to each rule, used for grouping and coloring.
pub enum Category {
    Warning,
    Optimization,
    Size,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Self::Warning => "Warning",
            Self::Optimization => "Optimization",
            Self::Size => "Size",
        }
    }
}

#[derive(Serialize)]
/// A single triggered rule with its resolved metadata.
pub struct Finding {
    pub rule: String,
    pub category: Category,
    pub name: String,
    pub message: String,
}

#[derive(Serialize)]
/// Aggregated per-category counts used by printers.
pub struct Summary {
    pub warnings: usize,
    pub optimizations: usize,
    pub size: usize,
    /// Number of catalogue rules evaluated this run.
    pub rules: usize,
}

#[derive(Serialize)]
/// Scan results container.
pub struct LintResult {
    pub findings: Vec<Finding>,
    pub summary: Summary,
}
