//! The fixed rule catalogue and its predicates.
//!
//! Catalogue order is execution order and therefore report order. Each
//! predicate reads only the loaded document; the ignore-file rule
//! additionally probes the scanned file's directory.

use crate::document::Document;
use crate::models::Category;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Predicate selector for a catalogue entry.
pub enum RuleKind {
    GpuBaseImage,
    LayerCacheOrder,
    AptCacheCleanup,
    HeavyBaseImage,
    MissingDockerignore,
}

/// One catalogue entry: identifier, display name, category, and message.
pub struct Rule {
    pub id: &'static str,
    pub name: &'static str,
    pub category: Category,
    pub message: &'static str,
    pub kind: RuleKind,
}

/// The process-wide rule table, initialized once and never mutated.
pub static CATALOGUE: [Rule; 5] = [
    Rule {
        id: "AID01",
        name: "GPU Base Image Check",
        category: Category::Warning,
        message: "NVIDIA base image is recommended when PyTorch or TensorFlow is installed.",
        kind: RuleKind::GpuBaseImage,
    },
    Rule {
        id: "AID02",
        name: "Layer Caching Efficiency",
        category: Category::Optimization,
        message: "Global 'COPY . .' detected before 'pip install'. Move COPY after dependency installation to improve cache hits.",
        kind: RuleKind::LayerCacheOrder,
    },
    Rule {
        id: "AID03",
        name: "Image Size Management",
        category: Category::Size,
        message: "apt-get caches should be cleared to reduce image size (e.g., rm -rf /var/lib/apt/lists/*).",
        kind: RuleKind::AptCacheCleanup,
    },
    Rule {
        id: "AID04",
        name: "Heavy Base Image",
        category: Category::Warning,
        message: "Generic 'ubuntu' or 'python:latest' base detected. Prefer a slim or CUDA-enabled base image.",
        kind: RuleKind::HeavyBaseImage,
    },
    Rule {
        id: "AID05",
        name: "Missing .dockerignore",
        category: Category::Size,
        message: "No .dockerignore found next to the Dockerfile. Large build contexts slow builds and bloat layers.",
        kind: RuleKind::MissingDockerignore,
    },
];

/// Look up a catalogue entry by identifier.
pub fn find(id: &str) -> Option<&'static Rule> {
    CATALOGUE.iter().find(|r| r.id == id)
}

fn copy_all_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"COPY \. \.").expect("static pattern"))
}

impl RuleKind {
    /// Evaluate this predicate against `doc`.
    pub fn applies(self, doc: &Document) -> bool {
        match self {
            Self::GpuBaseImage => {
                let first = doc.first_line().to_lowercase();
                !first.contains("nvidia")
                    && (doc.text.contains("torch") || doc.text.contains("tensorflow"))
            }
            Self::LayerCacheOrder => {
                // The last occurrence of each pattern participates, not the first.
                let mut copy_all = None;
                let mut pip_install = None;
                for (i, line) in doc.lines.iter().enumerate() {
                    if copy_all_pattern().is_match(line) {
                        copy_all = Some(i);
                    }
                    if line.contains("pip install") {
                        pip_install = Some(i);
                    }
                }
                matches!((copy_all, pip_install), (Some(c), Some(p)) if c < p)
            }
            Self::AptCacheCleanup => {
                doc.text.contains("apt-get install")
                    && !doc.text.contains("rm -rf /var/lib/apt/lists/*")
            }
            Self::HeavyBaseImage => {
                let first = doc.first_line();
                first.contains("FROM ubuntu") || first.contains("FROM python:latest")
            }
            Self::MissingDockerignore => {
                let dir = doc.path.parent().unwrap_or_else(|| Path::new(""));
                !dir.join(".dockerignore").exists()
            }
        }
    }
}
