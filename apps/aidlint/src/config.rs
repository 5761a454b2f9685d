//! Configuration discovery and effective settings resolution.
//!
//! aidlint reads `aidlint.toml|yaml|yml` from the working directory (or
//! closest ancestor) and merges it with CLI flags.
//! Defaults:
//! - `path`: `Dockerfile` in the working directory
//! - `output`: `human`
//! - `disable`: empty
//!
//! Overrides precedence: CLI > config file > defaults.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `aidlint.toml|yaml`.
pub struct AidlintConfig {
    pub path: Option<String>,
    pub output: Option<String>,
    #[serde(default)]
    pub disable: Option<Vec<String>>,
}

#[derive(Debug, Clone)]
/// Fully-resolved settings used by the binary after applying precedence.
pub struct Effective {
    pub config_root: PathBuf,
    pub target: PathBuf,
    pub output: String,
    pub disabled: Vec<String>,
}

/// Walk upward from `start` to detect the config root.
///
/// Stops when an `aidlint.toml|yaml|yml` or a `.git` directory is found.
pub fn detect_config_root(start: &Path) -> PathBuf {
    let mut cur = start;
    loop {
        if cur.join("aidlint.toml").exists()
            || cur.join("aidlint.yaml").exists()
            || cur.join("aidlint.yml").exists()
        {
            return cur.to_path_buf();
        }
        if cur.join(".git").exists() {
            return cur.to_path_buf();
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => return start.to_path_buf(),
        }
    }
}

/// Load `AidlintConfig` from `aidlint.toml` or `aidlint.yaml|yml` if present.
pub fn load_config(root: &Path) -> Option<AidlintConfig> {
    let toml_path = root.join("aidlint.toml");
    if toml_path.exists() {
        let s = fs::read_to_string(&toml_path).ok()?;
        let cfg: AidlintConfig = toml::from_str(&s).ok()?;
        return Some(cfg);
    }
    for yml in ["aidlint.yaml", "aidlint.yml"] {
        let p = root.join(yml);
        if p.exists() {
            let s = fs::read_to_string(&p).ok()?;
            let cfg: AidlintConfig = serde_yaml::from_str(&s).ok()?;
            return Some(cfg);
        }
    }
    None
}

/// Resolve `Effective` by merging CLI flags, discovered config, and defaults.
///
/// Target resolution: a CLI path is used as written (relative to the
/// invocation directory); a config `path` is resolved against the config
/// root; the default is `Dockerfile` in the working directory. A non-empty
/// CLI `disable` list replaces the config list.
pub fn resolve_effective(
    cli_repo_root: Option<&str>,
    cli_path: Option<&str>,
    cli_output: Option<&str>,
    cli_disable: &[String],
) -> Effective {
    let start = PathBuf::from(cli_repo_root.unwrap_or("."));
    let config_root = detect_config_root(&start);
    let cfg = load_config(&config_root).unwrap_or_default();

    let target = match (cli_path, cfg.path) {
        (Some(p), _) => PathBuf::from(p),
        (None, Some(p)) => config_root.join(p),
        (None, None) => match cli_repo_root {
            Some(s) => Path::new(s).join("Dockerfile"),
            None => PathBuf::from("Dockerfile"),
        },
    };

    let output = cli_output
        .map(|s| s.to_string())
        .or(cfg.output)
        .unwrap_or_else(|| "human".to_string());

    let disabled = if cli_disable.is_empty() {
        cfg.disable.unwrap_or_default()
    } else {
        cli_disable.to_vec()
    };

    Effective {
        config_root,
        target,
        output,
        disabled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    #[test]
    fn test_detect_and_load_toml() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("aidlint.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
path = "docker/Dockerfile"
output = "json"
disable = ["AID05"]
    "#
        )
        .unwrap();

        // Resolve using explicit repo_root to avoid global CWD races
        let eff = resolve_effective(root.to_str(), None, None, &[]);
        assert_eq!(eff.target, root.join("docker/Dockerfile"));
        assert_eq!(eff.output, "json");
        assert_eq!(eff.disabled, vec!["AID05".to_string()]);
    }

    #[test]
    fn test_load_yaml_and_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("aidlint.yaml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
output: human
            "#
        )
        .unwrap();

        let eff = resolve_effective(root.to_str(), None, None, &[]);
        assert_eq!(eff.output, "human");
        // path falls back to Dockerfile under the starting directory
        assert_eq!(eff.target, root.join("Dockerfile"));
        assert!(eff.disabled.is_empty());
    }

    #[test]
    fn test_cli_precedence_over_config() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        let mut f = fs::File::create(root.join("aidlint.toml")).unwrap();
        writeln!(
            f,
            "{}",
            r#"
path = "docker/Dockerfile"
output = "json"
disable = ["AID04", "AID05"]
            "#
        )
        .unwrap();

        let cli_disable = vec!["AID01".to_string()];
        let eff = resolve_effective(root.to_str(), Some("Other.dockerfile"), Some("human"), &cli_disable);
        // CLI path is taken as written, not joined to the config root
        assert_eq!(eff.target, PathBuf::from("Other.dockerfile"));
        assert_eq!(eff.output, "human");
        // CLI disable list replaces the config list wholesale
        assert_eq!(eff.disabled, vec!["AID01".to_string()]);
    }

    #[test]
    fn test_no_config_anywhere_uses_defaults() {
        let dir = tempdir().unwrap();
        let root = dir.path();

        assert!(load_config(root).is_none());
        let eff = resolve_effective(root.to_str(), None, None, &[]);
        assert_eq!(eff.output, "human");
        assert_eq!(eff.target, root.join("Dockerfile"));
    }

    #[test]
    fn test_config_root_detected_from_subdirectory() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        fs::write(root.join("aidlint.toml"), "output = \"json\"\n").unwrap();
        let sub = root.join("services").join("api");
        fs::create_dir_all(&sub).unwrap();

        let eff = resolve_effective(sub.to_str(), None, None, &[]);
        assert_eq!(eff.config_root, root);
        assert_eq!(eff.output, "json");
    }
}
