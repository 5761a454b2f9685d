//! Supporting helpers: stderr prefixes, color gating, path display.

use owo_colors::OwoColorize;
use std::path::Path;

/// Colors are suppressed when `NO_COLOR` is set.
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Prefix for fatal diagnostics on stderr.
pub fn error_prefix() -> String {
    if color_enabled() {
        "error:".red().bold().to_string()
    } else {
        "error:".to_string()
    }
}

/// Prefix for friendly notes on stderr.
pub fn note_prefix() -> String {
    if color_enabled() {
        "note:".bright_black().to_string()
    } else {
        "note:".to_string()
    }
}

/// Display `target` relative to `base` when possible.
///
/// Relative targets (and targets outside `base`) are shown as written.
pub fn display_path(base: &Path, target: &Path) -> String {
    pathdiff::diff_paths(target, base)
        .filter(|p| !p.as_os_str().is_empty() && !p.starts_with(".."))
        .unwrap_or_else(|| target.to_path_buf())
        .to_string_lossy()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_display_path_relativizes_under_base() {
        let base = PathBuf::from("/work/repo");
        let target = base.join("docker").join("Dockerfile");
        assert_eq!(display_path(&base, &target), "docker/Dockerfile");
    }

    #[test]
    fn test_display_path_keeps_relative_targets_as_written() {
        let base = PathBuf::from("/work/repo");
        assert_eq!(display_path(&base, Path::new("Dockerfile")), "Dockerfile");
    }

    #[test]
    fn test_display_path_keeps_outside_targets_absolute() {
        let base = PathBuf::from("/work/repo");
        assert_eq!(
            display_path(&base, Path::new("/etc/Dockerfile")),
            "/etc/Dockerfile"
        );
    }
}
