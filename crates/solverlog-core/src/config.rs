//! Run configuration.

use std::path::{Path, PathBuf};

/// Where the solver extension drops its logs, relative to the working directory.
pub const DEFAULT_INPUT_DIR: &str = "../GecodeExtension/Out";
pub const DEFAULT_CSV_PATH: &str = "output.csv";
pub const DEFAULT_JSON_PATH: &str = "output.json";

/// Layout of the JSON report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// A JSON array, closed when the run finishes.
    #[default]
    Array,
    /// `[` followed by `obj,obj,...` with no closing bracket. Not valid JSON;
    /// kept for consumers of the older report files.
    Legacy,
    /// One compact object per line.
    Lines,
}

impl JsonFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            JsonFormat::Array => "array",
            JsonFormat::Legacy => "legacy",
            JsonFormat::Lines => "lines",
        }
    }
}

impl std::fmt::Display for JsonFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inputs and outputs of a single scrape run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub input_dir: PathBuf,
    pub csv_path: PathBuf,
    pub json_path: PathBuf,
    pub json_format: JsonFormat,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            json_path: PathBuf::from(DEFAULT_JSON_PATH),
            json_format: JsonFormat::default(),
        }
    }
}

impl ScrapeConfig {
    /// Anchor every relative path at `cwd`.
    pub fn resolve(mut self, cwd: &Path) -> Self {
        for path in [&mut self.input_dir, &mut self.csv_path, &mut self.json_path] {
            if path.is_relative() {
                *path = cwd.join(&*path);
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrapeConfig::default();
        assert_eq!(config.input_dir, PathBuf::from("../GecodeExtension/Out"));
        assert_eq!(config.csv_path, PathBuf::from("output.csv"));
        assert_eq!(config.json_path, PathBuf::from("output.json"));
        assert_eq!(config.json_format, JsonFormat::Array);
    }

    #[test]
    fn test_json_format_names() {
        assert_eq!(JsonFormat::Array.to_string(), "array");
        assert_eq!(JsonFormat::Legacy.to_string(), "legacy");
        assert_eq!(JsonFormat::Lines.to_string(), "lines");
    }

    #[test]
    fn test_resolve_only_touches_relative_paths() {
        let config = ScrapeConfig {
            input_dir: PathBuf::from("logs"),
            csv_path: PathBuf::from("/abs/out.csv"),
            ..ScrapeConfig::default()
        }
        .resolve(Path::new("/work"));

        assert_eq!(config.input_dir, PathBuf::from("/work/logs"));
        assert_eq!(config.csv_path, PathBuf::from("/abs/out.csv"));
        assert_eq!(config.json_path, PathBuf::from("/work/output.json"));
    }
}
