use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data/football_data";
pub const DEFAULT_RESULTS_FILE: &str = "results.csv";
pub const DEFAULT_SHOOTOUTS_FILE: &str = "shootouts.csv";
pub const DEFAULT_GOALS_FILE: &str = "goalscorers.csv";

/// Where the three corpus tables live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataConfig {
    pub data_dir: PathBuf,
    pub results_file: String,
    pub shootouts_file: String,
    pub goals_file: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            results_file: DEFAULT_RESULTS_FILE.to_string(),
            shootouts_file: DEFAULT_SHOOTOUTS_FILE.to_string(),
            goals_file: DEFAULT_GOALS_FILE.to_string(),
        }
    }
}

impl DataConfig {
    pub fn with_data_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    /// Defaults overridden by `FOOTBALL_DATA_DIR`, `FOOTBALL_RESULTS_FILE`,
    /// `FOOTBALL_SHOOTOUTS_FILE` and `FOOTBALL_GOALS_FILE`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut cfg = Self::default();
        if let Some(dir) = get("FOOTBALL_DATA_DIR") {
            cfg.data_dir = PathBuf::from(dir);
        }
        if let Some(name) = get("FOOTBALL_RESULTS_FILE") {
            cfg.results_file = name;
        }
        if let Some(name) = get("FOOTBALL_SHOOTOUTS_FILE") {
            cfg.shootouts_file = name;
        }
        if let Some(name) = get("FOOTBALL_GOALS_FILE") {
            cfg.goals_file = name;
        }
        cfg
    }

    pub fn results_path(&self) -> PathBuf {
        self.data_dir.join(&self.results_file)
    }

    pub fn shootouts_path(&self) -> PathBuf {
        self.data_dir.join(&self.shootouts_file)
    }

    pub fn goals_path(&self) -> PathBuf {
        self.data_dir.join(&self.goals_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_overrides_defaults() {
        let cfg = DataConfig::from_lookup(|key| match key {
            "FOOTBALL_DATA_DIR" => Some("/srv/football".to_string()),
            "FOOTBALL_GOALS_FILE" => Some("  ".to_string()),
            _ => None,
        });
        assert_eq!(cfg.results_path(), PathBuf::from("/srv/football/results.csv"));
        assert_eq!(cfg.goals_file, DEFAULT_GOALS_FILE);
    }
}
