use std::path::PathBuf;

use crate::{Error, Result};

pub const CONFIG_FILE: &str = "emokbd.toml";
pub const RECENT_FILE: &str = "recent.txt";
pub const LOG_FILE: &str = "emokbd.log";

/// Set to any value to keep every file inside the working directory.
pub const DEV_ENV: &str = "EMOKBD_DEV";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirKind {
    Config,
    State,
    Cache,
}

impl DirKind {
    pub fn env_var(self) -> &'static str {
        match self {
            DirKind::Config => "EMOKBD_CONFIG_DIR",
            DirKind::State => "EMOKBD_STATE_DIR",
            DirKind::Cache => "EMOKBD_CACHE_DIR",
        }
    }

    fn dev_dir(self) -> &'static str {
        match self {
            DirKind::Config => "res",
            DirKind::State | DirKind::Cache => ".local",
        }
    }

    fn platform_dir(self) -> Option<PathBuf> {
        match self {
            DirKind::Config => dirs::config_dir(),
            DirKind::State => dirs::state_dir().or_else(dirs::data_local_dir),
            DirKind::Cache => dirs::cache_dir(),
        }
    }
}

/// Resolve a directory based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. EMOKBD_CONFIG_DIR / EMOKBD_STATE_DIR / EMOKBD_CACHE_DIR (with tilde expansion)
/// 3. EMOKBD_DEV set: ./res for config, ./.local for state and cache
/// 4. Platform directory joined with `emokbd`
/// 5. ~/.emokbd
pub fn resolve_dir(kind: DirKind, explicit_path: Option<&str>) -> Result<PathBuf> {
    resolve_dir_with(kind, explicit_path, |name| std::env::var(name).ok())
}

fn resolve_dir_with(
    kind: DirKind,
    explicit_path: Option<&str>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Some(env_path) = env(kind.env_var()) {
        return Ok(expand_tilde(&env_path));
    }

    if env(DEV_ENV).is_some() {
        return Ok(PathBuf::from(kind.dev_dir()));
    }

    if let Some(dir) = kind.platform_dir() {
        return Ok(dir.join("emokbd"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".emokbd"));
    }

    Err(Error::Config(format!(
        "Could not determine {:?} directory: no HOME directory or platform directory found",
        kind
    )))
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Explicit directory choices, typically from the command line.
#[derive(Debug, Clone, Default)]
pub struct DirOverrides {
    pub config_dir: Option<String>,
    pub state_dir: Option<String>,
    pub cache_dir: Option<String>,
}

/// The three directories the picker reads and writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dirs {
    pub config: PathBuf,
    pub state: PathBuf,
    pub cache: PathBuf,
}

impl Dirs {
    pub fn resolve(overrides: &DirOverrides) -> Result<Self> {
        Ok(Self {
            config: resolve_dir(DirKind::Config, overrides.config_dir.as_deref())?,
            state: resolve_dir(DirKind::State, overrides.state_dir.as_deref())?,
            cache: resolve_dir(DirKind::Cache, overrides.cache_dir.as_deref())?,
        })
    }

    pub fn config_file(&self) -> PathBuf {
        self.config.join(CONFIG_FILE)
    }

    pub fn recent_file(&self) -> PathBuf {
        self.state.join(RECENT_FILE)
    }

    pub fn log_file(&self) -> PathBuf {
        self.state.join(LOG_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_explicit_path_wins() {
        let env = env_of(&[("EMOKBD_CONFIG_DIR", "/from/env"), (DEV_ENV, "1")]);
        let path = resolve_dir_with(DirKind::Config, Some("/explicit"), env).unwrap();
        assert_eq!(path, PathBuf::from("/explicit"));
    }

    #[test]
    fn test_env_var_per_kind() {
        let env = env_of(&[
            ("EMOKBD_STATE_DIR", "/state"),
            ("EMOKBD_CACHE_DIR", "/cache"),
            (DEV_ENV, "1"),
        ]);
        assert_eq!(
            resolve_dir_with(DirKind::State, None, &env).unwrap(),
            PathBuf::from("/state")
        );
        assert_eq!(
            resolve_dir_with(DirKind::Cache, None, &env).unwrap(),
            PathBuf::from("/cache")
        );
        // config has no variable of its own here, so the dev layout applies
        assert_eq!(
            resolve_dir_with(DirKind::Config, None, &env).unwrap(),
            PathBuf::from("res")
        );
    }

    #[test]
    fn test_dev_layout() {
        let env = env_of(&[(DEV_ENV, "")]);
        assert_eq!(
            resolve_dir_with(DirKind::State, None, &env).unwrap(),
            PathBuf::from(".local")
        );
        assert_eq!(
            resolve_dir_with(DirKind::Cache, None, &env).unwrap(),
            PathBuf::from(".local")
        );
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
        assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
    }

    #[test]
    fn test_dirs_file_names() {
        let dirs = Dirs {
            config: PathBuf::from("/c"),
            state: PathBuf::from("/s"),
            cache: PathBuf::from("/k"),
        };
        assert_eq!(dirs.config_file(), PathBuf::from("/c/emokbd.toml"));
        assert_eq!(dirs.recent_file(), PathBuf::from("/s/recent.txt"));
        assert_eq!(dirs.log_file(), PathBuf::from("/s/emokbd.log"));
    }
}
