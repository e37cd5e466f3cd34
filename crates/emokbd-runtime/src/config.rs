use std::path::{Path, PathBuf};

use emokbd_corpus::Sources;
use emokbd_engine::{Layout, NamedLayout};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BoardConfig {
    /// Active layout name, matched case-insensitively.
    pub layout: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            layout: "US".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TerminalConfig {
    /// Columns per key cell: key, symbol and padding.
    pub min_key_width: u16,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self { min_key_width: 4 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutConfig {
    pub name: String,
    pub symbol: String,
    pub keys: String,
}

impl LayoutConfig {
    fn new(name: &str, symbol: &str, keys: &str) -> Self {
        Self {
            name: name.to_string(),
            symbol: symbol.to_string(),
            keys: keys.to_string(),
        }
    }
}

pub fn default_layouts() -> Vec<LayoutConfig> {
    vec![
        LayoutConfig::new(
            "US",
            "🇺🇸",
            "\
1234567890-=
QWERTYUIOP[]
ASDFGHJKL;'
ZXCVBNM,./
",
        ),
        LayoutConfig::new(
            "DE",
            "🇩🇪",
            "\
1234567890ß´
QWERTZUIOPÜ+
ASDFGHJKLÖÄ#
<YXCVBNM,.-
",
        ),
        LayoutConfig::new(
            "Bone Corne",
            "🦴",
            "\
JDUAX PHLMW
CTIEO BNRSG
?,VFQ YKZ.-
",
        ),
    ]
}

/// Locations of the corpus sources. Relative paths are taken from the cache
/// directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SourcesConfig {
    pub emojibase_dir: PathBuf,
    pub unicode_data: PathBuf,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            emojibase_dir: PathBuf::from("emojibase"),
            unicode_data: PathBuf::from("UnicodeData.txt"),
        }
    }
}

impl SourcesConfig {
    pub fn resolve(&self, cache_dir: &Path) -> Sources {
        Sources {
            emojibase_dir: cache_dir.join(&self.emojibase_dir),
            unicode_data: cache_dir.join(&self.unicode_data),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directive, e.g. `info` or `emokbd_engine=debug`.
    pub level: String,
    /// Keep earlier runs in the log file instead of truncating it.
    pub append: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            append: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub board: BoardConfig,
    pub terminal: TerminalConfig,
    #[serde(rename = "layout")]
    pub layouts: Vec<LayoutConfig>,
    pub sources: SourcesConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            terminal: TerminalConfig::default(),
            layouts: default_layouts(),
            sources: SourcesConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|err| Error::Config(format!("{}: {}", path.display(), err)))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Parse every configured layout.
    pub fn layouts(&self) -> Result<Vec<NamedLayout>> {
        if self.layouts.is_empty() {
            return Err(Error::Config("no [[layout]] entries configured".to_string()));
        }
        self.layouts
            .iter()
            .map(|l| {
                let layout = Layout::parse(&l.keys)
                    .map_err(|err| Error::Config(format!("layout '{}': {}", l.name, err)))?;
                Ok(NamedLayout::new(l.name.clone(), l.symbol.clone(), layout))
            })
            .collect()
    }
}
