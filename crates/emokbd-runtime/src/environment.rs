use emokbd_corpus::{Corpus, Sources};
use emokbd_engine::{Board, RecentStore};
use tracing::{debug, info};

use crate::config::Config;
use crate::paths::{DirOverrides, Dirs};
use crate::Result;

/// Resolved directories plus the configuration read from them.
#[derive(Debug, Clone)]
pub struct Environment {
    pub dirs: Dirs,
    pub config: Config,
}

impl Environment {
    pub fn new(dirs: Dirs, config: Config) -> Self {
        Self { dirs, config }
    }

    /// Resolve directories and read `emokbd.toml` from the config dir.
    pub fn load(overrides: &DirOverrides) -> Result<Self> {
        let dirs = Dirs::resolve(overrides)?;
        let config = Config::load_from(&dirs.config_file())?;
        debug!(
            config = %dirs.config.display(),
            state = %dirs.state.display(),
            cache = %dirs.cache.display(),
            "directories resolved"
        );
        Ok(Self { dirs, config })
    }

    pub fn sources(&self) -> Sources {
        self.config.sources.resolve(&self.dirs.cache)
    }

    pub fn load_corpus(&self) -> Result<Corpus> {
        Ok(Corpus::load_or_build(&self.dirs.cache, &self.sources())?)
    }

    pub fn rebuild_corpus(&self) -> Result<Corpus> {
        Ok(Corpus::rebuild(&self.dirs.cache, &self.sources())?)
    }

    pub fn open_recent(&self) -> RecentStore {
        RecentStore::open(self.dirs.recent_file())
    }

    /// Name of the layout to start with: `layout` if given, else `[board] layout`.
    pub fn active_layout<'a>(&'a self, layout: Option<&'a str>) -> &'a str {
        layout.unwrap_or(&self.config.board.layout)
    }

    /// Load the corpus and the recent list and bind them to the configured
    /// layouts.
    pub fn open_board(&self, layout: Option<&str>) -> Result<Board> {
        let corpus = self.load_corpus()?;
        self.board_for(corpus, layout)
    }

    pub fn board_for(&self, corpus: Corpus, layout: Option<&str>) -> Result<Board> {
        let layouts = self.config.layouts()?;
        let recent = self.open_recent();
        info!(
            items = corpus.items.len(),
            recent = recent.len(),
            "opening board"
        );
        Ok(Board::new(
            layouts,
            self.active_layout(layout),
            corpus.items,
            corpus.groups,
            recent,
        )?)
    }
}
