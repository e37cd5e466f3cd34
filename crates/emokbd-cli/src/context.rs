use anyhow::Result;
use emokbd_runtime::{Board, DirOverrides, Environment, init_logging};
use once_cell::sync::OnceCell;

use crate::args::Cli;
use crate::types::LogLevel;

/// Per-invocation state shared by the handlers. The environment is loaded
/// on first use, and logging starts with it.
pub struct ExecutionContext {
    overrides: DirOverrides,
    layout: Option<String>,
    log_level: Option<LogLevel>,
    env: OnceCell<Environment>,
}

impl ExecutionContext {
    pub fn new(overrides: DirOverrides, layout: Option<String>, log_level: Option<LogLevel>) -> Self {
        Self {
            overrides,
            layout,
            log_level,
            env: OnceCell::new(),
        }
    }

    pub fn from_cli(cli: &Cli) -> Self {
        let overrides = DirOverrides {
            config_dir: cli.config_dir.clone(),
            state_dir: cli.state_dir.clone(),
            cache_dir: cli.cache_dir.clone(),
        };
        Self::new(overrides, cli.layout.clone(), cli.log_level)
    }

    /// `--layout`, if given.
    pub fn layout(&self) -> Option<&str> {
        self.layout.as_deref()
    }

    pub fn environment(&self) -> Result<&Environment> {
        self.env.get_or_try_init(|| -> Result<Environment> {
            let env = Environment::load(&self.overrides)?;
            self.start_logging(&env);
            Ok(env)
        })
    }

    fn start_logging(&self, env: &Environment) {
        let level = self.log_level.map(LogLevel::directive);
        if let Err(err) = init_logging(&env.dirs.log_file(), &env.config.logging, level) {
            eprintln!("Warning: logging disabled: {}", err);
        }
    }

    pub fn open_board(&self) -> Result<Board> {
        Ok(self.environment()?.open_board(self.layout())?)
    }
}
