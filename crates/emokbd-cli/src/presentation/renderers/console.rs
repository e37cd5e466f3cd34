use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::traits::Renderer;
use crate::presentation::view_models::{
    CommandResultViewModel, CreateView, StatusBadge, Tip, ViewMode,
};
use crate::types::OutputFormat;

/// Prints to stdout: pretty JSON, or the text view framed by badge and tips.
pub struct ConsoleRenderer {
    json_mode: bool,
    mode: ViewMode,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        let mode = if std::io::stdout().is_terminal() {
            ViewMode::Styled
        } else {
            ViewMode::Plain
        };
        Self { json_mode, mode }
    }

    pub fn for_format(format: OutputFormat) -> Self {
        Self::new(format.is_json())
    }

    fn print_badge(&self, badge: &StatusBadge) {
        if self.mode.is_styled() {
            println!("{} {}\n", badge.icon(), badge.label.bold());
        } else {
            println!("{} {}\n", badge.icon(), badge.label);
        }
    }

    fn print_tips(&self, tips: &[Tip]) {
        if self.mode.is_styled() {
            println!("\n{}", "💡 Tips:".yellow().bold());
        } else {
            println!("\n💡 Tips:");
        }
        for tip in tips {
            match (&tip.command, self.mode.is_styled()) {
                (Some(cmd), true) => println!("  • {}: {}", tip.description, cmd.cyan()),
                (Some(cmd), false) => println!("  • {}: {}", tip.description, cmd),
                (None, _) => println!("  • {}", tip.description),
            }
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        if self.json_mode {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            self.print_badge(badge);
        }
        print!("{}", result.content.create_view(self.mode));
        if !result.suggestions.is_empty() {
            self.print_tips(&result.suggestions);
        }
        Ok(())
    }
}
