//! Terminal loop for the picker.
//!
//! The picker draws on stderr so stdout carries nothing but the chosen text.

use std::io::{self, Stderr};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{
        self, Event, KeyboardEnhancementFlags, PopKeyboardEnhancementFlags,
        PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
        supports_keyboard_enhancement,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{debug, info};

use super::app::{Outcome, PickerApp};
use super::view;

type Backend = CrosstermBackend<Stderr>;

/// Raw mode and the alternate screen, restored on drop.
struct TerminalGuard {
    terminal: Terminal<Backend>,
    enhanced: bool,
}

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        let mut stderr = io::stderr();
        execute!(stderr, EnterAlternateScreen)?;

        // Shift+Enter is only reported with disambiguated escape codes
        let enhanced = supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            execute!(
                stderr,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
            )?;
        }

        let terminal = Terminal::new(CrosstermBackend::new(stderr))?;
        Ok(Self { terminal, enhanced })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let backend = self.terminal.backend_mut();
        if self.enhanced {
            let _ = execute!(backend, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(backend, LeaveAlternateScreen);
        let _ = disable_raw_mode();
        let _ = self.terminal.show_cursor();
    }
}

/// Run the picker until Enter on the input field (`Some(text)`) or Ctrl+C
/// (`None`).
pub fn run_picker(mut app: PickerApp, key_width: u16) -> Result<Option<String>> {
    let mut guard = TerminalGuard::enter()?;
    info!(layout = %app.board().layout_name(), "picker started");

    loop {
        guard.terminal.draw(|f| view::draw(f, &app, key_width))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => match app.handle_key(key) {
                Outcome::Continue => {}
                Outcome::Done(text) => {
                    info!(chars = text.chars().count(), "picker done");
                    return Ok(Some(text));
                }
                Outcome::Quit => {
                    info!("picker cancelled");
                    return Ok(None);
                }
            },
            Event::Resize(width, height) => debug!(width, height, "terminal resized"),
            _ => {}
        }
    }
}
