//! Picker state: which field has focus, the composed text, the search query,
//! and how key presses drive the [`Board`].
//!
//! Kept free of terminal I/O so the key handling can be tested directly.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use emokbd_engine::{Activation, Board, JUMP};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The composed text.
    Input,
    /// The search query.
    Search,
    /// The keyboard.
    Board,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    /// Enter on the input field: print the composed text.
    Done(String),
    /// Ctrl+C: leave without output.
    Quit,
}

/// Single-line text with a cursor counted in chars.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    text: String,
    cursor: usize,
}

impl TextField {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map_or(self.text.len(), |(i, _)| i)
    }

    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_index(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_index(self.cursor - 1);
        let end = self.byte_index(self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let start = self.byte_index(self.cursor);
        let end = self.byte_index(self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }

    pub fn left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn right(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Text left of the cursor, used to place the terminal cursor.
    pub fn before_cursor(&self) -> &str {
        &self.text[..self.byte_index(self.cursor)]
    }
}

pub struct PickerApp {
    board: Board,
    focus: Focus,
    input: TextField,
    search: TextField,
    /// Set by Ctrl+F: the next typed character replaces the query.
    search_selected: bool,
    prefix: bool,
    message: Option<String>,
}

impl PickerApp {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            focus: Focus::Input,
            input: TextField::default(),
            search: TextField::default(),
            search_selected: false,
            prefix: false,
            message: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn input(&self) -> &TextField {
        &self.input
    }

    pub fn search_field(&self) -> &TextField {
        &self.search
    }

    /// Whether Space was pressed and the next choice opens variants.
    pub fn prefix_armed(&self) -> bool {
        self.prefix
    }

    /// `; `-joined facts about the page and the item under the cursor.
    pub fn status_line(&self) -> String {
        let mut parts = Vec::new();
        if let Some(message) = &self.message {
            parts.push(message.clone());
        }

        let (page, pages) = self.board.page_of_pages();
        if pages > 1 {
            parts.push(format!("{}/{}", page, pages));
        }

        if let Some(item) = self.board.get_emoji() {
            if !item.children.is_empty() {
                parts.push(format!("{} emojis", item.children.len()));
            }
            parts.push(item.symbol.clone());
            if item.has_code() {
                parts.push(item.code.clone());
            }
            if !item.label.is_empty() {
                parts.push(item.label.clone());
            }
            let classification = item.classification();
            if !classification.is_empty() {
                parts.push(classification);
            }
            if !item.tags.is_empty() {
                parts.push(item.tags.clone());
            }
            if !item.mark.is_empty() {
                parts.push(item.mark.clone());
            }
        }
        parts.join("; ")
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        if key.kind == KeyEventKind::Release {
            return Outcome::Continue;
        }
        self.message = None;
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => return Outcome::Quit,
            KeyCode::Char('f') if ctrl => {
                self.focus_search();
                return Outcome::Continue;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                if self.focus == Focus::Board {
                    self.focus_input();
                } else {
                    self.focus = Focus::Board;
                }
                return Outcome::Continue;
            }
            KeyCode::Enter if self.focus == Focus::Input => {
                return Outcome::Done(self.input.text().to_string());
            }
            _ if ctrl => return Outcome::Continue,
            _ => {}
        }

        match self.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::Search => self.handle_search_key(key),
            Focus::Board => self.handle_board_key(key),
        }
        Outcome::Continue
    }

    fn focus_input(&mut self) {
        self.focus = Focus::Input;
        if self.board.is_search() {
            self.board.pop_board();
        }
    }

    fn focus_search(&mut self) {
        self.focus = Focus::Search;
        self.search_selected = true;
        self.search.end();
        self.board.search(self.search.text());
    }

    fn research(&mut self) {
        let found = self.board.search(self.search.text());
        debug!(query = %self.search.text(), found, "search updated");
    }

    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.board.pop_board();
            }
            KeyCode::Backspace => {
                self.input.backspace();
            }
            KeyCode::Delete => {
                self.input.delete();
            }
            KeyCode::Left => {
                self.input.left();
            }
            KeyCode::Right => {
                if !self.input.right() {
                    self.focus_search();
                }
            }
            KeyCode::Home => self.input.home(),
            KeyCode::End => self.input.end(),
            KeyCode::Down => self.focus = Focus::Board,
            KeyCode::PageUp => {
                self.board.scroll(-1);
            }
            KeyCode::PageDown => {
                self.board.scroll(1);
            }
            KeyCode::Char(' ') => self.prefix = true,
            KeyCode::Char(c) => self.choose_key(c),
            _ => {}
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        let edits = matches!(
            key.code,
            KeyCode::Char(_) | KeyCode::Backspace | KeyCode::Delete
        );
        if edits && self.search_selected {
            self.search.clear();
        }
        self.search_selected = false;

        match key.code {
            KeyCode::Esc => {
                self.board.pop_board();
                self.focus = Focus::Input;
            }
            KeyCode::Backspace => {
                self.search.backspace();
                self.research();
            }
            KeyCode::Delete => {
                self.search.delete();
                self.research();
            }
            KeyCode::Left => {
                if !self.search.left() {
                    self.focus_input();
                }
            }
            KeyCode::Right => {
                self.search.right();
            }
            KeyCode::Home => self.search.home(),
            KeyCode::End => self.search.end(),
            KeyCode::Down => self.focus = Focus::Board,
            KeyCode::PageUp => {
                self.board.scroll(-1);
            }
            KeyCode::PageDown => {
                self.board.scroll(1);
            }
            KeyCode::Enter => self.choose_current(),
            KeyCode::Char(c) => {
                let mut buf = [0u8; 4];
                self.search.insert_str(c.encode_utf8(&mut buf));
                self.research();
            }
            _ => {}
        }
    }

    fn handle_board_key(&mut self, key: KeyEvent) {
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);
        let on_recent = self.board.is_recent();

        match key.code {
            KeyCode::Esc => {
                self.board.pop_board();
            }
            KeyCode::Enter if shift && on_recent => {
                if let Some(favorite) = self.board.recent_toggle_favorite() {
                    self.message = Some(if favorite { "pinned" } else { "unpinned" }.into());
                }
            }
            KeyCode::Enter => self.choose_current(),
            KeyCode::Delete if shift && on_recent => {
                self.board.recent_delete();
            }
            KeyCode::Left if shift && on_recent => {
                self.board.move_recent_emoji(-1);
            }
            KeyCode::Right if shift && on_recent => {
                self.board.move_recent_emoji(1);
            }
            KeyCode::Backspace => {
                self.input.backspace();
            }
            KeyCode::Delete => {
                self.input.delete();
            }
            KeyCode::Left => {
                self.board.move_cursor(-1, 0);
            }
            KeyCode::Right => {
                self.board.move_cursor(1, 0);
            }
            KeyCode::Down => {
                self.board.move_cursor(0, 1);
            }
            KeyCode::Up => {
                if self.board.cursor_y() == 0 {
                    self.focus_input();
                } else {
                    self.board.move_cursor(0, -1);
                }
            }
            KeyCode::Home => {
                self.board.move_cursor(-JUMP, 0);
            }
            KeyCode::End => {
                self.board.move_cursor(JUMP, 0);
            }
            KeyCode::PageUp => {
                self.board.scroll(-1);
            }
            KeyCode::PageDown => {
                self.board.scroll(1);
            }
            KeyCode::Char(' ') => self.prefix = true,
            KeyCode::Char(c) => self.choose_key(c),
            _ => {}
        }
    }

    fn choose_key(&mut self, key: char) {
        if self.board.get_emoji_for_key(key).is_none() {
            return;
        }
        match self.board.activate(key, self.prefix) {
            Ok(activation) => self.apply(activation),
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn choose_current(&mut self) {
        let activation = self.board.activate_current(self.prefix);
        self.apply(activation);
    }

    fn apply(&mut self, activation: Activation) {
        match activation {
            Activation::Selected(item) => {
                self.prefix = false;
                self.input.insert_str(&item.symbol);
                self.board.recent_add();
                if self.focus == Focus::Search {
                    self.focus_input();
                }
            }
            Activation::Entered(kind) => {
                self.prefix = false;
                debug!(%kind, "entered page");
            }
            Activation::LayoutChanged(name) => {
                self.prefix = false;
                self.message = Some(format!("layout {}", name));
            }
            Activation::Ignored => {}
        }
    }
}
