//! Picker screen: input and search fields, the keyboard, and the status line.

use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Constraint, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::app::{Focus, PickerApp};
use crate::presentation::symbols;

const INPUT_PROMPT: &str = "✎ ";
const SEARCH_PROMPT: &str = "🔎 ";

pub fn draw(f: &mut Frame, app: &PickerApp, key_width: u16) {
    let layout = app.board().layout();
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(layout.height() as u16),
        Constraint::Min(1),
    ])
    .split(f.area());

    f.render_widget(FieldsView::new(app), chunks[0]);
    f.render_widget(TitleView::new(app), chunks[1]);
    f.render_widget(KeyboardView::new(app, key_width), chunks[2]);
    f.render_widget(
        Paragraph::new(app.status_line()).wrap(Wrap { trim: true }),
        chunks[3],
    );

    if let Some(position) = field_cursor(app, chunks[0]) {
        f.set_cursor_position(position);
    }
}

fn field_cursor(app: &PickerApp, area: Rect) -> Option<Position> {
    let x = match app.focus() {
        Focus::Input => {
            symbols::display_width(INPUT_PROMPT)
                + symbols::display_width(app.input().before_cursor())
        }
        Focus::Search => {
            search_column(area)
                + symbols::display_width(SEARCH_PROMPT)
                + symbols::display_width(app.search_field().before_cursor())
        }
        Focus::Board => return None,
    };
    let x = (area.x as usize + x).min(area.right().saturating_sub(1) as usize) as u16;
    Some(Position::new(x, area.y))
}

fn search_column(area: Rect) -> usize {
    (area.width as usize * 2) / 3
}

fn field_style(focused: bool) -> Style {
    if focused {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

struct FieldsView<'a> {
    app: &'a PickerApp,
}

impl<'a> FieldsView<'a> {
    fn new(app: &'a PickerApp) -> Self {
        Self { app }
    }
}

impl<'a> Widget for FieldsView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let split = search_column(area) as u16;
        let left = Rect { width: split, ..area };
        let right = Rect {
            x: area.x + split,
            width: area.width.saturating_sub(split),
            ..area
        };

        Paragraph::new(Line::from(vec![
            Span::raw(INPUT_PROMPT),
            Span::styled(
                self.app.input().text(),
                field_style(self.app.focus() == Focus::Input),
            ),
        ]))
        .render(left, buf);

        Paragraph::new(Line::from(vec![
            Span::raw(SEARCH_PROMPT),
            Span::styled(
                self.app.search_field().text(),
                field_style(self.app.focus() == Focus::Search),
            ),
        ]))
        .render(right, buf);
    }
}

struct TitleView<'a> {
    app: &'a PickerApp,
}

impl<'a> TitleView<'a> {
    fn new(app: &'a PickerApp) -> Self {
        Self { app }
    }
}

impl<'a> Widget for TitleView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board = self.app.board();
        let named = &board.layouts()[board.active_layout()];
        let page = if board.is_root() {
            "Home"
        } else {
            board.page_title()
        };

        let mut spans = vec![
            Span::raw(format!("{} {}", named.symbol, named.name)),
            Span::raw(" · "),
            Span::styled(page, Style::default().add_modifier(Modifier::BOLD)),
        ];
        if self.app.prefix_armed() {
            spans.push(Span::styled(" [prefix]", Style::default().fg(Color::Yellow)));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// The active layout with every key's symbol next to it.
struct KeyboardView<'a> {
    app: &'a PickerApp,
    key_width: usize,
}

impl<'a> KeyboardView<'a> {
    fn new(app: &'a PickerApp, key_width: u16) -> Self {
        Self {
            app,
            key_width: key_width.max(2) as usize,
        }
    }
}

impl<'a> Widget for KeyboardView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let board = self.app.board();
        let layout = board.layout();
        let mapping = board.mapping();
        let show_cursor = self.app.focus() == Focus::Board;
        let cursor = (board.cursor_x(), board.cursor_y());

        let lines: Vec<Line> = layout
            .rows()
            .enumerate()
            .map(|(y, row)| {
                let spans: Vec<Span> = row
                    .iter()
                    .enumerate()
                    .flat_map(|(x, &key)| {
                        if key.is_whitespace() {
                            return vec![Span::raw(" ".repeat(self.key_width))];
                        }
                        let (text, special) = match mapping.get(&key) {
                            Some(item) => symbols::cell_text(item),
                            None => ("", false),
                        };
                        let cell = symbols::pad(text, self.key_width - 1);

                        let mut key_style = Style::default().fg(Color::DarkGray);
                        let mut cell_style = if special {
                            Style::default().fg(Color::Cyan)
                        } else {
                            Style::default()
                        };
                        if show_cursor && (x, y) == cursor {
                            key_style = key_style.add_modifier(Modifier::REVERSED);
                            cell_style = cell_style.add_modifier(Modifier::REVERSED);
                        }
                        vec![
                            Span::styled(key.to_string(), key_style),
                            Span::styled(cell, cell_style),
                        ]
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).render(area, buf);
    }
}
