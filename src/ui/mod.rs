//! Drawing of the browser with ratatui.
//!
//! [`draw`] renders one frame from the [`App`] state: the paged list, the
//! blank separator, the status bar and the pending repeat count. The help
//! overlay replaces all of it. A confirmation prompt is drawn over the bar by
//! [`terminal::Tui`] while it waits for the answer.

pub mod colors;
pub mod statusbar;
pub mod terminal;

use crate::core::app::App;
use crate::core::cursor::STATUS_BAR_ROWS;
use crate::core::entry::Entry;
use crate::core::mode::Mode;
use crate::core::state::StatusList;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Columns before an entry's text: line number and padding
const GUTTER: usize = 6;

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    if *app.mode() == Mode::HelpOverlay {
        draw_help(frame, area);
        return;
    }

    let list_height = area.height.saturating_sub(STATUS_BAR_ROWS as u16);
    draw_list(
        frame,
        app.list(),
        Rect {
            height: list_height,
            ..area
        },
    );

    if area.height > 0 {
        draw_status_bar(
            frame,
            app,
            Rect {
                y: area.bottom() - 1,
                height: 1,
                ..area
            },
        );
    }

    draw_repeat_count(frame, app.repeat_count().as_str(), area);
}

fn entry_line(entry: &Entry, line_number: Option<usize>, style: Style, width: usize) -> Line<'static> {
    let gutter = match line_number {
        Some(number) => format!("{:>3}{:pad$}", number, "", pad = GUTTER - 3),
        None => " ".repeat(GUTTER),
    };

    let body = if entry.is_selectable() {
        let mark = if entry.marked { "*" } else { " " };
        format!("{}  {:>11}  {}", mark, entry.note, entry.label)
    } else {
        entry.label.clone()
    };
    let body = format!("{:<pad$}", body, pad = width.saturating_sub(GUTTER));

    Line::from(vec![
        Span::styled(gutter, Style::default().fg(Color::DarkGray)),
        Span::styled(body, style),
    ])
}

fn draw_list(frame: &mut Frame, list: &StatusList, area: Rect) {
    let page = list.page(area.height as usize);
    let width = area.width as usize;

    let lines: Vec<Line> = page
        .rows
        .iter()
        .filter_map(|row| {
            let entry = list.row(row.index)?;
            let style = colors::row_style(entry, list.is_selected(entry), list.is_visual());
            Some(entry_line(entry, row.line_number, style, width))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let width = area.width as usize;
    let list = app.list();

    let text = match app.mode() {
        Mode::CommandEdit => {
            let buffer = app.edit_buffer().as_str();
            let left = format!(":{}", buffer);
            statusbar::compose_bar(width, &left, statusbar::search_help(width, buffer))
        }
        Mode::SearchEdit => {
            let left = format!("/{}", list.search_term());
            let help = statusbar::search_help(width, list.search_term());
            statusbar::compose_bar(width, &left, help)
        }
        _ if list.has_search_term() => {
            let left = format!("/{}", list.search_term());
            let help = statusbar::search_help(width, list.search_term());
            statusbar::compose_bar(width, &left, help)
        }
        _ => {
            let category = list.current().map(|entry| entry.category);
            let hints = statusbar::help_hints(width, category);
            statusbar::compose_bar(width, &hints, statusbar::HELP_HINT)
        }
    };

    frame.render_widget(Paragraph::new(text).style(colors::bar_style()), area);
}

fn draw_repeat_count(frame: &mut Frame, digits: &str, area: Rect) {
    let len = digits.len() as u16;
    if len == 0 || len > area.width || area.height == 0 {
        return;
    }
    let corner = Rect {
        x: area.right() - len,
        y: area.y,
        width: len,
        height: 1,
    };
    frame.render_widget(Paragraph::new(digits.to_string()), corner);
}

fn draw_help(frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::default(),
        Line::from(Span::styled(
            "  Help [Press any key to go back]",
            colors::title_style(),
        )),
        Line::default(),
    ];
    lines.extend(
        statusbar::full_help_lines()
            .into_iter()
            .map(|line| Line::from(format!("  {}", line))),
    );
    frame.render_widget(Paragraph::new(lines), area);
}
