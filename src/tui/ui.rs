//! TUI rendering
//!
//! Top to bottom: title, error banner (only when set), search bar,
//! loading indicator or user table, status bar.

use crate::tui::app::App;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use unicode_width::UnicodeWidthStr;

pub fn draw(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    let banner_height = if app.state.error.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Title
            Constraint::Length(banner_height), // Error banner
            Constraint::Length(3),             // Search bar
            Constraint::Min(3),                // Table / loading
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    draw_title(frame, chunks[0]);
    if let Some(message) = &app.state.error {
        draw_error_banner(frame, message, chunks[1]);
    }
    draw_search_bar(frame, app, chunks[2]);
    if app.state.is_loading {
        draw_loading(frame, chunks[3]);
    } else {
        draw_table(frame, app, chunks[3]);
    }
    draw_status_bar(frame, app, chunks[4]);

    // Show cursor in the search bar when focused
    if app.search.focused {
        // Border (1) + " \u{1F50D} " prefix (4 display cols)
        let typed = &app.search.query[..app.search.cursor_pos];
        let cursor_x = chunks[2].x + 1 + 4 + typed.width() as u16;
        let cursor_y = chunks[2].y + 1;
        frame.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(" User Data").style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Rgb(40, 40, 50))
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, area);
}

fn draw_error_banner(frame: &mut Frame, message: &str, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(" Error ")
        .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD));

    let banner = Paragraph::new(message)
        .block(block)
        .style(Style::default().fg(Color::LightRed));
    frame.render_widget(banner, area);
}

fn draw_search_bar(frame: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.search.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Search by name ");

    let search_text = format!(" \u{1F50D} {}", app.search.query);
    let paragraph = Paragraph::new(search_text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(paragraph, area);
}

fn draw_loading(frame: &mut Frame, area: Rect) {
    let loading = Paragraph::new("\u{23F3} Loading users...")
        .style(Style::default().fg(Color::Yellow))
        .centered();
    frame.render_widget(loading, area);
}

fn draw_table(frame: &mut Frame, app: &mut App, area: Rect) {
    // Visible rows: area height minus the header
    let table_inner_height = area.height.saturating_sub(1) as usize;
    app.table.visible_rows = table_inner_height;

    let header = Row::new(["Name", "Email", "City"].map(|name| {
        Cell::from(name).style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 95, 135))
                .add_modifier(Modifier::BOLD),
        )
    }))
    .height(1);

    let total = app.state.visible.len();

    if total == 0 && app.state.error.is_none() {
        let empty_row = Row::new([
            Cell::from("No users match").style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
            Cell::from(""),
            Cell::from(""),
        ]);
        let table = Table::new(
            vec![empty_row],
            [
                Constraint::Fill(2),
                Constraint::Fill(2),
                Constraint::Fill(1),
            ],
        )
        .header(header);
        frame.render_widget(table, area);
        return;
    }

    // Build only the rows in the scroll window
    let start = app.table.scroll_offset;
    let end = (start + table_inner_height).min(total);

    let rows: Vec<Row> = (start..end)
        .enumerate()
        .map(|(visual_idx, logical_idx)| {
            let user_idx = app.state.visible[logical_idx];
            let user = &app.state.users[user_idx];

            let is_selected = app.table.selected == Some(logical_idx);

            let bg = if is_selected {
                Color::Rgb(60, 60, 80)
            } else if visual_idx % 2 == 1 {
                Color::Rgb(25, 25, 35)
            } else {
                Color::Reset
            };
            let fg_modifier = if is_selected {
                Modifier::BOLD
            } else {
                Modifier::empty()
            };

            let name_cell = Cell::from(user.name.clone()).style(
                Style::default()
                    .fg(Color::LightBlue)
                    .bg(bg)
                    .add_modifier(fg_modifier),
            );
            let email_cell =
                Cell::from(user.email.clone()).style(Style::default().fg(Color::Green).bg(bg));
            let city_cell =
                Cell::from(user.city().to_string()).style(Style::default().fg(Color::Gray).bg(bg));

            Row::new(vec![name_cell, email_cell, city_cell])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Fill(2),
            Constraint::Fill(2),
            Constraint::Fill(1),
        ],
    )
    .header(header);

    frame.render_widget(table, area);
}

fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let left_text = if app.state.is_loading {
        " \u{23F3} Fetching...".to_string()
    } else {
        format!(
            " {} of {} users",
            app.state.visible.len(),
            app.state.users.len()
        )
    };

    let right_text = " Tab:Search  F5:Refresh  \u{2191}\u{2193}:Move  Esc:Quit ";

    let available_width = area.width as usize;
    let left_len = left_text.width();
    let right_len = right_text.width();

    let status_str = if left_len + right_len < available_width {
        let padding = available_width - left_len - right_len;
        format!("{}{:padding$}{}", left_text, "", right_text, padding = padding)
    } else {
        format!("{:width$}", left_text, width = available_width)
    };

    let status = Paragraph::new(status_str)
        .style(Style::default().fg(Color::White).bg(Color::Rgb(0, 95, 135)));

    frame.render_widget(status, area);
}
