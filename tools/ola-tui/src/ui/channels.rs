//! Channel view: live grid of one universe, keypad and poller events.

use crate::app::App;
use ola_02_channel_poller::PollStats;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use shared_types::{DisplayClass, MIN_CHANNEL_VALUE};

/// Channels per grid row.
const GRID_COLUMNS: usize = 32;

/// Render the channel view.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Length(18), // 16 grid rows + borders
            Constraint::Min(6),     // Keypad + events
            Constraint::Length(3),  // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_grid(frame, app, chunks[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);
    render_keypad(frame, app, bottom[0]);
    render_events(frame, app, bottom[1]);

    render_footer(frame, &app.poll_stats(), chunks[3]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let universe = app
        .universe()
        .map(|u| u.to_string())
        .unwrap_or_else(|| "-".to_string());

    let (status, color) = if app.is_polling() {
        ("● POLLING", Color::Green)
    } else {
        ("○ STOPPED", Color::Red)
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" UNIVERSE {}", universe),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  │  "),
        Span::styled(status, Style::default().fg(color)),
        Span::raw(format!(" every {} ms", app.poll_period().as_millis())),
        Span::raw("  │  "),
        Span::raw(app.server_url()),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" CHANNELS "));

    frame.render_widget(header, area);
}

/// One line per 32 channels, each prefixed with its first channel number.
fn render_grid(frame: &mut Frame, app: &App, area: Rect) {
    let cells = app.channel_cells();

    let lines: Vec<Line> = cells
        .chunks(GRID_COLUMNS)
        .enumerate()
        .map(|(row, chunk)| {
            let mut spans = Vec::with_capacity(chunk.len() + 1);
            spans.push(Span::styled(
                format!("{:>3} ", row * GRID_COLUMNS + 1),
                Style::default().fg(Color::Yellow),
            ));
            spans.extend(
                chunk
                    .iter()
                    .map(|(value, class)| Span::styled(format!("{:>3}", value), cell_style(*value, *class)))
                    .flat_map(|cell| [cell, Span::raw(" ")]),
            );
            Line::from(spans)
        })
        .collect();

    let lit = cells.iter().filter(|(v, _)| *v > MIN_CHANNEL_VALUE).count();
    let grid = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Levels ({} lit) ", lit))
            .border_style(Style::default().fg(Color::Blue)),
    );

    frame.render_widget(grid, area);
}

fn cell_style(value: u8, class: DisplayClass) -> Style {
    match class {
        DisplayClass::Dark => Style::default()
            .bg(Color::LightYellow)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
        DisplayClass::Light if value == MIN_CHANNEL_VALUE => Style::default().fg(Color::DarkGray),
        DisplayClass::Light => Style::default().fg(Color::White),
    }
}

fn render_keypad(frame: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![
        Line::from(vec![
            Span::raw(" > "),
            Span::styled(
                app.keypad_buffer.as_str(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    if let Some(status) = &app.keypad_status {
        lines.push(Line::from(Span::styled(
            format!(" {}", status),
            Style::default().fg(Color::Magenta),
        )));
    }

    lines.push(Line::from(Span::styled(
        " 0-9 digits  [T] THRU  [A] @  [F] FULL",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keypad ")
        .border_style(Style::default().fg(Color::Green));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_events(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .live_events
        .iter()
        .map(|event| {
            let color = match event.event_type {
                "error" => Color::Red,
                "start" => Color::Green,
                "stop" => Color::Yellow,
                _ => Color::White,
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {:>4}s ", event.timestamp.elapsed().as_secs()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!("{:<6}", event.event_type), Style::default().fg(color)),
                Span::raw(event.description.as_str()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Events ({}) ", app.live_events.len())),
    );

    frame.render_widget(list, area);
}

fn render_footer(frame: &mut Frame, stats: &PollStats, area: Rect) {
    let mut spans = vec![
        Span::raw(format!(
            " ticks {}  applied {}  failed {}  discarded {}  in-flight {}",
            stats.ticks,
            stats.applied,
            stats.failed,
            stats.discarded,
            stats.in_flight()
        )),
        Span::raw("  │ "),
        Span::styled("[Enter] ", Style::default().fg(Color::Yellow)),
        Span::raw("Send  "),
        Span::styled("[Esc] ", Style::default().fg(Color::Yellow)),
        Span::raw("Back  "),
        Span::styled("[Q] ", Style::default().fg(Color::Yellow)),
        Span::raw("Quit"),
    ];
    if let Some(error) = &stats.last_error {
        spans.push(Span::raw("  │ "));
        spans.push(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL)),
        area,
    );
}
