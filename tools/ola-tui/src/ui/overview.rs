//! Overview UI rendering: server, universes, plugins.

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table},
    Frame,
};

/// Render the overview.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Server info
            Constraint::Min(8),    // Universes + plugins
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_server_info(frame, app, chunks[1]);

    let lists = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[2]);
    render_universes(frame, app, lists[0]);
    render_plugins(frame, app, lists[1]);

    render_footer(frame, app, chunks[3]);
}

/// Render the header bar.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (status, color, symbol) = if app.connected {
        ("CONNECTED", Color::Green, "●")
    } else {
        ("DISCONNECTED", Color::Red, "○")
    };

    let header = Paragraph::new(Line::from(vec![
        Span::raw(" Server: "),
        Span::styled(app.server_url(), Style::default().fg(Color::Cyan)),
        Span::raw("    Status: "),
        Span::styled(
            format!("{} {}", symbol, status),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::raw("    Uptime: "),
        Span::styled(app.uptime_str(), Style::default().fg(Color::Cyan)),
    ]))
    .block(Block::default().borders(Borders::ALL).title(" OLA CHANNEL MONITOR "));

    frame.render_widget(header, area);
}

/// Render server stats.
fn render_server_info(frame: &mut Frame, app: &App, area: Rect) {
    let text = match &app.server_stats {
        Some(stats) => {
            let name = if stats.instance_name.is_empty() {
                &stats.hostname
            } else {
                &stats.instance_name
            };
            vec![
                Line::from(vec![
                    Span::raw(" Instance: "),
                    Span::styled(name.as_str(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                    Span::raw("   Version: "),
                    Span::styled(stats.version.as_str(), Style::default().fg(Color::Cyan)),
                ]),
                Line::from(vec![
                    Span::raw(" IP:       "),
                    Span::styled(stats.ip.as_str(), Style::default().fg(Color::White)),
                    Span::raw("   Broadcast: "),
                    Span::raw(stats.broadcast.as_str()),
                    Span::raw("   HW: "),
                    Span::raw(stats.hw_address.as_str()),
                ]),
                Line::from(vec![
                    Span::raw(" Up since: "),
                    Span::styled(stats.up_since.as_str(), Style::default().fg(Color::Green)),
                ]),
            ]
        }
        None => vec![Line::from(Span::styled(
            " Server stats unavailable",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Server ")
        .border_style(Style::default().fg(Color::Blue));

    frame.render_widget(Paragraph::new(text).block(block), area);
}

/// Render the universe table.
fn render_universes(frame: &mut Frame, app: &App, area: Rect) {
    let header = Row::new(vec![" ID", "Name", "In", "Out", "RDM"])
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .height(1);

    let rows: Vec<Row> = app
        .universes
        .iter()
        .enumerate()
        .map(|(i, universe)| {
            let style = if i == app.selected {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };
            Row::new(vec![
                format!(" {}", universe.id),
                universe.name.clone(),
                universe.input_ports.to_string(),
                universe.output_ports.to_string(),
                universe.rdm_devices.to_string(),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(6),
        Constraint::Min(16),
        Constraint::Length(4),
        Constraint::Length(4),
        Constraint::Length(5),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Universes ({}) ", app.universes.len()))
            .border_style(Style::default().fg(Color::Green)),
    );

    frame.render_widget(table, area);
}

/// Render the plugin list.
fn render_plugins(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .plugins
        .iter()
        .map(|plugin| {
            let marker = match plugin.active {
                Some(true) => Span::styled(" ● ", Style::default().fg(Color::Green)),
                Some(false) => Span::styled(" ○ ", Style::default().fg(Color::DarkGray)),
                None => Span::raw("   "),
            };
            ListItem::new(Line::from(vec![
                marker,
                Span::raw(plugin.name.as_str()),
                Span::styled(format!("  #{}", plugin.id), Style::default().fg(Color::DarkGray)),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Plugins ({}) ", app.plugins.len())),
    );

    frame.render_widget(list, area);
}

/// Render the footer.
fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![
        Span::styled(" [↑/↓] ", Style::default().fg(Color::Yellow)),
        Span::raw("Select  "),
        Span::styled("[Enter] ", Style::default().fg(Color::Yellow)),
        Span::raw("Channels  "),
        Span::styled("[R] ", Style::default().fg(Color::Yellow)),
        Span::raw("Refresh  "),
        Span::styled("[Q] ", Style::default().fg(Color::Yellow)),
        Span::raw("Quit"),
    ];
    if let Some(error) = &app.last_error {
        spans.push(Span::raw("  │ "));
        spans.push(Span::styled(error.as_str(), Style::default().fg(Color::Red)));
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL)),
        area,
    );
}
