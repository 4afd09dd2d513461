use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::config::Difficulty;

pub fn render_menu(frame: &mut Frame, area: Rect, title: &str, choice: usize) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Rgb(60, 150, 200)))
        .title(title.to_string())
        .title_style(Style::default().fg(Color::Rgb(200, 120, 255)).add_modifier(Modifier::BOLD));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Top padding
            Constraint::Length(9), // Menu
            Constraint::Min(0),    // Bottom padding
        ])
        .split(inner);

    let mut lines = vec![
        Line::from(Span::styled(
            title.trim().to_string(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Select Difficulty:",
            Style::default().fg(Color::Rgb(180, 180, 200)),
        )),
        Line::from(""),
    ];

    for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
        let label = format!("{}. {}", i + 1, difficulty.label());
        let style = if i == choice {
            Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Rgb(120, 120, 140))
        };
        let marker = if i == choice { "▶ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, style),
            Span::styled(label, style),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("UP/DOWN", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
        Span::styled(" + ", Style::default().fg(Color::Rgb(100, 100, 130))),
        Span::styled("ENTER", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
        Span::styled(" to select, ", Style::default().fg(Color::Rgb(100, 100, 130))),
        Span::styled("Q", Style::default().fg(Color::Rgb(80, 200, 255)).add_modifier(Modifier::BOLD)),
        Span::styled(" to quit", Style::default().fg(Color::Rgb(100, 100, 130))),
    ]));

    let menu = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(menu, chunks[1]);
}
