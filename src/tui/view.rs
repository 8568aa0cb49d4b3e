use crate::feed::UiState;
use crate::imprint;
use crate::model::schedule;
use crate::tui::state::{AppState, Tab};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs, Wrap},
};

pub fn draw(f: &mut Frame, state: &mut AppState) {
    let v_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
            ]
            .as_ref(),
        )
        .split(f.area());

    // --- Tab Bar ---
    let titles: Vec<Line> = Tab::ALL.iter().map(|t| Line::from(t.title())).collect();
    let tabs = Tabs::new(titles)
        .select(state.tab.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Staatstheater Augsburg "),
        );
    f.render_widget(tabs, v_chunks[0]);

    // --- Main Area ---
    match state.tab {
        Tab::Imprint => draw_imprint(f, v_chunks[1]),
        _ => draw_schedule(f, state, v_chunks[1]),
    }

    // --- Footer: Status (left) / Shortcuts (right) ---
    let f_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(v_chunks[2]);

    let status_color = if matches!(state.state, UiState::Error(_)) {
        Color::Red
    } else {
        Color::Cyan
    };
    let status = Paragraph::new(state.message.clone())
        .style(Style::default().fg(status_color))
        .block(
            Block::default()
                .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
                .title(" Status "),
        );
    let shortcuts = "Tab:Ansicht | r:Neu laden | t:Tickets | o:Details | q:Ende";
    let help = Paragraph::new(shortcuts)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right)
        .block(
            Block::default()
                .borders(Borders::RIGHT | Borders::TOP | Borders::BOTTOM)
                .title(" Tasten "),
        );
    f.render_widget(status, f_chunks[0]);
    f.render_widget(help, f_chunks[1]);
}

fn draw_schedule(f: &mut Frame, state: &mut AppState, area: ratatui::layout::Rect) {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let title = match (&state.state, state.tab) {
        (UiState::Loading, _) => " Vorstellungen (Lade...) ".to_string(),
        (_, Tab::Today) => format!(" Heute ({}) ", state.view_indices.len()),
        _ => format!(" Vorstellungen ({}) ", state.view_indices.len()),
    };

    match &state.state {
        UiState::Error(msg) => {
            let error = Paragraph::new(msg.clone())
                .style(Style::default().fg(Color::Red))
                .wrap(Wrap { trim: true })
                .block(Block::default().borders(Borders::ALL).title(title));
            f.render_widget(error, main_chunks[0]);
        }
        _ => {
            let performances = state.performances();
            let items: Vec<ListItem> = state
                .view_indices
                .iter()
                .map(|&idx| {
                    let p = &performances[idx];
                    let mut line = format!(
                        "{}  {} [{}]",
                        schedule::format_local(&p.date),
                        p.title,
                        p.genre
                    );
                    if p.tickets_uri.is_some() {
                        line.push_str(" (T)");
                    }
                    ListItem::new(Line::from(vec![Span::raw(line)]))
                })
                .collect();

            let empty_hint = if state.tab == Tab::Today && items.is_empty() {
                Some("Heute keine Vorstellungen.")
            } else {
                None
            };

            if let Some(hint) = empty_hint
                && !matches!(state.state, UiState::Loading)
            {
                let para = Paragraph::new(hint)
                    .style(Style::default().fg(Color::DarkGray))
                    .block(Block::default().borders(Borders::ALL).title(title));
                f.render_widget(para, main_chunks[0]);
            } else {
                let list = List::new(items)
                    .block(Block::default().borders(Borders::ALL).title(title))
                    .highlight_style(
                        Style::default()
                            .add_modifier(Modifier::BOLD)
                            .bg(Color::DarkGray),
                    );
                f.render_stateful_widget(list, main_chunks[0], &mut state.list_state);
            }
        }
    }

    // --- Details Pane ---
    let details_text = match state.selected_performance() {
        Some(p) => {
            let mut lines: Vec<Line> = vec![Line::from(Span::styled(
                p.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ))];
            for sub in [&p.subtitle1, &p.subtitle2].into_iter().flatten() {
                if !sub.is_empty() {
                    lines.push(Line::from(sub.clone()));
                }
            }
            lines.push(Line::from(format!("Genre: {}", p.genre)));
            lines.push(Line::from(format!("Ort: {} ({})", p.location, p.theatre_name)));
            lines.push(Line::from(schedule::format_local(&p.date)));
            let mut links = Vec::new();
            if p.tickets_uri.is_some() {
                links.push("t: Tickets");
            }
            if p.descr_uri.is_some() {
                links.push("o: Details");
            }
            if !links.is_empty() {
                lines.push(Line::from(Span::styled(
                    links.join("  |  "),
                    Style::default().fg(Color::Green),
                )));
            }
            lines
        }
        None => vec![],
    };

    let details = Paragraph::new(details_text)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Details "));
    f.render_widget(details, main_chunks[1]);
}

fn draw_imprint(f: &mut Frame, area: ratatui::layout::Rect) {
    let imprint = Paragraph::new(imprint::TEXT)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", imprint::TITLE)),
        );
    f.render_widget(imprint, area);
}
