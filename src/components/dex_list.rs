use crossterm::event::KeyCode;
use ratatui::layout::{Alignment, Constraint, Layout};
use ratatui::prelude::{Frame, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use tui_dispatch::EventKind;
use tui_dispatch_components::{
    StatusBar, StatusBarHint, StatusBarProps, StatusBarSection, StatusBarStyle,
};

use super::{format_name, spinner, type_badge, Component};
use crate::action::Action;
use crate::state::{AppState, EntitySummary};
use crate::theme;

pub struct DexListProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Paginated list screen
#[derive(Default)]
pub struct DexList;

impl Component<Action> for DexList {
    type Props<'a> = DexListProps<'a>;

    fn handle_event(
        &mut self,
        event: &EventKind,
        props: Self::Props<'_>,
    ) -> impl IntoIterator<Item = Action> {
        if !props.is_focused {
            return None;
        }

        match event {
            EventKind::Key(key) => match key.code {
                KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectionMove(1)),
                KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectionMove(-1)),
                KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => {
                    Some(Action::PageNext)
                }
                KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => Some(Action::PagePrev),
                KeyCode::Char('g') | KeyCode::Home => Some(Action::PageFirst),
                KeyCode::Char('G') | KeyCode::End => Some(Action::PageLast),
                KeyCode::Enter => props
                    .state
                    .selected_entity()
                    .map(|entity| Action::NavDetail(Some(entity.name.clone()))),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DexListProps<'_>) {
        let state = props.state;
        let chunks = Layout::vertical([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Entries
            Constraint::Length(1), // Help bar
        ])
        .split(area);

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_BASE)),
            area,
        );
        render_header(frame, chunks[0], state);
        render_entries(frame, chunks[1], state);

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[2],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("j/k", "move"),
                    StatusBarHint::new("h/l", "page"),
                    StatusBarHint::new("Enter", "open"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn render_header(frame: &mut Frame, area: Rect, state: &AppState) {
    let status = if let Some(entries) = state.collection.data() {
        format!("{} entries", entries.len())
    } else if state.collection.is_failed() {
        "unavailable".to_string()
    } else {
        format!("loading {}", spinner(state.tick_count))
    };
    let mut spans = vec![
        Span::styled(
            format!("Page {}/{}", state.page, state.total_pages()),
            Style::default()
                .fg(theme::ACCENT_GOLD)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  |  "),
        Span::styled(status, Style::default().fg(theme::TEXT_DIM)),
    ];
    // Art of the row under the cursor
    if let Some(entity) = state.selected_entity() {
        if !entity.image_url.is_empty() {
            spans.push(Span::raw("  |  "));
            spans.push(Span::styled("Art ", Style::default().fg(theme::TEXT_DIM)));
            spans.push(Span::raw(entity.image_url.clone()));
        }
    }
    let line = Line::from(spans);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("POKEDEX")
        .style(Style::default().bg(theme::BG_PANEL).fg(theme::TEXT_MAIN))
        .border_style(Style::default().fg(theme::ACCENT_TEAL));
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_entries(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("DEX")
        .style(Style::default().bg(theme::BG_PANEL).fg(theme::TEXT_MAIN));

    let text = if let Some(entries) = state.collection.data() {
        if entries.is_empty() {
            Text::from(Line::styled(
                "No entries.",
                Style::default().fg(theme::TEXT_DIM),
            ))
        } else {
            let opacity = state.list_opacity();
            Text::from(
                state
                    .visible()
                    .iter()
                    .enumerate()
                    .map(|(index, entity)| entry_line(entity, index == state.cursor, opacity))
                    .collect::<Vec<_>>(),
            )
        }
    } else if let Some(error) = state.collection.error() {
        Text::from(vec![
            Line::styled(
                "Error loading pokedex",
                Style::default()
                    .fg(theme::ERROR_RED)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(error.to_string(), Style::default().fg(theme::TEXT_DIM)),
        ])
    } else {
        Text::from(Line::styled(
            format!("Loading pokedex... {}", spinner(state.tick_count)),
            Style::default().fg(theme::TEXT_DIM),
        ))
    };

    let alignment = if state.collection.is_loaded() {
        Alignment::Left
    } else {
        Alignment::Center
    };
    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(alignment)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn entry_line(entity: &EntitySummary, selected: bool, opacity: f32) -> Line<'static> {
    let mut style = Style::default().fg(theme::fade(theme::TEXT_MAIN, opacity));
    if selected {
        style = style
            .bg(theme::fade(theme::BG_HIGHLIGHT, opacity))
            .add_modifier(Modifier::BOLD);
    }
    let marker = if selected { ">" } else { " " };
    let mut spans = vec![
        Span::styled(format!("{marker} #{:03} ", entity.id), style),
        Span::styled(format!("{:<14}", format_name(&entity.name)), style),
    ];
    for category in &entity.categories {
        spans.push(Span::raw(" "));
        spans.push(type_badge(category, opacity));
    }
    Line::from(spans)
}
