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
use crate::detail::{stat_label, stat_severity};
use crate::state::{AppState, Profile, StatValue};
use crate::theme;

const STAT_BAR_WIDTH: usize = 20;
const STAT_BAR_MAX: u32 = 255;

pub struct DetailViewProps<'a> {
    pub state: &'a AppState,
    pub is_focused: bool,
}

/// Detail screen for the navigated-to name
#[derive(Default)]
pub struct DetailView;

impl Component<Action> for DetailView {
    type Props<'a> = DetailViewProps<'a>;

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
                KeyCode::Esc | KeyCode::Backspace => Some(Action::NavBack),
                KeyCode::Char('s') => Some(Action::UiToggleShiny),
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            _ => None,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, props: DetailViewProps<'_>) {
        let state = props.state;
        let chunks = Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).split(area);

        frame.render_widget(
            Block::default().style(Style::default().bg(theme::BG_BASE)),
            area,
        );

        if let Some(profile) = state.detail.data() {
            render_profile(frame, chunks[0], profile, state.shiny);
        } else {
            render_placeholder(frame, chunks[0], state);
        }

        let mut status_bar = StatusBar::new();
        <StatusBar as Component<Action>>::render(
            &mut status_bar,
            frame,
            chunks[1],
            StatusBarProps {
                left: StatusBarSection::empty(),
                center: StatusBarSection::hints(&[
                    StatusBarHint::new("Esc", "back"),
                    StatusBarHint::new("s", "shiny"),
                    StatusBarHint::new("q", "quit"),
                ]),
                right: StatusBarSection::empty(),
                style: StatusBarStyle::default(),
                is_focused: false,
            },
        );
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, state: &AppState) {
    let name = state.route.detail_name().map(format_name);
    let text = if let Some(error) = state.detail.error() {
        Text::from(vec![
            Line::styled(
                format!("Error loading {}", name.as_deref().unwrap_or("pokemon")),
                Style::default()
                    .fg(theme::ERROR_RED)
                    .add_modifier(Modifier::BOLD),
            ),
            Line::styled(error.to_string(), Style::default().fg(theme::TEXT_DIM)),
        ])
    } else if state.detail.is_loading() {
        Text::from(Line::styled(
            format!(
                "Loading {}... {}",
                name.as_deref().unwrap_or("pokemon"),
                spinner(state.tick_count)
            ),
            Style::default().fg(theme::TEXT_DIM),
        ))
    } else {
        Text::from(Line::styled(
            "Nothing selected.",
            Style::default().fg(theme::TEXT_DIM),
        ))
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("DATA")
        .style(Style::default().bg(theme::BG_PANEL).fg(theme::TEXT_MAIN));
    frame.render_widget(
        Paragraph::new(text)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_profile(frame: &mut Frame, area: Rect, profile: &Profile, shiny: bool) {
    let rows = Layout::vertical([
        Constraint::Length(4), // Title
        Constraint::Min(9),    // Info + stats
        Constraint::Length(5), // Description
    ])
    .split(area);
    let columns =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).split(rows[1]);

    render_title(frame, rows[0], profile);
    render_info(frame, columns[0], profile, shiny);
    render_stats(frame, columns[1], &profile.detail.stats);
    render_description(frame, rows[2], profile);
}

fn render_title(frame: &mut Frame, area: Rect, profile: &Profile) {
    let detail = &profile.detail;
    let border = detail
        .categories
        .first()
        .map(|name| theme::type_palette(name).accent)
        .unwrap_or(theme::ACCENT_TEAL);
    let mut badges = Vec::new();
    for category in &detail.categories {
        badges.push(type_badge(category, 1.0));
        badges.push(Span::raw(" "));
    }
    let text = Text::from(vec![
        Line::from(vec![
            Span::styled(
                format!("#{:03} ", detail.id),
                Style::default().fg(theme::TEXT_DIM),
            ),
            Span::styled(
                format_name(&detail.name),
                Style::default()
                    .fg(theme::ACCENT_TEAL)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                profile.species.category.clone().unwrap_or_default(),
                Style::default().fg(theme::ACCENT_GOLD),
            ),
        ]),
        Line::from(badges),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("POKEDEX")
        .style(Style::default().bg(theme::BG_PANEL).fg(theme::TEXT_MAIN))
        .border_style(Style::default().fg(border));
    frame.render_widget(Paragraph::new(text).block(block), area);
}

fn render_info(frame: &mut Frame, area: Rect, profile: &Profile, shiny: bool) {
    let detail = &profile.detail;
    let label = Style::default().fg(theme::TEXT_DIM);
    let abilities = detail
        .abilities
        .iter()
        .map(|ability| {
            if ability.is_hidden {
                format!("{} (hidden)", format_name(&ability.name))
            } else {
                format_name(&ability.name)
            }
        })
        .collect::<Vec<_>>()
        .join(", ");
    let image = detail.images.preferred(shiny);
    let lines = vec![
        Line::from(vec![
            Span::styled("Height   ", label),
            Span::raw(format!("{:.1} m", detail.height_m())),
        ]),
        Line::from(vec![
            Span::styled("Weight   ", label),
            Span::raw(format!("{:.1} kg", detail.weight_kg())),
        ]),
        Line::from(vec![
            Span::styled("Base exp ", label),
            Span::raw(
                detail
                    .base_experience
                    .map(|xp| xp.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]),
        Line::from(vec![
            Span::styled("Habitat  ", label),
            Span::raw(
                profile
                    .species
                    .habitat
                    .as_deref()
                    .map(format_name)
                    .unwrap_or_else(|| "Unknown".to_string()),
            ),
        ]),
        Line::from(vec![Span::styled("Abilities ", label), Span::raw(abilities)]),
        Line::from(vec![
            Span::styled(if shiny { "Art (shiny) " } else { "Art " }, label),
            Span::raw(if image.is_empty() { "-" } else { image }.to_string()),
        ]),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .title("PROFILE")
        .style(Style::default().bg(theme::BG_PANEL).fg(theme::TEXT_MAIN));
    frame.render_widget(
        Paragraph::new(Text::from(lines))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn render_stats(frame: &mut Frame, area: Rect, stats: &[StatValue]) {
    let lines = if stats.is_empty() {
        vec![Line::styled("No stats.", Style::default().fg(theme::TEXT_DIM))]
    } else {
        stats.iter().map(stat_line).collect()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("STATS")
        .style(Style::default().bg(theme::BG_PANEL).fg(theme::TEXT_MAIN));
    frame.render_widget(Paragraph::new(Text::from(lines)).block(block), area);
}

fn stat_line(stat: &StatValue) -> Line<'static> {
    let filled = ((stat.base_value.min(STAT_BAR_MAX) as usize * STAT_BAR_WIDTH)
        / STAT_BAR_MAX as usize)
        .max(1);
    let color = theme::severity_color(stat_severity(stat.base_value));
    Line::from(vec![
        Span::styled(
            format!("{:>8} ", stat_label(&stat.name)),
            Style::default().fg(theme::TEXT_DIM),
        ),
        Span::raw(format!("{:>3} ", stat.base_value)),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
    ])
}

fn render_description(frame: &mut Frame, area: Rect, profile: &Profile) {
    let description = if profile.species.description.is_empty() {
        "No description available."
    } else {
        profile.species.description.as_str()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("ENTRY")
        .style(Style::default().bg(theme::BG_PANEL).fg(theme::TEXT_MAIN));
    frame.render_widget(
        Paragraph::new(description.to_string())
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
