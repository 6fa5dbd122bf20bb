pub mod detail_view;
pub mod dex_list;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use detail_view::{DetailView, DetailViewProps};
pub use dex_list::{DexList, DexListProps};

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

use crate::theme;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub(crate) fn spinner(tick_count: u32) -> &'static str {
    SPINNER[(tick_count / 3) as usize % SPINNER.len()]
}

/// `mr-mime` -> `Mr Mime`
pub fn format_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => format!("{}{}", first.to_ascii_uppercase(), chars.as_str()),
                None => "".to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn type_badge(name: &str, opacity: f32) -> Span<'static> {
    let palette = theme::type_palette(name);
    Span::styled(
        format!(" {} ", name.to_ascii_uppercase()),
        Style::default()
            .fg(theme::fade(Color::Rgb(16, 16, 16), opacity))
            .bg(theme::fade(palette.base, opacity))
            .add_modifier(Modifier::BOLD),
    )
}
