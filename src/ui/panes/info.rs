//! Info pane: algorithm description, current step message, settings and colour legend

use crate::algorithms::{Algorithm, AlgorithmKind};
use crate::playback::Speed;
use crate::ui::panes::bars::BarRole;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

/// Data the info pane displays
pub struct InfoRenderData<'a> {
    pub algorithm: Algorithm,
    pub message: Option<&'a str>,
    pub speed: Speed,
    pub size: usize,
    pub target: Option<i64>,
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(DEFAULT_THEME.heading)
            .add_modifier(Modifier::BOLD),
    ))
}

fn field<'a>(name: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{:<8}", name), Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Legend entries in the order they are listed
pub fn legend(kind: AlgorithmKind) -> &'static [(BarRole, &'static str)] {
    match kind {
        AlgorithmKind::Search => &[
            (BarRole::Default, "Regular Element"),
            (BarRole::Target, "Target Element"),
            (BarRole::Comparing, "Currently Comparing"),
            (BarRole::Found, "Element Found"),
        ],
        AlgorithmKind::Sort => &[
            (BarRole::Default, "Unsorted Element"),
            (BarRole::Comparing, "Currently Comparing"),
            (BarRole::Swapping, "Swapping Elements"),
            (BarRole::Sorted, "Sorted Element"),
        ],
    }
}

/// Render the info pane
pub fn render_info_pane(frame: &mut Frame, area: Rect, data: &InfoRenderData) {
    let info = data.algorithm.info();
    let block = Block::default()
        .title(format!(" {} ", info.title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 1, 0, 0));

    let mut lines = vec![
        Line::from(Span::styled(
            info.description,
            Style::default().fg(DEFAULT_THEME.fg),
        )),
        Line::default(),
        field("Time", info.time_complexity.to_string()),
        field("Space", info.space_complexity.to_string()),
        field("Best", info.best_case.to_string()),
        field("Worst", info.worst_case.to_string()),
        Line::default(),
        heading("Current Status"),
    ];

    let message = data
        .message
        .unwrap_or("Press space to begin the visualization");
    lines.push(Line::from(Span::styled(
        message,
        Style::default().fg(DEFAULT_THEME.secondary),
    )));
    lines.push(Line::default());

    lines.push(heading("Settings"));
    lines.push(field("Speed", format!("{} ms", data.speed.millis())));
    lines.push(field("Size", data.size.to_string()));
    if let Some(target) = data.target {
        lines.push(field("Target", target.to_string()));
    }
    lines.push(Line::default());

    lines.push(heading("Color Legend"));
    for (role, label) in legend(data.algorithm.kind()) {
        lines.push(Line::from(vec![
            Span::styled("■ ", Style::default().fg(role.color())),
            Span::styled(*label, Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legend_matches_kind() {
        let search = legend(AlgorithmKind::Search);
        assert!(search.iter().any(|(role, _)| *role == BarRole::Target));
        assert!(search.iter().all(|(role, _)| *role != BarRole::Swapping));

        let sort = legend(AlgorithmKind::Sort);
        assert_eq!(sort.len(), 4);
        assert_eq!(sort[3], (BarRole::Sorted, "Sorted Element"));
    }
}
