//! Array pane: one bar per element, coloured by the element's role in the current step

use crate::playback::View;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// What an element is doing at the current step
///
/// When several apply, the earlier variant wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRole {
    Swapping,
    Found,
    Comparing,
    Sorted,
    Target,
    Default,
}

impl BarRole {
    pub fn color(self) -> Color {
        match self {
            BarRole::Swapping => DEFAULT_THEME.bar_swapping,
            BarRole::Found | BarRole::Sorted => DEFAULT_THEME.bar_sorted,
            BarRole::Comparing => DEFAULT_THEME.bar_comparing,
            BarRole::Target => DEFAULT_THEME.bar_target,
            BarRole::Default => DEFAULT_THEME.bar_default,
        }
    }
}

/// Role of the element at `index` holding `value`
pub fn bar_role(index: usize, value: i64, view: &View, sorted: &FxHashSet<usize>) -> BarRole {
    if view.swapping.contains(&index) {
        BarRole::Swapping
    } else if view.found == Some(index) {
        BarRole::Found
    } else if view.comparing.contains(&index) {
        BarRole::Comparing
    } else if sorted.contains(&index) {
        BarRole::Sorted
    } else if view.target == Some(value) {
        BarRole::Target
    } else {
        BarRole::Default
    }
}

/// Width of each bar so that `count` bars and their gaps fit in `inner_width`
fn bar_width(inner_width: u16, count: usize) -> u16 {
    if count == 0 {
        return 1;
    }
    let per_bar = (inner_width as usize + 1) / count;
    per_bar.saturating_sub(1).clamp(1, 7) as u16
}

/// Largest value handed to the chart; ratatui multiplies bar values by the
/// bar length in eighths, so heights are rescaled to stay well below `u64::MAX`
const MAX_CHART_VALUE: u64 = 1 << 32;

/// Chart height for every element of `values`
///
/// Data that dips below 1 is shifted up so the smallest bar has height 1.
/// Distances are taken in `u64` and rescaled in `u128`, so any `i64` input fits.
fn bar_heights(values: &[i64]) -> Vec<u64> {
    let min = values.iter().copied().min().unwrap_or(0);
    let raw: Vec<u64> = values
        .iter()
        .map(|&v| {
            if min >= 1 {
                v as u64
            } else {
                v.abs_diff(min).saturating_add(1)
            }
        })
        .collect();

    let max = raw.iter().copied().max().unwrap_or(1);
    if max <= MAX_CHART_VALUE {
        return raw;
    }
    raw.into_iter()
        .map(|h| ((h as u128 * MAX_CHART_VALUE as u128) / max as u128).max(1) as u64)
        .collect()
}

/// Render the array as a bar chart
pub fn render_bars_pane(frame: &mut Frame, area: Rect, title: &str, view: &View) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    if view.values.is_empty() {
        let paragraph = Paragraph::new("(empty array)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let sorted: FxHashSet<usize> = view.sorted.iter().copied().collect();

    let heights = bar_heights(view.values);
    let max_height = heights.iter().copied().max().unwrap_or(1);

    let width = bar_width(area.width.saturating_sub(2), view.values.len());
    let show_labels = width >= 2;

    let bars: Vec<Bar> = view
        .values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            let color = bar_role(index, value, view, &sorted).color();
            let mut bar = Bar::default()
                .value(heights[index])
                .text_value(value.to_string())
                .style(Style::default().fg(color))
                .value_style(Style::default().fg(Color::Black).bg(color));
            if show_labels {
                bar = bar.label(Line::from(index.to_string()));
            }
            bar
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(width)
        .bar_gap(1)
        .max(max_height)
        .label_style(Style::default().fg(DEFAULT_THEME.comment));

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn view<'a>(values: &'a [i64], comparing: &'a [usize], swapping: &'a [usize]) -> View<'a> {
        View {
            values,
            comparing,
            swapping,
            sorted: &[],
            found: None,
            target: None,
            message: None,
        }
    }

    #[test]
    fn test_swapping_beats_comparing() {
        let v = view(&[3, 1], &[0, 1], &[0, 1]);
        let sorted = FxHashSet::default();
        assert_eq!(bar_role(0, 3, &v, &sorted), BarRole::Swapping);
    }

    #[test]
    fn test_found_beats_comparing_and_target() {
        let mut v = view(&[2, 5, 9], &[1], &[]);
        v.found = Some(1);
        v.target = Some(5);
        let sorted = FxHashSet::default();
        assert_eq!(bar_role(1, 5, &v, &sorted), BarRole::Found);
    }

    #[test]
    fn test_target_value_highlighted_when_idle() {
        let mut v = view(&[2, 5, 9], &[], &[]);
        v.target = Some(9);
        let sorted = FxHashSet::default();
        assert_eq!(bar_role(2, 9, &v, &sorted), BarRole::Target);
        assert_eq!(bar_role(0, 2, &v, &sorted), BarRole::Default);
    }

    #[test]
    fn test_sorted_membership() {
        let v = view(&[1, 2], &[], &[]);
        let sorted: FxHashSet<usize> = [1].into_iter().collect();
        assert_eq!(bar_role(1, 2, &v, &sorted), BarRole::Sorted);
    }

    #[test]
    fn test_bar_width_fits() {
        assert_eq!(bar_width(60, 15), 3);
        assert_eq!(bar_width(10, 30), 1);
        assert_eq!(bar_width(200, 5), 7);
    }

    #[test]
    fn test_bar_heights_shift_low_data() {
        assert_eq!(bar_heights(&[3, 7, 5]), vec![3, 7, 5]);
        assert_eq!(bar_heights(&[-2, 4, 0]), vec![1, 7, 3]);
    }

    #[test]
    fn test_bar_heights_stay_bounded() {
        let heights = bar_heights(&[i64::MIN, 5, i64::MAX]);
        assert_eq!(heights[2], MAX_CHART_VALUE);
        assert!(heights[0] >= 1);
        assert!(heights[0] < heights[1] && heights[1] < heights[2]);
    }

    fn draw(values: &[i64]) {
        let mut terminal =
            Terminal::new(TestBackend::new(60, 20)).expect("Failed to create terminal");
        let v = view(values, &[0], &[]);
        terminal
            .draw(|f| render_bars_pane(f, f.area(), "Array", &v))
            .expect("Failed to draw");
    }

    #[test]
    fn test_renders_extreme_values() {
        draw(&[i64::MIN, 5]);
        draw(&[-1, i64::MAX]);
        draw(&[i64::MIN, i64::MAX]);
        draw(&[-4, 0, 3]);
    }
}
