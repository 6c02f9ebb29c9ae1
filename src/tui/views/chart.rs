//! Category chart view
//!
//! Bar chart of total spending per category, built by the visualize action.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

use crate::reports::CategoryChart;

const BAR_WIDTH: u16 = 12;

/// Build the bars for a chart; values are in cents
pub fn bars<'a>(chart: &CategoryChart, currency_symbol: &str) -> Vec<Bar<'a>> {
    chart
        .bars
        .iter()
        .map(|bar| {
            Bar::default()
                .value(bar.total.cents().max(0) as u64)
                .label(Line::from(bar.category.name()))
                .text_value(bar.total.format_with_symbol(currency_symbol))
                .style(Style::default().fg(Color::Cyan))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect()
}

/// Render the chart
pub fn render(frame: &mut Frame, chart: &CategoryChart, currency_symbol: &str, area: Rect) {
    let block = Block::default()
        .title(format!(
            " Expenses by Category (total {}) ",
            chart.total.format_with_symbol(currency_symbol)
        ))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let bars = bars(chart, currency_symbol);
    let widget = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(2);

    frame.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Expense, ExpenseTable};

    #[test]
    fn test_bars_follow_chart_order() {
        let mut table = ExpenseTable::new();
        for (category, amount) in [
            (Category::Other, "5"),
            (Category::Food, "250.50"),
            (Category::Food, "10"),
        ] {
            table.push(Expense::from_input("2024-01-01", category, amount, "").unwrap());
        }
        let chart = CategoryChart::generate(&table).unwrap();

        let bars = bars(&chart, "₹");
        assert_eq!(bars.len(), 2);
    }
}
