//! Category chart
//!
//! Aggregates expense amounts by category for the bar chart. Each bar is the
//! sum of the amounts recorded under that category.

use std::collections::BTreeMap;

use crate::display::report::{format_bar, format_percentage, separator};
use crate::models::{Category, ExpenseTable, Money};

/// Width of the bar column in terminal output
const BAR_WIDTH: usize = 40;

/// One bar of the chart
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBar {
    /// Category the bar represents
    pub category: Category,
    /// Sum of amounts in this category
    pub total: Money,
    /// Number of records in this category
    pub count: usize,
    /// Share of the overall total
    pub percentage: f64,
}

/// Per-category spending chart
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChart {
    /// Bars in fixed category order; categories without records are omitted
    pub bars: Vec<CategoryBar>,
    /// Total across all bars
    pub total: Money,
}

impl CategoryChart {
    /// Build the chart from the current table
    ///
    /// Returns `None` for an empty table, where there is nothing to plot.
    pub fn generate(table: &ExpenseTable) -> Option<Self> {
        if table.is_empty() {
            return None;
        }

        // Category's Ord follows declaration order, which is the chart order
        let mut sums: BTreeMap<Category, (Money, usize)> = BTreeMap::new();
        for expense in table {
            let entry = sums.entry(expense.category).or_insert((Money::zero(), 0));
            entry.0 += expense.amount;
            entry.1 += 1;
        }

        let total = table.total();
        let bars = sums
            .into_iter()
            .map(|(category, (sum, count))| CategoryBar {
                category,
                total: sum,
                count,
                percentage: if total.is_zero() {
                    0.0
                } else {
                    sum.cents() as f64 / total.cents() as f64 * 100.0
                },
            })
            .collect();

        Some(Self { bars, total })
    }

    /// Largest bar value, used to scale the chart
    pub fn max(&self) -> Money {
        self.bars
            .iter()
            .map(|b| b.total)
            .max()
            .unwrap_or_default()
    }

    /// Format the chart for terminal display
    pub fn format_terminal(&self, currency_symbol: &str) -> String {
        let max = self.max().as_decimal();
        let mut output = String::new();

        output.push_str("Expenses by Category\n");
        output.push_str(&separator(72));
        output.push('\n');

        for bar in &self.bars {
            output.push_str(&format!(
                "{:<14} {} {:>12} {:>6}\n",
                bar.category.name(),
                format_bar(bar.total.as_decimal(), max, BAR_WIDTH),
                bar.total.format_with_symbol(currency_symbol),
                format_percentage(bar.percentage),
            ));
        }

        output.push_str(&separator(72));
        output.push('\n');
        output.push_str(&format!(
            "{:<14} {:>53}\n",
            "Total",
            self.total.format_with_symbol(currency_symbol)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Expense;

    fn table(rows: &[(&str, Category, &str)]) -> ExpenseTable {
        let mut table = ExpenseTable::new();
        for (date, category, amount) in rows {
            table.push(Expense::from_input(date, *category, amount, "").unwrap());
        }
        table
    }

    #[test]
    fn test_empty_table_has_no_chart() {
        assert!(CategoryChart::generate(&ExpenseTable::new()).is_none());
    }

    #[test]
    fn test_sums_per_category_in_fixed_order() {
        let table = table(&[
            ("2024-01-01", Category::Other, "5"),
            ("2024-01-02", Category::Food, "10.25"),
            ("2024-01-03", Category::Food, "4.75"),
            ("2024-01-04", Category::Transport, "20"),
        ]);

        let chart = CategoryChart::generate(&table).unwrap();
        let summary: Vec<(Category, i64, usize)> = chart
            .bars
            .iter()
            .map(|b| (b.category, b.total.cents(), b.count))
            .collect();

        assert_eq!(
            summary,
            vec![
                (Category::Food, 1500, 2),
                (Category::Transport, 2000, 1),
                (Category::Other, 500, 1),
            ]
        );
        assert_eq!(chart.total.cents(), 4000);
        assert_eq!(chart.max().cents(), 2000);
        assert!((chart.bars[1].percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_zero_amounts() {
        let table = table(&[("2024-01-01", Category::Utilities, "0")]);
        let chart = CategoryChart::generate(&table).unwrap();

        assert_eq!(chart.bars.len(), 1);
        assert_eq!(chart.bars[0].percentage, 0.0);
        assert!(chart.format_terminal("₹").contains("Utilities"));
    }

    #[test]
    fn test_format_terminal() {
        let table = table(&[
            ("2024-01-01", Category::Food, "250.50"),
            ("2024-01-02", Category::Entertainment, "100"),
        ]);
        let output = CategoryChart::generate(&table).unwrap().format_terminal("₹");

        assert!(output.starts_with("Expenses by Category"));
        assert!(output.contains("₹250.50"));
        assert!(output.contains("₹100.00"));
        assert!(output.contains("₹350.50"));
        assert!(!output.contains("Transport"));
    }
}
