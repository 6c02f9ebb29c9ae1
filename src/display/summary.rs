//! Budget summary display formatting

use crate::services::BudgetSummary;

/// Format the budget summary as labelled metrics
pub fn format_budget_summary(summary: &BudgetSummary, currency_symbol: &str) -> String {
    let mut output = String::new();

    output.push_str("Budget Summary\n");
    output.push_str(&format!(
        "  Budget:           {}\n",
        summary.budget.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Total Spent:      {}\n",
        summary.total_spent.format_with_symbol(currency_symbol)
    ));
    output.push_str(&format!(
        "  Budget Remaining: {}\n",
        summary.remaining.format_with_symbol(currency_symbol)
    ));

    output
}
