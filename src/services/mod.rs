//! Service layer for the expense tracker
//!
//! The service layer holds session state and the handlers for each user
//! action, plus the derived budget summary.

pub mod session;
pub mod summary;

pub use session::{Action, ActionOutcome, Session};
pub use summary::BudgetSummary;
