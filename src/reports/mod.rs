//! Reports module for the expense tracker
//!
//! Provides the per-category spending chart.

pub mod category_chart;

pub use category_chart::{CategoryBar, CategoryChart};
