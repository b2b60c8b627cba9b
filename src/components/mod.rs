//! UI Components
//!
//! Reusable Leptos components.

mod rizz_form;
mod rizz_row;
mod sort_selector;

pub use rizz_form::RizzForm;
pub use rizz_row::RizzRow;
pub use sort_selector::SortSelector;
