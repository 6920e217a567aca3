pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{calendar, card, data_table, period_select};
pub use layouts::desktop::{desktop_layout, SiteNav};
