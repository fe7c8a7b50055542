// UI and formatting module

pub mod formatters;
pub mod status_tui;

// Re-export commonly used items for cleaner imports
pub use formatters::{format_probe_label, format_success_text, layout_footer};
