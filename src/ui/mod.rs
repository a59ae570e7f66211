// UI and formatting module

pub mod progress;
pub mod prompts;

// Re-export commonly used items for cleaner imports
pub use progress::{clear_line, show_progress_bar};
pub use prompts::{confirm, read_confirmation};
