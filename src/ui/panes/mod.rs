//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`bars`]: The array as a bar chart, coloured by each element's role in the current step
//! - [`info`]: Algorithm description, complexities, current step message and colour legend
//! - [`status`]: Status bar with step counter, keybindings and playback state
//!
//! Each pane module exports a primary `render_*` function and, where it needs
//! more than a couple of arguments, a `*RenderData` struct.

pub mod bars;
pub mod info;
pub mod status;

// Re-export render functions for convenience
pub use bars::{render_bars_pane, BarRole};
pub use info::{render_info_pane, InfoRenderData};
pub use status::{render_status_bar, StatusRenderData};
