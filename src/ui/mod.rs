//! Text front end: what is shown of the calculator and how it is printed.

mod render;
mod snapshot;

pub use render::{render_display, render_history, render_json};
pub use snapshot::Snapshot;
