//! Views
//!
//! Server-rendered HTML for the product pages.

pub mod renderer;

pub use renderer::{render_create, render_details, render_edit, render_index, render_not_found};
