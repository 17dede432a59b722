//! UI drawing module
//!
//! This module is organized into focused submodules:
//! - `components`: Reusable UI components (header, footer, search bar, spinners)
//! - `modals`: Modal dialogs (source configuration)
//! - `panels`: Main panels (table of contents, reference content)
//! - `styling`: Color schemes and style constants

mod components;
mod modals;
mod panels;
pub mod styling;

// Re-export public API to maintain compatibility
pub use components::{render_footer, render_header, render_search_bar};
pub use modals::render_source_input_modal;
pub use panels::{render_content_panel, render_toc_panel};
