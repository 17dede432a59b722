pub mod draw;
pub mod events;

pub use draw::{
    render_content_panel, render_footer, render_header, render_search_bar, render_toc_panel,
};
pub use events::EventHandler;
