mod actions;
mod app;
mod config;
mod content;
mod curl;
mod navigation;
mod reference;
mod state;
mod types;
mod ui;
mod utils;

use app::App;
use color_eyre::Result;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let terminal = ratatui::init();
    let result = App::default().run(terminal).await;
    ratatui::restore();

    result
}
