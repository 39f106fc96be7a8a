mod app;
mod config;
mod db;
mod error;
mod keymap;
mod models;
mod store;
mod ui;
mod view;

use clap::Parser;

use crate::{app::App, config::Config, db::Database, store::NoteStore};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let config = Config::parse();
    config.init_logging()?;

    log::info!("opening {}", config.db);
    let db = Database::new(&config.db)?;
    let store = NoteStore::load(db)?;
    let mut app = App::new(store);
    ratatui::run(|t| app.run(t))?;

    Ok(())
}
