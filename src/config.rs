use std::{fs::File, path::PathBuf};

use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Color-tagged notes in the terminal")]
pub struct Config {
    /// SQLite file the notes are kept in
    #[arg(long, env = "COLORNOTES_DB", default_value = "notes.db")]
    pub db: String,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long, env = "COLORNOTES_LOG")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// Routes the `log` facade to the configured file. Without one, logging stays off.
    /// `RUST_LOG` overrides the default `info` filter.
    pub fn init_logging(&self) -> std::io::Result<()> {
        let Some(path) = &self.log_file else {
            return Ok(());
        };

        let file = File::options().create(true).append(true).open(path)?;
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .target(env_logger::Target::Pipe(Box::new(file)))
            .init();

        Ok(())
    }
}
