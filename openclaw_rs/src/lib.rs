//! # openclaw
//!
//! Command-line front end for the OpenClaw landing page renderer
//! ([`openclaw_landing`]).
//!
//! ```bash
//! openclaw build --out dist          # write dist/index.html
//! openclaw render --theme dark       # print the page
//! openclaw check --content cards.json
//! openclaw serve --port 4173         # local preview
//! ```

pub mod args;
pub mod commands;
pub mod config;
pub mod serve;

use anyhow::Result;

use args::{Cli, Command};
use config::OpenclawConfig;

/// Dispatch a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config = OpenclawConfig::load_from_path(&cli.config);

    match cli.command {
        Command::Build(args) => {
            let path = commands::build(&args, &config)?;
            println!("{}", path.display());
        }
        Command::Render(args) => {
            print!("{}", commands::render(&args, &config)?);
        }
        Command::Check(args) => {
            println!("{}", commands::check(&args, &config)?);
        }
        Command::Serve(args) => commands::serve(&args, &config)?,
    }
    Ok(())
}
