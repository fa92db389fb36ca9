use std::fs;
use std::io::{self, Write};

mod config;
mod error;
mod render;

use config::Config;
use error::PreviewError;

fn run() -> Result<(), PreviewError> {
    let config = Config::from_env()?;

    log::info!("Rendering list from {}", config.input.display());
    if config.strict_grid {
        log::info!("Strict grid validation enabled");
    }

    let items = render::load_items(&config.input)?;
    let html = render::render_list(items, &config)?;

    match config.output {
        Some(ref path) => {
            fs::write(path, &html)?;
            log::info!("Wrote {} bytes to {}", html.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

fn main() {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    if let Err(err) = run() {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
