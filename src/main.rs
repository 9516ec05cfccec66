use clap::Parser;
use placard::core::config::{EnvOverrides, load_config, resolve};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "placard", about = "Hash-routed multi-page demo app in the terminal")]
struct Args {
    /// Override the REST API base URL
    #[arg(long)]
    base_url: Option<String>,

    /// Fragment path to open at startup (e.g. /users)
    #[arg(long)]
    route: Option<String>,

    /// Log at debug level regardless of configuration
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = load_config()?;
    let config = resolve(
        &file_config,
        args.base_url.as_deref(),
        args.route.as_deref(),
        args.verbose,
        &EnvOverrides::from_process(),
    );

    // Initialize file logger - writes to placard.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("placard.log") {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }

    log::info!(
        "Placard starting up (base_url={}, initial_route={})",
        config.base_url,
        config.initial_route
    );

    placard::tui::run(config)?;
    Ok(())
}
