use anyhow::Result;
use columnist::config::Config;
use columnist::logger::Logger;
use columnist::ui;
use std::path::PathBuf;

fn print_usage() {
    println!("Usage: columnist [--generate-config [PATH]] [--config PATH]");
    println!();
    println!("  --generate-config [PATH]  Write a default configuration file and exit");
    println!("  --config PATH             Load configuration from PATH");
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config_path: Option<PathBuf> = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--generate-config" => {
                let path = match iter.next() {
                    Some(path) => PathBuf::from(path),
                    None => Config::get_default_config_path()?,
                };
                return Config::generate_default_config(path);
            }
            "--config" => match iter.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => anyhow::bail!("--config requires a path"),
            },
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other => {
                eprintln!("❌ Unknown argument: {}", other);
                print_usage();
                std::process::exit(2);
            }
        }
    }

    let config = match config_path {
        Some(path) => Config::load_from_file(path)?,
        None => Config::load()?,
    };
    let logger = Logger::from_config(config.logging.enabled)?;

    // Run the TUI application
    ui::run_app(config, logger).await?;

    Ok(())
}
