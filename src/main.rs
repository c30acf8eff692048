use clap::Parser;
use marquee::core::config::{self, Theme};
use marquee::core::catalog;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "marquee", about = "Terminal arcade catalog browser")]
struct Args {
    /// Catalog TOML file to load instead of the built-in catalog
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Color theme
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to marquee.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("marquee.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!("Marquee starting up");

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Config error: {e}; falling back to defaults");
        Default::default()
    });
    let resolved = config::resolve(&file_config, args.theme, args.catalog.as_deref());

    let catalog = match catalog::load_catalog(resolved.catalog_file.as_deref()) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Failed to load catalog: {e}");
            std::process::exit(1);
        }
    };

    marquee::tui::run(catalog, resolved)
}
