//! folio - A terminal portfolio
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::Parser;
use folio::Options;
use folio_core::prelude::*;
use folio_core::Tab;

/// folio - A terminal portfolio
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "A terminal portfolio with a persisted light/dark theme", long_about = None)]
struct Args {
    /// Directory holding config.toml and preferences.toml
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Keep the theme preference in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Render one frame of the given tab to stdout and exit
    #[arg(long, value_name = "TAB", value_parser = parse_tab)]
    print: Option<Tab>,

    /// Project to expand in the printed frame
    #[arg(long, value_name = "ID", requires = "print")]
    expand: Option<String>,

    /// Width of the printed frame
    #[arg(long, default_value_t = 100, requires = "print")]
    width: u16,

    /// Height of the printed frame
    #[arg(long, default_value_t = 40, requires = "print")]
    height: u16,

    /// Treat the system appearance as dark
    #[arg(long, conflicts_with = "light")]
    dark: bool,

    /// Treat the system appearance as light
    #[arg(long)]
    light: bool,

    /// Forget the persisted theme preference and exit
    #[arg(long, conflicts_with = "print")]
    reset_theme: bool,
}

fn parse_tab(value: &str) -> std::result::Result<Tab, String> {
    Tab::from_label(value).ok_or_else(|| format!("unknown tab '{}' (expected about or projects)", value))
}

fn main() -> Result<()> {
    let args = Args::parse();

    let options = Options {
        config_dir: args.config_dir,
        ephemeral: args.ephemeral,
        system_override: match (args.dark, args.light) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        },
    };

    folio::init(&options)?;

    if args.reset_theme {
        folio::reset_theme(&options)?;
        eprintln!("Theme preference cleared.");
        return Ok(());
    }

    if let Some(tab) = args.print {
        let frame = folio::print_frame(&options, tab, args.expand.as_deref(), args.width, args.height)?;
        print!("{}", frame);
        return Ok(());
    }

    folio::run(&options)
}
