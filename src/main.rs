mod affected;
mod config;
mod error;
mod manifest;
mod package_manager;

use clap::Parser;
use config::{Config, OutputFormat};
use std::io::Write;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Args {
    #[clap(long, env = "NX_BASE", default_value = "")]
    /// Base commit to compare against; empty means all apps
    base: String,

    #[clap(short, long, default_value = ".")]
    /// Project root
    directory: PathBuf,

    #[clap(long, value_enum)]
    /// Output format (overrides the config file)
    format: Option<OutputFormat>,

    #[clap(long)]
    /// Be verbose
    debug: bool,
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(&args.directory)?;
    if let Some(format) = args.format {
        config.output = format;
    }

    let nx = package_manager::locate_nx(&args.directory, &config.manifest)?;
    log::debug!("nx command: {}", nx);

    let apps = affected::get_affected_apps(&args.base, &nx)?;
    log::info!("Affected apps: {}", apps.len());

    let rendered = config.render(&apps)?;
    if !rendered.is_empty() {
        println!("{}", rendered);
    }
    Ok(())
}

fn main() {
    let args = Args::parse();

    env_logger::builder()
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .filter(
            None,
            if args.debug {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            },
        )
        .parse_default_env()
        .init();

    if let Err(e) = run(&args) {
        log::error!("{}", e);
        for cause in e.chain().skip(1) {
            log::debug!("caused by: {}", cause);
        }
        std::process::exit(1);
    }
}
