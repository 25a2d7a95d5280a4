use anyhow::Context;
use clap::Parser;
use like_counter::catalog::{like_catalog, CatalogError};
use like_counter::cli::{Cli, Command};
use like_counter::config::Config;
use like_counter::logging::{self, LogTarget};

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        if let Some(CatalogError::UnknownEntry { .. }) = err.downcast_ref::<CatalogError>() {
            eprintln!("Available entries: {}", like_catalog().names().join(", "));
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.effective_command() {
        Command::Run => {
            logging::init(&config.logging, LogTarget::FileOnly)
                .context("failed to open log file")?;
            like_counter::ui::run(&config).context("terminal UI failed")?;
        }
        Command::Catalog { entry, json, width } => {
            logging::init(&config.logging, LogTarget::FileOrStderr)
                .context("failed to open log file")?;
            print!("{}", render_catalog(entry.as_deref(), json, width)?);
        }
    }
    Ok(())
}

fn render_catalog(entry: Option<&str>, json: bool, width: u16) -> anyhow::Result<String> {
    let mut group = like_catalog();
    if let Some(name) = entry {
        let found = *group.find(name)?;
        group.entries = vec![found];
    }
    tracing::debug!(group = group.title, entries = group.entries.len(), "rendering catalog");

    if json {
        return Ok(format!("{}\n", group.to_json(width)?));
    }

    let mut out = format!("{}\n", group.title);
    for entry in &group.entries {
        out.push_str(&format!("  {:<4} {}\n", entry.name, entry.snapshot(width)));
    }
    Ok(out)
}
