//! Terminal client entry point.
use anyhow::{Context, Result};
use clap::Parser;
use client_frontend_cli::{Args, FrontendConfig, PanelView, logging};
use client_frontend_core::CombatPanel;
use tactics_content::{ConfigLoader, SnapshotLoader};
use tactics_core::RulesConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = Args::parse();
    let _guard = logging::init(args.log_file)?;

    let snapshot = SnapshotLoader::load(&args.snapshot)
        .with_context(|| format!("Cannot open session {}", args.snapshot.display()))?;

    let rules = match &args.rules {
        Some(path) => ConfigLoader::load(path)?,
        None => RulesConfig::default(),
    };

    let mut config = FrontendConfig::from_env();
    if args.debug {
        config = config.with_tags();
    }

    let panel = CombatPanel::from_save(&snapshot.save, &snapshot, &rules, &config);
    print!("{}", PanelView::new(&panel, &config));

    Ok(())
}
