mod commands;
mod logging;
mod print;

use std::fs;

use anyhow::{Context, Result};
use commands::{CommandLine, Commands};
use dasha_core::{
    DashaConfig, calculate_vimshottari_dasha_with, nakshatra_birth_balance, parse_birth_date,
};
use tracing::info;

fn load_config(cli: &CommandLine) -> Result<DashaConfig> {
    let Some(path) = &cli.config else {
        return Ok(DashaConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg = DashaConfig::from_json_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    info!(?cfg, "loaded config");
    Ok(cfg)
}

fn main() -> Result<()> {
    logging::init_logging();
    let cli = CommandLine::parse_args();
    let cfg = load_config(&cli)?;

    match &cli.command {
        Commands::Timeline { birth, level, json } => {
            let timeline = calculate_vimshottari_dasha_with(
                birth.birth.as_deref(),
                birth.sign(),
                birth.degrees(),
                &cfg,
            )?;
            if *json {
                println!("{}", print::timeline_json(&timeline, (*level).into())?);
            } else {
                print::meta(&timeline.meta);
                print::tree(&timeline.mahadashas, (*level).into());
            }
        }
        Commands::Nakshatra { lon } => {
            print::nakshatra(&nakshatra_birth_balance(*lon));
        }
        Commands::Active { birth, at } => {
            let timeline = calculate_vimshottari_dasha_with(
                birth.birth.as_deref(),
                birth.sign(),
                birth.degrees(),
                &cfg,
            )?;
            let at = parse_birth_date(Some(at)).context("parsing --at")?;
            print::active(at, &timeline.active_at(at));
        }
    }
    Ok(())
}
