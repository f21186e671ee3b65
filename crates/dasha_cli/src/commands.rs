use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use dasha_core::DashaLevel;

#[derive(Parser)]
#[command(name = "dasha", about = "Vimshottari dasha timeline calculator")]
pub struct CommandLine {
    /// JSON file with calculation settings
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

/// Birth inputs shared by the timeline commands.
#[derive(clap::Args)]
pub struct BirthArgs {
    /// Birth date (YYYY-MM-DD or YYYY-MM-DDThh:mm:ss[+hh:mm])
    #[arg(long)]
    pub birth: Option<String>,
    /// Moon rashi number, 1-12 (invalid values fall back to 1)
    #[arg(long, allow_hyphen_values = true)]
    pub sign: Option<String>,
    /// Moon degrees within the rashi (invalid values fall back to 0)
    #[arg(long, allow_hyphen_values = true)]
    pub degrees: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the dasha timeline
    #[command(alias = "t")]
    Timeline {
        #[command(flatten)]
        birth: BirthArgs,
        /// Deepest level to print
        #[arg(long, value_enum, default_value = "pratyantar")]
        level: LevelArg,
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Nakshatra from sidereal longitude
    #[command(alias = "n")]
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
    /// Periods active at a given date
    #[command(alias = "a")]
    Active {
        #[command(flatten)]
        birth: BirthArgs,
        /// Query date (same formats as --birth)
        #[arg(long)]
        at: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LevelArg {
    Maha,
    Antar,
    Pratyantar,
}

impl From<LevelArg> for DashaLevel {
    fn from(l: LevelArg) -> Self {
        match l {
            LevelArg::Maha => DashaLevel::Mahadasha,
            LevelArg::Antar => DashaLevel::Antardasha,
            LevelArg::Pratyantar => DashaLevel::Pratyantardasha,
        }
    }
}

impl BirthArgs {
    /// Lenient numeric parse: anything unparseable is treated as absent.
    pub fn sign(&self) -> Option<f64> {
        self.sign.as_deref().and_then(|s| s.trim().parse().ok())
    }

    pub fn degrees(&self) -> Option<f64> {
        self.degrees.as_deref().and_then(|s| s.trim().parse().ok())
    }
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_moon_numbers() {
        let args = BirthArgs {
            birth: Some("1990-01-01".into()),
            sign: Some(" 5 ".into()),
            degrees: Some("abc".into()),
        };
        assert_eq!(args.sign(), Some(5.0));
        assert_eq!(args.degrees(), None);
    }

    #[test]
    fn parses_timeline_command() {
        let cli = CommandLine::try_parse_from([
            "dasha", "timeline", "--birth", "1990-01-01", "--sign", "1", "--degrees", "-3",
            "--level", "antar",
        ])
        .unwrap();
        match cli.command {
            Commands::Timeline { birth, level, json } => {
                assert_eq!(birth.birth.as_deref(), Some("1990-01-01"));
                assert_eq!(birth.degrees(), Some(-3.0));
                assert_eq!(DashaLevel::from(level), DashaLevel::Antardasha);
                assert!(!json);
            }
            _ => panic!("expected timeline"),
        }
    }

    #[test]
    fn parses_json_with_level() {
        let cli = CommandLine::try_parse_from([
            "dasha", "timeline", "--birth", "1990-01-01", "--json", "--level", "maha",
        ])
        .unwrap();
        match cli.command {
            Commands::Timeline { level, json, .. } => {
                assert!(json);
                assert_eq!(DashaLevel::from(level), DashaLevel::Mahadasha);
            }
            _ => panic!("expected timeline"),
        }
    }

    #[test]
    fn parses_negative_longitude() {
        let cli = CommandLine::try_parse_from(["dasha", "nakshatra", "-1"]).unwrap();
        assert!(matches!(cli.command, Commands::Nakshatra { lon } if lon == -1.0));
    }
}
