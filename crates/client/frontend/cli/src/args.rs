//! Command-line arguments.
use std::path::PathBuf;

use clap::Parser;

/// Show what the player may do in a captured combat turn
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "tactics")]
#[command(about = "Show what the player may do in a captured combat turn", long_about = None)]
#[command(version)]
pub struct Args {
    /// Session snapshot to inspect (.ron or .json)
    pub snapshot: PathBuf,

    /// Rules configuration (TOML); built-in defaults apply when omitted
    #[arg(long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Show the last check's diagnostic tags grouped by namespace
    #[arg(long)]
    pub debug: bool,

    /// Also write logs to `tactics.log` (under $TACTICS_LOG_DIR or the cache dir)
    #[arg(long)]
    pub log_file: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_snapshot_and_flags() {
        let args =
            Args::try_parse_from(["tactics", "skirmish.ron", "--rules", "r.toml", "--debug"])
                .unwrap();
        assert_eq!(args.snapshot, PathBuf::from("skirmish.ron"));
        assert_eq!(args.rules, Some(PathBuf::from("r.toml")));
        assert!(args.debug);
        assert!(!args.log_file);
    }

    #[test]
    fn snapshot_is_required() {
        assert!(Args::try_parse_from(["tactics"]).is_err());
    }
}
