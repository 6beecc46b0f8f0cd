use std::path::PathBuf;

use clap::Parser;

/// Workbench: lays out editor, compiler and viewer panes and coordinates
/// their lifecycle events.
#[derive(Parser, Debug)]
#[command(name = "workbench", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override, e.g. `debug` or `workbench_hub=trace`.
    #[arg(long)]
    pub log_level: Option<String>,

    /// JSON file holding the startup layout as a list of items.
    #[arg(long)]
    pub layout: Option<PathBuf>,

    /// Print the final layout as JSON before exiting.
    #[arg(long)]
    pub dump: bool,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    pub print_config: bool,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "workbench",
            "--config",
            "/tmp/wb.toml",
            "--log-level",
            "debug",
            "--layout",
            "layout.json",
            "--dump",
            "--print-config",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/wb.toml")));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
        assert_eq!(args.layout, Some(PathBuf::from("layout.json")));
        assert!(args.dump);
        assert!(args.print_config);
    }

    #[test]
    fn flags_are_optional() {
        let args = Args::try_parse_from(["workbench"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.layout.is_none());
        assert!(!args.dump);
        assert!(!args.print_config);
    }
}
