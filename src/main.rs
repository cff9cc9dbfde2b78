//! Power table - Entry Point

use clap::Parser;
use powertable::model::AppError;
use powertable::source::HttpPageSource;
use powertable::view::PrintOptions;
use std::path::PathBuf;
use tracing::info;

/// Power table - filterable TUI table of people and their power
#[derive(Parser, Debug)]
#[command(name = "powertable")]
#[command(version)]
#[command(about = "Fetch a paginated people collection and browse it with a computed power column")]
pub struct Args {
    /// Start URL of the people resource
    #[arg(long)]
    pub url: Option<String>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the table to stdout and exit instead of starting the TUI
    #[arg(long)]
    pub print: bool,

    /// Name filter applied before printing
    #[arg(long, requires = "print")]
    pub filter: Option<String>,

    /// Multiplier applied before printing (positive)
    #[arg(long, requires = "print", value_parser = parse_multiplier)]
    pub multiplier: Option<f64>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn parse_multiplier(text: &str) -> Result<f64, String> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("'{text}' is not a number"))?;
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(format!("'{text}' must be a positive number"))
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        // 1. Load config file (or None if missing)
        let config_file = powertable::config::load_config_with_precedence(args.config.clone())?;

        // 2. Merge with defaults
        let merged = powertable::config::merge_config(config_file);

        // 3. Apply environment variable overrides
        let with_env = powertable::config::apply_env_overrides(merged);

        // 4. Apply CLI argument overrides
        powertable::config::apply_cli_overrides(with_env, args.url.clone(), args.no_color)
    };

    powertable::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        print = args.print,
        "Configuration loaded and resolved"
    );

    if args.print {
        let source = HttpPageSource::new(&config.fetch_config())?;
        let options = PrintOptions {
            filter: args.filter,
            multiplier: args.multiplier,
        };
        let mut stdout = std::io::stdout().lock();
        powertable::view::run_print(&source, &config.resource_url, &options, &mut stdout)?;
    } else {
        powertable::view::run(&config)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["powertable", "--help"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["powertable", "--version"]);
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["powertable"]);
        assert_eq!(args.url, None);
        assert_eq!(args.config, None);
        assert!(!args.print);
        assert_eq!(args.filter, None);
        assert_eq!(args.multiplier, None);
        assert!(!args.no_color);
    }

    #[test]
    fn test_url_flag() {
        let args = Args::parse_from(["powertable", "--url", "http://localhost:8080/people"]);
        assert_eq!(args.url.as_deref(), Some("http://localhost:8080/people"));
    }

    #[test]
    fn test_print_with_filter_and_multiplier() {
        let args = Args::parse_from([
            "powertable",
            "--print",
            "--filter",
            "sky",
            "--multiplier",
            "2.5",
        ]);
        assert!(args.print);
        assert_eq!(args.filter.as_deref(), Some("sky"));
        assert_eq!(args.multiplier, Some(2.5));
    }

    #[test]
    fn test_filter_requires_print() {
        let result = Args::try_parse_from(["powertable", "--filter", "sky"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_non_positive_multiplier_rejected() {
        for value in ["0", "-3", "abc", "inf"] {
            let flag = format!("--multiplier={value}");
            let result = Args::try_parse_from(["powertable", "--print", flag.as_str()]);
            assert_eq!(
                result.unwrap_err().kind(),
                clap::error::ErrorKind::ValueValidation,
                "{value} should be rejected"
            );
        }
    }

    #[test]
    fn test_no_color_flag() {
        let args = Args::parse_from(["powertable", "--no-color"]);
        assert!(args.no_color);
    }

    #[test]
    fn test_config_flag() {
        let args = Args::parse_from(["powertable", "--config", "/tmp/powertable.toml"]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/powertable.toml")));
    }

    #[test]
    fn test_parse_multiplier_accepts_decimal() {
        assert_eq!(parse_multiplier("0.5"), Ok(0.5));
        assert_eq!(parse_multiplier(" 3 "), Ok(3.0));
    }
}
