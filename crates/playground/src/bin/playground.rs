//! Print the value-vs-reference transcript to stdout.

use std::io;

use anyhow::Context;
use clap::Parser;
use playground::{Script, ScriptConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Contrast copy-on-assign values with share-on-assign handles
#[derive(Debug, Parser)]
#[command(name = "playground", version, about)]
struct CliArgs {
    /// Diagnostic log filter (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,

    /// Print a section heading before each group of lines
    #[arg(long)]
    annotate: bool,
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    // Diagnostics go to stderr so stdout is only the transcript
    let filter = match &args.log_level {
        Some(level) => EnvFilter::try_new(level)
            .with_context(|| format!("invalid log filter: {}", level))?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let script = Script::new(ScriptConfig::new().with_annotate(args.annotate));
    let stdout = io::stdout();
    match script.run(&mut stdout.lock()) {
        // Reader went away, nothing left to say
        Err(err) if err.is_broken_pipe() => Ok(()),
        other => other.context("failed to write transcript"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_no_arguments() {
        let args = CliArgs::try_parse_from(["playground"]).unwrap();
        assert!(!args.annotate);
        assert!(args.log_level.is_none());
    }

    #[test]
    fn test_flags_parse() {
        let args =
            CliArgs::try_parse_from(["playground", "--annotate", "--log-level", "debug"]).unwrap();
        assert!(args.annotate);
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }
}
