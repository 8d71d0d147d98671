//! CLI entry point for `mhtml2html`.

use std::path::PathBuf;

use clap::Parser;

use mhtml2html::MhtmlError;

/// Convert MHTML to a single self-contained HTML file.
#[derive(Parser)]
#[command(name = "mhtml2html", version)]
struct Cli {
    /// Input .mhtml file
    #[arg(value_name = "MHTML")]
    mhtml: PathBuf,

    /// Output .html file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = mhtml2html::config::load_config();
    setup_logging(&config);

    match mhtml2html::convert_file(&cli.mhtml, &cli.output) {
        Ok(_) => Ok(()),
        Err(MhtmlError::MissingPrimaryHtml) => {
            tracing::error!(input = %cli.mhtml.display(), "Main HTML part not found.");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Set up tracing with stderr output and optional file logging.
fn setup_logging(config: &mhtml2html::config::Config) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    let log_dir = mhtml2html::config::cache_dir(config);
    if config.general.log_file && std::fs::create_dir_all(&log_dir).is_ok() {
        let file_appender = tracing_appender::rolling::never(&log_dir, "mhtml2html.log");
        let file_layer = tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(stderr_layer)
            .init();
    }
}
