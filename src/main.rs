use clap::Parser;
use fota_image::{image::ImageAppender, utils::crypto, Result};
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "fota-image", version)]
#[command(
    about = "Append SHA256 hash to the end of the firmware file that will be sent to the device"
)]
struct Cli {
    /// Path to the firmware file
    #[arg(short, long)]
    target_file: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fota_image=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stdout().is_terminal())
        .without_time()
        .init();

    debug!("fota-image v{}", env!("CARGO_PKG_VERSION"));

    let report = ImageAppender::new(&cli.target_file).append()?;
    debug!(
        "{} -> {} ({} byte payload, sha256 {})",
        report.binary_path.display(),
        report.output_path.display(),
        report.payload_len,
        crypto::to_hex(&report.digest)
    );

    Ok(())
}
