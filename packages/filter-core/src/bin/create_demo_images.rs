//! デモ画像を書き出す: `create-demo-images [DIR]`（既定: demo_images）

use std::path::PathBuf;
use std::process::ExitCode;

use filter_core::write_demo_images;

const DEFAULT_DIR: &str = "demo_images";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIR));

    match write_demo_images(&dir) {
        Ok(written) => {
            tracing::info!(dir = %dir.display(), count = written.len(), "demo images created");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to create demo images");
            ExitCode::FAILURE
        }
    }
}
