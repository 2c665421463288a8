use anyhow::Result;
use clap::Parser;
use std::path::Path;

use ci_support::artifact::read_version_file;
use ci_support::config;
use ci_support::fetch::{fetch_artifact, HttpArtifactClient};
use ci_support::{ui, CiError};

#[derive(clap::Parser)]
#[command(
    name = "download-java-client",
    version,
    about = "Download the Java client library uberjar from Artifactory"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    let artifact = &config.artifact;

    ui::display_status("Downloading Java client library from Artifactory...");

    let version = match read_version_file(&artifact.version_file) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&format!(
                "Cannot read version from '{}': {}",
                artifact.version_file, e
            ));
            std::process::exit(1);
        }
    };

    let coordinates = artifact.coordinates();
    ui::display_status(&format!("Downloading {}", coordinates.url_for(&version)));

    let client = HttpArtifactClient::new()?;
    match fetch_artifact(
        &client,
        &coordinates,
        &version,
        Path::new(&artifact.output_dir),
        &artifact.output_file,
    ) {
        Ok(_) => {
            ui::display_success("Java client library downloaded from Artifactory");
            Ok(())
        }
        Err(CiError::Http(reason)) => {
            ui::display_error("Failed to connect to Artifactory!");
            ui::display_note(&reason);
            std::process::exit(1);
        }
        Err(CiError::HttpStatus(reason)) => {
            ui::display_error("Failed to download from Artifactory!");
            ui::display_note(&reason);
            std::process::exit(1);
        }
        Err(e) => {
            ui::display_error(&format!("Failed to store the Java client library: {}", e));
            std::process::exit(1);
        }
    }
}
