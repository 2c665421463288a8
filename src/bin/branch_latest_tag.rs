use anyhow::Result;
use clap::Parser;

use ci_support::boundary::BoundaryWarning;
use ci_support::config::{self, Config};
use ci_support::resolver;
use ci_support::ui;

#[derive(clap::Parser)]
#[command(
    name = "branch-latest-tag",
    version,
    about = "Print the branch-specific Docker image tag for the current HEAD"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // A tag is always printed, so a broken config only costs the overrides
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_boundary_warning(&BoundaryWarning::InvalidConfig {
                reason: e.to_string(),
            });
            Config::default()
        }
    };
    let settings = &config.tag;

    let (lookup, warnings) = resolver::lookup_parent_branch(".");
    for warning in &warnings {
        ui::display_boundary_warning(warning);
    }

    let env_branch = std::env::var(&settings.fallback_env).ok();
    let decision = resolver::resolve_tag(&lookup, env_branch.as_deref(), settings);

    if let Some(note) = resolver::fallback_note(&decision, env_branch.as_deref(), settings) {
        ui::display_note(&note);
    }

    ui::display_note(&format!(
        "Calculated branch-specific tag for {} image: {}",
        settings.image_name, decision.tag
    ));

    println!("{}", decision.tag);
    Ok(())
}
