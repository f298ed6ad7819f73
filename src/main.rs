use std::path::Path;

use anyhow::Result;
use clap::Parser;

use dynamic_versioning::boundary::BoundaryWarning;
use dynamic_versioning::config::{self, Directives};
use dynamic_versioning::domain::{BumpKind, Version};
use dynamic_versioning::git::{GitRepository, TagDescription, TagSource};
use dynamic_versioning::resolver::{self, ResolutionInput};
use dynamic_versioning::ui;

#[derive(clap::Parser)]
#[command(
    name = "dynamic-versioning",
    about = "Determine a package version from git tag history and configuration"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Explicit version to use, bypassing resolution")]
    new_version: Option<String>,

    #[arg(long, help = "Version part to bump: major, minor, patch or update")]
    version_bump: Option<String>,

    #[arg(long, help = "Fallback version when no annotated tag is available")]
    current_version: Option<String>,

    #[arg(long, help = "Produce a development version (.devN suffix)")]
    dev_version: bool,

    #[arg(long, help = "Skip fetching tags from the remote")]
    no_fetch: bool,

    #[arg(short, long, help = "Suppress status output")]
    quiet: bool,

    #[arg(short, long, help = "Print version information")]
    version: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.version {
        println!("dynamic-versioning {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    // Load directives from config files and environment
    let mut directives = match config::load_directives(args.config.as_deref().map(Path::new), Path::new(".")) {
        Ok(directives) => directives,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Command-line values override every other source
    if let Err(e) = apply_cli_overrides(&mut directives, &args) {
        ui::display_error(&e.to_string());
        std::process::exit(1);
    }

    // An explicit new-version short-circuits all git work
    let description = if directives
        .new_version
        .as_deref()
        .is_some_and(|v| !v.trim().is_empty())
    {
        None
    } else {
        gather_tag_data(&args)
    };

    if !args.quiet {
        if let Some(desc) = &description {
            ui::display_status(&format!(
                "Current tag: {} (with {} additional commits)",
                desc.tag, desc.commits_since_tag
            ));
        }
    }

    let input = ResolutionInput::from_parts(directives, description.clone());
    let resolved = match resolver::resolve(&input) {
        Ok(version) => version,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    if !args.quiet {
        ui::display_resolution(description.as_ref().map(|d| d.tag.as_str()), &resolved);
    }

    // stdout carries only the version, for the packaging layer to consume
    println!("{}", resolved);
    Ok(())
}

fn apply_cli_overrides(directives: &mut Directives, args: &Args) -> dynamic_versioning::Result<()> {
    if let Some(new_version) = &args.new_version {
        directives.new_version = Some(new_version.clone());
    }
    if let Some(raw) = &args.version_bump {
        directives.version_bump = Some(raw.parse::<BumpKind>()?);
    }
    if let Some(current_version) = &args.current_version {
        directives.current_version = Some(current_version.clone());
    }
    if args.dev_version {
        directives.dev_version = true;
    }
    Ok(())
}

/// Fetch and describe the repository's nearest annotated tag.
///
/// Every failure here is downgraded to a warning: the resolver still has the
/// current-version fallback available, and decides for itself whether an
/// absent tag is fatal.
fn gather_tag_data(args: &Args) -> Option<TagDescription> {
    let repo = match GitRepository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_status(&format!(
                "Warning: Cannot open a git repository here: {}. Continuing without tag data.",
                e
            ));
            return None;
        }
    };

    if !args.no_fetch {
        if !args.quiet {
            ui::display_status("Fetching latest tags from remote...");
        }
        if let Err(e) = repo.fetch_tags("origin") {
            ui::display_boundary_warning(&BoundaryWarning::FetchFailed {
                remote: "origin".to_string(),
                reason: e.to_string(),
            });
        }
    }

    match repo.describe() {
        Ok(Some(description)) => {
            if let Err(e) = Version::parse(&description.tag) {
                ui::display_boundary_warning(&BoundaryWarning::UnparsableTag {
                    tag: description.tag.clone(),
                    reason: e.to_string(),
                });
            }
            Some(description)
        }
        Ok(None) => {
            ui::display_boundary_warning(&BoundaryWarning::NoAnnotatedTags);
            None
        }
        Err(e) => {
            ui::display_status(&format!(
                "Warning: Cannot describe the current commit: {}. Continuing without tag data.",
                e
            ));
            None
        }
    }
}
