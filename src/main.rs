use anyhow::Result;
use clap::Parser;

use brand_release::config;
use brand_release::git::Git2Repository;
use brand_release::registry::BrandVersionRegistry;
use brand_release::ui;
use brand_release::workflow::{self, PromotionArgs};

#[derive(clap::Parser)]
#[command(
    name = "brand-release",
    about = "Bump brand versions, promote environment branches and push release tags"
)]
struct Args {
    #[arg(long, help = "Target environment: dev|uat|stage|prod")]
    env: Option<String>,

    #[arg(long = "type", help = "Release type at the uat gate: major|minor|patch")]
    release_type: Option<String>,

    #[arg(long, help = "Comma-separated brand list (defaults to all brands)")]
    brand: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, help = "Show registry brands and current versions, then exit")]
    list_brands: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    if args.list_brands {
        match BrandVersionRegistry::load(&config.registry_path) {
            Ok(registry) => {
                ui::display_version_map(&registry);
                return Ok(());
            }
            Err(e) => {
                ui::display_error(&e.to_string());
                std::process::exit(1);
            }
        }
    }

    let environment = match args.env {
        Some(env) => env,
        None => {
            ui::display_error(
                "--env is required. Use \"brand-release --env {dev|uat|stage|prod} --type {major|minor|patch}\"",
            );
            std::process::exit(1);
        }
    };

    // Initialize git operations
    let repo = match Git2Repository::open(".") {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let promotion = PromotionArgs {
        environment,
        release_type: args.release_type,
        brand_filter: args.brand,
    };

    match workflow::run_promotion(&repo, &config, &promotion) {
        Ok(outcome) => {
            println!();
            ui::display_version_map(&outcome.versions);
            ui::display_pushed_tags(&outcome.tags);
            ui::display_success(&format!("Successfully released {}", outcome.environment));
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
