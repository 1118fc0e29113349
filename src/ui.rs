//! Console reporting - informational, error and success messages.
//!
//! The palette follows the release script this tool replaces: bold blue for
//! progress, bold red for failures, bold green for successes.

use console::style;

use crate::registry::BrandVersionRegistry;

/// Print a progress/status message in bold blue.
pub fn display_status(message: &str) {
    println!("{}", style(message).blue().bold());
}

/// Print an error message in bold red to stderr.
pub fn display_error(message: &str) {
    eprintln!("{}", style(message).red().bold());
}

/// Print a success message in bold green.
pub fn display_success(message: &str) {
    println!("{}", style(message).green().bold());
}

/// Display the per-brand version map.
pub fn display_version_map(registry: &BrandVersionRegistry) {
    println!("{}", style("Brand versions:").bold());
    for (brand, version) in registry.iter() {
        println!("  {} {}", style(brand).cyan(), version);
    }
}

/// Display the tags pushed during a release.
pub fn display_pushed_tags(tags: &[String]) {
    println!("{}", style("Pushed tags:").bold());
    for tag in tags {
        println!("  {}", style(tag).green());
    }
}
