//! Promotion workflow - the environment state machine.
//!
//! Drives a release for one environment: checkout, sync checks, merge from
//! the upstream environment, the uat-only version bump, and per-brand tag
//! creation. Steps run strictly in order; the first failure aborts the run
//! and nothing already pushed is rolled back.

use std::path::Path;

use crate::config::Config;
use crate::domain::{Environment, ReleaseTag, ReleaseType};
use crate::error::{BrandReleaseError, Result};
use crate::git::Repository;
use crate::guard::assert_branch_in_sync;
use crate::registry::BrandVersionRegistry;
use crate::ui;

/// Arguments for the promotion workflow.
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq)]
pub struct PromotionArgs {
    /// Target environment (dev|uat|stage|prod)
    pub environment: String,

    /// Release type (major|minor|patch); only meaningful at the uat gate
    pub release_type: Option<String>,

    /// Comma-separated brand filter; absent means every brand
    pub brand_filter: Option<String>,
}

/// Result of a successful promotion
#[derive(Debug, Clone)]
pub struct PromotionOutcome {
    /// The environment that was released
    pub environment: Environment,

    /// The final per-brand version map
    pub versions: BrandVersionRegistry,

    /// Tags pushed, one per target brand
    pub tags: Vec<String>,
}

/// Run the promotion workflow for one environment.
///
/// Steps, in strict order:
/// 1. Validate the environment and release type.
/// 2. Apply the uat gate policy (release type required or tag-only).
/// 3. Checkout the environment branch.
/// 4. Resolve target brands against the registry.
/// 5. Sync-guard the environment branch and its upstream.
/// 6. Merge the upstream branch and push.
/// 7. At uat with a release type: bump, persist, commit, push.
/// 8. Re-load the registry, create and push one tag per target brand.
/// 9. Report the final version map.
pub fn run_promotion<R: Repository>(
    repo: &R,
    config: &Config,
    args: &PromotionArgs,
) -> Result<PromotionOutcome> {
    let environment: Environment = args.environment.parse()?;

    let release_type = match args.release_type.as_deref() {
        Some(raw) => Some(raw.parse::<ReleaseType>()?),
        None => None,
    };

    let bump = release_gate(environment, release_type, config)?;

    ui::display_status(&format!("Checking out '{}'", environment));
    repo.checkout(environment.as_str())?;

    let registry = BrandVersionRegistry::load(&config.registry_path)?;
    let targets = registry.resolve_targets(args.brand_filter.as_deref())?;

    assert_branch_in_sync(repo, &config.remote, environment.as_str())?;
    let upstream = environment.upstream();
    if let Some(upstream) = upstream {
        assert_branch_in_sync(repo, &config.remote, upstream.as_str())?;
    }

    if let Some(upstream) = upstream {
        ui::display_status(&format!("Merging '{}' into '{}'", upstream, environment));
        repo.merge(upstream.as_str(), environment.as_str())?;
        repo.push_branch(&config.remote, environment.as_str())?;
        ui::display_success(&format!("Merged '{}' into '{}'", upstream, environment));
    }

    if let Some(release_type) = bump {
        ui::display_status(&format!(
            "Applying {} bump to {} brand(s)",
            release_type,
            targets.len()
        ));
        let merged = BrandVersionRegistry::load(&config.registry_path)?;
        let bumped = merged.apply_bump(release_type, &targets);
        bumped.save(&config.registry_path)?;
        repo.commit_paths(&[Path::new(&config.registry_path)], &config.commit_message)?;
        repo.push_branch(&config.remote, environment.as_str())?;
        ui::display_success("Committed and pushed new versions");
    }

    // Tags are derived from the persisted post-bump state, never the
    // in-memory map.
    let registry = BrandVersionRegistry::load(&config.registry_path)?;
    let mut tags = Vec::with_capacity(targets.len());
    for brand in &targets {
        let version = registry.get(brand).ok_or_else(|| {
            BrandReleaseError::registry(format!("brand '{}' missing after merge", brand))
        })?;
        let tag = ReleaseTag::new(environment, brand.clone(), version).to_string();

        ui::display_status(&format!("Creating tag {}", tag));
        repo.create_tag(&tag)?;
        repo.push_tag(&config.remote, &tag)?;
        ui::display_success(&format!("Pushed tag {}", tag));
        tags.push(tag);
    }

    Ok(PromotionOutcome {
        environment,
        versions: registry,
        tags,
    })
}

/// Decide whether this run bumps versions.
///
/// Only the uat gate authors version numbers. A release type supplied for
/// any other environment is accepted and ignored with a notice; a missing
/// release type at uat is either an error or a tag-only run, governed by
/// `uat.require_release_type`.
fn release_gate(
    environment: Environment,
    release_type: Option<ReleaseType>,
    config: &Config,
) -> Result<Option<ReleaseType>> {
    match (environment, release_type) {
        (Environment::Uat, Some(release_type)) => Ok(Some(release_type)),
        (Environment::Uat, None) => {
            if config.uat.require_release_type {
                Err(BrandReleaseError::MissingReleaseType)
            } else {
                ui::display_status("No release type given; tagging current versions only");
                Ok(None)
            }
        }
        (_, Some(release_type)) => {
            ui::display_status(&format!(
                "Release type '{}' is ignored outside uat",
                release_type
            ));
            Ok(None)
        }
        (_, None) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    fn args(environment: &str) -> PromotionArgs {
        PromotionArgs {
            environment: environment.to_string(),
            release_type: None,
            brand_filter: None,
        }
    }

    #[test]
    fn test_invalid_environment_aborts_before_any_operation() {
        let repo = MockRepository::new();
        let config = Config::default();

        let err = run_promotion(&repo, &config, &args("qa")).unwrap_err();
        assert!(matches!(err, BrandReleaseError::InvalidEnvironment(_)));
        assert!(repo.operations().is_empty());
    }

    #[test]
    fn test_invalid_release_type_aborts_before_any_operation() {
        let repo = MockRepository::new();
        let config = Config::default();
        let mut args = args("stage");
        args.release_type = Some("hotfix".to_string());

        let err = run_promotion(&repo, &config, &args).unwrap_err();
        assert!(matches!(err, BrandReleaseError::InvalidReleaseType(_)));
        assert!(repo.operations().is_empty());
    }

    #[test]
    fn test_missing_release_type_at_uat_is_an_error_by_default() {
        let repo = MockRepository::new();
        let config = Config::default();

        let err = run_promotion(&repo, &config, &args("uat")).unwrap_err();
        assert!(matches!(err, BrandReleaseError::MissingReleaseType));
        assert!(repo.operations().is_empty());
    }

    #[test]
    fn test_release_gate_ignores_type_outside_uat() {
        let config = Config::default();
        let gate = release_gate(Environment::Stage, Some(ReleaseType::Patch), &config).unwrap();
        assert_eq!(gate, None);
    }

    #[test]
    fn test_release_gate_tag_only_when_policy_relaxed() {
        let mut config = Config::default();
        config.uat.require_release_type = false;
        let gate = release_gate(Environment::Uat, None, &config).unwrap();
        assert_eq!(gate, None);
    }
}
