//! Persisted per-brand version registry.
//!
//! The registry is a flat JSON object mapping brand identifiers to version
//! strings (the app's `appVersion.json`). Key order is preserved across
//! load/save so the file stays diffable in version control.

use indexmap::IndexMap;
use std::fs;
use std::path::Path;

use crate::domain::{normalize_brand, parse_brand_filter, ReleaseType, Version};
use crate::error::{BrandReleaseError, Result};

/// Ordered mapping of brand identifier to its current version
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BrandVersionRegistry {
    versions: IndexMap<String, Version>,
}

impl BrandVersionRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        BrandVersionRegistry {
            versions: IndexMap::new(),
        }
    }

    /// Insert or replace a brand's version, keeping insertion order
    pub fn insert(&mut self, brand: impl Into<String>, version: Version) {
        self.versions.insert(brand.into(), version);
    }

    /// Load the registry from a JSON file.
    ///
    /// Every value must parse as a strict `x.y.z` version; a malformed file
    /// aborts the load rather than producing a partial map.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let parsed: IndexMap<String, String> = serde_json::from_str(&raw).map_err(|e| {
            BrandReleaseError::registry(format!(
                "cannot parse '{}': {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let mut versions = IndexMap::with_capacity(parsed.len());
        for (brand, version) in parsed {
            versions.insert(brand, Version::parse(&version)?);
        }

        Ok(BrandVersionRegistry { versions })
    }

    /// Persist the registry as 2-space-indented JSON.
    ///
    /// The whole map is serialized before any byte is written, so the file
    /// either reflects the complete map or is left untouched.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let serializable: IndexMap<&String, String> = self
            .versions
            .iter()
            .map(|(brand, version)| (brand, version.to_string()))
            .collect();

        let body = serde_json::to_string_pretty(&serializable)
            .map_err(|e| BrandReleaseError::registry(format!("cannot serialize registry: {}", e)))?;

        fs::write(path.as_ref(), body)?;
        Ok(())
    }

    /// Apply a version bump to the selected brands, leaving the rest untouched.
    ///
    /// Brands are visited in stored order. An empty `targets` slice means
    /// every brand is bumped. Matching is done on normalized names, so a
    /// registry key `threeh` is selected by the target `3h`.
    pub fn apply_bump(&self, release_type: ReleaseType, targets: &[String]) -> Self {
        let versions = self
            .versions
            .iter()
            .map(|(brand, version)| {
                let selected =
                    targets.is_empty() || targets.iter().any(|t| *t == normalize_brand(brand));
                let next = if selected {
                    version.bump(release_type)
                } else {
                    *version
                };
                (brand.clone(), next)
            })
            .collect();

        BrandVersionRegistry { versions }
    }

    /// Resolve an optional comma-separated brand filter to registry keys.
    ///
    /// Returns the selected keys in registry order; an absent or empty
    /// filter selects every brand. Any filter entry that matches no
    /// registry key fails with `UnknownBrand`.
    pub fn resolve_targets(&self, filter: Option<&str>) -> Result<Vec<String>> {
        let entries = match filter {
            Some(raw) => parse_brand_filter(raw),
            None => Vec::new(),
        };

        if entries.is_empty() {
            return Ok(self.versions.keys().cloned().collect());
        }

        let available: Vec<String> = self.versions.keys().cloned().collect();
        for entry in &entries {
            let known = available.iter().any(|brand| normalize_brand(brand) == *entry);
            if !known {
                return Err(BrandReleaseError::unknown_brand(entry.clone(), &available));
            }
        }

        Ok(available
            .into_iter()
            .filter(|brand| entries.contains(&normalize_brand(brand)))
            .collect())
    }

    /// Current version of a brand, if present
    pub fn get(&self, brand: &str) -> Option<Version> {
        self.versions.get(brand).copied()
    }

    /// Iterate brands and versions in stored order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Version)> {
        self.versions.iter()
    }

    /// Brand keys in stored order
    pub fn brands(&self) -> impl Iterator<Item = &String> {
        self.versions.keys()
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BrandVersionRegistry {
        let mut registry = BrandVersionRegistry::new();
        registry.insert("ttmj", Version::new(1, 0, 0));
        registry.insert("cdd", Version::new(2, 0, 0));
        registry.insert("threeh", Version::new(0, 9, 1));
        registry
    }

    #[test]
    fn test_apply_bump_all_brands() {
        let bumped = sample().apply_bump(ReleaseType::Patch, &[]);
        assert_eq!(bumped.get("ttmj"), Some(Version::new(1, 0, 1)));
        assert_eq!(bumped.get("cdd"), Some(Version::new(2, 0, 1)));
        assert_eq!(bumped.get("threeh"), Some(Version::new(0, 9, 2)));
    }

    #[test]
    fn test_apply_bump_filtered_leaves_others_unchanged() {
        let bumped = sample().apply_bump(ReleaseType::Patch, &["ttmj".to_string()]);
        assert_eq!(bumped.get("ttmj"), Some(Version::new(1, 0, 1)));
        assert_eq!(bumped.get("cdd"), Some(Version::new(2, 0, 0)));
        assert_eq!(bumped.get("threeh"), Some(Version::new(0, 9, 1)));
    }

    #[test]
    fn test_apply_bump_matches_alias() {
        let bumped = sample().apply_bump(ReleaseType::Minor, &["3h".to_string()]);
        assert_eq!(bumped.get("threeh"), Some(Version::new(0, 10, 0)));
        assert_eq!(bumped.get("ttmj"), Some(Version::new(1, 0, 0)));
    }

    #[test]
    fn test_apply_bump_preserves_order() {
        let bumped = sample().apply_bump(ReleaseType::Major, &[]);
        let brands: Vec<&String> = bumped.brands().collect();
        assert_eq!(brands, ["ttmj", "cdd", "threeh"]);
    }

    #[test]
    fn test_resolve_targets_default_is_all() {
        let registry = sample();
        assert_eq!(
            registry.resolve_targets(None).unwrap(),
            ["ttmj", "cdd", "threeh"]
        );
        assert_eq!(
            registry.resolve_targets(Some("")).unwrap(),
            ["ttmj", "cdd", "threeh"]
        );
    }

    #[test]
    fn test_resolve_targets_filter() {
        let registry = sample();
        assert_eq!(
            registry.resolve_targets(Some("cdd, ttmj")).unwrap(),
            ["ttmj", "cdd"]
        );
    }

    #[test]
    fn test_resolve_targets_alias() {
        let registry = sample();
        assert_eq!(registry.resolve_targets(Some("3h")).unwrap(), ["threeh"]);
    }

    #[test]
    fn test_resolve_targets_unknown_brand() {
        let err = sample().resolve_targets(Some("ttmj,nope")).unwrap_err();
        match err {
            BrandReleaseError::UnknownBrand { brand, available } => {
                assert_eq!(brand, "nope");
                assert!(available.contains("ttmj"));
                assert!(available.contains("threeh"));
            }
            other => panic!("expected UnknownBrand, got {}", other),
        }
    }

    #[test]
    fn test_load_rejects_bad_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appVersion.json");
        fs::write(&path, r#"{ "ttmj": "1.2" }"#).unwrap();

        let err = BrandVersionRegistry::load(&path).unwrap_err();
        assert!(matches!(err, BrandReleaseError::InvalidVersionFormat(_)));
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appVersion.json");
        fs::write(&path, "not json").unwrap();

        let err = BrandVersionRegistry::load(&path).unwrap_err();
        assert!(matches!(err, BrandReleaseError::Registry(_)));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("appVersion.json");

        let registry = sample();
        registry.save(&path).unwrap();

        let reloaded = BrandVersionRegistry::load(&path).unwrap();
        assert_eq!(reloaded, registry);

        // Saving what we loaded reproduces the file byte-for-byte
        let first = fs::read_to_string(&path).unwrap();
        reloaded.save(&path).unwrap();
        let second = fs::read_to_string(&path).unwrap();
        assert_eq!(first, second);
    }
}
