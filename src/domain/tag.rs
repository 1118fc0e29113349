use crate::domain::environment::Environment;
use crate::domain::version::Version;
use crate::error::{BrandReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// A per-brand release tag, derived from the registry at release time.
///
/// Serialized form: `{env}-{brand}-{version}-jsbundle`, the shape the CI
/// bundle pipelines trigger on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseTag {
    pub environment: Environment,
    pub brand: String,
    pub version: Version,
}

impl ReleaseTag {
    /// Create a new release tag
    pub fn new(environment: Environment, brand: impl Into<String>, version: Version) -> Self {
        ReleaseTag {
            environment,
            brand: brand.into(),
            version,
        }
    }

    /// Parse a tag name back into its parts.
    ///
    /// Accepts only the exact `{env}-{brand}-{version}-jsbundle` shape.
    pub fn parse(tag: &str) -> Result<Self> {
        let re = regex::Regex::new(r"^(dev|uat|stage|prod)-([A-Za-z0-9]+)-(\d+\.\d+\.\d+)-jsbundle$")
            .map_err(|_| BrandReleaseError::tag("invalid release tag pattern"))?;

        let captures = re
            .captures(tag)
            .ok_or_else(|| BrandReleaseError::tag(format!("not a release tag: '{}'", tag)))?;

        Ok(ReleaseTag {
            environment: captures[1].parse()?,
            brand: captures[2].to_string(),
            version: Version::parse(&captures[3])?,
        })
    }
}

impl fmt::Display for ReleaseTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}-jsbundle",
            self.environment, self.brand, self.version
        )
    }
}

impl FromStr for ReleaseTag {
    type Err = BrandReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        ReleaseTag::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_format() {
        let tag = ReleaseTag::new(Environment::Uat, "ttmj", Version::new(1, 0, 1));
        assert_eq!(tag.to_string(), "uat-ttmj-1.0.1-jsbundle");
    }

    #[test]
    fn test_tag_format_prod() {
        let tag = ReleaseTag::new(Environment::Prod, "3h", Version::new(2, 1, 0));
        assert_eq!(tag.to_string(), "prod-3h-2.1.0-jsbundle");
    }

    #[test]
    fn test_tag_parse() {
        let tag = ReleaseTag::parse("stage-cdd-1.4.0-jsbundle").unwrap();
        assert_eq!(tag.environment, Environment::Stage);
        assert_eq!(tag.brand, "cdd");
        assert_eq!(tag.version, Version::new(1, 4, 0));
    }

    #[test]
    fn test_tag_parse_rejects_other_shapes() {
        assert!(ReleaseTag::parse("v1.2.3").is_err());
        assert!(ReleaseTag::parse("qa-ttmj-1.0.0-jsbundle").is_err());
        assert!(ReleaseTag::parse("uat-ttmj-1.0-jsbundle").is_err());
        assert!(ReleaseTag::parse("uat-ttmj-1.0.0").is_err());
    }

    #[test]
    fn test_tag_round_trip() {
        let tag = ReleaseTag::new(Environment::Dev, "ttmj", Version::new(0, 3, 7));
        let parsed: ReleaseTag = tag.to_string().parse().unwrap();
        assert_eq!(parsed, tag);
    }
}
