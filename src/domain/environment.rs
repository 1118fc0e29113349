use crate::error::{BrandReleaseError, Result};
use std::fmt;
use std::str::FromStr;

/// Deployment environment in the promotion chain dev -> uat -> stage -> prod
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Environment {
    Dev,
    Uat,
    Stage,
    Prod,
}

impl Environment {
    pub const ALL: [Environment; 4] = [
        Environment::Dev,
        Environment::Uat,
        Environment::Stage,
        Environment::Prod,
    ];

    /// The environment this one merges from, if any.
    ///
    /// `dev` is the head of the chain and has no upstream.
    pub fn upstream(&self) -> Option<Environment> {
        match self {
            Environment::Dev => None,
            Environment::Uat => Some(Environment::Dev),
            Environment::Stage => Some(Environment::Uat),
            Environment::Prod => Some(Environment::Stage),
        }
    }

    /// Branch name of this environment
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Uat => "uat",
            Environment::Stage => "stage",
            Environment::Prod => "prod",
        }
    }
}

impl FromStr for Environment {
    type Err = BrandReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dev" => Ok(Environment::Dev),
            "uat" => Ok(Environment::Uat),
            "stage" => Ok(Environment::Stage),
            "prod" => Ok(Environment::Prod),
            other => Err(BrandReleaseError::InvalidEnvironment(other.to_string())),
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
