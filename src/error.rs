use thiserror::Error;

/// Unified error type for brand-release operations
#[derive(Error, Debug)]
pub enum BrandReleaseError {
    #[error("Release type should be major|minor|patch, got '{0}'")]
    InvalidReleaseType(String),

    #[error("Version format is not valid: '{0}' - expected x.y.z")]
    InvalidVersionFormat(String),

    #[error("Environment should be dev|uat|stage|prod, got '{0}'")]
    InvalidEnvironment(String),

    #[error("Releasing uat requires a release type (major|minor|patch)")]
    MissingReleaseType,

    #[error("Unknown brand '{brand}'. Available brands: {available}")]
    UnknownBrand { brand: String, available: String },

    #[error("Branch '{0}' is not in sync with its remote branch")]
    BranchOutOfSync(String),

    #[error("Merging '{source_branch}' into '{target}' produced conflicts")]
    MergeConflict { source_branch: String, target: String },

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Version registry error: {0}")]
    Registry(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in brand-release
pub type Result<T> = std::result::Result<T, BrandReleaseError>;

impl BrandReleaseError {
    /// Create a registry error with context
    pub fn registry(msg: impl Into<String>) -> Self {
        BrandReleaseError::Registry(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        BrandReleaseError::Tag(msg.into())
    }

    /// Create an unknown-brand error naming the offender and the known brands
    pub fn unknown_brand(brand: impl Into<String>, available: &[String]) -> Self {
        BrandReleaseError::UnknownBrand {
            brand: brand.into(),
            available: available.join(", "),
        }
    }
}
