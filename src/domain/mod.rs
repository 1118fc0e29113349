//! Domain logic - pure business rules independent of git operations

pub mod brand;
pub mod environment;
pub mod tag;
pub mod version;

pub use brand::{normalize_brand, parse_brand_filter};
pub use environment::Environment;
pub use tag::ReleaseTag;
pub use version::{ReleaseType, Version};
