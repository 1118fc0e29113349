//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over the git operations
//! the promotion workflow relies on, allowing for multiple implementations
//! including real Git repositories and mock implementations for testing.
//!
//! # Overview
//!
//! The primary abstraction is the [Repository] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! Most code should depend on the [Repository] trait rather than concrete
//! implementations to enable easy testing and flexibility.
//!
//! ```rust
//! # use brand_release::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! repo.checkout("uat")?;
//! if repo.diff_with_remote("origin", "uat")? {
//!     // local uat differs from origin/uat
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;
use std::path::Path;

/// Common git operation trait for abstraction
///
/// This trait abstracts the git operations the promotion workflow performs,
/// allowing for real repositories and mock implementations in tests. Every
/// call is synchronous and blocking; the workflow depends on strict step
/// ordering.
///
/// ## Thread Safety
///
/// All implementors must be `Send + Sync` to allow safe sharing across threads.
///
/// ## Error Handling
///
/// All methods return [crate::error::Result<T>]. Implementations should map
/// underlying errors (like `git2::Error`) to the appropriate
/// [crate::error::BrandReleaseError] variants.
pub trait Repository: Send + Sync {
    /// Switch the working tree to the named local branch.
    ///
    /// # Arguments
    /// * `branch` - The local branch to check out (e.g., "uat")
    fn checkout(&self, branch: &str) -> Result<()>;

    /// Compare a local branch's content against its remote-tracking branch.
    ///
    /// This is a tree-level content comparison, not a commit-hash
    /// comparison: two branches whose histories diverged but whose trees
    /// are identical compare equal.
    ///
    /// # Arguments
    /// * `remote` - The remote name (e.g., "origin")
    /// * `branch` - The branch to compare with `<remote>/<branch>`
    ///
    /// # Returns
    /// * `Ok(true)` - The contents differ
    /// * `Ok(false)` - The contents are identical
    fn diff_with_remote(&self, remote: &str, branch: &str) -> Result<bool>;

    /// Merge `source` into `target`, which must be the checked-out branch.
    ///
    /// A conflicted merge fails with
    /// [crate::error::BrandReleaseError::MergeConflict] and leaves the
    /// working tree without a half-finished merge state.
    fn merge(&self, source: &str, target: &str) -> Result<()>;

    /// Push a local branch to the remote.
    fn push_branch(&self, remote: &str, branch: &str) -> Result<()>;

    /// Stage the given paths and commit them on the current branch.
    ///
    /// # Arguments
    /// * `paths` - Paths relative to the repository root
    /// * `message` - The commit message
    fn commit_paths(&self, paths: &[&Path], message: &str) -> Result<()>;

    /// Create a lightweight tag on the current HEAD commit.
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push a tag to the remote.
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}
