//! Branch sync guard - blocking precondition for every merge.

use crate::error::{BrandReleaseError, Result};
use crate::git::Repository;
use crate::ui;

/// Verify a branch has no content divergence from its remote counterpart.
///
/// The comparison is a content diff, not a commit-hash check: a branch
/// whose history was rewritten but whose tree matches the remote still
/// counts as in sync. Any difference fails with `BranchOutOfSync`; success
/// has no observable effect beyond the progress message.
pub fn assert_branch_in_sync<R: Repository>(repo: &R, remote: &str, branch: &str) -> Result<()> {
    ui::display_status(&format!(
        "----> Checking \"{}\" branch is in sync with remote branch...",
        branch
    ));

    if repo.diff_with_remote(remote, branch)? {
        return Err(BrandReleaseError::BranchOutOfSync(branch.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::git::MockRepository;

    #[test]
    fn test_guard_passes_when_no_diff() {
        let repo = MockRepository::new();
        assert!(assert_branch_in_sync(&repo, "origin", "uat").is_ok());
        assert!(repo.performed("diff uat origin/uat"));
    }

    #[test]
    fn test_guard_fails_on_diff() {
        let repo = MockRepository::new();
        repo.set_out_of_sync("uat");

        let err = assert_branch_in_sync(&repo, "origin", "uat").unwrap_err();
        match err {
            BrandReleaseError::BranchOutOfSync(branch) => assert_eq!(branch, "uat"),
            other => panic!("expected BranchOutOfSync, got {}", other),
        }
    }

    #[test]
    fn test_guard_only_checks_named_branch() {
        let repo = MockRepository::new();
        repo.set_out_of_sync("stage");
        assert!(assert_branch_in_sync(&repo, "origin", "uat").is_ok());
    }
}
