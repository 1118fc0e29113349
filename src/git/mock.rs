use crate::error::{BrandReleaseError, Result};
use crate::git::Repository;
use std::collections::HashSet;
use std::path::Path;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations.
///
/// Records every operation in call order so tests can assert both what ran
/// and what never ran. Out-of-sync branches and conflicting merges can be
/// injected to exercise the failure paths.
pub struct MockRepository {
    operations: Mutex<Vec<String>>,
    out_of_sync: Mutex<HashSet<String>>,
    conflicts: Mutex<HashSet<(String, String)>>,
}

impl MockRepository {
    /// Create a new mock repository with no failures configured
    pub fn new() -> Self {
        MockRepository {
            operations: Mutex::new(Vec::new()),
            out_of_sync: Mutex::new(HashSet::new()),
            conflicts: Mutex::new(HashSet::new()),
        }
    }

    /// Mark a branch as diverged from its remote counterpart
    pub fn set_out_of_sync(&self, branch: impl Into<String>) {
        self.out_of_sync.lock().unwrap().insert(branch.into());
    }

    /// Make merging `source` into `target` fail with a conflict
    pub fn set_merge_conflict(&self, source: impl Into<String>, target: impl Into<String>) {
        self.conflicts
            .lock()
            .unwrap()
            .insert((source.into(), target.into()));
    }

    /// All operations performed so far, in call order
    pub fn operations(&self) -> Vec<String> {
        self.operations.lock().unwrap().clone()
    }

    /// Whether any operation matching the predicate was performed
    pub fn performed(&self, needle: &str) -> bool {
        self.operations
            .lock()
            .unwrap()
            .iter()
            .any(|op| op.contains(needle))
    }

    fn record(&self, op: String) {
        self.operations.lock().unwrap().push(op);
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Repository for MockRepository {
    fn checkout(&self, branch: &str) -> Result<()> {
        self.record(format!("checkout {}", branch));
        Ok(())
    }

    fn diff_with_remote(&self, remote: &str, branch: &str) -> Result<bool> {
        self.record(format!("diff {} {}/{}", branch, remote, branch));
        Ok(self.out_of_sync.lock().unwrap().contains(branch))
    }

    fn merge(&self, source: &str, target: &str) -> Result<()> {
        self.record(format!("merge {} into {}", source, target));
        let conflicted = self
            .conflicts
            .lock()
            .unwrap()
            .contains(&(source.to_string(), target.to_string()));
        if conflicted {
            return Err(BrandReleaseError::MergeConflict {
                source_branch: source.to_string(),
                target: target.to_string(),
            });
        }
        Ok(())
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("push branch {} to {}", branch, remote));
        Ok(())
    }

    fn commit_paths(&self, paths: &[&Path], message: &str) -> Result<()> {
        let joined = paths
            .iter()
            .map(|p| p.display().to_string())
            .collect::<Vec<_>>()
            .join(",");
        self.record(format!("commit {} '{}'", joined, message));
        Ok(())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.record(format!("tag {}", name));
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.record(format!("push tag {} to {}", name, remote));
        Ok(())
    }
}
