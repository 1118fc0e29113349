use crate::error::{BrandReleaseError, Result};
use git2::{BranchType, Oid, Repository as Git2Repo};
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    fn branch_commit_oid(&self, branch: &str) -> Result<Oid> {
        let branch = self.repo.find_branch(branch, BranchType::Local)?;
        Ok(branch.into_reference().peel_to_commit()?.id())
    }

    /// Credential chain for remote operations: SSH keys from ~/.ssh/,
    /// then the SSH agent, then whatever default git comes up with.
    fn remote_callbacks() -> git2::RemoteCallbacks<'static> {
        let mut callbacks = git2::RemoteCallbacks::new();
        callbacks.credentials(|_url, username_from_url, allowed_types| {
            if allowed_types.contains(git2::CredentialType::SSH_KEY) {
                let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
                let key_paths = vec![
                    format!("{}/.ssh/id_ed25519", home),
                    format!("{}/.ssh/id_rsa", home),
                    format!("{}/.ssh/id_ecdsa", home),
                ];

                for key_path in key_paths {
                    let path = std::path::Path::new(&key_path);
                    if path.exists() {
                        if let Ok(cred) = git2::Cred::ssh_key(
                            username_from_url.unwrap_or("git"),
                            None,
                            path,
                            None,
                        ) {
                            return Ok(cred);
                        }
                    }
                }

                if let Ok(cred) = git2::Cred::ssh_key_from_agent(username_from_url.unwrap_or("git"))
                {
                    return Ok(cred);
                }
            }

            git2::Cred::default()
        });

        // Surface per-reference push failures instead of a silent partial push
        callbacks.push_update_reference(|refname, status| {
            if let Some(status) = status {
                Err(git2::Error::from_str(&format!(
                    "Push failed for {}: {}",
                    refname, status
                )))
            } else {
                Ok(())
            }
        });

        callbacks
    }

    fn push_refspec(&self, remote: &str, refspec: &str) -> Result<()> {
        let mut remote = self.repo.find_remote(remote)?;

        let mut push_options = git2::PushOptions::new();
        push_options.remote_callbacks(Self::remote_callbacks());

        remote.push(&[refspec], Some(&mut push_options))?;
        Ok(())
    }
}

impl super::Repository for Git2Repository {
    fn checkout(&self, branch: &str) -> Result<()> {
        // Verify the branch exists before moving HEAD
        self.repo.find_branch(branch, BranchType::Local)?;

        self.repo.set_head(&format!("refs/heads/{}", branch))?;
        self.repo
            .checkout_head(Some(git2::build::CheckoutBuilder::new().safe()))?;
        Ok(())
    }

    fn diff_with_remote(&self, remote: &str, branch: &str) -> Result<bool> {
        let local_tree = self
            .repo
            .find_commit(self.branch_commit_oid(branch)?)?
            .tree()?;

        let remote_ref = format!("refs/remotes/{}/{}", remote, branch);
        let remote_tree = self
            .repo
            .find_reference(&remote_ref)?
            .peel_to_commit()?
            .tree()?;

        let diff = self
            .repo
            .diff_tree_to_tree(Some(&local_tree), Some(&remote_tree), None)?;

        Ok(diff.deltas().count() > 0)
    }

    fn merge(&self, source: &str, target: &str) -> Result<()> {
        let source_oid = self.branch_commit_oid(source)?;
        let source_commit = self.repo.find_commit(source_oid)?;
        let annotated = self.repo.find_annotated_commit(source_oid)?;

        let (analysis, _) = self.repo.merge_analysis(&[&annotated])?;

        if analysis.is_up_to_date() {
            return Ok(());
        }

        if analysis.is_fast_forward() {
            let refname = format!("refs/heads/{}", target);
            let mut reference = self.repo.find_reference(&refname)?;
            reference.set_target(
                source_oid,
                &format!("fast-forward '{}' into '{}'", source, target),
            )?;
            self.repo.set_head(&refname)?;
            self.repo
                .checkout_head(Some(git2::build::CheckoutBuilder::new().force()))?;
            return Ok(());
        }

        self.repo.merge(&[&annotated], None, None)?;

        let mut index = self.repo.index()?;
        if index.has_conflicts() {
            self.repo.cleanup_state()?;
            return Err(BrandReleaseError::MergeConflict {
                source_branch: source.to_string(),
                target: target.to_string(),
            });
        }

        let tree_id = index.write_tree_to(&self.repo)?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;
        let head_commit = self.repo.head()?.peel_to_commit()?;
        let message = format!("Merge branch '{}' into {}", source, target);

        self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            &message,
            &tree,
            &[&head_commit, &source_commit],
        )?;
        self.repo.cleanup_state()?;

        Ok(())
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.push_refspec(
            remote,
            &format!("refs/heads/{}:refs/heads/{}", branch, branch),
        )
    }

    fn commit_paths(&self, paths: &[&Path], message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        for path in paths {
            index.add_path(path)?;
        }
        index.write()?;

        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature()?;
        let parent = self.repo.head()?.peel_to_commit()?;

        self.repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &[&parent])?;

        Ok(())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        self.repo.tag_lightweight(name, head.as_object(), false)?;
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        self.push_refspec(remote, &format!("refs/tags/{}:refs/tags/{}", name, name))
    }
}

// SAFETY: Git2Repository wraps git2::Repository which is Send + Sync.
// git2 library is thread-safe for read operations via libgit2's thread-safe design.
unsafe impl Sync for Git2Repository {}
