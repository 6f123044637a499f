// Copyright (c) 2026 - present Prayag Tushar
// SPDX-License-Identifier: MIT

//! Repository source resolution
//!
//! A reference given by the user is either a local path or a remote locator.
//! Remote references are cloned into a uniquely named directory under the
//! system temp area and removed again when the returned [`ResolvedRepo`] is
//! dropped.
//!
//! Remote detection is a string-prefix heuristic, not URL parsing. An
//! `https://` reference without `.git` anywhere in it is treated as a local
//! path.

use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use git2::Repository;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::GitError;

/// Prefix used for temporary clone directories
pub const TEMP_DIR_PREFIX: &str = "standup_";

const HOSTED_PREFIXES: [&str; 2] = ["https://github.com/", "git@github.com:"];
const SECURE_PREFIX: &str = "https://";
const ARCHIVE_SUFFIX: &str = ".git";
const GIT_PROTOCOL_PREFIX: &str = "git://";

/// Check whether a reference should be cloned rather than opened in place
#[must_use]
pub fn is_remote_reference(reference: &str) -> bool {
    HOSTED_PREFIXES.iter().any(|p| reference.starts_with(p))
        || (reference.starts_with(SECURE_PREFIX) && reference.contains(ARCHIVE_SUFFIX))
        || reference.starts_with(GIT_PROTOCOL_PREFIX)
}

/// Check whether a reference can be scanned
///
/// Remote references are accepted without any I/O; they are validated when
/// cloned. Local references must exist and open as a repository.
#[must_use]
pub fn is_valid_repository(reference: &str) -> bool {
    if is_remote_reference(reference) {
        return true;
    }
    let path = Path::new(reference);
    path.exists() && Repository::open(path).is_ok()
}

/// Resolve a reference using the system temp area for clones
///
/// # Errors
///
/// See [`Resolver::resolve`].
pub fn resolve(reference: &str) -> Result<ResolvedRepo, GitError> {
    Resolver::new().resolve(reference)
}

/// Turns references into local repository paths
#[derive(Debug, Clone)]
pub struct Resolver {
    temp_root: PathBuf,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// Resolver that clones into the system temp directory
    #[must_use]
    pub fn new() -> Self {
        Self {
            temp_root: std::env::temp_dir(),
        }
    }

    /// Resolver that clones into `temp_root`
    ///
    /// The root must be the system temp directory or lie inside it; cloning
    /// with any other root fails before anything is written.
    #[must_use]
    pub fn with_temp_root(temp_root: impl Into<PathBuf>) -> Self {
        Self {
            temp_root: temp_root.into(),
        }
    }

    /// Directory under which clone directories are created
    #[must_use]
    pub fn temp_root(&self) -> &Path {
        &self.temp_root
    }

    /// Resolve a reference to a local repository path
    ///
    /// # Errors
    ///
    /// Returns `GitError::InvalidReference` for a local reference that is not
    /// a repository, and `GitError::CloneFailure` if a remote clone fails.
    pub fn resolve(&self, reference: &str) -> Result<ResolvedRepo, GitError> {
        if is_remote_reference(reference) {
            return self.clone_to_temp(reference).map(ResolvedRepo::from);
        }

        if !is_valid_repository(reference) {
            return Err(GitError::InvalidReference {
                reference: reference.to_string(),
            });
        }

        debug!(path = reference, "Using local repository");
        Ok(ResolvedRepo {
            path: PathBuf::from(reference),
            clone: None,
        })
    }

    /// Clone `url` with full history into a fresh temporary directory
    ///
    /// No heuristic is applied to `url`; anything the git transport accepts
    /// is cloned. A partially written directory is removed before returning
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns `GitError::CloneFailure` if the temp root is outside the system
    /// temp area, the directory cannot be created or the clone does not
    /// complete.
    pub fn clone_to_temp(&self, url: &str) -> Result<TempClone, GitError> {
        if !within_temp_area(&self.temp_root, true) {
            return Err(GitError::clone_failure(
                url,
                io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    format!(
                        "clone root {} is outside the system temp directory",
                        self.temp_root.display()
                    ),
                ),
            ));
        }

        let path = self
            .temp_root
            .join(format!("{TEMP_DIR_PREFIX}{}", Uuid::new_v4().simple()));

        fs::create_dir(&path).map_err(|e| GitError::clone_failure(url, e))?;
        let guard = TempClone { path };

        info!(url, path = %guard.path.display(), "Cloning repository");
        Repository::clone(url, &guard.path).map_err(|e| GitError::clone_failure(url, e))?;
        info!(url, "Clone complete");

        Ok(guard)
    }
}

/// A repository path ready to be read
///
/// Holds the temporary clone, if one was made, for as long as it lives.
#[derive(Debug)]
pub struct ResolvedRepo {
    path: PathBuf,
    clone: Option<TempClone>,
}

impl From<TempClone> for ResolvedRepo {
    fn from(clone: TempClone) -> Self {
        Self {
            path: clone.path.clone(),
            clone: Some(clone),
        }
    }
}

impl ResolvedRepo {
    /// Local path of the repository
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether this repository is a temporary clone
    #[must_use]
    pub fn is_temporary(&self) -> bool {
        self.clone.is_some()
    }

    /// Release the temporary clone now instead of on drop
    pub fn cleanup(self) {
        drop(self);
    }
}

/// A temporary clone directory, deleted on drop
#[derive(Debug)]
pub struct TempClone {
    path: PathBuf,
}

impl TempClone {
    /// Path of the clone
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempClone {
    fn drop(&mut self) {
        remove_temp_dir(&self.path);
    }
}

/// Best-effort removal of a directory under the system temp area
///
/// Only paths that still resolve strictly inside `std::env::temp_dir()` after
/// following symlinks are removed; paths containing `..` are always refused.
/// Failures are logged and swallowed.
pub fn remove_temp_dir(path: &Path) {
    if fs::symlink_metadata(path).is_err() {
        return;
    }
    if !is_under_temp_area(path) {
        warn!(path = %path.display(), "Refusing to delete directory outside temp area");
        return;
    }
    match fs::remove_dir_all(path) {
        Ok(()) => debug!(path = %path.display(), "Removed temporary clone"),
        Err(e) => warn!(path = %path.display(), error = %e, "Failed to remove temporary clone"),
    }
}

fn is_under_temp_area(path: &Path) -> bool {
    within_temp_area(path, false)
}

/// Both sides are canonicalized, so symlinked temp dirs compare equal and
/// links pointing out of the temp area are caught.
fn within_temp_area(path: &Path, allow_root: bool) -> bool {
    if path.components().any(|c| c == Component::ParentDir) {
        return false;
    }
    match (fs::canonicalize(path), fs::canonicalize(std::env::temp_dir())) {
        (Ok(p), Ok(t)) => p.starts_with(&t) && (allow_root || p != t),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scratch_dir(name: &str) -> TempDir {
        tempfile::Builder::new()
            .prefix(&format!("standup-source-test-{name}-"))
            .tempdir()
            .expect("create temp dir")
    }

    fn init_with_commit(path: &Path) {
        let repo = Repository::init(path).expect("init source");
        let sig = git2::Signature::now("Test Author", "test@example.com").expect("signature");
        let tree_id = repo.index().and_then(|mut i| i.write_tree()).expect("tree");
        let tree = repo.find_tree(tree_id).expect("find tree");
        repo.commit(Some("HEAD"), &sig, &sig, "feat: initial", &tree, &[])
            .expect("commit");
    }

    #[test]
    fn test_hosted_prefixes_are_remote() {
        assert!(is_remote_reference("https://github.com/owner/repo"));
        assert!(is_remote_reference("git@github.com:owner/repo.git"));
    }

    #[test]
    fn test_https_requires_archive_suffix() {
        assert!(is_remote_reference("https://gitlab.com/owner/repo.git"));
        // Anywhere in the string counts
        assert!(is_remote_reference("https://example.com/.github/x"));
        // Known sharp edge: no ".git" means local
        assert!(!is_remote_reference("https://gitlab.com/owner/repo"));
    }

    #[test]
    fn test_git_protocol_is_remote() {
        assert!(is_remote_reference("git://example.com/repo"));
    }

    #[test]
    fn test_local_paths_are_not_remote() {
        assert!(!is_remote_reference("."));
        assert!(!is_remote_reference("/home/user/project"));
        assert!(!is_remote_reference("http://example.com/repo.git"));
        assert!(!is_remote_reference("ssh://git@example.com/repo.git"));
        assert!(!is_remote_reference(""));
    }

    #[test]
    fn test_remote_is_valid_without_io() {
        assert!(is_valid_repository("git://unreachable.invalid/nothing"));
        assert!(is_valid_repository("https://github.com/does-not/exist"));
    }

    #[test]
    fn test_missing_local_path_is_invalid() {
        assert!(!is_valid_repository("/nonexistent/path/standup-12345"));
    }

    #[test]
    fn test_plain_directory_is_invalid() {
        let dir = scratch_dir("plain");
        let reference = dir.path().display().to_string();
        assert!(!is_valid_repository(&reference));

        let result = resolve(&reference);
        assert!(matches!(result, Err(GitError::InvalidReference { .. })));
    }

    #[test]
    fn test_local_repository_resolves_in_place() {
        let dir = scratch_dir("local");
        Repository::init(dir.path()).expect("init repo");

        let reference = dir.path().display().to_string();
        let resolved = resolve(&reference).expect("resolve local");
        assert_eq!(resolved.path(), dir.path());
        assert!(!resolved.is_temporary());

        resolved.cleanup();
        assert!(dir.path().exists(), "local repositories are never deleted");
    }

    #[test]
    fn test_temp_area_guard() {
        let dir = scratch_dir("guard");
        assert!(is_under_temp_area(dir.path()));
        assert!(!is_under_temp_area(Path::new("/")));
        assert!(!is_under_temp_area(&std::env::temp_dir()));
        // Not yet created, so nothing to resolve
        assert!(!is_under_temp_area(&dir.path().join("missing")));
    }

    #[test]
    fn test_guard_refuses_parent_components() {
        let dir = scratch_dir("dotdot");
        let inner = dir.path().join("inner");
        fs::create_dir(&inner).expect("create inner");

        let escaping = dir.path().join("inner").join("..").join("inner");
        assert!(!is_under_temp_area(&escaping));
        assert!(!is_under_temp_area(&std::env::temp_dir().join("standup_x/../..")));

        remove_temp_dir(&escaping);
        assert!(inner.exists(), "paths with '..' must never be removed");
    }

    #[cfg(unix)]
    #[test]
    fn test_guard_refuses_symlink_out_of_temp() {
        let dir = scratch_dir("symlink");
        let link = dir.path().join("standup_link");
        std::os::unix::fs::symlink("/", &link).expect("create symlink");

        assert!(!is_under_temp_area(&link));
    }

    #[test]
    fn test_remove_missing_dir_is_noop() {
        let path = std::env::temp_dir().join(format!("standup_missing_{}", Uuid::new_v4()));
        remove_temp_dir(&path);
        assert!(!path.exists());
    }

    #[test]
    fn test_clone_failure_leaves_no_directory() {
        let root = scratch_dir("clone-fail");
        let resolver = Resolver::with_temp_root(root.path());

        let missing = root.path().join("no-such-source");
        let result = resolver.clone_to_temp(&missing.display().to_string());
        assert!(matches!(result, Err(GitError::CloneFailure { .. })));

        let leftovers = fs::read_dir(root.path()).expect("read root").count();
        assert_eq!(leftovers, 0, "partial clone directory should be removed");
    }

    #[test]
    fn test_clone_root_outside_temp_is_rejected() {
        let origin = scratch_dir("outside-source");
        init_with_commit(origin.path());
        let url = origin.path().display().to_string();

        for root in [PathBuf::from("/"), std::env::temp_dir().join("..")] {
            let resolver = Resolver::with_temp_root(root);
            let result = resolver.clone_to_temp(&url);
            match result {
                Err(GitError::CloneFailure { source, .. }) => {
                    assert!(source.to_string().contains("outside the system temp directory"));
                }
                other => panic!("Expected CloneFailure, got {other:?}"),
            }
        }

        let stray = fs::read_dir("/")
            .expect("read root")
            .filter_map(Result::ok)
            .any(|e| e.file_name().to_string_lossy().starts_with(TEMP_DIR_PREFIX));
        assert!(!stray, "no clone directory may be created outside temp");
    }

    #[test]
    fn test_temp_dir_itself_is_a_valid_root() {
        let source = scratch_dir("default-root");
        init_with_commit(source.path());

        let clone = Resolver::new()
            .clone_to_temp(&source.path().display().to_string())
            .expect("clone into temp dir");
        let path = clone.path().to_path_buf();
        assert!(path.join(".git").exists());
        drop(clone);
        assert!(!path.exists());
    }

    #[test]
    fn test_clone_dirs_are_unique() {
        let root = scratch_dir("unique");
        let source = root.path().join("source");
        init_with_commit(&source);
        let resolver = Resolver::with_temp_root(root.path());

        let url = source.display().to_string();
        let a = resolver.clone_to_temp(&url).expect("first clone");
        let b = resolver.clone_to_temp(&url).expect("second clone");
        assert_ne!(a.path(), b.path());
        assert!(a.path().file_name().unwrap().to_string_lossy().starts_with(TEMP_DIR_PREFIX));

        let (pa, pb) = (a.path().to_path_buf(), b.path().to_path_buf());
        drop(a);
        drop(b);
        assert!(!pa.exists());
        assert!(!pb.exists());
    }

    #[test]
    fn test_resolved_from_clone_is_temporary() {
        let root = scratch_dir("from-clone");
        let source = root.path().join("source");
        init_with_commit(&source);

        let clone = Resolver::with_temp_root(root.path())
            .clone_to_temp(&source.display().to_string())
            .expect("clone");
        let resolved = ResolvedRepo::from(clone);
        let path = resolved.path().to_path_buf();
        assert!(resolved.is_temporary());

        resolved.cleanup();
        assert!(!path.exists());
    }
}
