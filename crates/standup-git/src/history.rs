// Copyright (c) 2026 - present Prayag Tushar
// SPDX-License-Identifier: MIT

//! Commit history reading
//!
//! This module opens a repository with `git2` and walks the history reachable
//! from `HEAD`, newest first, yielding one [`CommitRecord`] at a time.

use std::path::Path;

use chrono::{DateTime, Local};
use git2::{ErrorCode, Oid, Repository, Revwalk, Sort};
use tracing::debug;

use crate::commit::CommitRecord;
use crate::error::GitError;

/// A git repository opened for history reading
pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepository` if no repository is found at the
    /// path and `GitError::ReadFailure` if one is found but cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|e| match e.code() {
            ErrorCode::NotFound => GitError::NotARepository {
                path: path.display().to_string(),
            },
            _ => GitError::ReadFailure(e),
        })?;
        Ok(Self { repo })
    }

    /// Walk the commits reachable from `HEAD`, newest first
    ///
    /// The walk is lazy; each call starts a fresh walk. A repository whose
    /// `HEAD` has no commits yet yields nothing.
    ///
    /// # Errors
    ///
    /// Returns `GitError::ReadFailure` if the walk cannot be started.
    pub fn commits(&self) -> Result<CommitIter<'_>, GitError> {
        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TIME)?;

        match revwalk.push_head() {
            Ok(()) => {}
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                debug!("HEAD has no commits");
                return Ok(CommitIter {
                    repo: &self.repo,
                    revwalk: None,
                });
            }
            Err(e) => return Err(e.into()),
        }

        Ok(CommitIter {
            repo: &self.repo,
            revwalk: Some(revwalk),
        })
    }
}

/// Lazy newest-first sequence of commits
///
/// Not rewindable; call [`GitRepo::commits`] again to restart.
pub struct CommitIter<'repo> {
    repo: &'repo Repository,
    revwalk: Option<Revwalk<'repo>>,
}

impl Iterator for CommitIter<'_> {
    type Item = Result<CommitRecord, GitError>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = match self.revwalk.as_mut()?.next()? {
            Ok(oid) => oid,
            Err(e) => return Some(Err(e.into())),
        };
        Some(record_for(self.repo, oid))
    }
}

fn record_for(repo: &Repository, oid: Oid) -> Result<CommitRecord, GitError> {
    let git_commit = repo.find_commit(oid)?;
    let committed_at = local_time(git_commit.time())?;
    let author = git_commit.author();

    Ok(CommitRecord::new(
        oid.to_string(),
        &String::from_utf8_lossy(git_commit.message_bytes()),
        author.name().unwrap_or("Unknown"),
        author.email().unwrap_or(""),
        committed_at,
    ))
}

fn local_time(time: git2::Time) -> Result<DateTime<Local>, GitError> {
    DateTime::from_timestamp(time.seconds(), 0)
        .map(|utc| utc.with_timezone(&Local))
        .ok_or_else(|| {
            GitError::ReadFailure(git2::Error::from_str(&format!(
                "commit time out of range: {}",
                time.seconds()
            )))
        })
}

/// Read every commit reachable from `HEAD` at `path`, newest first
///
/// # Errors
///
/// Returns `GitError::NotARepository` if the path cannot be opened and
/// `GitError::ReadFailure` for any error while walking.
pub fn read_commits(path: impl AsRef<Path>) -> Result<Vec<CommitRecord>, GitError> {
    let repo = GitRepo::open(path)?;
    let commits = repo.commits()?.collect::<Result<Vec<_>, _>>()?;
    debug!(count = commits.len(), "Read commit history");
    Ok(commits)
}
