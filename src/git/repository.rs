use crate::error::Result;
use crate::git::{parse_describe_line, TagDescription, TagSource};
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct GitRepository {
    repo: Git2Repo,
}

impl GitRepository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(GitRepository { repo })
    }

    /// Create from an existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        GitRepository { repo }
    }
}

impl TagSource for GitRepository {
    fn describe(&self) -> Result<Option<TagDescription>> {
        // default describe strategy considers annotated tags only,
        // matching `git describe --long`
        let opts = git2::DescribeOptions::new();

        let describe = match self.repo.describe(&opts) {
            Ok(describe) => describe,
            Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        let mut format_opts = git2::DescribeFormatOptions::new();
        format_opts.always_use_long_format(true);
        let line = describe.format(Some(&format_opts))?;

        parse_describe_line(&line).map(Some)
    }

    fn fetch_tags(&self, remote_name: &str) -> Result<()> {
        let mut remote = self.repo.find_remote(remote_name)?;

        let mut opts = git2::FetchOptions::new();
        opts.download_tags(git2::AutotagOption::All);

        remote.fetch(&[] as &[&str], Some(&mut opts), None)?;
        Ok(())
    }
}
