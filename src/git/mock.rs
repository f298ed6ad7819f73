use crate::error::{DynamicVersioningError, Result};
use crate::git::{TagDescription, TagSource};

/// Mock tag source for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockTagSource {
    description: Option<TagDescription>,
    fail_fetch: bool,
}

impl MockTagSource {
    /// Create a mock with no annotated tags
    pub fn new() -> Self {
        MockTagSource::default()
    }

    /// Create a mock that describes the given tag at the given distance
    pub fn with_tag(tag: impl Into<String>, commits_since_tag: u32) -> Self {
        MockTagSource {
            description: Some(TagDescription {
                tag: tag.into(),
                commits_since_tag,
            }),
            fail_fetch: false,
        }
    }

    /// Make fetch_tags fail, to exercise the stale-local-data path
    pub fn failing_fetch(mut self) -> Self {
        self.fail_fetch = true;
        self
    }
}

impl TagSource for MockTagSource {
    fn describe(&self) -> Result<Option<TagDescription>> {
        Ok(self.description.clone())
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        if self.fail_fetch {
            return Err(DynamicVersioningError::config(format!(
                "mock fetch failure for remote '{}'",
                remote
            )));
        }
        Ok(())
    }
}
