//! Domain logic - pure version arithmetic independent of git and configuration

pub mod version;

pub use version::{BumpKind, Version};
