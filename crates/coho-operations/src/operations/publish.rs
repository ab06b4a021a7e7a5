use coho_core::{PublishOptions, RepoId, RepoRegistry};
use tracing::info;

use crate::Result;
use crate::error::OperationError;
use crate::npm;
use crate::traits::CommandExecutor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishOutput {
    pub tag: String,
    pub published: Vec<RepoId>,
    pub pretend: bool,
}

/// Publishes repositories to the registry under a tag, one after another.
pub struct PublishOperation<'a, E> {
    executor: &'a E,
    registry: &'a RepoRegistry,
}

impl<'a, E> PublishOperation<'a, E>
where
    E: CommandExecutor,
{
    pub fn new(executor: &'a E, registry: &'a RepoRegistry) -> Self {
        Self { executor, registry }
    }

    /// # Errors
    ///
    /// Returns [`OperationError::PublishFailed`] for the first repository that
    /// cannot be published; later repositories are not attempted. Never fails
    /// in pretend mode.
    pub fn execute(&self, options: &PublishOptions) -> Result<PublishOutput> {
        let mut published = Vec::with_capacity(options.repos.len());

        for id in &options.repos {
            info!(repo = %id, tag = %options.tag, pretend = options.pretend, "publishing");
            let command =
                npm::publish(&self.registry.dir(*id), &options.tag).pretend(options.pretend);
            self.executor
                .run(&command)
                .map_err(|source| OperationError::PublishFailed {
                    repo: *id,
                    tag: options.tag.clone(),
                    source: Box::new(source),
                })?;
            published.push(*id);
        }

        Ok(PublishOutput {
            tag: options.tag.clone(),
            published,
            pretend: options.pretend,
        })
    }
}
