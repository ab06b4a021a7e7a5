mod command_executor;
mod git_provider;
mod manifest_store;

pub use command_executor::CommandExecutor;
pub use git_provider::GitProvider;
pub use manifest_store::ManifestStore;
