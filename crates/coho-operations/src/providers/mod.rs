mod command;
mod git;
mod manifest;

pub use command::SystemCommandExecutor;
pub use git::Git2Provider;
pub use manifest::FileSystemManifestStore;
