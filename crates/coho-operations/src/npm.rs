//! npm command lines used by the release operations.

use std::path::Path;

use crate::types::Command;

const NPM: &str = "npm";

/// `npm view <package> dist-tags.<tag>`; prints the tagged version, or
/// nothing when the tag does not exist. Queries the registry only, so it
/// needs no checkout.
#[must_use]
pub fn view_dist_tag(package: &str, tag: &str) -> Command {
    Command::in_current_dir(NPM)
        .args(["view", package, &format!("dist-tags.{tag}")])
        .silent(true)
}

#[must_use]
pub fn publish(dir: &Path, tag: &str) -> Command {
    Command::new(NPM, dir).args(["publish", "--tag", tag])
}

/// `spec` is `<name>@<version>`.
#[must_use]
pub fn unpublish(dir: &Path, spec: &str) -> Command {
    Command::new(NPM, dir).args(["unpublish", spec])
}

#[must_use]
pub fn install(dir: &Path) -> Command {
    Command::new(NPM, dir).arg("install").silent(true)
}

/// Registers the package in `dir` as globally linkable.
#[must_use]
pub fn link(dir: &Path) -> Command {
    Command::new(NPM, dir).arg("link")
}

/// Links the globally registered `package` into `dir`.
#[must_use]
pub fn link_package(dir: &Path, package: &str) -> Command {
    Command::new(NPM, dir).args(["link", package])
}

#[must_use]
pub fn test(dir: &Path) -> Command {
    Command::new(NPM, dir).arg("test")
}
