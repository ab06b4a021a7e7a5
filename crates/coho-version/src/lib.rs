//! Nightly version strings.
//!
//! A nightly version is the release part of a package version followed by a
//! date marker, e.g. `6.2.0-nightly.2016.05.11`. The zero-padded date fields
//! are not valid semver pre-release identifiers, so nightly versions are kept
//! as plain strings and never parsed back.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use semver::{BuildMetadata, Prerelease, Version};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("invalid package version '{version}'")]
pub struct VersionError {
    pub version: String,
    #[source]
    pub source: semver::Error,
}

/// The `-nightly.YYYY.MM.DD` marker for a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightlySuffix {
    date: NaiveDate,
}

impl NightlySuffix {
    #[must_use]
    pub fn for_date(date: NaiveDate) -> Self {
        Self { date }
    }

    #[must_use]
    pub fn today() -> Self {
        Self::for_date(chrono::Local::now().date_naive())
    }
}

impl fmt::Display for NightlySuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "-nightly.{}.{:02}.{:02}",
            self.date.year(),
            self.date.month(),
            self.date.day()
        )
    }
}

/// Strips pre-release and build metadata, e.g. `6.2.0-dev` becomes `6.2.0`.
///
/// Only the `major.minor.patch` part has to be valid semver, so earlier
/// nightly versions with zero-padded date fields are accepted too.
///
/// # Errors
///
/// Returns [`VersionError`] if the release part is not valid semver.
pub fn remove_dev(version: &str) -> Result<Version, VersionError> {
    let release = version.trim().split(['-', '+']).next().unwrap_or_default();
    let mut parsed = Version::parse(release).map_err(|source| VersionError {
        version: version.to_string(),
        source,
    })?;
    parsed.pre = Prerelease::EMPTY;
    parsed.build = BuildMetadata::EMPTY;
    Ok(parsed)
}

/// # Errors
///
/// Returns [`VersionError`] if `current` is not valid semver.
pub fn nightly_version(current: &str, suffix: NightlySuffix) -> Result<String, VersionError> {
    Ok(format!("{}{suffix}", remove_dev(current)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn suffix_pads_single_digit_month() {
        assert_eq!(
            NightlySuffix::for_date(date(2016, 5, 11)).to_string(),
            "-nightly.2016.05.11"
        );
    }

    #[test]
    fn suffix_pads_single_digit_day() {
        assert_eq!(
            NightlySuffix::for_date(date(2016, 11, 3)).to_string(),
            "-nightly.2016.11.03"
        );
    }

    #[test]
    fn suffix_pads_both_fields() {
        for month in 1..=9 {
            for day in 1..=9 {
                let suffix = NightlySuffix::for_date(date(2020, month, day)).to_string();
                assert_eq!(suffix, format!("-nightly.2020.0{month}.0{day}"));
            }
        }
    }

    #[test]
    fn suffix_keeps_two_digit_fields() {
        assert_eq!(
            NightlySuffix::for_date(date(2019, 12, 31)).to_string(),
            "-nightly.2019.12.31"
        );
    }

    #[test]
    fn remove_dev_strips_prerelease() -> anyhow::Result<()> {
        assert_eq!(remove_dev("6.2.0-dev")?, Version::new(6, 2, 0));
        Ok(())
    }

    #[test]
    fn remove_dev_strips_previous_nightly_and_build() -> anyhow::Result<()> {
        assert_eq!(
            remove_dev("6.2.0-nightly.2016.5.11+123345")?,
            Version::new(6, 2, 0)
        );
        Ok(())
    }

    #[test]
    fn remove_dev_leaves_release_untouched() -> anyhow::Result<()> {
        assert_eq!(remove_dev("1.0.3")?, Version::new(1, 0, 3));
        Ok(())
    }

    #[test]
    fn remove_dev_rejects_garbage() {
        let err = remove_dev("not-a-version").expect_err("must fail");

        assert_eq!(err.version, "not-a-version");
    }

    #[test]
    fn nightly_version_appends_suffix() -> anyhow::Result<()> {
        let suffix = NightlySuffix::for_date(date(2016, 5, 11));

        assert_eq!(
            nightly_version("6.2.0-dev", suffix)?,
            "6.2.0-nightly.2016.05.11"
        );
        Ok(())
    }

    #[test]
    fn nightly_version_is_stable_for_same_day() -> anyhow::Result<()> {
        let suffix = NightlySuffix::for_date(date(2016, 5, 11));
        let first = nightly_version("6.2.0-dev", suffix)?;

        assert_eq!(nightly_version(&first, suffix)?, first);
        Ok(())
    }
}
