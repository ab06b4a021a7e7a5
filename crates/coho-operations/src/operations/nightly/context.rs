use std::sync::Arc;

use coho_core::{NightlyOptions, RepoRegistry};
use coho_version::NightlySuffix;

use crate::traits::{CommandExecutor, GitProvider, ManifestStore};
use crate::types::NightlySettings;

/// Dependencies shared by every nightly step.
pub struct NightlyContext<E, G, M> {
    executor: Arc<E>,
    git: Arc<G>,
    manifest_store: Arc<M>,
    registry: RepoRegistry,
    settings: NightlySettings,
    options: NightlyOptions,
    suffix: NightlySuffix,
}

impl<E, G, M> Clone for NightlyContext<E, G, M> {
    fn clone(&self) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
            git: Arc::clone(&self.git),
            manifest_store: Arc::clone(&self.manifest_store),
            registry: self.registry.clone(),
            settings: self.settings.clone(),
            options: self.options,
            suffix: self.suffix,
        }
    }
}

impl<E, G, M> NightlyContext<E, G, M>
where
    E: CommandExecutor,
    G: GitProvider,
    M: ManifestStore,
{
    /// Uses today's date for the nightly suffix.
    pub fn new(
        executor: Arc<E>,
        git: Arc<G>,
        manifest_store: Arc<M>,
        registry: RepoRegistry,
        options: NightlyOptions,
    ) -> Self {
        Self {
            executor,
            git,
            manifest_store,
            registry,
            settings: NightlySettings::default(),
            options,
            suffix: NightlySuffix::today(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: NightlySettings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: NightlySuffix) -> Self {
        self.suffix = suffix;
        self
    }

    #[must_use]
    pub fn executor(&self) -> &E {
        &self.executor
    }

    #[must_use]
    pub fn git(&self) -> &G {
        &self.git
    }

    #[must_use]
    pub fn manifest_store(&self) -> &M {
        &self.manifest_store
    }

    #[must_use]
    pub fn registry(&self) -> &RepoRegistry {
        &self.registry
    }

    #[must_use]
    pub fn settings(&self) -> &NightlySettings {
        &self.settings
    }

    #[must_use]
    pub fn options(&self) -> NightlyOptions {
        self.options
    }

    #[must_use]
    pub fn suffix(&self) -> NightlySuffix {
        self.suffix
    }
}
