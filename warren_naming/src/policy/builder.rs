use super::strategy::Collaborators;
use crate::resolve::metadata::ConfiguredOverrides;
use crate::{NamingConfig, NamingPolicy, TypeIdentityResolver, TypeMetadataLookup, TypeRegistry};
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

/// Builds a [`NamingPolicy`] incrementally and validates it on the final
/// stage.
///
/// A [type identity resolver](NamingPolicyBuilder::with_identity_resolver) is
/// required. The [metadata lookup](NamingPolicyBuilder::with_metadata_lookup)
/// is optional: when none is given, the policy consults the overrides of the
/// [configuration](NamingPolicyBuilder::with_config).
pub struct NamingPolicyBuilder {
    identity_resolver: Option<Arc<dyn TypeIdentityResolver>>,
    metadata_lookup: Option<Arc<dyn TypeMetadataLookup>>,
    config: NamingConfig,
}

/// Represents the various error states that may arise when assembling a
/// [`NamingPolicy`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NamingPolicyError {
    /// Indicates that no type identity resolver was given.
    #[error("invalid naming policy: a type identity resolver is required, but none was given")]
    MissingIdentityResolver,
}

impl NamingPolicyBuilder {
    /// Creates a new [`NamingPolicy`] builder.
    pub fn new() -> Self {
        Self {
            identity_resolver: None,
            metadata_lookup: None,
            config: NamingConfig::default(),
        }
    }

    /// Recreates this builder with the given type identity resolver.
    pub fn with_identity_resolver(self, resolver: impl TypeIdentityResolver + 'static) -> Self {
        self.with_shared_identity_resolver(Arc::new(resolver))
    }

    /// Recreates this builder with the given shared type identity resolver.
    pub fn with_shared_identity_resolver(self, resolver: Arc<dyn TypeIdentityResolver>) -> Self {
        Self {
            identity_resolver: Some(resolver),
            ..self
        }
    }

    /// Recreates this builder with the given type metadata lookup.
    pub fn with_metadata_lookup(self, lookup: impl TypeMetadataLookup + 'static) -> Self {
        self.with_shared_metadata_lookup(Arc::new(lookup))
    }

    /// Recreates this builder with the given shared type metadata lookup.
    pub fn with_shared_metadata_lookup(self, lookup: Arc<dyn TypeMetadataLookup>) -> Self {
        Self {
            metadata_lookup: Some(lookup),
            ..self
        }
    }

    /// Recreates this builder with the given [`TypeRegistry`] serving as both
    /// the type identity resolver and the type metadata lookup.
    pub fn with_registry(self, registry: TypeRegistry) -> Self {
        let registry = Arc::new(registry);

        let resolver: Arc<dyn TypeIdentityResolver> = registry.clone();
        let lookup: Arc<dyn TypeMetadataLookup> = registry;

        self.with_shared_identity_resolver(resolver)
            .with_shared_metadata_lookup(lookup)
    }

    /// Recreates this builder with the given configuration.
    pub fn with_config(self, config: NamingConfig) -> Self {
        Self { config, ..self }
    }

    /// Finalizes the builder, validates its state, and, assuming valid state,
    /// returns the [`NamingPolicy`].
    pub fn build(self) -> Result<NamingPolicy, NamingPolicyError> {
        let identity = self
            .identity_resolver
            .ok_or(NamingPolicyError::MissingIdentityResolver)?;

        let metadata = match self.metadata_lookup {
            Some(lookup) => {
                if !self.config.overrides().is_empty() {
                    warn!(
                        overrides = self.config.overrides().len(),
                        "Ignoring the configured naming overrides in favor of the given metadata lookup",
                    );
                }
                lookup
            }
            None => Arc::new(ConfiguredOverrides::new(
                Arc::clone(&identity),
                self.config.overrides().clone(),
            )),
        };

        let collaborators = Collaborators { identity, metadata };

        Ok(NamingPolicy::assemble(&collaborators, &self.config))
    }
}

impl Default for NamingPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}
