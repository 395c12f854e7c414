//! Capability-gated application of rename settings
//!
//! Optional behaviors are described by a fixed table instead of probing the
//! session for concrete types. Each entry names the capability it needs and
//! the setters it drives.

use relabel_foundation::protocol::{MatchStrategy, RenameSettings};
use relabel_handler_api::{Capability, RenameSession};
use tracing::trace;

/// One optional behavior and how to configure it
pub struct CapabilityDescriptor {
    pub capability: Capability,
    apply: fn(&mut dyn RenameSession, &RenameSettings),
}

impl CapabilityDescriptor {
    pub fn apply(&self, session: &mut dyn RenameSession, settings: &RenameSettings) {
        (self.apply)(session, settings)
    }
}

/// Every optional behavior, in application order
pub const CAPABILITIES: [CapabilityDescriptor; 5] = [
    CapabilityDescriptor {
        capability: Capability::DelegateUpdating,
        apply: apply_delegate_updating,
    },
    CapabilityDescriptor {
        capability: Capability::QualifiedNameUpdating,
        apply: apply_qualified_names,
    },
    CapabilityDescriptor {
        capability: Capability::ReferenceUpdating,
        apply: apply_references,
    },
    CapabilityDescriptor {
        capability: Capability::SimilarDeclarationUpdating,
        apply: apply_similar_declarations,
    },
    CapabilityDescriptor {
        capability: Capability::TextualMatchUpdating,
        apply: apply_textual_matches,
    },
];

fn apply_delegate_updating(session: &mut dyn RenameSession, settings: &RenameSettings) {
    session.set_delegate_updating(settings.delegate_updating);
    session.set_deprecate_delegates(settings.deprecate_delegates);
}

fn apply_qualified_names(session: &mut dyn RenameSession, settings: &RenameSettings) {
    session.set_update_qualified_names(settings.update_qualified_names);
    if settings.update_qualified_names {
        session.set_file_patterns(settings.file_patterns.as_deref());
    }
}

fn apply_references(session: &mut dyn RenameSession, settings: &RenameSettings) {
    session.set_update_references(settings.update_references);
}

fn apply_similar_declarations(session: &mut dyn RenameSession, settings: &RenameSettings) {
    session.set_update_similar_declarations(settings.update_similar_declarations);
    if settings.update_similar_declarations {
        if let Some(strategy) = settings.match_strategy {
            session.set_match_strategy(strategy);
        }
    }
}

fn apply_textual_matches(session: &mut dyn RenameSession, settings: &RenameSettings) {
    session.set_update_textual_matches(settings.update_textual_matches);
}

/// Pushes client settings into a rename session
///
/// Settings the session cannot honor are dropped silently. Application never
/// fails.
pub struct SettingsApplier {
    default_match_strategy: MatchStrategy,
}

impl SettingsApplier {
    pub fn new(default_match_strategy: MatchStrategy) -> Self {
        Self {
            default_match_strategy,
        }
    }

    pub fn apply(&self, session: &mut dyn RenameSession, settings: &RenameSettings) {
        let settings = settings
            .clone()
            .with_default_match_strategy(self.default_match_strategy);

        if let Some(processor) = session.package_processor() {
            processor.set_rename_subpackages(settings.update_subpackages);
        }

        for descriptor in &CAPABILITIES {
            let capability = descriptor.capability;
            if session.supports(capability) && session.can_enable(capability) {
                descriptor.apply(&mut *session, &settings);
            } else {
                trace!(capability = ?capability, "Skipping unavailable rename capability");
            }
        }
    }
}
