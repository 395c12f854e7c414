//! Rename session double that records configuration calls

use async_trait::async_trait;
use relabel_foundation::protocol::MatchStrategy;
use relabel_foundation::CancellationToken;
use relabel_handler_api::{
    Capability, Change, EngineError, EngineResult, EngineStatus, PackageRenameProcessor,
    RenameSession,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

/// One call observed by a `RecordingSession`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCall {
    DelegateUpdating(bool),
    DeprecateDelegates(bool),
    UpdateQualifiedNames(bool),
    FilePatterns(Option<String>),
    UpdateReferences(bool),
    UpdateSimilarDeclarations(bool),
    MatchStrategy(MatchStrategy),
    UpdateTextualMatches(bool),
    RenameSubpackages(bool),
    CheckAllConditions,
    CreateChange,
}

impl SessionCall {
    fn is_configuration(&self) -> bool {
        !matches!(self, SessionCall::CheckAllConditions | SessionCall::CreateChange)
    }
}

/// Shared view of the calls a session received, readable after the session is consumed
#[derive(Debug, Clone, Default)]
pub struct SessionLog {
    calls: Arc<Mutex<Vec<SessionCall>>>,
}

impl SessionLog {
    fn record(&self, call: SessionCall) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<SessionCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Setter calls only, in the order they were made
    pub fn configuration_calls(&self) -> Vec<SessionCall> {
        self.calls()
            .into_iter()
            .filter(SessionCall::is_configuration)
            .collect()
    }

    pub fn count(&self, call: &SessionCall) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    pub fn check_count(&self) -> usize {
        self.count(&SessionCall::CheckAllConditions)
    }

    pub fn create_change_count(&self) -> usize {
        self.count(&SessionCall::CreateChange)
    }

    pub fn subpackage_calls(&self) -> Vec<bool> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                SessionCall::RenameSubpackages(value) => Some(value),
                _ => None,
            })
            .collect()
    }
}

struct RecordingPackageProcessor {
    log: SessionLog,
}

impl PackageRenameProcessor for RecordingPackageProcessor {
    fn set_rename_subpackages(&mut self, rename_subpackages: bool) {
        self.log
            .record(SessionCall::RenameSubpackages(rename_subpackages));
    }
}

/// Configurable rename session
///
/// Setters are recorded whether or not the capability is supported, so tests
/// can assert that callers respected `supports` and `can_enable`.
pub struct RecordingSession {
    supported: HashSet<Capability>,
    gated: HashSet<Capability>,
    package: Option<RecordingPackageProcessor>,
    status: EngineStatus,
    change: Option<Change>,
    check_error: Option<EngineError>,
    change_error: Option<EngineError>,
    log: SessionLog,
}

impl Default for RecordingSession {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSession {
    /// A session with no capabilities, an OK status and no change
    pub fn new() -> Self {
        Self {
            supported: HashSet::new(),
            gated: HashSet::new(),
            package: None,
            status: EngineStatus::ok(),
            change: None,
            check_error: None,
            change_error: None,
            log: SessionLog::default(),
        }
    }

    pub fn supporting(mut self, capabilities: &[Capability]) -> Self {
        self.supported.extend(capabilities.iter().copied());
        self
    }

    /// Supported, but `can_enable` reports false
    pub fn gated(mut self, capability: Capability) -> Self {
        self.supported.insert(capability);
        self.gated.insert(capability);
        self
    }

    /// Expose a package rename processor
    pub fn for_package(mut self) -> Self {
        self.package = Some(RecordingPackageProcessor {
            log: self.log.clone(),
        });
        self
    }

    pub fn with_status(mut self, status: EngineStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_change(mut self, change: Change) -> Self {
        self.change = Some(change);
        self
    }

    pub fn failing_check(mut self, error: EngineError) -> Self {
        self.check_error = Some(error);
        self
    }

    pub fn failing_change(mut self, error: EngineError) -> Self {
        self.change_error = Some(error);
        self
    }

    pub fn log(&self) -> SessionLog {
        self.log.clone()
    }
}

#[async_trait]
impl RenameSession for RecordingSession {
    fn supports(&self, capability: Capability) -> bool {
        self.supported.contains(&capability)
    }

    fn can_enable(&self, capability: Capability) -> bool {
        self.supports(capability) && !self.gated.contains(&capability)
    }

    fn set_delegate_updating(&mut self, enabled: bool) {
        self.log.record(SessionCall::DelegateUpdating(enabled));
    }

    fn set_deprecate_delegates(&mut self, deprecate: bool) {
        self.log.record(SessionCall::DeprecateDelegates(deprecate));
    }

    fn set_update_qualified_names(&mut self, update: bool) {
        self.log.record(SessionCall::UpdateQualifiedNames(update));
    }

    fn set_file_patterns(&mut self, patterns: Option<&str>) {
        self.log
            .record(SessionCall::FilePatterns(patterns.map(str::to_string)));
    }

    fn set_update_references(&mut self, update: bool) {
        self.log.record(SessionCall::UpdateReferences(update));
    }

    fn set_update_similar_declarations(&mut self, update: bool) {
        self.log.record(SessionCall::UpdateSimilarDeclarations(update));
    }

    fn set_match_strategy(&mut self, strategy: MatchStrategy) {
        self.log.record(SessionCall::MatchStrategy(strategy));
    }

    fn set_update_textual_matches(&mut self, update: bool) {
        self.log.record(SessionCall::UpdateTextualMatches(update));
    }

    fn package_processor(&mut self) -> Option<&mut dyn PackageRenameProcessor> {
        self.package
            .as_mut()
            .map(|processor| processor as &mut dyn PackageRenameProcessor)
    }

    async fn check_all_conditions(
        &mut self,
        _cancel: &CancellationToken,
    ) -> EngineResult<EngineStatus> {
        self.log.record(SessionCall::CheckAllConditions);
        match self.check_error.take() {
            Some(error) => Err(error),
            None => Ok(self.status.clone()),
        }
    }

    async fn create_change(&mut self, _cancel: &CancellationToken) -> EngineResult<Option<Change>> {
        self.log.record(SessionCall::CreateChange);
        match self.change_error.take() {
            Some(error) => Err(error),
            None => Ok(self.change.clone()),
        }
    }
}
