//! Engine double handing out a prepared session

use relabel_handler_api::{
    ElementHandle, EngineError, EngineResult, RefactoringEngine, RenameSession,
};
use std::sync::Mutex;

/// Engine that returns one prepared session and remembers what it was asked for
pub struct StubEngine {
    session: Mutex<Option<Box<dyn RenameSession>>>,
    failure: Mutex<Option<EngineError>>,
    requests: Mutex<Vec<(ElementHandle, String)>>,
}

impl StubEngine {
    pub fn with_session(session: impl RenameSession + 'static) -> Self {
        Self {
            session: Mutex::new(Some(Box::new(session))),
            failure: Mutex::new(None),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Engine whose session factory fails with `error`
    pub fn failing(error: EngineError) -> Self {
        Self {
            session: Mutex::new(None),
            failure: Mutex::new(Some(error)),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Elements and new names passed to `create_rename_session`
    pub fn requests(&self) -> Vec<(ElementHandle, String)> {
        self.requests.lock().unwrap().clone()
    }
}

impl RefactoringEngine for StubEngine {
    fn create_rename_session(
        &self,
        element: &ElementHandle,
        new_name: &str,
    ) -> EngineResult<Box<dyn RenameSession>> {
        self.requests
            .lock()
            .unwrap()
            .push((element.clone(), new_name.to_string()));

        if let Some(error) = self.failure.lock().unwrap().take() {
            return Err(error);
        }

        self.session
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| EngineError::core("StubEngine session already consumed"))
    }
}
