use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use registry::{Registration, SUCCESS_SENTINEL, StoredRegistration};

use crate::{api::RegistryApi, error::ClientError};

/// In-process stand-in for the backend.
#[derive(Default)]
pub struct MockApi {
    pub answer: Option<String>,
    pub registrations: Mutex<Vec<StoredRegistration>>,
    pub submitted: Mutex<Vec<Registration>>,
    pub fetches: AtomicUsize,
    pub offline: bool,
}

impl MockApi {
    pub fn with_registrations(registrations: Vec<StoredRegistration>) -> Self {
        Self {
            registrations: Mutex::new(registrations),
            ..Default::default()
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

impl RegistryApi for MockApi {
    async fn submit(&self, registration: &Registration) -> Result<(), ClientError> {
        if self.offline {
            return Err(ClientError::Status {
                status: 503,
                message: "offline".to_string(),
            });
        }

        self.submitted.lock().unwrap().push(registration.clone());

        match self.answer.as_deref().unwrap_or(SUCCESS_SENTINEL) {
            SUCCESS_SENTINEL => Ok(()),
            other => Err(ClientError::UnexpectedResponse(other.to_string())),
        }
    }

    async fn fetch_summary(&self) -> Result<Vec<StoredRegistration>, ClientError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        if self.offline {
            return Err(ClientError::Status {
                status: 503,
                message: "offline".to_string(),
            });
        }

        Ok(self.registrations.lock().unwrap().clone())
    }
}
