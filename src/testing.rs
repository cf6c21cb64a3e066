//! In-memory `NodeStore` used by the test suites.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::db::NodeStore;
use crate::errors::AppError;
use crate::models::Node;

/// Records every insert it receives. A failing store errors on every call.
#[derive(Default)]
pub struct RecordingStore {
    inserted: Mutex<Vec<(String, String)>>,
    calls: Mutex<usize>,
    fail: bool,
}

impl RecordingStore {
    pub const FAILURE_DETAIL: &'static str = "duplicate key value violates unique constraint";

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn inserted(&self) -> Vec<(String, String)> {
        self.inserted.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl NodeStore for RecordingStore {
    async fn insert_node(&self, node: &Node) -> Result<(), AppError> {
        *self.calls.lock().unwrap() += 1;
        if self.fail {
            return Err(AppError::Database(Self::FAILURE_DETAIL.to_string()));
        }
        self.inserted
            .lock()
            .unwrap()
            .push((node.node_name.clone(), node.node_description.clone()));
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        if self.fail {
            return Err(AppError::Database(Self::FAILURE_DETAIL.to_string()));
        }
        Ok(())
    }
}
