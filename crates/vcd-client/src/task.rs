//! vCloud Director Task tracking.
//!
//! Every VCD mutation is asynchronous: the server answers 202 Accepted with a
//! Task document and performs the work in the background. [`Task`] pairs that
//! document with the client it was fetched through so callers can poll it to
//! completion.

use serde::{Deserialize, Serialize};

use crate::error::{Error, ErrorKind, Result};
use crate::response::VcdErrorResponse;
use crate::vcd_client::VcdClient;

/// Task document as returned by the vCloud Director API.
///
/// Only the fields this client acts on are modeled; the server sends more
/// (Owner, User, Details) and those are ignored on deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename = "Task")]
pub struct TaskBody {
    /// Absolute URL of this task, polled on refresh.
    #[serde(rename = "@href")]
    pub href: Option<String>,
    /// URN identifier, e.g. `urn:vcloud:task:<uuid>`.
    #[serde(rename = "@id")]
    pub id: Option<String>,
    #[serde(rename = "@name")]
    pub name: Option<String>,
    /// Current execution phase.
    #[serde(rename = "@status")]
    pub status: TaskStatus,
    /// Human-readable description of the running operation.
    #[serde(rename = "@operation")]
    pub operation: Option<String>,
    /// Symbolic operation name, e.g. `metadataUpdate`.
    #[serde(rename = "@operationName")]
    pub operation_name: Option<String>,
    /// Error document, present when the task status is `error`.
    #[serde(rename = "Error")]
    pub error: Option<VcdErrorResponse>,
    /// Completion percentage, present while the task is running.
    #[serde(rename = "Progress")]
    pub progress: Option<u8>,
}

/// Execution phase of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    Queued,
    PreRunning,
    Running,
    Success,
    Error,
    Canceled,
    Aborted,
}

impl TaskStatus {
    /// Returns true if the task has reached a state it will never leave.
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TaskStatus::Success | TaskStatus::Error | TaskStatus::Canceled | TaskStatus::Aborted
        )
    }

    /// Returns true if the task finished successfully.
    pub fn is_success(&self) -> bool {
        matches!(self, TaskStatus::Success)
    }
}

/// A server-side task paired with the client used to poll it.
#[derive(Debug, Clone)]
pub struct Task {
    body: TaskBody,
    client: VcdClient,
}

impl Task {
    pub(crate) fn new(body: TaskBody, client: VcdClient) -> Self {
        Self { body, client }
    }

    /// Current execution phase.
    pub fn status(&self) -> TaskStatus {
        self.body.status
    }

    /// Absolute URL of the task, if the server provided one.
    pub fn href(&self) -> Option<&str> {
        self.body.href.as_deref()
    }

    /// Human-readable description of the operation.
    pub fn operation(&self) -> Option<&str> {
        self.body.operation.as_deref()
    }

    /// Symbolic operation name.
    pub fn operation_name(&self) -> Option<&str> {
        self.body.operation_name.as_deref()
    }

    /// Completion percentage, if the server reported one.
    pub fn progress(&self) -> Option<u8> {
        self.body.progress
    }

    /// The underlying task document.
    pub fn body(&self) -> &TaskBody {
        &self.body
    }

    /// Re-fetch the task document from the server.
    pub async fn refresh(&mut self) -> Result<()> {
        let href = self.body.href.clone().ok_or_else(|| {
            Error::new(ErrorKind::InvalidResponse("task has no href".to_string()))
        })?;
        self.body = self.client.get_xml(&href).await?;
        Ok(())
    }

    /// Poll the task until it reaches a terminal state.
    ///
    /// Uses the poll interval and timeout from the client configuration.
    /// Returns the final task document on success; a task that finishes in
    /// `error`, `canceled` or `aborted` state becomes a `TaskFailed` error
    /// carrying the server's message.
    pub async fn wait_for_completion(self) -> Result<TaskBody> {
        let config = self.client.config();
        let timeout = config.task_timeout;
        let poll_interval = config.task_poll_interval;
        self.wait_for_completion_with(timeout, poll_interval).await
    }

    /// Poll the task until it reaches a terminal state, with explicit bounds.
    pub async fn wait_for_completion_with(
        mut self,
        timeout: std::time::Duration,
        poll_interval: std::time::Duration,
    ) -> Result<TaskBody> {
        let start = tokio::time::Instant::now();

        loop {
            // The creation response may already be terminal, so the state
            // check comes before any sleep.
            if self.body.status.is_terminal() {
                if self.body.status.is_success() {
                    return Ok(self.body);
                }

                let message = self
                    .body
                    .error
                    .as_ref()
                    .map(|e| e.message.clone())
                    .unwrap_or_else(|| "unknown error".to_string());
                return Err(Error::new(ErrorKind::TaskFailed { message }));
            }

            if start.elapsed() > timeout {
                return Err(Error::new(ErrorKind::TaskTimeout { timeout }));
            }

            tokio::time::sleep(poll_interval).await;
            self.refresh().await?;
        }
    }
}
