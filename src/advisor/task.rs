//! Background advisor request with a deadline

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use tracing::debug;

use super::{AdvisorOutcome, AdvisorRequest, MoveAdvisor};
use crate::error::AdvisorError;

/// An advisor call running on a worker thread.
///
/// Dropping the task abandons the request; a late reply is discarded.
pub struct AdvisorTask {
    receiver: Receiver<AdvisorOutcome>,
    start_time: Instant,
    timeout: Duration,
}

impl AdvisorTask {
    pub fn spawn(advisor: Arc<dyn MoveAdvisor>, request: AdvisorRequest, timeout: Duration) -> Self {
        let (tx, rx) = channel();

        debug!(advisor = advisor.name(), ?timeout, "spawning advisor request");
        thread::spawn(move || {
            let result = advisor.request_move(&request);
            let _ = tx.send(result);
        });

        Self {
            receiver: rx,
            start_time: Instant::now(),
            timeout,
        }
    }

    /// Non-blocking check. `Some` once the advisor answered, failed, or ran out of time.
    pub fn poll(&self) -> Option<AdvisorOutcome> {
        match self.receiver.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) if self.elapsed() >= self.timeout => {
                Some(Err(AdvisorError::Timeout(self.timeout)))
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(AdvisorError::Disconnected)),
        }
    }

    /// Block until the advisor answers or the deadline passes
    pub fn wait(self) -> AdvisorOutcome {
        let remaining = self.timeout.saturating_sub(self.elapsed());
        match self.receiver.recv_timeout(remaining) {
            Ok(outcome) => outcome,
            Err(RecvTimeoutError::Timeout) => Err(AdvisorError::Timeout(self.timeout)),
            Err(RecvTimeoutError::Disconnected) => Err(AdvisorError::Disconnected),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}
