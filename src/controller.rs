//! The request controller.
//!
//! A [`Controller`] pretends to send requests. Every request bumps a sequence
//! number and records an identifier built from the request path and the new
//! sequence. Both live behind one `RwLock`, so they always change together.

use crate::config::ControllerConfig;
use crate::error::{GatewayError, Result};
use crate::types::{identifier, ReadBack, RequestSnapshot, Sequence};
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Argument value `one` refuses.
const REJECTED_VALUE: i64 = 3;

#[derive(Default)]
struct RequestState {
    seq: Sequence,
    last_path: String,
}

/// Lock-guarded request state with two request operations.
#[derive(Default)]
pub struct Controller {
    state: RwLock<RequestState>,
    config: ControllerConfig,
}

impl Controller {
    /// Create a controller with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a controller with a custom configuration.
    pub fn with_config(config: ControllerConfig) -> Self {
        Self {
            state: RwLock::new(RequestState::default()),
            config,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Record a request and return a shared guard for reading the result.
    ///
    /// Increment and identifier formatting happen under the exclusive lock.
    fn request(&self, path: &str) -> Result<RwLockReadGuard<'_, RequestState>> {
        let mut state = self.state.write();
        state.seq = state.seq.next();
        // A real implementation would send the request here.
        state.last_path = identifier(path, state.seq);
        tracing::trace!(seq = state.seq.0, path = %state.last_path, "request recorded");

        match self.config.read_back {
            ReadBack::Downgrade => Ok(RwLockWriteGuard::downgrade(state)),
            ReadBack::Reacquire => {
                drop(state);
                Ok(self.state.read())
            }
        }
    }

    /// Send a request and return the sequence of the request.
    pub fn one(&self, val: i64) -> Result<Sequence> {
        if val == REJECTED_VALUE {
            tracing::debug!(val, "request rejected");
            return Err(GatewayError::Rejected);
        }
        let state = self.request(&format!("one?val={val}"))?;
        Ok(state.seq)
    }

    /// Send a request and return the identifier of the request.
    pub fn two(&self, val: &str) -> Result<String> {
        let state = self.request(&format!("two?val={val}"))?;
        Ok(state.last_path.clone())
    }

    /// Current sequence.
    pub fn sequence(&self) -> Sequence {
        self.state.read().seq
    }

    /// Most recent identifier, empty before the first request.
    pub fn last_identifier(&self) -> String {
        self.state.read().last_path.clone()
    }

    /// Sequence and identifier read together.
    pub fn snapshot(&self) -> RequestSnapshot {
        let state = self.state.read();
        RequestSnapshot {
            sequence: state.seq,
            last_identifier: state.last_path.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_basic() {
        let c = Controller::new();
        assert_eq!(c.one(5).unwrap(), Sequence(1));
        assert_eq!(c.one(3).unwrap_err().to_string(), "sorry, not that one");
        assert_eq!(c.two("potato").unwrap(), "two?val=potato&seq=2");
    }

    #[test]
    fn test_fresh_controller_is_empty() {
        let c = Controller::new();
        assert_eq!(c.sequence(), Sequence(0));
        assert!(c.last_identifier().is_empty());
        assert_eq!(c.snapshot(), RequestSnapshot::default());
    }

    #[test]
    fn test_rejection_leaves_state_alone() {
        let c = Controller::new();
        c.two("a").unwrap();
        let before = c.snapshot();

        assert_eq!(c.one(3), Err(GatewayError::Rejected));
        assert_eq!(c.snapshot(), before);
    }

    #[test]
    fn test_one_records_identifier() {
        let c = Controller::new();
        c.one(-7).unwrap();
        assert_eq!(c.last_identifier(), "one?val=-7&seq=1");
    }

    #[test]
    fn test_reacquire_serial_matches_downgrade() {
        let c = Controller::with_config(ControllerConfig::reacquire());
        assert_eq!(c.config().read_back, ReadBack::Reacquire);
        assert_eq!(c.one(5).unwrap(), Sequence(1));
        assert!(c.one(3).is_err());
        assert_eq!(c.two("potato").unwrap(), "two?val=potato&seq=2");
    }

    #[test]
    fn test_lock_released_after_panic() {
        let c = Arc::new(Controller::new());
        c.one(1).unwrap();

        let c2 = Arc::clone(&c);
        let result = thread::spawn(move || {
            let _state = c2.state.write();
            panic!("boom");
        })
        .join();
        assert!(result.is_err());

        // parking_lot does not poison; the guard was released on unwind.
        assert_eq!(c.one(1).unwrap(), Sequence(2));
    }

    #[test]
    fn test_controller_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Controller>();
    }
}
