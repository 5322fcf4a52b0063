//! Initialize-before-use gateway around a [`Controller`].
//!
//! A [`Gateway`] starts out uninitialized. Every request routed through it
//! fails with [`GatewayError::Uninitialized`] until [`Gateway::init`] installs
//! a controller. Calling `init` again replaces the controller, which resets the
//! sequence to zero.
//!
//! `init` takes `&mut self`, so a caller-owned gateway cannot be initialized
//! while requests are in flight. Requests only need `&self` and may run from
//! many threads at once; the controller does its own locking.

use crate::config::ControllerConfig;
use crate::controller::Controller;
use crate::error::{GatewayError, Result};
use crate::request::Request;
use crate::types::Sequence;

/// Lifecycle of a gateway.
#[derive(Default)]
pub enum GatewayState {
    #[default]
    Uninitialized,
    Ready(Controller),
}

/// Holds at most one controller and checks for it before every request.
#[derive(Default)]
pub struct Gateway {
    state: GatewayState,
    /// Config for controllers created by `init`; `None` means default.
    config: Option<ControllerConfig>,
}

impl Gateway {
    /// Create an uninitialized gateway.
    pub const fn new() -> Self {
        Self {
            state: GatewayState::Uninitialized,
            config: None,
        }
    }

    /// Create an uninitialized gateway whose controllers use `config`.
    pub fn with_config(config: ControllerConfig) -> Self {
        Self {
            state: GatewayState::Uninitialized,
            config: Some(config),
        }
    }

    /// Install a fresh controller, discarding the current one if any.
    pub fn init(&mut self) {
        let controller = Controller::with_config(self.config.clone().unwrap_or_default());
        let previous = std::mem::replace(&mut self.state, GatewayState::Ready(controller));
        match previous {
            GatewayState::Ready(old) => {
                tracing::info!(discarded_seq = old.sequence().0, "gateway reinitialized");
            }
            GatewayState::Uninitialized => tracing::info!("gateway initialized"),
        }
    }

    /// Replace the stored config and install a controller built from it.
    pub fn init_with_config(&mut self, config: ControllerConfig) {
        self.config = Some(config);
        self.init();
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, GatewayState::Ready(_))
    }

    pub fn state(&self) -> &GatewayState {
        &self.state
    }

    /// The installed controller, if any.
    pub fn controller(&self) -> Option<&Controller> {
        match &self.state {
            GatewayState::Ready(controller) => Some(controller),
            GatewayState::Uninitialized => None,
        }
    }

    /// Call `f` on the installed controller with `arg`.
    ///
    /// Fails with [`GatewayError::Uninitialized`] without calling `f` when no
    /// controller is installed. Otherwise returns whatever `f` returns.
    pub fn dispatch<A, R, F>(&self, f: F, arg: A) -> Result<R>
    where
        F: FnOnce(&Controller, A) -> Result<R>,
    {
        let Some(controller) = self.controller() else {
            tracing::debug!("dispatch on uninitialized gateway");
            return Err(GatewayError::Uninitialized);
        };
        f(controller, arg)
    }

    /// Route a typed request through [`Gateway::dispatch`].
    pub fn send<Q: Request>(&self, request: Q) -> Result<Q::Output> {
        self.dispatch(|controller, request: Q| request.call(controller), request)
    }

    pub fn one(&self, val: i64) -> Result<Sequence> {
        self.dispatch(Controller::one, val)
    }

    pub fn two(&self, val: &str) -> Result<String> {
        self.dispatch(Controller::two, val)
    }
}
