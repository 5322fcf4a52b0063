//! Process-wide gateway with a function-style API.
//!
//! Call [`init`] once, then [`one`] and [`two`] from anywhere. Before `init`,
//! every call fails with [`GatewayError::Uninitialized`](crate::GatewayError).
//! Prefer an owned [`Gateway`] where the handle can be passed around.

use crate::config::ControllerConfig;
use crate::controller::Controller;
use crate::error::Result;
use crate::gateway::Gateway;
use crate::types::Sequence;
use parking_lot::RwLock;

static GATEWAY: RwLock<Gateway> = RwLock::new(Gateway::new());

/// Install a fresh controller in the process-wide gateway.
pub fn init() {
    GATEWAY.write().init();
}

pub fn init_with_config(config: ControllerConfig) {
    GATEWAY.write().init_with_config(config);
}

pub fn is_ready() -> bool {
    GATEWAY.read().is_ready()
}

/// Call `f` on the process-wide controller. See [`Gateway::dispatch`].
pub fn dispatch<A, R, F>(f: F, arg: A) -> Result<R>
where
    F: FnOnce(&Controller, A) -> Result<R>,
{
    GATEWAY.read().dispatch(f, arg)
}

pub fn one(val: i64) -> Result<Sequence> {
    dispatch(Controller::one, val)
}

pub fn two(val: &str) -> Result<String> {
    dispatch(Controller::two, val)
}
