//! Typed requests that can be sent through a gateway.

use crate::controller::Controller;
use crate::error::Result;
use crate::types::Sequence;

/// A request a [`Controller`] knows how to serve.
pub trait Request {
    type Output;

    fn call(self, controller: &Controller) -> Result<Self::Output>;
}

/// Request that returns the sequence assigned to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct One(pub i64);

impl Request for One {
    type Output = Sequence;

    fn call(self, controller: &Controller) -> Result<Sequence> {
        controller.one(self.0)
    }
}

/// Request that returns the identifier recorded for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Two(pub String);

impl Request for Two {
    type Output = String;

    fn call(self, controller: &Controller) -> Result<String> {
        controller.two(&self.0)
    }
}
