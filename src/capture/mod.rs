//! Client capture layer: ephemeral per-component state machines that hold
//! form state until an explicit save action produces a payload for the
//! gateway. Pure and synchronous apart from the breathing ticker session.

pub mod breathing;
pub mod journal;
pub mod mood;
pub mod toggle;
