//! slaybot library.
//!
//! Exposes the board representation, visibility and path search, the economy
//! model, position scoring, action generation, the decision loop and the
//! driver protocol for use by integration tests and the binary entry point.

pub mod agent;
pub mod board;
pub mod economy;
pub mod eval;
pub mod movegen;
pub mod protocol;
pub mod search;
