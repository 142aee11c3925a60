//! REST surface of the alps-profile module.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod negotiation;
pub mod problem;
pub mod routes;
