//! Domain layer for the alps-profile module.
//!
//! Contains the descriptor tree builder, the document aggregator, the
//! projection selector, and their error types.

pub mod converter;
pub mod error;
pub mod projector;
pub mod service;

pub use converter::AlpsDescriptorConverter;
pub use error::{DomainError, ProjectionError};
pub use projector::Projector;
pub use service::AlpsProfileService;

#[cfg(test)]
mod converter_test;
