//! ALPS Profile Module Implementation
//!
//! The public API is defined in `alps-profile-sdk` and re-exported here.

pub use alps_profile_sdk::{Alps, AlpsProfileClient, AlpsProfileError, Descriptor, DescriptorType};

pub mod module;
pub use module::{AlpsProfileModule, Collaborators};

pub mod local_client;

#[doc(hidden)]
pub mod api;
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
