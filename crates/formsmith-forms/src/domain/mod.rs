//! Domain module
//!
//! Builder and preview state, free of any storage or presentation concern.

pub mod aggregates;
pub mod events;
pub mod services;
pub mod value_objects;

pub use aggregates::*;
pub use events::*;
pub use value_objects::*;
