//! Domain services
//!
//! Stateless logic over the aggregates: schema codec, preview validation
//! and input-shape dispatch.

pub mod codec;
pub mod input_shape;
pub mod validation;

pub use codec::{DecodedSchema, SchemaCodec, DEFAULT_FORM_NAME};
pub use input_shape::InputShape;
pub use validation::{check_field, validate, ValidationErrors};
