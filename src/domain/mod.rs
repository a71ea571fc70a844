//! Domain model for the media catalog: the category aggregate, its
//! identifier type and the validation rules guarding every state change.

pub mod aggregate;
pub mod category;
pub mod types;
