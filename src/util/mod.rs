//! Small, synchronous helpers shared by the decoder and the entity builders.

pub mod cardinality;
pub mod truthy;
