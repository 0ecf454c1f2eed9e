//! Composition services combining parsed models into render output.

pub mod composer;

pub use composer::compose_layer;
