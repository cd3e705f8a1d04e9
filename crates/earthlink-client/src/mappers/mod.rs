//! Wire model <-> domain entity mappers

mod message;
mod reaction;

pub use message::clusters_from_models;
