//! Tool definitions module.
//!
//! The tools are data: a static catalog of endpoint bindings plus the
//! parameter types their input schemas are generated from.

pub mod catalog;
pub mod params;

pub use catalog::{ArgumentShape, CATALOG, EndpointBinding, QueryPairs, find};
pub use params::{BusArrivalParams, NoParams, TrainLine, TrainLineParams};
