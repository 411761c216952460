//! Bridge between the egui thread and the async calculation transport.

pub mod commands;
pub mod runtime;
