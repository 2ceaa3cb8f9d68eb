//! Turn order, termination and undo history

pub mod controller;

pub use controller::{Controller, Outcome};
