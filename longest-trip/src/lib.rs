//! Longest one-way trip planner.
//!
//! Reads weighted connections between numbered stations and finds the
//! longest trip through the network without visiting a station twice,
//! either as an open path or as a cycle back to the starting station.

pub mod app;
pub mod domain;
pub mod error;
pub mod input;
pub mod network;
pub mod output;
pub mod planner;

pub use error::Error;
