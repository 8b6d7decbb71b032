//! Longest-trip planner using exhaustive backtracking search.
//!
//! This module answers: "What is the longest one-way trip through this
//! network?" A trip is either a simple path or a simple cycle back to its
//! first station, whichever covers more distance.
//!
//! The search is exponential in the number of stations; it visits every
//! simple path from every starting station.

mod config;
mod search;

pub use config::SearchConfig;
pub use search::{BestTrip, LongestTripSearch, SearchResult, find_longest_trip};
