//! Monte Carlo simulation of threshold stopping rules for the classical
//! secretary problem: reject the first k candidates, then accept the first
//! later candidate that beats the best seen so far.
//!
//! The numerical core lives under [`core`]; plotting is isolated in
//! [`report`] and only consumes aggregated results.

pub mod cli;
pub mod config;
pub mod core;
pub mod report;
