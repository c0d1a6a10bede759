//! Tally library - core task tracking for the command-line tracker

pub mod cli;
pub mod task;
