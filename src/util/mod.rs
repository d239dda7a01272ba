//! Small helpers shared by the command and service layers.

pub mod parse;
