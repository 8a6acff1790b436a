//! JSON configuration for the command-line tools.

pub mod bundle;
