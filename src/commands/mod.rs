//! Command implementations for the buildref CLI

pub mod completions;
pub mod info;
pub mod record;
pub mod resolve;
pub mod status;
pub mod version;
