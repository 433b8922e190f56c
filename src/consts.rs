//! Global constants

/// The only key prefix this tool reads or writes under.
pub const PREFIX: &str = "x-wing/";

pub const DEFAULT_REGION: &str = "eu-central-1";
