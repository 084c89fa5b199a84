//! Command implementations that are more than a single service call.

pub mod init;
