// Shared utils

pub mod constants;
pub mod query;
pub mod storage;

pub use constants::*;
