//! Shared, platform-independent contracts of the WorkAlert site.

pub mod domain;
pub mod shared;
