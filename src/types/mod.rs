// src/types/mod.rs

pub mod profile;
pub mod response;

pub use profile::*;
pub use response::*;
