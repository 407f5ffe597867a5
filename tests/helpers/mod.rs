#![allow(unused_imports)]
#![allow(dead_code)]
pub mod recording_service;

pub use recording_service::*;
