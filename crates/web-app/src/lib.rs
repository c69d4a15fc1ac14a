#![warn(clippy::pedantic)]

pub mod log;
pub mod scroll;
mod service;

pub use service::Service;
