#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod plan;
mod planner;
mod query;
mod service;
mod status;

pub use error::*;
pub use exercise::*;
pub use plan::*;
pub use planner::*;
pub use query::*;
pub use service::*;
pub use status::*;
