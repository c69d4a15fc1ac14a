#![warn(clippy::pedantic)]

pub mod memory;
pub mod rest;
