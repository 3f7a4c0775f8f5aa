// src/simulation/mod.rs

pub mod framework;
pub mod input;
pub mod load_parameters;
pub mod report;
