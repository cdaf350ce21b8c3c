//! Feature modules

pub mod cost_model;
