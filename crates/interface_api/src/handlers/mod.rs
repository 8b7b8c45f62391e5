//! Request handlers

pub mod root;
pub mod generate;
pub mod health;
