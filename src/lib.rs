pub mod error;
pub mod physics;
pub mod config;
pub mod model;
pub mod io;
pub mod report;

#[cfg(test)]
mod tests;
