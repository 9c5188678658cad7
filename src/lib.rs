pub mod config;
pub mod envelope;
pub mod extract;
pub mod helpers;
pub mod model;
pub mod openaiapi;
pub mod runner;
pub mod tasks;

#[cfg(test)]
mod test;
