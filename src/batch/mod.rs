pub mod config;
pub mod pipeline;
pub mod seed;
pub mod types;
