pub mod config;
pub mod joke;
pub mod tips;
