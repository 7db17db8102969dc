pub mod cli;
pub mod config;
pub mod errors;
pub mod output;
pub mod routes;
pub mod state;
pub mod tailoring;
