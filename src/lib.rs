pub mod backend;
pub mod cli;
pub mod config;
pub mod error;
pub mod guard;
pub mod handlers;
pub mod middleware;
pub mod session;

#[cfg(test)]
pub mod testing;
