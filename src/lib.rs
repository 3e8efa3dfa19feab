pub mod cli;
pub mod config;
pub mod jokes;
pub mod logging;
pub mod session;
