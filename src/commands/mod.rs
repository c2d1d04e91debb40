//! Command handlers for the `dinopark` binary

mod build;
mod describe;
mod show;

pub use build::cmd_build;
pub use describe::cmd_describe;
pub use show::cmd_show;
