pub mod check;
mod command_result;
pub mod helper;
pub mod init;
pub mod keys;
pub mod language;
pub mod resolve;

pub use command_result::*;
