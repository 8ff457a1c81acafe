#[macro_use]
extern crate lazy_static;

pub mod abstract_server;
pub mod cmd_pipeline;
pub mod flatten;
pub mod logging;
pub mod navigate;
pub mod session;
pub mod tree;
