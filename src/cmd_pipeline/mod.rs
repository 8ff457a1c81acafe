pub mod builder;
pub mod interface;
pub mod parser;

mod cmd_fetch_tree;
mod cmd_render;
mod cmd_reset;
mod cmd_search;
mod cmd_show_hit;
mod cmd_upload;
mod cmd_use_model;

pub use builder::build_pipeline;
pub use interface::{PipelineCommand, PipelineValues};
