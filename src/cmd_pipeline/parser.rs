use clap::{Parser, Subcommand, ValueEnum};

use super::cmd_fetch_tree::FetchTree;
use super::cmd_render::Render;
use super::cmd_reset::Reset;
use super::cmd_search::Search;
use super::cmd_show_hit::ShowHit;
use super::cmd_upload::Upload;
use super::cmd_use_model::UseModel;

#[derive(Clone, Debug, PartialEq, ValueEnum)]
pub enum OutputFormat {
    // Pretty-printed JSON.
    Pretty,
    // Un-pretty-printed JSON.
    Concise,
}

#[derive(Debug, Parser)]
pub struct ToolOpts {
    /// Base URL of the treemap backend to talk to.
    #[clap(
        long,
        default_value = "http://localhost:8000/",
        env = "TREEMAP_SERVER"
    )]
    pub server: String,

    #[clap(
        long,
        short,
        value_enum,
        ignore_case = true,
        default_value = "concise"
    )]
    pub output_format: OutputFormat,

    #[clap(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    FetchTree(FetchTree),
    Render(Render),
    Reset(Reset),
    Search(Search),
    ShowHit(ShowHit),
    Upload(Upload),
    UseModel(UseModel),
}
