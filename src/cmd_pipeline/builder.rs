use clap::Parser;
use tracing::{trace, trace_span};
use url::Url;

use crate::abstract_server::{make_remote_server, ErrorDetails, ErrorLayer, Result, ServerError};

use super::cmd_fetch_tree::FetchTreeCommand;
use super::cmd_render::RenderCommand;
use super::cmd_reset::ResetCommand;
use super::cmd_search::SearchCommand;
use super::cmd_show_hit::ShowHitCommand;
use super::cmd_upload::UploadCommand;
use super::cmd_use_model::UseModelCommand;
use super::interface::ServerPipeline;
use super::parser::{Command, OutputFormat, ToolOpts};
use super::PipelineCommand;

pub fn fab_command_from_opts(opts: ToolOpts) -> Result<Box<dyn PipelineCommand + Send + Sync>> {
    match opts.cmd {
        Command::FetchTree(ft) => Ok(Box::new(FetchTreeCommand { args: ft })),

        Command::Render(r) => Ok(Box::new(RenderCommand { args: r })),

        Command::Reset(r) => Ok(Box::new(ResetCommand { args: r })),

        Command::Search(s) => Ok(Box::new(SearchCommand { args: s })),

        Command::ShowHit(sh) => Ok(Box::new(ShowHitCommand { args: sh })),

        Command::Upload(u) => Ok(Box::new(UploadCommand { args: u })),

        Command::UseModel(um) => Ok(Box::new(UseModelCommand { args: um })),
    }
}

/// Build a command pipeline from a shell-y string where we use pipe boundaries
/// to delineate the separate pipeline steps.
///
/// The shell-words module is used to parse `arg_str` into shell words, which we
/// then break into separate sub-commands whenever we see a `|`.  We then pass
/// these sub-commands to the clap parsing `try_parse_from` method, taking care
/// to stuff our binary name into the first arg.
pub fn build_pipeline(bin_name: &str, arg_str: &str) -> Result<(ServerPipeline, OutputFormat)> {
    let span = trace_span!("build_pipeline", arg_str);
    let _span_guard = span.enter();

    let all_args = match shell_words::split(arg_str) {
        Ok(parsed) => parsed,
        Err(err) => {
            return Err(ServerError::StickyProblem(ErrorDetails {
                layer: ErrorLayer::BadInput,
                message: err.to_string(),
            }));
        }
    };

    let mut server = None;
    let mut output_format = None;
    let mut first_time = true;

    let mut commands: Vec<Box<dyn PipelineCommand + Send + Sync>> = vec![];

    for arg_slices in all_args.split(|v| v == "|") {
        let mut fake_args = vec![bin_name.to_string()];
        fake_args.extend(arg_slices.iter().cloned());

        let opts = match ToolOpts::try_parse_from(fake_args) {
            Ok(opts) => opts,
            Err(err) => {
                return Err(ServerError::StickyProblem(ErrorDetails {
                    layer: ErrorLayer::BadInput,
                    message: err.to_string(),
                }));
            }
        };

        if first_time {
            let url = Url::parse(&opts.server)?;
            server = Some(make_remote_server(url)?);
            output_format = Some(opts.output_format.clone());
            first_time = false;
        }

        trace!(cmd = ?opts.cmd);
        commands.push(fab_command_from_opts(opts)?);
    }

    let server = server.ok_or_else(|| {
        ServerError::StickyProblem(ErrorDetails {
            layer: ErrorLayer::BadInput,
            message: "empty pipeline".to_string(),
        })
    })?;

    Ok((
        ServerPipeline {
            server,
            commands,
        },
        output_format.unwrap_or(OutputFormat::Concise),
    ))
}
