use std::env::args_os;

use serde_json::to_string_pretty;
use treemap_tools::cmd_pipeline::{builder::build_pipeline, parser::OutputFormat, PipelineValues};
use treemap_tools::logging::init_logging;
use treemap_tools::session::ExplorerSession;

#[tokio::main]
async fn main() {
    init_logging();

    let os_args: Vec<String> = args_os()
        .map(|os| os.into_string().unwrap_or("".to_string()))
        .collect();

    if os_args.len() < 2 {
        eprintln!(
            "Usage: {} 'CMD [ARGS...] [| CMD [ARGS...] ...]'",
            os_args.get(0).map(|s| s.as_str()).unwrap_or("treemap-tool")
        );
        eprintln!("Example: 'upload data.csv | search \"low beam\" | show-hit | render'");
        std::process::exit(1);
    }

    let (pipeline, output_format) = match build_pipeline(&os_args[0], &os_args[1]) {
        Ok(pipeline) => pipeline,
        Err(err) => {
            eprintln!("You did not specify a good pipeline!\n {}", err.message());
            std::process::exit(2);
        }
    };

    let mut session = ExplorerSession::new();
    let final_values = match pipeline.run(&mut session).await {
        Ok(values) => values,
        Err(err) => {
            println!("Pipeline Error!");
            println!("{}", err.message());
            std::process::exit(1);
        }
    };

    match final_values {
        PipelineValues::Void => {
            println!("Void result.");
        }
        other => {
            let rendered = match output_format {
                OutputFormat::Pretty => to_string_pretty(&other),
                OutputFormat::Concise => serde_json::to_string(&other),
            };
            match rendered {
                Ok(json) => println!("{}", json),
                Err(err) => {
                    println!("Pipeline Error!");
                    println!("{}", err);
                    std::process::exit(1);
                }
            }
        }
    }
}
