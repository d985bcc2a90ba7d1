use clap::Parser;

/// Arguments for run command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Launch the workspace image:\n    strata run\n\n\
                  Launch a built image by name:\n    strata run pollbot\n\n\
                  Show the rendered launch command:\n    strata run -v pollbot")]
pub struct RunArgs {
    /// Image name to run. If not provided, the workspace recipe's image is used
    pub name: Option<String>,
}
