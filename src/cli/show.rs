use clap::Parser;

/// Arguments for show command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the workspace image:\n    strata show\n\n\
                  Show a built image by name:\n    strata show pollbot")]
pub struct ShowArgs {
    /// Image name to show. If not provided, the workspace recipe's image is used
    pub name: Option<String>,
}
