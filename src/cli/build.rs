use clap::Parser;

/// Arguments for build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build the workspace image:\n    strata build\n\n\
                  Build from another workspace:\n    strata build -w ./pollbot\n\n\
                  Reinstall dependencies, ignoring the layer cache:\n    strata build --no-cache\n\n\
                  Stream installer output:\n    strata build -v")]
pub struct BuildArgs {
    /// Reinstall dependencies even when a matching layer is cached
    #[arg(long)]
    pub no_cache: bool,
}
