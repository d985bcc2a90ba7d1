use clap::Parser;

/// Arguments for images command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List built images:\n    strata images")]
pub struct ImagesArgs {}
