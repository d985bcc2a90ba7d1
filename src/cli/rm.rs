use clap::Parser;

/// Arguments for rm command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Remove a built image:\n    strata rm pollbot\n\n\
                  Remove without confirmation:\n    strata rm pollbot -y")]
pub struct RmArgs {
    /// Image name to remove
    pub name: String,

    /// Skip confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
