use clap::{Parser, Subcommand};

/// Arguments for cache command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show layer-cache statistics:\n    strata cache\n\n\
                  List cached layers:\n    strata cache list\n\n\
                  Clear all cached layers:\n    strata cache clear\n\n\
                  Remove a specific layer:\n    strata cache clear --only <layer-id>")]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: Option<CacheSubcommand>,
}

/// Cache subcommands
#[derive(Subcommand, Debug)]
pub enum CacheSubcommand {
    /// List cached layers
    List,

    /// Clear cached layers
    Clear(ClearCacheArgs),
}

/// Arguments for cache clear command
#[derive(Parser, Debug)]
pub struct ClearCacheArgs {
    /// Remove only the layer with this id (full or abbreviated)
    #[arg(long)]
    pub only: Option<String>,
}
