use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    strata completions bash > ~/.bash_completion.d/strata\n\n\
                  Generate zsh completions:\n    strata completions zsh > ~/.zfunc/_strata\n\n\
                  Generate fish completions:\n    strata completions fish > ~/.config/fish/completions/strata.fish\n\n\
                  Generate PowerShell completions:\n    strata completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
