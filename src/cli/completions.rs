use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    rejoin completions --shell bash > ~/.bash_completion.d/rejoin\n\n\
                  Generate zsh completions:\n    rejoin completions --shell zsh > ~/.zfunc/_rejoin\n\n\
                  Generate fish completions:\n    rejoin completions --shell fish > ~/.config/fish/completions/rejoin.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long, short = 's')]
    pub shell: String,
}
