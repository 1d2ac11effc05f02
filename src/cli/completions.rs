use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    buildref completions bash > ~/.bash_completion.d/buildref\n\n\
                  Generate zsh completions:\n    buildref completions zsh > ~/.zfunc/_buildref\n\n\
                  Generate fish completions:\n    buildref completions fish > ~/.config/fish/completions/buildref.fish\n\n\
                  Generate PowerShell completions:\n    buildref completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
