use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    fm2pm completions bash > ~/.bash_completion.d/fm2pm\n\n\
                  Generate zsh completions:\n    fm2pm completions zsh > ~/.zfunc/_fm2pm\n\n\
                  Generate fish completions:\n    fm2pm completions fish > ~/.config/fish/completions/fm2pm.fish")]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
