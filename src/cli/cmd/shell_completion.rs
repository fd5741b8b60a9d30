use clap::{Command, ValueEnum};
use clap_complete::{generate, Generator, Shell};

const BINARY: &str = "yota-cli";

/// Generates completions for some shells.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub shell: GeneratorChoice,
}

#[derive(ValueEnum, Clone, Debug, PartialEq)]
pub enum GeneratorChoice {
    Bash,
    Elvish,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
    Zsh,
}

impl GeneratorChoice {
    fn shell(&self) -> Shell {
        match self {
            GeneratorChoice::Bash => Shell::Bash,
            GeneratorChoice::Elvish => Shell::Elvish,
            GeneratorChoice::Fish => Shell::Fish,
            GeneratorChoice::PowerShell => Shell::PowerShell,
            GeneratorChoice::Zsh => Shell::Zsh,
        }
    }
}

impl Input {
    pub async fn print_completions(&self, app: &mut Command) {
        generate_completions(self.shell.shell(), app, &mut std::io::stdout());
    }
}

fn generate_completions<G: Generator>(gen: G, app: &mut Command, out: &mut dyn std::io::Write) {
    generate(gen, app, BINARY, out);
}

#[test]
fn bash_completions_mention_options() {
    use crate::cli::opts::MainOpts;
    use clap::CommandFactory;

    let mut buf = Vec::new();
    generate_completions(Shell::Bash, &mut MainOpts::command(), &mut buf);
    let out = String::from_utf8(buf).unwrap();
    assert!(out.contains("--list"));
    assert!(out.contains("--change"));
}
