use std::io::{self, Write};

use clap::value_parser;
use clap_complete::{generate, Shell};
use kr_core::prelude::*;

#[derive(clap::Args)]
pub struct Args {
    #[arg(
        long_help = "name of the shell to generate completions for",
        value_parser = value_parser!(clap_complete::Shell),
    )]
    pub shell: Shell,
}

fn write_completions(shell: Shell, cmd: &mut clap::Command, out: &mut impl Write) {
    generate(shell, cmd, "krctl", out);
}

pub fn cmd(args: &Args, mut cmd: clap::Command) -> EmptyResult {
    write_completions(args.shell, &mut cmd, &mut io::stdout());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use rstest::*;

    use super::*;
    use crate::KrCommandRoot;

    #[rstest]
    #[case::bash(Shell::Bash)]
    #[case::zsh(Shell::Zsh)]
    fn test_write_completions(#[case] shell: Shell) {
        let mut out = Vec::new();
        write_completions(shell, &mut KrCommandRoot::command(), &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("krctl"));
    }
}
