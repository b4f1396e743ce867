//! project-guard entry point.

use clap::Parser;
use project_guard::bootstrap;
use project_guard::cli::{Cli, Commands};
use project_guard::hook::{self, HookKind};

use std::io;
use std::process::ExitCode;

fn run_hook(kind: HookKind) -> ExitCode {
    hook::run(kind, io::stdin().lock(), &mut io::stdout().lock(), &mut io::stderr().lock());
    // Hooks never fail the host tool; the verdict is in the JSON
    ExitCode::SUCCESS
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Commands::Safety => run_hook(HookKind::Safety),
        Commands::Boundary => run_hook(HookKind::Boundary),
        Commands::Prompt => run_hook(HookKind::Prompt),
        Commands::Bootstrap(args) => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            let mut out = io::stdout().lock();
            match bootstrap::run(&args, &mut input, &mut out) {
                Ok(_) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Bootstrap failed: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
