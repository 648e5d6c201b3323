use decassert_runner::{execute_check, Cli, Commands};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Check(command) => execute_check(&command),
    };

    match result {
        Ok(output) => {
            println!("{}", output.rendered);
            if !output.success {
                std::process::exit(1);
            }
        }
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
