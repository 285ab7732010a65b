use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use sim86::executor::Simulator;

#[derive(Parser, Debug)]
#[command(name = "sim86")]
#[command(about = "8086 subset disassembler and register-model simulator", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Disassemble a raw machine-code binary to assembly text
    Decode { file: PathBuf },
    /// Execute a textual instruction listing against the register model
    Simulate { file: PathBuf },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Commands::Decode { file } => {
            let bytes =
                fs::read(&file).with_context(|| format!("failed to read {}", file.display()))?;
            for instruction in sim86::disassemble(&bytes)? {
                println!("{}", instruction);
            }
        }
        Commands::Simulate { file } => {
            let listing = fs::read_to_string(&file)
                .with_context(|| format!("failed to read {}", file.display()))?;
            let mut simulator = Simulator::new();
            println!("Registers before simulation:");
            print!("{}", simulator.registers());
            simulator.run(&listing)?;
            println!("\nRegisters after simulation:");
            print!("{}", simulator.registers());
            println!("  flags: {}", simulator.flags());
        }
    }
    Ok(())
}
