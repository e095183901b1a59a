use anyhow::Context;
use clap::Parser;
use los_calculator::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match run(args) {
        Ok(()) => process::exit(0),
        Err(error) => {
            let rendered = error
                .downcast_ref::<los_calculator::Error>()
                .is_some_and(commands::is_rendered);
            if !rendered {
                eprintln!("Error: {:#}", error);
            }
            process::exit(1);
        }
    }
}

/// Run the selected command on a tokio runtime, stopping on Ctrl-C
fn run(args: Args) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to create async runtime")?;

    runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => result.map_err(anyhow::Error::from),
            signal = tokio::signal::ctrl_c() => {
                signal.context("Failed to install CTRL+C signal handler")?;
                eprintln!("\nReceived CTRL+C, shutting down...");
                anyhow::bail!("Interrupted by user")
            }
        }
    })
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("LOS Calculator - Hawaii Tourism Length-of-Stay Statistics");
    println!("=========================================================");
    println!();
    println!("Summarize the Hawaii Tourism Authority \"Length of Stay\" CSV export:");
    println!("average, minimum and maximum stay per visitor category, with a per-year trend.");
    println!();
    println!("USAGE:");
    println!("    los-calculator <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    categories  List visitor categories and locations in the export");
    println!("    query       Calculate statistics for a category (and optional location)");
    println!("    validate    Report how many rows and cells the export kept or dropped");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -d, --data <PATH>    CSV export to load (- for stdin, default data.csv)");
    println!("    -c, --config <FILE>  JSON configuration file");
    println!("    -v, --verbose        Increase logging verbosity");
    println!("    -q, --quiet          Only log errors");
    println!("    -h, --help           Show help information");
    println!("    -V, --version        Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # List the selectable categories and locations:");
    println!("    los-calculator categories --data los.csv");
    println!();
    println!("    # Average stay of air visitors across all islands:");
    println!("    los-calculator query --category \"All visitors by air\"");
    println!();
    println!("    # Narrow to one island and emit JSON:");
    println!(
        "    los-calculator query --category \"All visitors by air\" --location \"LOS on Maui\" \\"
    );
    println!("                         --format json");
    println!();
    println!("    # Check an export read from stdin:");
    println!("    cat los.csv | los-calculator validate --data -");
    println!();
    println!("For detailed help on any command, use:");
    println!("    los-calculator <COMMAND> --help");
}
