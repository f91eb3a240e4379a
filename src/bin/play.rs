//! Interactive Mentalist Binary
//!
//! Plays the page-encoded guessing trick in the terminal.
//!
//! Options: --codebook <path>, --audit

use clap::Parser;
use mentalist::catalog::codebook::Codebook;
use mentalist::table::Table;

#[derive(Parser)]
#[command(about = "play the page-encoded guessing trick")]
struct Args {
    /// JSON codebook overriding the shipped table
    #[arg(long)]
    codebook: Option<std::path::PathBuf>,
    /// print the codebook and its collision report, then exit
    #[arg(long)]
    audit: bool,
}

fn main() -> anyhow::Result<()> {
    mentalist::log();
    let args = Args::parse();
    let codebook = match args.codebook {
        Some(path) => Codebook::from_reader(std::fs::File::open(path)?)?,
        None => Codebook::default(),
    };
    if args.audit {
        print!("{}", codebook);
        match codebook.collisions().as_slice() {
            [] => println!("no collisions"),
            collisions => {
                for (a, b) in collisions {
                    println!("collision: {} / {}", a, b);
                }
            }
        }
        return Ok(());
    }
    Table::with(codebook).play();
    Ok(())
}
