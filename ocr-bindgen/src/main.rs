use clap::{Parser, Subcommand};
use eyre::{bail, WrapErr};
use ocr_bindgen::{GenerateOptions, Manifest, DEFAULT_MANIFEST};
use ocr_contracts::Generation;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Imports, checks and regenerates the OCR contract bindings
#[derive(Debug, Parser)]
#[command(name = "ocr-bindgen", version)]
struct Cli {
    /// Path of the manifest listing all contracts
    #[arg(
        long,
        short,
        global = true,
        env = "OCR_BINDGEN_MANIFEST",
        default_value = DEFAULT_MANIFEST
    )]
    manifest: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Copies ABIs and bytecode out of `solc --combined-json abi,bin` output
    Import {
        /// The solc output file
        #[arg(long, value_name = "FILE")]
        combined_json: PathBuf,
        /// Generation the contracts belong to (ocr1, ocr2, ocr3)
        #[arg(long, short)]
        generation: Generation,
        /// Contracts to import, defaults to all listed in the manifest
        #[arg(long = "contract", short = 'c', value_name = "NAME")]
        contracts: Vec<String>,
    },
    /// Verifies that every listed contract has consistent artifacts
    Check,
    /// Writes standalone binding modules, one directory per generation
    Generate {
        /// Output directory
        #[arg(long, short)]
        out: PathBuf,
        /// Fail if the existing output is out of date instead of writing it
        #[arg(long)]
        check: bool,
        /// One file per generation instead of one per contract
        #[arg(long)]
        single_file: bool,
    },
}

fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let manifest = Manifest::load(&cli.manifest)?;

    match cli.command {
        Command::Import { combined_json, generation, contracts } => {
            let written = ocr_bindgen::import(&manifest, &combined_json, generation, &contracts)
                .wrap_err("import failed")?;
            println!("imported {} {generation} contracts", written.len());
        }
        Command::Check => {
            let problems = ocr_bindgen::check(&manifest);
            if !problems.is_empty() {
                for problem in &problems {
                    eprintln!("{problem}");
                }
                bail!("found {} problems in {}", problems.len(), manifest.root.display());
            }
            println!("checked {} contracts", manifest.contracts().count());
        }
        Command::Generate { out, check, single_file } => {
            let options = GenerateOptions { single_file, check };
            let generations = ocr_bindgen::generate(&manifest, &out, options)?;
            let action = if check { "checked" } else { "generated" };
            println!("{action} {} generations", generations.len());
        }
    }
    Ok(())
}
