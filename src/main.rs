use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use hashbench::bench;
use hashbench::digest::{self, Algorithm};
use hashbench::fetch::fetch;
use hashbench::file_hash::hash_file;
use hashbench::plot::Reporter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Hash a message under every supported algorithm
    Sweep {
        /// Message to hash; prompted on stdin when omitted
        text: Option<String>,
    },
    /// Hash a file and print its hex digest
    HashFile {
        path: PathBuf,

        /// Digest algorithm
        #[arg(long, value_enum, default_value_t = Algorithm::Sha256)]
        algorithm: Algorithm,
    },
    /// Hash a file and compare it against an expected hex digest
    Verify {
        path: PathBuf,

        /// Expected digest as hex, either case
        #[arg(long)]
        expected: String,

        /// Digest algorithm
        #[arg(long, value_enum, default_value_t = Algorithm::Sha256)]
        algorithm: Algorithm,
    },
    /// Download a remote resource to a local file
    Fetch { url: String, dest: PathBuf },
    /// Measure hash time over a list of message sizes and plot the result
    Bench {
        /// Digest algorithm
        #[arg(long, value_enum, default_value_t = Algorithm::Sha256)]
        algorithm: Algorithm,

        /// Message sizes in bytes
        #[arg(long, value_delimiter = ',', default_values_t = bench::DEFAULT_SIZES)]
        sizes: Vec<usize>,

        /// Where to write the SVG chart
        #[arg(long, default_value = "hash_speed.svg")]
        out: PathBuf,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Sweep { text } => run_sweep(text)?,
        Command::HashFile { path, algorithm } => run_hash_file(&path, algorithm),
        Command::Verify {
            path,
            expected,
            algorithm,
        } => run_verify(&path, &expected, algorithm),
        Command::Fetch { url, dest } => {
            if !fetch(&url, &dest) {
                std::process::exit(1);
            }
            println!("Downloaded {} to {}", url, dest.display());
        }
        Command::Bench {
            algorithm,
            sizes,
            out,
        } => run_bench(algorithm, &sizes, &out)?,
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();
}

/// Hash the message under every identifier in sweep order. A failing
/// identifier prints its error and the sweep moves on.
fn run_sweep(text: Option<String>) -> Result<()> {
    let message = match text {
        Some(text) => text,
        None => prompt("Enter data to hash: ")?,
    };

    for algorithm in Algorithm::ALL {
        match digest::hash(message.as_bytes(), algorithm) {
            Ok((digest, elapsed)) => println!(
                "{}: {} (Time: {:.6} seconds)",
                algorithm,
                hex::encode(digest),
                elapsed.as_secs_f64()
            ),
            Err(e) => println!("{}: {}", algorithm, e),
        }
    }
    Ok(())
}

fn run_hash_file(path: &Path, algorithm: Algorithm) {
    match hash_file(path, algorithm) {
        Some(digest) => println!("{} hash of {}: {}", algorithm, path.display(), digest),
        None => println!("Failed to hash the file."),
    }
}

fn run_verify(path: &Path, expected: &str, algorithm: Algorithm) {
    match hash_file(path, algorithm) {
        Some(digest) if digest.eq_ignore_ascii_case(expected) => {
            println!("Hash verification successful.");
        }
        Some(_) => println!("Hash verification failed."),
        None => println!("Failed to hash the file."),
    }
}

fn run_bench(algorithm: Algorithm, sizes: &[usize], out: &Path) -> Result<()> {
    let samples = bench::run(sizes, algorithm)?;
    for sample in &samples {
        println!(
            "{} bytes: {:.6} seconds",
            sample.size,
            sample.elapsed.as_secs_f64()
        );
    }

    let reporter = Reporter::new(format!("Hashing Speed vs Message Size ({})", algorithm));
    reporter.to_svg_file(&samples, out)?;
    println!("Chart written to {}", out.display());
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
