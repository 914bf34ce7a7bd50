// pfactor -- print the prime factors of 128-bit integers
//
// Usage: pfactor [--threads N] [NUMBER]...
//        (reads from stdin if no numbers are given)

use std::io::{self, BufWriter, Read, Write};
use std::num::NonZeroUsize;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use pfactor::factor;
use pfactor::wide;

const TOOL_NAME: &str = "pfactor";

/// Print the prime factors of each NUMBER, smallest first, space-separated.
///
/// With no NUMBER arguments, whitespace-delimited numbers are read from
/// standard input. Values of 1 or below produce no output line.
#[derive(Parser)]
#[command(name = TOOL_NAME, version, about)]
struct Cli {
    /// Worker threads for the divisor scan (default: hardware concurrency)
    #[arg(short, long)]
    threads: Option<NonZeroUsize>,

    /// Numbers to factor
    numbers: Vec<String>,
}

/// Factor a single token and print its factor line.
/// Returns false on a malformed token; the batch continues.
fn process_token(token: &str, threads: usize, out: &mut impl Write) -> io::Result<bool> {
    let n = match wide::parse_wide(token) {
        Ok(n) => n,
        Err(err) => {
            eprintln!(
                "{}: \u{2018}{}\u{2019} is not a valid integer: {}",
                TOOL_NAME, token, err
            );
            return Ok(false);
        }
    };
    let factors = factor::factorize_with_threads(n, threads);
    if !factors.is_empty() {
        writeln!(out, "{}", factor::format_factors(&factors))?;
    }
    Ok(true)
}

fn run() -> anyhow::Result<bool> {
    let cli = Cli::parse();
    let threads = cli
        .threads
        .map(NonZeroUsize::get)
        .unwrap_or_else(factor::thread_count);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let mut ok = true;

    if cli.numbers.is_empty() {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("reading standard input")?;
        for token in input.split_ascii_whitespace() {
            ok &= process_token(token, threads, &mut out)?;
        }
    } else {
        for token in &cli.numbers {
            ok &= process_token(token, threads, &mut out)?;
        }
    }

    out.flush()?;
    Ok(ok)
}

fn main() -> ExitCode {
    pfactor::common::reset_sigpipe();

    match run() {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{}: {:#}", TOOL_NAME, err);
            ExitCode::FAILURE
        }
    }
}
