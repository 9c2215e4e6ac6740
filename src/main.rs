use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "qfeed",
    about = "Feed one corpus file to the JSON parser under test",
    version
)]
struct Cli {
    /// File whose bytes are fed, truncated to the input bound, to the target
    file: PathBuf,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let stdout = io::stdout().lock();
    let mut out = BufWriter::new(stdout);

    let status = match qfeed::harness::run(&cli.file, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            writeln!(out, "{err}").ok();
            ExitCode::FAILURE
        }
    };
    out.flush().ok();
    status
}
