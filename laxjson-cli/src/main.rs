use std::error::Error;
use std::fs;
use std::io::{self, Read};

use clap::Parser;

#[derive(Parser, Debug)]
#[clap(name = "laxjson", about, version)]
struct Args {
    /// Increase output logging verbosity.
    #[clap(short, long)]
    verbose: bool,

    /// Which file(s) to parse. Reads standard input when none are given.
    files: Vec<String>,
}

fn main() {
    let args = Args::parse();
    simple_logger::init_with_level(if args.verbose {
        log::Level::Debug
    } else {
        log::Level::Info
    })
    .unwrap();

    if let Err(e) = parse_all(&args.files) {
        log::error!("Failed: {}", e);
        std::process::exit(1);
    }
}

fn parse_all(files: &[String]) -> Result<(), Box<dyn Error>> {
    if files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        println!("{}", laxjson::parse(&input)?);
        return Ok(());
    }
    for file in files {
        log::debug!("Parsing {}", file);
        let input = fs::read_to_string(file).map_err(|e| format!("{}: {}", file, e))?;
        let value = laxjson::parse(&input).map_err(|e| format!("{}: {}", file, e))?;
        println!("{}", value);
    }
    Ok(())
}
