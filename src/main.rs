use std::io::{self, Write};

#[macro_use]
extern crate clap;

#[macro_use]
extern crate log;

extern crate chrono;
extern crate env_logger;

use chrono::Local;
use clap::{App, ArgMatches};

use hexconv::convert::{
    parse_decimal, to_decimal_with, to_hex, to_hex_with_width, ConversionError, Width,
};
use hexconv::repl::{self, REPL};

fn main() {
    init_logger();
    let yaml = load_yaml!("cli.yml");
    let matches = App::from_yaml(yaml).get_matches();
    let outcome = match matches.subcommand() {
        ("to-hex", Some(sub)) => decimal_to_hex(sub),
        ("to-dec", Some(sub)) => hex_to_decimal(sub),
        _ => {
            start_repl();
            return;
        }
    };
    match outcome {
        Ok(line) => {
            println!("{}", line);
            std::process::exit(0);
        }
        Err(e) => {
            debug!("Conversion failed: {:?}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .init();
}

fn decimal_to_hex(matches: &ArgMatches) -> Result<String, ConversionError> {
    let token = match matches.value_of("NUMBER") {
        Some(n) => n.to_string(),
        None => read_token("Please enter a number to convert it to Hexadecimal: "),
    };
    let n = parse_decimal(&token)?;
    let result = match matches.value_of("WIDTH") {
        Some(bits) => {
            let width = bits.parse::<Width>()?;
            debug!("Converting {} using {} two's complement", n, width);
            to_hex_with_width(n, width)?
        }
        None => {
            debug!("Converting {}", n);
            to_hex(n)?
        }
    };
    Ok(format!("The hexadecimal result is {}", result))
}

fn hex_to_decimal(matches: &ArgMatches) -> Result<String, ConversionError> {
    let digits = match matches.value_of("DIGITS") {
        Some(d) => d.to_string(),
        None => read_token("Please enter hexadecimal digits to convert them to decimal: "),
    };
    debug!("Converting {:?}", digits);
    let result = to_decimal_with(&digits, repl::log_scan_step)?;
    Ok(format!("The decimal result is {}", result))
}

/// Prompts on stdout and returns the first whitespace-separated token from stdin.
fn read_token(prompt: &str) -> String {
    print!("{}", prompt);
    if let Err(e) = io::stdout().flush() {
        println!("Unable to flush stdout: {:?}", e);
        std::process::exit(1);
    }
    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(_) => line.split_whitespace().next().unwrap_or("").to_string(),
        Err(e) => {
            eprintln!("There was an error reading from stdin: {:?}", e);
            std::process::exit(1);
        }
    }
}

fn start_repl() {
    let mut repl = REPL::new();
    if let Err(e) = repl.run() {
        eprintln!("There was an error reading from stdin: {:?}", e);
        std::process::exit(1);
    }
}
