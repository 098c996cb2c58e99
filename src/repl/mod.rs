pub mod command_parsers;

use std::io::{self, BufRead, Write};

use crate::convert::{
    parse_decimal, to_decimal_with, to_hex, to_hex_with_width, ConversionError, ScanStep, Width,
};
use crate::repl::command_parsers::{parse_command, Command};

const HELP: &str = "Commands:
  hex <decimal>    convert a decimal integer to hexadecimal
  dec <hexdigits>  convert uppercase hexadecimal digits to decimal
  .width <bits>    render negative values in 8, 16, 32 or 64 bit two's complement
  .width off       reject negative values again
  .history         list the commands entered so far
  .clear           forget the command history
  .quit            leave the REPL";

/// Core structure for the conversion REPL
pub struct REPL {
    command_buffer: Vec<String>,
    width: Option<Width>,
}

impl REPL {
    pub fn new() -> Self {
        REPL {
            command_buffer: vec![],
            width: None,
        }
    }

    /// Reads commands from stdin until `.quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        println!("Welcome. Type .help to list the commands.");
        let stdin = io::stdin();
        let mut lines = stdin.lock();
        loop {
            let mut buffer = String::new();
            print!(">>> ");
            io::stdout().flush()?;
            if lines.read_line(&mut buffer)? == 0 {
                println!();
                break;
            }
            let buffer = buffer.trim();
            if buffer.is_empty() {
                continue;
            }
            match self.handle_line(buffer) {
                Some(output) => println!("{}", output),
                None => {
                    println!("Farewell! Have a great day!");
                    break;
                }
            }
        }
        Ok(())
    }

    /// Records `line` in the history and returns the text to print, or `None` on `.quit`.
    pub fn handle_line(&mut self, line: &str) -> Option<String> {
        self.command_buffer.push(line.to_string());
        let output = match line {
            ".quit" => return None,
            ".help" => HELP.to_string(),
            ".history" => self.command_buffer.join("\n"),
            ".clear" => {
                self.command_buffer.clear();
                "History cleared".to_string()
            }
            _ => match parse_command(line) {
                Some(cmd) => match self.eval(cmd) {
                    Ok(output) => output,
                    Err(e) => {
                        debug!("Command {:?} failed: {:?}", line, e);
                        format!("Error: {}", e)
                    }
                },
                None => "Unable to parse input".to_string(),
            },
        };
        Some(output)
    }

    /// Evaluates one parsed command and returns the line to print.
    pub fn eval(&mut self, cmd: Command) -> Result<String, ConversionError> {
        match cmd {
            Command::ToHex { value } => {
                let n = parse_decimal(&value)?;
                let result = match self.width {
                    Some(width) => to_hex_with_width(n, width)?,
                    None => to_hex(n)?,
                };
                Ok(format!("The hexadecimal result is {}", result))
            }
            Command::ToDecimal { digits } => {
                let result = to_decimal_with(&digits, log_scan_step)?;
                Ok(format!("The decimal result is {}", result))
            }
            Command::SetWidth { setting } => {
                if setting == "off" {
                    self.width = None;
                    return Ok("Negative values will be rejected".to_string());
                }
                let width = setting.parse::<Width>()?;
                self.width = Some(width);
                Ok(format!("Negative values will be rendered in {}", width))
            }
        }
    }
}

impl Default for REPL {
    fn default() -> Self {
        REPL::new()
    }
}

/// Observer for `to_decimal_with` that traces each digit of the scan.
pub fn log_scan_step(step: &ScanStep) {
    match step.place_value {
        Some(base) => trace!(
            "digit {} at position {}: base {}, total {}",
            step.digit,
            step.position,
            base,
            step.total
        ),
        None => trace!(
            "digit {} at position {}: base beyond 64 bits, total {}",
            step.digit,
            step.position,
            step.total
        ),
    }
}
