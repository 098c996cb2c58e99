use nom::types::CompleteStr;

#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    ToHex { value: String },
    ToDecimal { digits: String },
    SetWidth { setting: String },
}

fn is_token_char(c: char) -> bool {
    !c.is_whitespace()
}

fn is_separator_char(c: char) -> bool {
    c.is_whitespace()
}

// Keywords must be followed by whitespace, so `hex255` is not `hex 255`.
named!(separator<CompleteStr, CompleteStr>,
    take_while1!(is_separator_char)
);

// Operands are taken verbatim; the converters decide whether they are valid.
named!(operand<CompleteStr, CompleteStr>,
    take_while1!(is_token_char)
);

named!(to_hex_command<CompleteStr, Command>,
    do_parse!(
        tag!("hex") >>
        separator >>
        value: operand >>
        (
            Command::ToHex{ value: value.to_string() }
        )
    )
);

named!(to_decimal_command<CompleteStr, Command>,
    do_parse!(
        tag!("dec") >>
        separator >>
        digits: operand >>
        (
            Command::ToDecimal{ digits: digits.to_string() }
        )
    )
);

named!(width_command<CompleteStr, Command>,
    do_parse!(
        tag!(".width") >>
        separator >>
        setting: operand >>
        (
            Command::SetWidth{ setting: setting.to_string() }
        )
    )
);

named!(pub command<CompleteStr, Command>,
    alt!(
        width_command | to_hex_command | to_decimal_command
    )
);

/// Parses a whole line, rejecting anything left over after the command.
pub fn parse_command(line: &str) -> Option<Command> {
    match command(CompleteStr(line.trim())) {
        Ok((rest, cmd)) => {
            if rest.trim().is_empty() {
                Some(cmd)
            } else {
                None
            }
        }
        Err(_) => None,
    }
}
