// src/exec/argument.rs

//! Command-line quoting.
//!
//! Arguments are joined into one command-line string before launch. An
//! argument is wrapped in double quotes when it is empty or contains
//! whitespace or a quote; embedded quotes are NOT escaped, so an argument
//! that contains both a quote and whitespace does not survive the trip.

const WHITESPACE: [char; 4] = [' ', '\t', '\n', '\x0B'];
const NEEDS_QUOTING: [char; 5] = [' ', '\t', '\n', '\x0B', '"'];

/// Quote a single argument if required.
pub fn encode_argument(arg: &str) -> String {
    if !arg.is_empty() && !arg.contains(NEEDS_QUOTING) {
        return arg.to_string();
    }
    format!("\"{arg}\"")
}

/// Encode each argument once and join them with single spaces.
pub fn join_arguments<I, S>(args: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    args.into_iter()
        .map(|a| encode_argument(a.as_ref()))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a joined command line back into arguments.
///
/// Space, tab, newline and vertical tab outside quotes separate arguments;
/// every `"` toggles quoting and is dropped. A quoted empty string yields
/// an empty argument.
pub fn split_command_line(line: &str) -> Vec<String> {
    let mut args = Vec::new();
    let mut current = String::new();
    let mut in_arg = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                in_arg = true;
            }
            c if !quoted && WHITESPACE.contains(&c) => {
                if in_arg {
                    args.push(std::mem::take(&mut current));
                    in_arg = false;
                }
            }
            c => {
                current.push(c);
                in_arg = true;
            }
        }
    }

    if in_arg {
        args.push(current);
    }

    args
}
