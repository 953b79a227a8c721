//! Interactive collection of registration fields
//!
//! Plain-text prompts, one field per line, no validation — the driven
//! application validates. Reads from any `BufRead` so the sequence is
//! testable without a terminal.

use std::io::{self, BufRead, Write};

use bank_flow::RegistrationRecord;

const PROMPTS: [&str; 10] = [
    "Enter your first name: ",
    "Enter your last name: ",
    "Enter your address: ",
    "Enter your city: ",
    "Enter your state: ",
    "Enter your zip code: ",
    "Enter your phone number: ",
    "Enter your SSN: ",
    "Enter your username: ",
    "Enter your password: ",
];

/// Collect the full registration record before the workflow starts.
pub fn collect_registration<R, W>(mut input: R, mut output: W) -> io::Result<RegistrationRecord>
where
    R: BufRead,
    W: Write,
{
    let mut answers = Vec::with_capacity(PROMPTS.len());
    for prompt in PROMPTS {
        write!(output, "{prompt}")?;
        output.flush()?;
        let mut line = String::new();
        input.read_line(&mut line)?;
        answers.push(line.trim_end_matches(&['\r', '\n'][..]).to_string());
    }

    let mut answers = answers.into_iter();
    let mut next = || answers.next().unwrap_or_default();
    Ok(RegistrationRecord {
        first_name: next(),
        last_name: next(),
        street: next(),
        city: next(),
        state: next(),
        zip_code: next(),
        phone_number: next(),
        ssn: next(),
        username: next(),
        password: next(),
    })
}
