use crate::cli::opts::Format;
use crate::data::simple_message::SimpleMessage;
use crate::httpclient::data::{Balance, Remains};
use serde::Serialize;
use snafu::Snafu;
use std::fmt::Display;
use std::io::Write;

use super::cmd::list::TariffTable;
use super::cmd::version::Versions;

#[derive(Debug, Snafu)]
pub enum Error {
    #[snafu(display("Error creating json: {}", source))]
    Json { source: serde_json::Error },

    #[snafu(display("Error writing output: {}", source))]
    Io { source: std::io::Error },
}

/// Presents a value either human readable via `Display` or as JSON,
/// depending on the format option.
pub trait Sink
where
    Self: Serialize + Display,
{
    fn write(format: &Format, value: &Self) -> Result<(), Error> {
        write_to(format, value, &mut std::io::stdout().lock())
    }
}

fn write_to<A: Serialize + Display + ?Sized, W: Write>(
    format: &Format,
    value: &A,
    out: &mut W,
) -> Result<(), Error> {
    match format {
        Format::Json => {
            serde_json::to_writer(&mut *out, value)?;
            writeln!(out)?;
        }
        Format::Default => {
            writeln!(out, "{}", value)?;
        }
    }
    out.flush()?;
    Ok(())
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Json { source: e }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io { source: e }
    }
}

impl Sink for SimpleMessage {}
impl Sink for TariffTable {}
impl Sink for Balance {}
impl Sink for Remains {}
impl Sink for Versions {}

#[test]
fn write_json_and_default() {
    let msg = SimpleMessage::new("hello");
    let mut buf = Vec::new();
    write_to(&Format::Default, &msg, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "hello\n");

    let mut buf = Vec::new();
    write_to(&Format::Json, &msg, &mut buf).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), "{\"message\":\"hello\"}\n");
}
