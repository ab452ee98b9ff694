//! Stream formats for tabulated functions.
//!
//! Binary: big-endian `i32` point count, then `count` pairs of big-endian
//! `f64` (x, y).
//!
//! Text: the point count on the first line, then one `"<x> <y>"` line per
//! point. The reader only relies on whitespace between tokens and accepts
//! exponent notation.
//!
//! Readers rebuild the function from the decoded points through the given
//! factory, so non-uniform X spacing survives a round trip.

use std::io::{
    BufRead,
    ErrorKind,
    Read,
    Write
};

use tracing::debug;

use crate::function::functionerror::{
    FunctionError,
    Result
};
use crate::tabulated::functionpoint::FunctionPoint;
use crate::tabulated::tabulatedfunction::TabulatedFunction;
use crate::tabulated::tabulatedfunctionfactory::TabulatedFunctionFactory;

// ─────────────────────────────────────────────
// Binary
// ─────────────────────────────────────────────

pub fn output_tabulated_function<T, W>(function: &T, mut out: W) -> Result<()>
where
    T: TabulatedFunction + ?Sized,
    W: Write,
{
    let count = i32::try_from(function.points_count())
        .map_err(|_| FunctionError::invalid_data("too many points for the binary format"))?;
    out.write_all(&count.to_be_bytes())?;
    for point in function.iter() {
        out.write_all(&point.x().to_be_bytes())?;
        out.write_all(&point.y().to_be_bytes())?;
    }
    out.flush()?;
    debug!(points_count = count, "tabulated function written in binary form");
    Ok(())
}

pub fn input_tabulated_function<R: Read>(
    factory: &dyn TabulatedFunctionFactory,
    mut input: R,
) -> Result<Box<dyn TabulatedFunction>> {
    let count = i32::from_be_bytes(read_array(&mut input)?);
    let count = checked_count(i64::from(count))?;

    let mut points = Vec::with_capacity(count.min(1 << 16));
    for _ in 0..count {
        let x = f64::from_be_bytes(read_array(&mut input)?);
        let y = f64::from_be_bytes(read_array(&mut input)?);
        points.push(FunctionPoint::new(x, y));
    }
    debug!(points_count = count, "tabulated function read in binary form");
    build(factory, &points)
}

fn read_array<R: Read, const N: usize>(input: &mut R) -> Result<[u8; N]> {
    let mut buffer = [0u8; N];
    input.read_exact(&mut buffer)?;
    Ok(buffer)
}

// ─────────────────────────────────────────────
// Text
// ─────────────────────────────────────────────

pub fn write_tabulated_function<T, W>(function: &T, mut out: W) -> Result<()>
where
    T: TabulatedFunction + ?Sized,
    W: Write,
{
    writeln!(out, "{}", function.points_count())?;
    for point in function.iter() {
        writeln!(out, "{} {}", point.x(), point.y())?;
    }
    out.flush()?;
    debug!(points_count = function.points_count(), "tabulated function written in text form");
    Ok(())
}

pub fn read_tabulated_function<R: BufRead>(
    factory: &dyn TabulatedFunctionFactory,
    input: R,
) -> Result<Box<dyn TabulatedFunction>> {
    let mut tokens = Tokens::new(input);

    let count_token = tokens.next_token()?;
    let count = count_token
        .parse::<i64>()
        .map_err(|_| FunctionError::invalid_data(format!("invalid point count '{count_token}'")))?;
    let count = checked_count(count)?;

    let mut points = Vec::with_capacity(count.min(1 << 16));
    for _ in 0..count {
        let x = tokens.next_f64()?;
        let y = tokens.next_f64()?;
        points.push(FunctionPoint::new(x, y));
    }
    debug!(points_count = count, "tabulated function read in text form");
    build(factory, &points)
}

/// Whitespace tokenizer over a buffered reader, one line at a time.
struct Tokens<R> {
    input: R,
    line: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(input: R) -> Tokens<R> {
        Tokens { input, line: Vec::new() }
    }

    fn next_token(&mut self) -> Result<String> {
        while self.line.is_empty() {
            let mut buffer = String::new();
            if self.input.read_line(&mut buffer)? == 0 {
                return Err(std::io::Error::new(ErrorKind::UnexpectedEof, "text ended before all points were read").into());
            }
            self.line = buffer.split_whitespace().rev().map(str::to_owned).collect();
        }
        // tokens are stored reversed so that pop() yields them in order
        Ok(self.line.pop().unwrap_or_default())
    }

    fn next_f64(&mut self) -> Result<f64> {
        let token = self.next_token()?;
        token
            .parse::<f64>()
            .map_err(|_| FunctionError::invalid_data(format!("invalid number '{token}'")))
    }
}

// ─────────────────────────────────────────────
// Shared
// ─────────────────────────────────────────────

fn checked_count(count: i64) -> Result<usize> {
    if count < 2 {
        return Err(FunctionError::invalid_data(format!(
            "a tabulated function needs at least 2 points, stream declares {count}"
        )));
    }
    usize::try_from(count).map_err(|_| FunctionError::invalid_data(format!("point count {count} is too large")))
}

fn build(factory: &dyn TabulatedFunctionFactory, points: &[FunctionPoint]) -> Result<Box<dyn TabulatedFunction>> {
    factory.create_from_points(points).map_err(|error| match error {
        FunctionError::IOError(error) => FunctionError::IOError(error),
        other => FunctionError::invalid_data(format!("stream holds an invalid tabulated function: {other}")),
    })
}
