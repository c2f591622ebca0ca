use std::fmt;

use chumsky::prelude::*;
use miette::*;

use crate::error::LightsOutError;

/// Size of a board: `rows` (M) by `cols` (N). Both sides are at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    rows: usize,
    cols: usize,
}

impl Dimensions {
    pub fn new(rows: usize, cols: usize) -> std::result::Result<Self, LightsOutError> {
        if rows == 0 {
            return Err(LightsOutError::InvalidDimension {
                axis: "rows",
                value: rows,
            });
        }
        if cols == 0 {
            return Err(LightsOutError::InvalidDimension {
                axis: "cols",
                value: cols,
            });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// One `<rows>x<cols>` entry per line, blank lines allowed.
fn parser<'a>() -> impl Parser<'a, &'a str, Vec<Dimensions>, extra::Err<Rich<'a, char>>> {
    // Custom whitespace parser that excludes newlines
    let hspace = any().filter(|c: &char| *c == ' ' || *c == '\t').repeated();

    // Overflowing literals become parse errors instead of panics
    let number = text::int(10)
        .from_str::<usize>()
        .try_map(|parsed, span| parsed.map_err(|e| Rich::custom(span, e)));

    let size = number
        .then_ignore(one_of("xX"))
        .then(number)
        .try_map(|(rows, cols), span| {
            Dimensions::new(rows, cols).map_err(|e| Rich::custom(span, e))
        })
        .padded_by(hspace);

    size.separated_by(text::newline().repeated().at_least(1))
        .allow_leading()
        .allow_trailing()
        .collect::<Vec<_>>()
        .padded()
}

/// Parses a newline separated list of board sizes such as `5x5`.
#[tracing::instrument(skip(input))]
pub fn parse_sizes(input: &str) -> Result<Vec<Dimensions>> {
    parser()
        .parse(input)
        .into_result()
        .map_err(|e| miette!("Parse failed: {:?}", e))
}
