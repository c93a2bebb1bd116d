use crate::{Cell, FormatError, Grid, RunConfig};

const ALIVE_TOKEN: char = 'X';
const DEAD_TOKEN: char = 'O';

pub trait GridCodec {
    fn encode(&self, grid: &Grid) -> Vec<String>;
    fn decode<I, S>(&self, lines: I) -> Result<(RunConfig, Grid), FormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>;
}

/// The line-based text format
///
/// ```text
/// 3,3,1
/// O X O
/// O X O
/// O X O
/// ```
///
/// The header holds `rows,cols,generations`, followed by one line per row of
/// space separated single-character cells. `X` is alive and any other
/// character is dead. Encoding always writes `X` and `O`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainText;

impl PlainText {
    fn decode_header(line: &str) -> Result<RunConfig, FormatError> {
        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        let [rows, cols, generations] = fields[..] else {
            return Err(FormatError::FieldCount {
                line: line.to_owned(),
                found: fields.len(),
            });
        };

        let rows = Self::parse_field("rows", rows)?;
        let cols = Self::parse_field("cols", cols)?;
        let generations = Self::parse_field("generations", generations)?;
        if rows.checked_mul(cols).is_none() {
            return Err(FormatError::TooLarge { rows, cols });
        }
        RunConfig::new(rows, cols, generations).ok_or(FormatError::ZeroDimension { rows, cols })
    }

    fn parse_field(field: &'static str, value: &str) -> Result<usize, FormatError> {
        value.parse().map_err(|_| FormatError::InvalidInteger {
            field,
            value: value.to_owned(),
        })
    }

    fn decode_row(line: &str, row: usize, cols: usize) -> Result<Vec<Cell>, FormatError> {
        // a row can't hold more cells than the line has characters
        let mut cells = Vec::with_capacity(cols.min(line.len()));
        // anything past the declared width is ignored
        for (col, token) in line.split_whitespace().take(cols).enumerate() {
            let mut chars = token.chars();
            let (Some(c), None) = (chars.next(), chars.next()) else {
                return Err(FormatError::InvalidToken {
                    row,
                    col,
                    token: token.to_owned(),
                });
            };
            cells.push(Cell::from(c == ALIVE_TOKEN));
        }

        if cells.len() < cols {
            return Err(FormatError::ShortRow {
                row,
                expected: cols,
                found: cells.len(),
            });
        }
        Ok(cells)
    }

    fn encode_row(row: &[Cell]) -> String {
        let mut line = String::with_capacity(row.len() * 2);
        for (i, &cell) in row.iter().enumerate() {
            if i > 0 {
                line.push(' ');
            }
            line.push(match cell {
                Cell::Alive => ALIVE_TOKEN,
                Cell::Dead => DEAD_TOKEN,
            });
        }
        line
    }
}

impl GridCodec for PlainText {
    fn encode(&self, grid: &Grid) -> Vec<String> {
        grid.iter_rows().map(Self::encode_row).collect()
    }

    fn decode<I, S>(&self, lines: I) -> Result<(RunConfig, Grid), FormatError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lines = lines.into_iter();
        let header = lines.next().ok_or(FormatError::MissingHeader)?;
        let config = Self::decode_header(header.as_ref())?;

        // rows are only kept once read, the header size alone allocates nothing
        let mut rows = Vec::new();
        for row in 0..config.rows() {
            let Some(line) = lines.next() else {
                return Err(FormatError::MissingRows {
                    expected: config.rows(),
                    found: row,
                });
            };
            rows.push(Self::decode_row(line.as_ref(), row, config.cols())?);
        }

        // every row holds exactly `cols >= 1` cells, so this only fails on a zero size
        let grid = Grid::from_rows(rows).ok_or(FormatError::ZeroDimension {
            rows: config.rows(),
            cols: config.cols(),
        })?;
        Ok((config, grid))
    }
}

/// Decodes the header and grid rows with [`PlainText`]
pub fn decode<I, S>(lines: I) -> Result<(RunConfig, Grid), FormatError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    PlainText.decode(lines)
}

/// Encodes the grid rows (without a header) with [`PlainText`]
pub fn encode(grid: &Grid) -> Vec<String> {
    PlainText.encode(grid)
}

/// Encodes the grid as output file text, with a line separator after every row
pub fn render(grid: &Grid) -> String {
    let mut text = String::with_capacity(grid.rows() * (grid.cols() * 2));
    for line in encode(grid) {
        text.push_str(&line);
        text.push('\n');
    }
    text
}
