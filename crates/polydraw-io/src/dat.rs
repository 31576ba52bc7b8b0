//! Reader for the `.dat` polyline format.
//!
//! ```text
//! <comment lines>
//! *
//! [xmin xmax ymax ymin]
//! <number of polylines>
//! <number of points>
//! x y
//! ...
//! ```
//!
//! Everything before the first line starting with `*` is a comment. After
//! the marker, blank lines are ignored everywhere, including inside a
//! polyline's point block. A four-token line outside a point block updates
//! the extent; note the y bounds are written top first.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use polydraw_core::{Extent, ExtentError, ParseMode, Point, Polyline};

// ── Errors ────────────────────────────────────────────────────────────

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("no '*' marker line found")]
    MissingMarker,

    #[error("line {line}: '{token}' is not a finite number")]
    InvalidNumber { line: usize, token: String },

    #[error("line {line}: '{text}' is not a valid count")]
    InvalidCount { line: usize, text: String },

    #[error("line {line}: expected 2 coordinates, found {found}")]
    InvalidPoint { line: usize, found: usize },

    #[error("line {line}: invalid extent: {source}")]
    DegenerateExtent {
        line: usize,
        #[source]
        source: ExtentError,
    },

    #[error("line {line}: polyline has no points")]
    EmptyPolyline { line: usize },

    #[error("polyline starting at line {line} expects {expected} points, input ended after {found}")]
    UnexpectedEof {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("no polyline count line after the '*' marker")]
    MissingCount,

    #[error("file declares {declared} polylines but contains {found}")]
    CountMismatch { declared: usize, found: usize },
}

// ── Output ────────────────────────────────────────────────────────────

/// One step of a parsed drawing, applied in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    SetExtent(Extent),
    Polyline(Polyline),
}

/// A parsed file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatDocument {
    /// Polyline count from the header line, if it was readable.
    pub declared_polylines: Option<usize>,
    pub commands: Vec<Command>,
}

impl DatDocument {
    pub fn polylines(&self) -> impl Iterator<Item = &Polyline> {
        self.commands.iter().filter_map(|c| match c {
            Command::Polyline(p) => Some(p),
            Command::SetExtent(_) => None,
        })
    }

    pub fn polyline_count(&self) -> usize {
        self.polylines().count()
    }
}

/// Parse `.dat` text into drawing commands.
pub fn parse(text: &str, mode: ParseMode) -> Result<Vec<Command>, ParseError> {
    parse_document(text, mode).map(|doc| doc.commands)
}

/// Parse `.dat` text, keeping the declared polyline count.
pub fn parse_document(text: &str, mode: ParseMode) -> Result<DatDocument, ParseError> {
    let lines: Vec<&str> = text
        .split('\n')
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();

    let marker = lines
        .iter()
        .position(|l| l.starts_with('*'))
        .ok_or(ParseError::MissingMarker)?;
    log::debug!("Header ends at line {}", marker + 1);

    let mut reader = DatReader {
        lines,
        pos: marker + 1,
        mode,
    };
    let doc = reader.read_body()?;

    log::info!(
        "Parsed {} polylines, {} commands",
        doc.polyline_count(),
        doc.commands.len()
    );
    Ok(doc)
}

// ── Reader ────────────────────────────────────────────────────────────

struct DatReader<'a> {
    lines: Vec<&'a str>,
    /// Index of the next unread line.
    pos: usize,
    mode: ParseMode,
}

impl<'a> DatReader<'a> {
    /// Next non-blank line as (1-based line number, raw text, tokens).
    fn next_line(&mut self) -> Option<(usize, &'a str, Vec<&'a str>)> {
        while self.pos < self.lines.len() {
            let raw = self.lines[self.pos];
            self.pos += 1;
            let tokens: Vec<&str> = raw.split_whitespace().collect();
            if !tokens.is_empty() {
                return Some((self.pos, raw, tokens));
            }
        }
        None
    }

    fn read_body(&mut self) -> Result<DatDocument, ParseError> {
        let mut commands = Vec::new();
        let mut declared = None;
        let mut seen_count = false;
        let mut found = 0;

        while let Some((line, raw, tokens)) = self.next_line() {
            if tokens.len() == 4 {
                let extent = self.read_extent(line, &tokens)?;
                log::debug!("Line {}: extent {:?}", line, extent);
                commands.push(Command::SetExtent(extent));
            } else if !seen_count {
                match self.read_declared_count(line, &tokens)? {
                    // -1 leaves the count unread; the next line is tried again.
                    Some(-1) => log::debug!("Line {}: count of -1, reading next line", line),
                    count => {
                        declared = count.and_then(|c| usize::try_from(c).ok());
                        seen_count = true;
                    }
                }
            } else if let Some(polyline) = self.read_polyline(line, raw, &tokens)? {
                commands.push(Command::Polyline(polyline));
                found += 1;
            }
        }

        if !seen_count && self.mode == ParseMode::Strict {
            return Err(ParseError::MissingCount);
        }

        if let Some(declared) = declared {
            if declared != found {
                match self.mode {
                    ParseMode::Strict => {
                        return Err(ParseError::CountMismatch { declared, found });
                    }
                    ParseMode::Lenient => {
                        log::warn!("File declares {} polylines but contains {}", declared, found);
                    }
                }
            }
        }

        Ok(DatDocument {
            declared_polylines: declared,
            commands,
        })
    }

    /// Tokens are `xmin xmax ymax ymin`.
    fn read_extent(&self, line: usize, tokens: &[&str]) -> Result<Extent, ParseError> {
        let mut v = [0.0; 4];
        for (slot, token) in v.iter_mut().zip(tokens) {
            *slot = self.number(line, token)?;
        }
        let extent = Extent::new(v[0], v[1], v[3], v[2]);

        if let Err(source) = extent.validate() {
            match self.mode {
                ParseMode::Strict => return Err(ParseError::DegenerateExtent { line, source }),
                ParseMode::Lenient => log::warn!("Line {}: {}", line, source),
            }
        }
        Ok(extent)
    }

    fn read_declared_count(
        &self,
        line: usize,
        tokens: &[&str],
    ) -> Result<Option<i64>, ParseError> {
        match self.mode {
            ParseMode::Strict => {
                if tokens.len() != 1 {
                    return Err(ParseError::InvalidCount {
                        line,
                        text: tokens.join(" "),
                    });
                }
                let count = strict_count(line, tokens[0])?;
                let count = i64::try_from(count).map_err(|_| ParseError::InvalidCount {
                    line,
                    text: tokens[0].to_string(),
                })?;
                Ok(Some(count))
            }
            ParseMode::Lenient => Ok(lenient_int(tokens[0])),
        }
    }

    fn read_polyline(
        &mut self,
        line: usize,
        raw: &str,
        tokens: &[&str],
    ) -> Result<Option<Polyline>, ParseError> {
        let count = match self.mode {
            ParseMode::Strict => {
                if tokens.len() != 1 {
                    return Err(ParseError::InvalidCount {
                        line,
                        text: raw.trim().to_string(),
                    });
                }
                strict_count(line, tokens[0])?
            }
            ParseMode::Lenient => lenient_point_count(raw),
        };

        let mut points = Vec::with_capacity(count.min(4096));
        while points.len() < count {
            let Some((point_line, _, point_tokens)) = self.next_line() else {
                return Err(ParseError::UnexpectedEof {
                    line,
                    expected: count,
                    found: points.len(),
                });
            };
            points.push(self.read_point(point_line, &point_tokens)?);
        }

        match Polyline::new(points) {
            Some(polyline) => Ok(Some(polyline)),
            None => match self.mode {
                ParseMode::Strict => Err(ParseError::EmptyPolyline { line }),
                ParseMode::Lenient => {
                    log::warn!("Line {}: skipping polyline with no points", line);
                    Ok(None)
                }
            },
        }
    }

    fn read_point(&self, line: usize, tokens: &[&str]) -> Result<Point, ParseError> {
        match self.mode {
            ParseMode::Strict => {
                if tokens.len() != 2 {
                    return Err(ParseError::InvalidPoint {
                        line,
                        found: tokens.len(),
                    });
                }
                Ok(Point::new(
                    self.number(line, tokens[0])?,
                    self.number(line, tokens[1])?,
                ))
            }
            ParseMode::Lenient => {
                let coord = |i: usize| tokens.get(i).map_or(f64::NAN, |t| lenient_float(t));
                Ok(Point::new(coord(0), coord(1)))
            }
        }
    }

    fn number(&self, line: usize, token: &str) -> Result<f64, ParseError> {
        match self.mode {
            ParseMode::Strict => match token.parse::<f64>() {
                Ok(v) if v.is_finite() => Ok(v),
                _ => Err(ParseError::InvalidNumber {
                    line,
                    token: token.to_string(),
                }),
            },
            ParseMode::Lenient => Ok(lenient_float(token)),
        }
    }
}

fn strict_count(line: usize, token: &str) -> Result<usize, ParseError> {
    token.parse::<usize>().map_err(|_| ParseError::InvalidCount {
        line,
        text: token.to_string(),
    })
}

// ── Lenient number handling ───────────────────────────────────────────

/// Length of the longest prefix of `s` that reads as a decimal number.
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let mut i = 0;
    if i < b.len() && (b[i] == b'+' || b[i] == b'-') {
        i += 1;
    }
    let int_start = i;
    while i < b.len() && b[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;
    if i < b.len() && b[i] == b'.' {
        let frac_start = i + 1;
        let mut j = frac_start;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if digits > 0 || j > frac_start {
            digits += j - frac_start;
            i = j;
        }
    }
    if digits == 0 {
        return 0;
    }
    if i < b.len() && (b[i] == b'e' || b[i] == b'E') {
        let mut j = i + 1;
        if j < b.len() && (b[j] == b'+' || b[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < b.len() && b[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    i
}

/// Read the leading number of a token, ignoring trailing garbage. Tokens
/// with no leading number read as NaN.
fn lenient_float(token: &str) -> f64 {
    let len = numeric_prefix_len(token);
    if len == 0 {
        let unsigned = token.trim_start_matches(['+', '-']);
        if unsigned.starts_with("Infinity") {
            return if token.starts_with('-') {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
        }
        return f64::NAN;
    }
    token[..len].parse().unwrap_or(f64::NAN)
}

/// Leading signed integer of a token; `None` when there are no digits.
fn lenient_int(token: &str) -> Option<i64> {
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let magnitude = rest[..len].parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Number of points a lenient header line asks for: the whole line read as
/// a number, rounded up, with anything unreadable or non-positive giving 0.
fn lenient_point_count(raw: &str) -> usize {
    let trimmed = raw.trim();
    let value = match trimmed {
        "" => 0.0,
        "Infinity" | "+Infinity" => f64::INFINITY,
        "-Infinity" => f64::NEG_INFINITY,
        _ if numeric_prefix_len(trimmed) == trimmed.len() => {
            trimmed.parse::<f64>().unwrap_or(f64::NAN)
        }
        _ => f64::NAN,
    };
    if value.is_nan() || value <= 0.0 {
        0
    } else if value >= usize::MAX as f64 {
        usize::MAX
    } else {
        value.ceil() as usize
    }
}
