//! Equation systems as structural matrices.
//!
//! A system such as
//!
//! ```text
//! y' = 10a + 10b - 20c + 2d
//! z  = a - 3b + d
//! ```
//!
//! becomes one row per equation (in input order) and one column per
//! right-hand variable (sorted by name). An entry is 1 when the accumulated
//! coefficient of that variable is non-zero.

use crate::error::SystemParseError;
use crate::matrix::Matrix;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

/// One parsed equation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equation {
    pub left_variable: String,
    /// Coefficients keyed by variable; repeated variables accumulate.
    pub coefficients: BTreeMap<String, f64>,
}

/// A whole system, before it is required to be square.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSystem {
    pub row_variables: Vec<String>,
    pub columns: Vec<String>,
    pub matrix: Vec<Vec<u8>>,
}

impl ParsedSystem {
    /// The structural matrix, if the system is square.
    pub fn into_matrix(self) -> Result<Matrix, SystemParseError> {
        let rows = self.row_variables.len();
        let columns = self.columns.len();
        if rows != columns {
            return Err(SystemParseError::NotSquare { rows, columns });
        }
        Ok(Matrix::new(self.matrix)?)
    }
}

fn term_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([+\-]?\d*\.?\d*)([a-zA-Z]\w*)").expect("term regex must compile")
    })
}

/// Parse `<lhs> = [±]<coeff><var> ± ...`.
///
/// A missing coefficient means 1 (or -1 after a bare `-`). Text between
/// terms that does not form a term is ignored.
pub fn parse_equation(equation: &str) -> Result<Equation, SystemParseError> {
    let mut sides = equation.split('=');
    let lhs = sides.next().unwrap_or_default().trim();
    let rhs_raw = sides.next().unwrap_or_default();
    if rhs_raw.is_empty() {
        return Err(SystemParseError::MissingEquals(equation.to_string()));
    }
    let rhs = rhs_raw.trim();
    if lhs.is_empty() {
        return Err(SystemParseError::EmptyLeftSide(equation.to_string()));
    }
    if rhs.is_empty() {
        return Err(SystemParseError::EmptyRightSide(equation.to_string()));
    }

    let normalized: String = rhs.chars().filter(|c| !c.is_whitespace()).collect();
    let mut coefficients: BTreeMap<String, f64> = BTreeMap::new();

    for caps in term_re().captures_iter(&normalized) {
        let coefficient = match &caps[1] {
            "" | "+" => 1.0,
            "-" => -1.0,
            other => other
                .parse::<f64>()
                .map_err(|_| SystemParseError::BadCoefficient {
                    term: caps[0].to_string(),
                    equation: equation.to_string(),
                })?,
        };
        *coefficients.entry(caps[2].to_string()).or_insert(0.0) += coefficient;
    }

    Ok(Equation {
        left_variable: lhs.to_string(),
        coefficients,
    })
}

/// Parse every equation and lay out the 0/1 matrix.
pub fn parse_system<S: AsRef<str>>(equations: &[S]) -> Result<ParsedSystem, SystemParseError> {
    let parsed = equations
        .iter()
        .map(|eq| parse_equation(eq.as_ref()))
        .collect::<Result<Vec<_>, _>>()?;

    let columns: Vec<String> = parsed
        .iter()
        .flat_map(|eq| eq.coefficients.keys().cloned())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let mut row_variables = Vec::with_capacity(parsed.len());
    let mut matrix = Vec::with_capacity(parsed.len());
    for eq in parsed {
        let row = columns
            .iter()
            .map(|var| {
                let coefficient = eq.coefficients.get(var).copied().unwrap_or(0.0);
                u8::from(coefficient != 0.0)
            })
            .collect();
        matrix.push(row);
        row_variables.push(eq.left_variable);
    }

    Ok(ParsedSystem {
        row_variables,
        columns,
        matrix,
    })
}

/// Parse a text block with one equation per non-blank line.
pub fn parse_system_text(text: &str) -> Result<ParsedSystem, SystemParseError> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    parse_system(&lines)
}
