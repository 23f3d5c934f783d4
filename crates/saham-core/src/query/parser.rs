//! Query parser implementation using pest.

use pest::Parser as PestParser;
use pest_derive::Parser;

use super::alias::AliasTable;
use super::ast::{CompareOp, Condition, Query};
use super::error::ParseError;

#[derive(Parser)]
#[grammar = "query/grammar.pest"]
struct ConditionParser;

/// Screener query parser.
pub struct Parser;

impl Parser {
    /// Parses a free-text query into a conjunction of conditions.
    ///
    /// The input splits on the standalone word `AND` (case-insensitive);
    /// each fragment is parsed independently and malformed fragments are
    /// dropped, so a partially broken query degrades to fewer constraints
    /// instead of failing. An empty or whitespace-only input yields an
    /// empty query, which filters nothing.
    #[must_use]
    pub fn parse(input: &str, aliases: &AliasTable) -> Query {
        let mut conditions = Vec::new();

        for fragment in split_on_and(input) {
            match Self::parse_condition(fragment) {
                Ok(mut condition) => {
                    condition.column = aliases.resolve(&condition.column).to_string();
                    conditions.push(condition);
                }
                Err(err) => {
                    tracing::debug!(fragment, %err, "dropping malformed query condition");
                }
            }
        }

        Query { conditions }
    }

    /// Parses one `column op number` fragment.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] when the fragment does not match the
    /// condition grammar.
    pub fn parse_condition(fragment: &str) -> Result<Condition, ParseError> {
        let pairs = ConditionParser::parse(Rule::condition, fragment).map_err(|e| {
            let position = match e.location {
                pest::error::InputLocation::Pos(p) => p,
                pest::error::InputLocation::Span((s, _)) => s,
            };
            ParseError::syntax(
                position,
                fragment.chars().take(50).collect::<String>(),
                e.to_string(),
            )
        })?;

        let condition_pair = pairs
            .into_iter()
            .next()
            .ok_or_else(|| ParseError::syntax(0, fragment, "Empty condition"))?;

        let mut column = String::new();
        let mut op = None;
        let mut threshold = None;

        for pair in condition_pair.into_inner() {
            match pair.as_rule() {
                Rule::column => column = pair.as_str().trim().to_string(),
                Rule::compare_op => op = CompareOp::from_symbol(pair.as_str()),
                Rule::number => threshold = pair.as_str().parse::<f64>().ok(),
                _ => {}
            }
        }

        let op = op.ok_or_else(|| ParseError::syntax(0, fragment, "Expected operator"))?;
        let threshold = threshold.ok_or_else(|| ParseError::invalid_number(0, fragment))?;
        if column.is_empty() {
            return Err(ParseError::syntax(0, fragment, "Expected column name"));
        }

        Ok(Condition::new(column, op, threshold))
    }
}

/// Splits a query on the standalone word `AND`, case-insensitively.
/// Word-internal matches (`BRAND`, `ANDAL`) do not split.
fn split_on_and(input: &str) -> Vec<&str> {
    let bytes = input.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i + 3 <= bytes.len() {
        let boundary_before = i == 0 || !is_word_byte(bytes[i - 1]);
        let boundary_after = i + 3 == bytes.len() || !is_word_byte(bytes[i + 3]);
        if boundary_before && boundary_after && bytes[i..i + 3].eq_ignore_ascii_case(b"and") {
            parts.push(input[start..i].trim());
            i += 3;
            start = i;
        } else {
            i += 1;
        }
    }
    parts.push(input[start..].trim());

    parts.into_iter().filter(|p| !p.is_empty()).collect()
}

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
