//! crates/stronghold_io/src/parse.rs
//! The two operator command-log line shapes this crate understands:
//!
//! - A throw: `/execute in minecraft:overworld run tp @s X Y Z YAW PITCH`
//! - A confirmed goal: `/tp @s X ~ Z`
//!
//! Both are whitespace-tokenized; anything else is a [`ParseError`].

use stronghold_core::{chunk_from_world, Chunk, Throw};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("line does not start with `{expected}`")]
    WrongPrefix { expected: &'static str },
    #[error("expected at least {expected} whitespace-separated tokens, found {found}")]
    TooFewTokens { expected: usize, found: usize },
    #[error("token {index} (`{token}`) is not a valid number")]
    BadNumber { index: usize, token: String },
}

fn token(tokens: &[&str], index: usize) -> Result<&str, ParseError> {
    tokens
        .get(index)
        .copied()
        .ok_or(ParseError::TooFewTokens {
            expected: index + 1,
            found: tokens.len(),
        })
}

fn parse_f64(tokens: &[&str], index: usize) -> Result<f64, ParseError> {
    let t = token(tokens, index)?;
    t.parse::<f64>().map_err(|_| ParseError::BadNumber {
        index,
        token: t.to_string(),
    })
}

fn parse_i64(tokens: &[&str], index: usize) -> Result<i64, ParseError> {
    let t = token(tokens, index)?;
    t.parse::<i64>().map_err(|_| ParseError::BadNumber {
        index,
        token: t.to_string(),
    })
}

/// Parse `/execute in minecraft:overworld run tp @s X Y Z YAW PITCH` into a
/// [`Throw`]. The Y (height) token is present in the log but unused: throws
/// are a 2D problem over (X, Z).
pub fn parse_throw_line(line: &str) -> Result<Throw, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if !line.starts_with("/execute") {
        return Err(ParseError::WrongPrefix {
            expected: "/execute",
        });
    }
    let x = parse_f64(&tokens, 6)?;
    let z = parse_f64(&tokens, 8)?;
    let yaw = parse_f64(&tokens, 9)?;
    let tilt = parse_f64(&tokens, 10)?;
    Ok(Throw::from_degrees(x, z, yaw, tilt))
}

/// Parse `/tp @s X ~ Z` into the chunk the teleport targets. The middle
/// token (usually `~`, meaning "current height") is never read.
pub fn parse_teleport_line(line: &str) -> Result<Chunk, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if !line.starts_with("/tp") {
        return Err(ParseError::WrongPrefix { expected: "/tp" });
    }
    let x = parse_i64(&tokens, 2)?;
    let z = parse_i64(&tokens, 4)?;
    Ok(chunk_from_world(x as f64, z as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_well_formed_throw_line() {
        let t = parse_throw_line(
            "/execute in minecraft:overworld run tp @s 171.83 84.51 131.77 306.60 -32.25",
        )
        .unwrap();
        assert!((t.x - 171.83).abs() < 1e-9);
        assert!((t.z - 131.77).abs() < 1e-9);
    }

    #[test]
    fn parses_a_well_formed_teleport_line() {
        let c = parse_teleport_line("/tp @s 1928 ~ 1432").unwrap();
        assert_eq!(c, chunk_from_world(1928.0, 1432.0));
    }

    #[test]
    fn rejects_wrong_prefix() {
        assert_eq!(
            parse_throw_line("/tp @s 1 ~ 2"),
            Err(ParseError::WrongPrefix {
                expected: "/execute"
            })
        );
        assert_eq!(
            parse_teleport_line("/execute in minecraft:overworld run tp @s 1 2 3 4 5"),
            Err(ParseError::WrongPrefix { expected: "/tp" })
        );
    }

    #[test]
    fn rejects_short_lines() {
        assert!(matches!(
            parse_throw_line("/execute in minecraft:overworld run tp @s 1 2"),
            Err(ParseError::TooFewTokens { .. })
        ));
        assert!(matches!(
            parse_teleport_line("/tp @s 1"),
            Err(ParseError::TooFewTokens { .. })
        ));
    }

    #[test]
    fn rejects_non_numeric_tokens() {
        assert!(matches!(
            parse_throw_line(
                "/execute in minecraft:overworld run tp @s abc 84.51 131.77 306.60 -32.25"
            ),
            Err(ParseError::BadNumber { index: 6, .. })
        ));
        assert!(matches!(
            parse_teleport_line("/tp @s abc ~ 1432"),
            Err(ParseError::BadNumber { index: 2, .. })
        ));
    }
}
