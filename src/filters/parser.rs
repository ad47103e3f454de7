//! Filter expression parser.
//!
//! Parses `field:value` expressions into a [`FilterExpr`].
//!
//! # Syntax
//!
//! ```text
//! filter_expr  := field_filter (operator field_filter)*
//! field_filter := field:value | field:"quoted value"
//! operator     := AND | OR (case-insensitive)
//! ```
//!
//! # Fields
//!
//! - `comp:` / `company:`, `title:`, `loc:` / `location:`, `seniority:`, `remote:` -
//!   substring of that field in any job
//! - `sector:` - substring of sector or sub-sector in any job
//! - `skill:` - substring of any skill tag in any job
//! - `founder:yes|no` - someone who has (or has never) been a founder
//! - `grad:YYYY` - exact graduation year
//! - `since:YYYY` - graduated in or after the year
//!
//! # Examples
//!
//! ```rust
//! # use alumni_explorer::filters::parser::parse_filter;
//! // Implicit AND between different fields
//! let expr = parse_filter("comp:google loc:bangalore").unwrap();
//!
//! // Implicit OR within the same field
//! let expr = parse_filter("sector:finance sector:consulting").unwrap();
//!
//! // Quoted values and explicit operators
//! let expr = parse_filter("title:\"product manager\" OR founder:yes since:2015").unwrap();
//! ```

use std::iter::Peekable;
use std::str::Chars;

use anyhow::{Context, Result, anyhow};

use super::ast::{FieldFilter, FilterExpr, FilterField, FilterOperator};
use crate::parsers::deserializers::{MAX_YEAR, MIN_YEAR};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    FieldValue { field: String, value: String },
    And,
    Or,
}

/// Read one whitespace-delimited word. A double quote switches to quoted mode, in which
/// whitespace is kept until the closing quote; the quotes themselves are dropped.
fn read_word(chars: &mut Peekable<Chars>) -> Result<(String, bool)> {
    let mut word = String::new();
    let mut quoted = false;

    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            break;
        }
        chars.next();

        if ch == '"' {
            quoted = true;
            let mut closed = false;
            for inner in chars.by_ref() {
                if inner == '"' {
                    closed = true;
                    break;
                }
                word.push(inner);
            }
            if !closed {
                return Err(anyhow!("Unterminated quoted string"));
            }
        } else {
            word.push(ch);
        }
    }

    Ok((word, quoted))
}

fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();

    loop {
        while chars.next_if(|c| c.is_whitespace()).is_some() {}
        if chars.peek().is_none() {
            break;
        }

        let (word, quoted) = read_word(&mut chars)?;

        if !quoted {
            match word.to_uppercase().as_str() {
                "AND" => {
                    tokens.push(Token::And);
                    continue;
                }
                "OR" => {
                    tokens.push(Token::Or);
                    continue;
                }
                _ => {}
            }
        }

        let Some((field, value)) = word.split_once(':') else {
            return Err(anyhow!("Invalid token: '{}' (expected field:value or AND/OR)", word));
        };

        let value = value.trim();
        if field.is_empty() || value.is_empty() {
            return Err(anyhow!("Invalid field:value format: {}", word));
        }

        tokens.push(Token::FieldValue { field: field.to_string(), value: value.to_string() });
    }

    Ok(tokens)
}

fn parse_field(field: &str) -> Result<FilterField> {
    match field.to_lowercase().as_str() {
        "comp" | "company" => Ok(FilterField::Company),
        "title" => Ok(FilterField::Title),
        "loc" | "location" => Ok(FilterField::Location),
        "sector" => Ok(FilterField::Sector),
        "skill" => Ok(FilterField::Skill),
        "seniority" => Ok(FilterField::Seniority),
        "remote" => Ok(FilterField::Remote),
        "founder" => Ok(FilterField::Founder),
        "grad" => Ok(FilterField::Grad),
        "since" => Ok(FilterField::Since),
        _ => Err(anyhow!(
            "Unknown field: '{}' (valid fields: comp, title, loc, sector, skill, seniority, remote, founder, grad, since)",
            field
        )),
    }
}

/// Parse a filter year; shared with evaluation
pub(crate) fn parse_year(value: &str) -> Option<i32> {
    if value.len() != 4 {
        return None;
    }
    value.parse::<i32>().ok().filter(|year| (MIN_YEAR..=MAX_YEAR).contains(year))
}

/// Parse a founder value; shared with evaluation
pub(crate) fn parse_founder(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "yes" | "true" => Some(true),
        "no" | "false" => Some(false),
        _ => None,
    }
}

fn validate_value(field: FilterField, value: &str) -> Result<()> {
    match field {
        FilterField::Grad | FilterField::Since => {
            if parse_year(value).is_none() {
                return Err(anyhow!(
                    "Invalid year: '{}' (expected YYYY between {} and {})",
                    value,
                    MIN_YEAR,
                    MAX_YEAR
                ));
            }
        }
        FilterField::Founder => {
            if parse_founder(value).is_none() {
                return Err(anyhow!("Invalid founder value: '{}' (must be 'yes' or 'no')", value));
            }
        }
        _ => {}
    }
    Ok(())
}

/// Parse filter string into a [`FilterExpr`].
///
/// An empty or whitespace-only input gives an empty expression that matches everyone.
pub fn parse_filter(input: &str) -> Result<FilterExpr> {
    let tokens = tokenize(input).context("Failed to tokenize filter")?;

    let mut expr = FilterExpr::new();
    let mut expecting_filter = true;
    let mut last_field: Option<FilterField> = None;

    for token in tokens {
        match token {
            Token::FieldValue { field, value } => {
                let filter_field = parse_field(&field)?;
                validate_value(filter_field, &value)?;

                // No explicit operator since the previous filter
                if !expecting_filter {
                    let implicit = if last_field == Some(filter_field) {
                        FilterOperator::Or
                    } else {
                        FilterOperator::And
                    };
                    expr.add_operator(implicit);
                }

                expr.add_filter(FieldFilter::new(filter_field, value));
                last_field = Some(filter_field);
                expecting_filter = false;
            }
            Token::And | Token::Or => {
                if expecting_filter {
                    return Err(anyhow!("Unexpected operator (expected field:value)"));
                }
                expr.add_operator(if token == Token::And {
                    FilterOperator::And
                } else {
                    FilterOperator::Or
                });
                expecting_filter = true;
            }
        }
    }

    if expecting_filter && !expr.is_empty() {
        return Err(anyhow!("Filter ended with operator (expected field:value)"));
    }

    debug_assert_eq!(expr.operators.len(), expr.filters.len().saturating_sub(1));

    Ok(expr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_single_field() {
        let tokens = tokenize("comp:acme").unwrap();
        assert_eq!(
            tokens,
            vec![Token::FieldValue { field: "comp".to_string(), value: "acme".to_string() }]
        );
    }

    #[test]
    fn test_tokenize_with_operators() {
        let tokens = tokenize("comp:acme and loc:pune OR loc:delhi").unwrap();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[1], Token::And);
        assert_eq!(tokens[3], Token::Or);
    }

    #[test]
    fn test_tokenize_quoted_value() {
        let tokens = tokenize("title:\"product manager\"  loc:pune").unwrap();
        assert_eq!(
            tokens[0],
            Token::FieldValue { field: "title".to_string(), value: "product manager".to_string() }
        );
        assert_eq!(tokens.len(), 2);
    }

    #[test]
    fn test_tokenize_unterminated_quote() {
        let result = tokenize("title:\"product manager");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unterminated"));
    }

    #[test]
    fn test_tokenize_invalid_token() {
        let result = tokenize("acme");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid token"));
    }

    #[test]
    fn test_tokenize_empty_field_or_value() {
        assert!(tokenize(":acme").unwrap_err().to_string().contains("Invalid field:value"));
        assert!(tokenize("comp:").unwrap_err().to_string().contains("Invalid field:value"));
        assert!(tokenize("comp:\"  \"").unwrap_err().to_string().contains("Invalid field:value"));
    }

    #[test]
    fn test_parse_field_aliases() {
        assert_eq!(parse_field("comp").unwrap(), FilterField::Company);
        assert_eq!(parse_field("Company").unwrap(), FilterField::Company);
        assert_eq!(parse_field("LOC").unwrap(), FilterField::Location);
        assert_eq!(parse_field("location").unwrap(), FilterField::Location);
        assert!(parse_field("salary").unwrap_err().to_string().contains("Unknown field"));
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year("2018"), Some(2018));
        assert_eq!(parse_year("18"), None);
        assert_eq!(parse_year("1850"), None);
        assert_eq!(parse_year("20x8"), None);
        assert_eq!(parse_year("+201"), None);
    }

    #[test]
    fn test_parse_filter_empty() {
        assert!(parse_filter("").unwrap().is_empty());
        assert!(parse_filter("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_filter_implicit_operators() {
        let expr = parse_filter("comp:acme comp:globex loc:pune").unwrap();
        assert_eq!(expr.filters.len(), 3);
        assert_eq!(expr.operators, vec![FilterOperator::Or, FilterOperator::And]);
    }

    #[test]
    fn test_parse_filter_alias_counts_as_same_field() {
        let expr = parse_filter("comp:acme company:globex").unwrap();
        assert_eq!(expr.operators, vec![FilterOperator::Or]);
    }

    #[test]
    fn test_parse_filter_explicit_operator() {
        let expr = parse_filter("comp:acme OR founder:yes").unwrap();
        assert_eq!(expr.operators, vec![FilterOperator::Or]);
        assert_eq!(expr.filters[1].field, FilterField::Founder);
    }

    #[test]
    fn test_parse_filter_invalid_year() {
        let result = parse_filter("grad:20x8");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid year"));
    }

    #[test]
    fn test_parse_filter_invalid_founder() {
        let result = parse_filter("founder:maybe");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid founder value"));
    }

    #[test]
    fn test_parse_filter_operator_placement() {
        let err = parse_filter("comp:acme AND").unwrap_err();
        assert!(err.to_string().contains("ended with operator"));
        assert!(parse_filter("OR comp:acme").is_err());
        assert!(parse_filter("comp:acme AND OR loc:pune").is_err());
    }

    #[test]
    fn test_parse_filter_quoted_operator_word_is_not_operator() {
        let result = parse_filter("\"and\"");
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("Invalid token"));
    }
}
