use regex::Regex;

use crate::{entities::Posting, errors::PnlError};

/// Parsed filter for the in-memory ledger. Supports predicates on `account`
/// (`~` regex match or `=` equality) and `commodity` (`=`), combined with
/// `AND` / `OR`, where `AND` binds tighter.
#[derive(Debug)]
pub(crate) struct FilterExpression {
    /// Disjunction of conjunctions.
    any_of: Vec<Vec<Predicate>>,
}

#[derive(Debug)]
enum Predicate {
    AccountMatches(Regex),
    AccountEquals(String),
    CommodityEquals(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Token {
    Word(String),
    Op(char),
    Literal(String),
}

impl FilterExpression {
    pub(crate) fn parse(expression: &str) -> Result<Self, PnlError> {
        let tokens = tokenize(expression)?;
        let mut any_of = Vec::new();
        let mut all_of = Vec::new();
        let mut tokens = tokens.into_iter();
        loop {
            all_of.push(parse_predicate(expression, &mut tokens)?);
            match tokens.next() {
                None => {
                    any_of.push(all_of);
                    break;
                }
                Some(Token::Word(w)) if w.eq_ignore_ascii_case("and") => {}
                Some(Token::Word(w)) if w.eq_ignore_ascii_case("or") => {
                    any_of.push(std::mem::take(&mut all_of));
                }
                Some(t) => {
                    return Err(PnlError::invalid_filter(
                        expression,
                        format!("expected AND / OR, found {:?}", t),
                    ))
                }
            }
        }
        Ok(Self { any_of })
    }

    pub(crate) fn matches(&self, posting: &Posting) -> bool {
        self.any_of
            .iter()
            .any(|all_of| all_of.iter().all(|p| p.matches(posting)))
    }
}

impl Predicate {
    fn matches(&self, posting: &Posting) -> bool {
        match self {
            Predicate::AccountMatches(re) => re.is_match(&posting.account),
            Predicate::AccountEquals(account) => posting.account == *account,
            Predicate::CommodityEquals(commodity) => posting.commodity == *commodity,
        }
    }
}

fn parse_predicate(
    expression: &str,
    tokens: &mut impl Iterator<Item = Token>,
) -> Result<Predicate, PnlError> {
    let field = match tokens.next() {
        Some(Token::Word(w)) => w.to_ascii_lowercase(),
        other => {
            return Err(PnlError::invalid_filter(
                expression,
                format!("expected field name, found {:?}", other),
            ))
        }
    };
    let op = match tokens.next() {
        Some(Token::Op(op)) => op,
        other => {
            return Err(PnlError::invalid_filter(
                expression,
                format!("expected '~' or '=' after '{}', found {:?}", field, other),
            ))
        }
    };
    let value = match tokens.next() {
        Some(Token::Literal(value)) => value,
        other => {
            return Err(PnlError::invalid_filter(
                expression,
                format!("expected quoted value, found {:?}", other),
            ))
        }
    };

    match (field.as_str(), op) {
        ("account", '~') => Regex::new(&value)
            .map(Predicate::AccountMatches)
            .map_err(|e| PnlError::invalid_filter(expression, e.to_string())),
        ("account", '=') => Ok(Predicate::AccountEquals(value)),
        ("commodity" | "currency", '=') => Ok(Predicate::CommodityEquals(value)),
        _ => Err(PnlError::invalid_filter(
            expression,
            format!("unsupported predicate '{} {}'", field, op),
        )),
    }
}

fn tokenize(expression: &str) -> Result<Vec<Token>, PnlError> {
    let mut tokens = Vec::new();
    let mut chars = expression.chars().peekable();
    while let Some(&c) = chars.peek() {
        match c {
            c if c.is_whitespace() => {
                chars.next();
            }
            '~' | '=' => {
                tokens.push(Token::Op(c));
                chars.next();
            }
            '\'' | '"' => {
                chars.next();
                let mut literal = String::new();
                loop {
                    match chars.next() {
                        Some(q) if q == c => break,
                        Some(ch) => literal.push(ch),
                        None => {
                            return Err(PnlError::invalid_filter(
                                expression,
                                "unterminated string literal",
                            ))
                        }
                    }
                }
                tokens.push(Token::Literal(literal));
            }
            c if c.is_alphanumeric() || c == '_' => {
                let mut word = String::new();
                while let Some(&ch) = chars.peek() {
                    if ch.is_alphanumeric() || ch == '_' {
                        word.push(ch);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token::Word(word));
            }
            other => {
                return Err(PnlError::invalid_filter(
                    expression,
                    format!("unexpected character '{}'", other),
                ))
            }
        }
    }
    if tokens.is_empty() {
        return Err(PnlError::invalid_filter(expression, "empty expression"));
    }
    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use super::*;

    fn posting(account: &str, commodity: &str) -> Posting {
        Posting {
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            account: account.to_string(),
            amount: Decimal::ONE,
            commodity: commodity.to_string(),
        }
    }

    #[test]
    fn test_account_prefix() {
        let f = FilterExpression::parse("account ~ '^Income'").unwrap();
        assert!(f.matches(&posting("Income:Salary", "EUR")));
        assert!(!f.matches(&posting("Expenses:Income", "EUR")));
    }

    #[test]
    fn test_and_binds_tighter_than_or() {
        let f = FilterExpression::parse(
            "account ~ '^Expenses:Food' AND commodity = 'USD' OR account = 'Income:Bonus'",
        )
        .unwrap();
        assert!(f.matches(&posting("Expenses:Food:Groceries", "USD")));
        assert!(!f.matches(&posting("Expenses:Food:Groceries", "EUR")));
        assert!(f.matches(&posting("Income:Bonus", "EUR")));
        assert!(!f.matches(&posting("Income:Bonus:Extra", "EUR")));
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let f = FilterExpression::parse("ACCOUNT ~ 'Rent' or Currency = \"CHF\"").unwrap();
        assert!(f.matches(&posting("Expenses:Rent", "EUR")));
        assert!(f.matches(&posting("Assets:Bank", "CHF")));
    }

    #[test]
    fn test_invalid_expressions() {
        for expr in [
            "",
            "account",
            "account ~",
            "account ~ 'unterminated",
            "account ~ '^Income' XOR account ~ '^Expenses'",
            "payee = 'Shop'",
            "account ~ '('",
            "account > 'A'",
        ] {
            assert!(
                matches!(
                    FilterExpression::parse(expr),
                    Err(PnlError::InvalidFilterExpression { .. })
                ),
                "{}",
                expr
            );
        }
    }
}
