//! Local checks run on query parameters before any request is built.

use dex_types::swap::RANDOM_NUMBER_HASH_LEN;

use crate::error::ValidationError as Error;
use crate::types::{PageRange, SearchPage};

const SYMBOL_MAX_LEN: usize = 14;
const SYMBOL_BASE_MIN_LEN: usize = 2;
const SYMBOL_BASE_MAX_LEN: usize = 8;
const SYMBOL_SUFFIX_LEN: usize = 3;
const MINI_TOKEN_MARKER: char = 'M';
const PAIR_SEPARATOR: char = '_';

const SEARCH_OPERATORS: [&str; 5] = ["=", "<", "<=", ">", ">="];
const SEARCH_TAG_SPECIAL_CHARS: &str = "._-";
const SEARCH_WORD_SPECIAL_CHARS: &str = "._-:+";

pub fn validate_offset(offset: i64) -> Result<u64, Error> {
    u64::try_from(offset).map_err(|_| Error::NegativeOffset(offset))
}

pub fn validate_limit(limit: i64, max: u64) -> Result<u64, Error> {
    match u64::try_from(limit) {
        Ok(limit) if limit <= max => Ok(limit),
        _ => Err(Error::InvalidLimit { actual: limit, max }),
    }
}

pub fn validate_page(offset: i64, limit: i64, max_limit: u64) -> Result<PageRange, Error> {
    Ok(PageRange {
        offset: validate_offset(offset)?,
        limit: validate_limit(limit, max_limit)?,
    })
}

/// Checks a token symbol: `BASE` or `BASE-SUFFIX`, where `BASE` is 2-8
/// upper-case alphanumerics and `SUFFIX` is 3 of them, optionally followed by
/// the mini-token marker `M`.
pub fn validate_symbol(symbol: &str) -> Result<(), Error> {
    let invalid = |description: &str| Error::InvalidSymbol {
        symbol: symbol.to_string(),
        description: description.to_string(),
    };

    if symbol.is_empty() {
        return Err(invalid("symbol is empty"));
    }
    if symbol.len() > SYMBOL_MAX_LEN {
        return Err(invalid("symbol is too long"));
    }
    let (base, suffix) = match symbol.split_once('-') {
        Some((base, suffix)) => (base, Some(suffix)),
        None => (symbol, None),
    };

    if !(SYMBOL_BASE_MIN_LEN..=SYMBOL_BASE_MAX_LEN).contains(&base.len()) {
        return Err(invalid("base symbol must be 2 to 8 characters long"));
    }
    if !is_upper_alphanumeric(base) {
        return Err(invalid(
            "base symbol can only contain upper-case letters and digits",
        ));
    }

    if let Some(suffix) = suffix {
        let suffix = suffix.strip_suffix(MINI_TOKEN_MARKER).unwrap_or(suffix);
        if suffix.len() != SYMBOL_SUFFIX_LEN || !is_upper_alphanumeric(suffix) {
            return Err(invalid(
                "suffix must be 3 upper-case letters or digits, optionally followed by `M`",
            ));
        }
    }

    Ok(())
}

fn is_upper_alphanumeric(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Checks a trading pair of the form `BASE_QUOTE`.
pub fn validate_pair(pair: &str) -> Result<(), Error> {
    let invalid = |description: String| Error::InvalidPair {
        pair: pair.to_string(),
        description,
    };

    let (base, quote) = pair
        .split_once(PAIR_SEPARATOR)
        .ok_or_else(|| invalid("pair must be of the form `BASE_QUOTE`".to_string()))?;
    if quote.contains(PAIR_SEPARATOR) {
        return Err(invalid("pair must contain exactly one `_`".to_string()));
    }

    validate_symbol(base).map_err(|e| invalid(e.to_string()))?;
    validate_symbol(quote).map_err(|e| invalid(e.to_string()))?;

    Ok(())
}

pub fn validate_depth_level(level: u32, allowed: &[u32]) -> Result<(), Error> {
    if allowed.contains(&level) {
        Ok(())
    } else {
        Err(Error::InvalidDepthLevel {
            level,
            allowed: allowed.to_vec(),
        })
    }
}

pub fn validate_search_page(
    page: i64,
    per_page: i64,
    max_per_page: u32,
) -> Result<SearchPage, Error> {
    let page = u32::try_from(page)
        .ok()
        .filter(|page| *page >= 1)
        .ok_or(Error::InvalidSearchPage(page))?;
    let per_page = u32::try_from(per_page)
        .ok()
        .filter(|per_page| (1..=max_per_page).contains(per_page))
        .ok_or(Error::InvalidSearchPageSize {
            actual: per_page,
            max: max_per_page,
        })?;
    Ok(SearchPage { page, per_page })
}

pub fn validate_swap_hash(hash: &[u8]) -> Result<(), Error> {
    if hash.len() == RANDOM_NUMBER_HASH_LEN {
        Ok(())
    } else {
        Err(Error::InvalidSwapHash {
            expected: RANDOM_NUMBER_HASH_LEN,
            actual: hash.len(),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Operator(&'a str),
    Quoted,
}

fn tokenize(query: &str) -> Result<Vec<Token<'_>>, String> {
    let mut tokens = Vec::new();
    let mut chars = query.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        match c {
            c if c.is_whitespace() => {}
            '\'' => {
                chars
                    .by_ref()
                    .find(|(_, c)| *c == '\'')
                    .ok_or_else(|| format!("unterminated string starting at {start}"))?;
                tokens.push(Token::Quoted);
            }
            '=' => tokens.push(Token::Operator(&query[start..start + 1])),
            '<' | '>' => {
                let end = match chars.peek() {
                    Some((_, '=')) => {
                        chars.next();
                        start + 2
                    }
                    _ => start + 1,
                };
                tokens.push(Token::Operator(&query[start..end]));
            }
            c if is_word_char(c) => {
                let mut end = start + c.len_utf8();
                while let Some((index, c)) = chars.peek().copied() {
                    if !is_word_char(c) {
                        break;
                    }
                    end = index + c.len_utf8();
                    chars.next();
                }
                tokens.push(Token::Word(&query[start..end]));
            }
            c => return Err(format!("unexpected character `{c}` at {start}")),
        }
    }

    Ok(tokens)
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || SEARCH_WORD_SPECIAL_CHARS.contains(c)
}

fn is_tag(word: &str) -> bool {
    !matches!(word, "AND" | "EXISTS" | "CONTAINS" | "TIME" | "DATE")
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || SEARCH_TAG_SPECIAL_CHARS.contains(c))
}

fn is_number(word: &str) -> bool {
    let digits = word.strip_prefix('-').unwrap_or(word);
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits, "0"));
    !integer.is_empty()
        && !fraction.is_empty()
        && integer.chars().all(|c| c.is_ascii_digit())
        && fraction.chars().all(|c| c.is_ascii_digit())
}

fn parse_conditions(tokens: &[Token<'_>]) -> Result<(), String> {
    let mut tokens = tokens.iter();

    loop {
        match tokens.next() {
            Some(Token::Word(tag)) if is_tag(tag) => {}
            Some(other) => return Err(format!("expected a tag, found {other:?}")),
            None => return Err("expected a condition".to_string()),
        }

        match tokens.next() {
            Some(Token::Word("EXISTS")) => {}
            Some(Token::Word("CONTAINS")) => match tokens.next() {
                Some(Token::Quoted) => {}
                _ => return Err("`CONTAINS` expects a quoted string".to_string()),
            },
            Some(Token::Operator(op)) if SEARCH_OPERATORS.contains(op) => match tokens.next() {
                Some(Token::Quoted) => {}
                Some(Token::Word(word)) if is_number(word) => {}
                Some(Token::Word("TIME" | "DATE")) => match tokens.next() {
                    Some(Token::Word(_)) => {}
                    _ => return Err("`TIME` and `DATE` expect a value".to_string()),
                },
                _ => return Err(format!("`{op}` expects a quoted string or a number")),
            },
            _ => return Err("expected an operator after the tag".to_string()),
        }

        match tokens.next() {
            None => return Ok(()),
            Some(Token::Word("AND")) => {}
            Some(other) => return Err(format!("expected `AND`, found {other:?}")),
        }
    }
}

/// Checks a transaction search query: one or more conditions joined by
/// `AND`, each being `tag EXISTS`, `tag CONTAINS 'text'` or `tag OP operand`
/// with `OP` one of `=`, `<`, `<=`, `>`, `>=` and the operand a quoted string,
/// a number, or `TIME`/`DATE` followed by a value.
pub fn validate_search_query(query: &str, max_len: usize) -> Result<(), Error> {
    let invalid = |description: String| Error::InvalidSearchQuery {
        query: query.to_string(),
        description,
    };

    if query.chars().count() > max_len {
        return Err(invalid(format!("query exceeds {max_len} characters")));
    }

    let tokens = tokenize(query).map_err(invalid)?;
    parse_conditions(&tokens).map_err(invalid)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::config::{DEFAULT_DEPTH_LEVELS, DEFAULT_MAX_LIMIT};

    #[rstest]
    #[case(0, 0)]
    #[case(0, 1000)]
    #[case(25, 100)]
    #[case(i64::MAX, 1)]
    fn accepts_valid_page(#[case] offset: i64, #[case] limit: i64) {
        let page = validate_page(offset, limit, DEFAULT_MAX_LIMIT).expect("valid page");
        assert_eq!(page.offset, offset as u64);
        assert_eq!(page.limit, limit as u64);
    }

    #[rstest]
    #[case(-1, 10)]
    #[case(0, -1)]
    #[case(0, 1001)]
    #[case(i64::MIN, i64::MAX)]
    fn rejects_invalid_page(#[case] offset: i64, #[case] limit: i64) {
        assert!(validate_page(offset, limit, DEFAULT_MAX_LIMIT).is_err());
    }

    #[rstest]
    #[case("BNB")]
    #[case("BUSD")]
    #[case("BUSD-BD1")]
    #[case("XRP-BF2")]
    #[case("AB-123")]
    #[case("ABCDEFGH-9AB")]
    #[case("CBM-4B2M")]
    fn accepts_valid_symbols(#[case] symbol: &str) {
        validate_symbol(symbol).expect("valid symbol");
    }

    #[rstest]
    #[case("")]
    #[case("B")]
    #[case("busd-bd1")]
    #[case("A-BD1")]
    #[case("ABCDEFGHI-BD1")]
    #[case("BUSD-BD")]
    #[case("BUSD-BD12")]
    #[case("BUSD-BD1X")]
    #[case("BU$D-BD1")]
    #[case("BUSD-BD1-X")]
    fn rejects_invalid_symbols(#[case] symbol: &str) {
        assert!(validate_symbol(symbol).is_err());
    }

    #[rstest]
    #[case("BNB_BUSD")]
    #[case("BNB_BUSD-BD1")]
    #[case("XRP-BF2_BNB")]
    fn accepts_valid_pairs(#[case] pair: &str) {
        validate_pair(pair).expect("valid pair");
    }

    #[rstest]
    #[case("BNB")]
    #[case("BNB_")]
    #[case("_BNB")]
    #[case("BNB_BUSD-BD1_XRP-BF2")]
    #[case("BNB/BUSD-BD1")]
    #[case("bnb_busd-bd1")]
    fn rejects_invalid_pairs(#[case] pair: &str) {
        assert!(validate_pair(pair).is_err());
    }

    #[rstest]
    #[case(5, true)]
    #[case(1000, true)]
    #[case(0, false)]
    #[case(7, false)]
    #[case(2000, false)]
    fn depth_level_must_be_listed(#[case] level: u32, #[case] valid: bool) {
        assert_eq!(
            validate_depth_level(level, &DEFAULT_DEPTH_LEVELS).is_ok(),
            valid
        );
    }

    #[rstest]
    #[case("tx.height = 5")]
    #[case("tx.height>=5 AND tx.height<10")]
    #[case("message.sender = 'bnb1abc' AND transfer.amount > 100.5")]
    #[case("tm.event = 'Tx' AND tx.hash EXISTS")]
    #[case("message.action CONTAINS 'order'")]
    #[case("block.time > TIME 2019-04-01T00:00:00Z")]
    #[case("block.date = DATE 2019-04-01")]
    fn accepts_valid_search_queries(#[case] query: &str) {
        validate_search_query(query, 1024).expect("valid query");
    }

    #[rstest]
    #[case("")]
    #[case("hello world")]
    #[case("tx.height =")]
    #[case("tx.height = 5 AND")]
    #[case("tx.height = 5 OR tx.height = 6")]
    #[case("message.sender = 'unterminated")]
    #[case("message.action CONTAINS order")]
    #[case("tx.height = five")]
    #[case("AND = 5")]
    #[case("tx.height ! 5")]
    fn rejects_invalid_search_queries(#[case] query: &str) {
        assert!(validate_search_query(query, 1024).is_err());
    }

    #[test_log::test]
    fn rejects_overlong_search_query() {
        let query = format!("tx.hash = '{}'", "A".repeat(64));
        validate_search_query(&query, 1024).expect("valid query");
        assert!(validate_search_query(&query, 32).is_err());
    }

    #[rstest]
    #[case(1, 1, true)]
    #[case(3, 100, true)]
    #[case(0, 10, false)]
    #[case(-1, 10, false)]
    #[case(1, 0, false)]
    #[case(1, 101, false)]
    fn search_page_bounds(#[case] page: i64, #[case] per_page: i64, #[case] valid: bool) {
        assert_eq!(validate_search_page(page, per_page, 100).is_ok(), valid);
    }

    #[test_log::test]
    fn swap_hash_must_be_32_bytes() {
        validate_swap_hash(&[0; 32]).expect("valid hash");
        assert_eq!(
            validate_swap_hash(&[0; 31]),
            Err(Error::InvalidSwapHash {
                expected: 32,
                actual: 31
            })
        );
    }
}
