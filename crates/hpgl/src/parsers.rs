use nom::{
    character::complete::{char, digit1},
    combinator::{all_consuming, map_res, opt, recognize},
    sequence::pair,
};

use crate::ParseResult;

pub fn integer(input: &str) -> ParseResult<i64> {
    map_res(recognize(pair(opt(char('-')), digit1)), str::parse)(input)
}

/// A token must be exactly one integer literal. Python's `int()` tolerates
/// surrounding whitespace; this grammar does not — Inkscape never pads
/// tokens, so the strictness is a stated choice rather than an accident.
pub fn integer_token(input: &str) -> ParseResult<i64> {
    all_consuming(integer)(input)
}

#[cfg(test)]
mod test {
    use super::{integer, integer_token};

    #[test]
    fn integers() {
        assert_eq!(integer("100"), Ok(("", 100)));
        assert_eq!(integer("-42,"), Ok((",", -42)));
        assert!(integer("abc").is_err());
    }

    #[test]
    fn tokens_must_be_whole_integers() {
        assert_eq!(integer_token("-300"), Ok(("", -300)));
        assert!(integer_token("1.5").is_err());
        assert!(integer_token("12abc").is_err());
        assert!(integer_token("").is_err());
    }

    #[test]
    fn tokens_reject_whitespace_padding() {
        assert!(integer_token(" 1").is_err());
        assert!(integer_token("1 ").is_err());
    }
}
