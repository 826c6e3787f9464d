//! Tokenizer and token cursor for the RPSL policy mini-languages.

use super::{ParseError, ParseResult};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until, take_while1},
    character::complete::{char, multispace0, one_of},
    combinator::map,
    multi::many0,
    sequence::{delimited, preceded},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Word(&'a str),
    Punct(char),
    /// An AS-path regular expression, `<...>`, without the brackets
    AsPath(&'a str),
}

const PUNCTUATION: &str = "{}();,";

fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !PUNCTUATION.contains(c) && c != '<' && c != '>'
}

fn token(input: &str) -> IResult<&str, Token<'_>> {
    preceded(
        multispace0,
        alt((
            // Shift-assign operators of actions, before `<` opens an AS path
            map(alt((tag("<<="), tag(">>="))), Token::Word),
            map(delimited(char('<'), take_until(">"), char('>')), Token::AsPath),
            map(one_of(PUNCTUATION), Token::Punct),
            map(take_while1(is_word_char), Token::Word),
        )),
    )(input)
}

pub(crate) fn tokenize(input: &str) -> ParseResult<Vec<Token<'_>>> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseError::Empty);
    }
    let (rest, tokens) = many0(token)(input)
        .map_err(|_| ParseError::Unexpected(input.to_string()))?;
    let rest = rest.trim_start();
    if rest.is_empty() {
        Ok(tokens)
    } else {
        Err(ParseError::Unexpected(rest.to_string()))
    }
}

/// A forward-only cursor over a token slice.
pub(crate) struct Cursor<'t, 'a> {
    tokens: &'t [Token<'a>],
    pos: usize,
}

impl<'t, 'a> Cursor<'t, 'a> {
    pub(crate) fn new(tokens: &'t [Token<'a>]) -> Self {
        Self { tokens, pos: 0 }
    }

    pub(crate) fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    pub(crate) fn next(&mut self) -> Option<Token<'a>> {
        let token = self.peek();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    pub(crate) fn peek_word(&self) -> Option<&'a str> {
        match self.peek() {
            Some(Token::Word(word)) => Some(word),
            _ => None,
        }
    }

    pub(crate) fn peek_keyword(&self, keyword: &str) -> bool {
        self.peek_word()
            .is_some_and(|word| word.eq_ignore_ascii_case(keyword))
    }

    pub(crate) fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.peek_keyword(keyword) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_any_keyword(&mut self, keywords: &[&str]) -> bool {
        keywords.iter().any(|keyword| self.eat_keyword(keyword))
    }

    pub(crate) fn expect_keyword(&mut self, keyword: &'static str) -> ParseResult<()> {
        if self.eat_keyword(keyword) {
            Ok(())
        } else {
            Err(ParseError::expected(keyword, self.describe_next()))
        }
    }

    pub(crate) fn eat_punct(&mut self, punct: char) -> bool {
        if self.peek() == Some(Token::Punct(punct)) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_punct(&mut self, punct: char) -> ParseResult<()> {
        if self.eat_punct(punct) {
            Ok(())
        } else {
            Err(ParseError::expected("punctuation", self.describe_next()))
        }
    }

    pub(crate) fn expect_word(&mut self, expected: &'static str) -> ParseResult<&'a str> {
        match self.next() {
            Some(Token::Word(word)) => Ok(word),
            Some(other) => Err(ParseError::expected(expected, describe(other))),
            None => Err(ParseError::expected(expected, "end of value")),
        }
    }

    pub(crate) fn expect_end(&self) -> ParseResult<()> {
        if self.at_end() {
            Ok(())
        } else {
            Err(ParseError::Unexpected(self.describe_next()))
        }
    }

    /// Skip a balanced `(...)` group; the opening paren must be next.
    pub(crate) fn skip_group(&mut self) -> ParseResult<()> {
        self.expect_punct('(')?;
        let mut depth = 1usize;
        while depth > 0 {
            match self.next() {
                Some(Token::Punct('(')) => depth += 1,
                Some(Token::Punct(')')) => depth -= 1,
                Some(_) => {}
                None => return Err(ParseError::expected(")", "end of value")),
            }
        }
        Ok(())
    }

    pub(crate) fn describe_next(&self) -> String {
        self.peek()
            .map(describe)
            .unwrap_or_else(|| "end of value".to_string())
    }
}

fn describe(token: Token<'_>) -> String {
    match token {
        Token::Word(word) => word.to_string(),
        Token::Punct(punct) => punct.to_string(),
        Token::AsPath(path) => format!("<{}>", path),
    }
}
