use crate::token::{Kind, Token};
use std::{iter::Peekable, str::CharIndices};

/// Returns true if the character can continue an identifier.
///
/// Identifiers start with a letter and continue with letters, digits,
/// underscores, and trailing primes (`x'`, `x''`). `λ` is a letter to the
/// standard library but always lexes as [`Kind::Lambda`].
fn is_ident_continue(c: char) -> bool {
    (c.is_alphanumeric() || c == '_' || c == '\'') && c != 'λ'
}

pub struct Lexer<'a> {
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            chars: src.char_indices().peekable(),
        }
    }

    fn read_while(&mut self, end: usize, mut pred: impl FnMut(char) -> bool) -> usize {
        let mut end = end;
        while let Some((index, c)) = self.chars.next_if(|&(_, c)| pred(c)) {
            end = index + c.len_utf8();
        }
        end
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        loop {
            let (start, c) = self.chars.next()?;
            let end = start + c.len_utf8();

            let kind = match c {
                c if c.is_whitespace() => continue,
                '#' => {
                    self.read_while(end, |c| !['\r', '\n'].contains(&c));
                    continue;
                }
                '\\' | 'λ' => Kind::Lambda,
                '.' => Kind::Dot,
                '(' => Kind::LParen,
                ')' => Kind::RParen,
                '_' => Kind::Underscore,
                '→' => Kind::Arrow,
                ':' => match self.chars.next_if(|&(_, c)| c == ':') {
                    Some((index, c)) => {
                        return Some(Kind::ColonColon.spanned(start..index + c.len_utf8()));
                    }
                    None => Kind::Colon,
                },
                '-' => match self.chars.next_if(|&(_, c)| c == '>') {
                    Some((index, c)) => {
                        return Some(Kind::Arrow.spanned(start..index + c.len_utf8()));
                    }
                    None => Kind::Error,
                },
                c if c.is_alphabetic() => {
                    let end = self.read_while(end, is_ident_continue);
                    return Some(Kind::Identifier.spanned(start..end));
                }
                _ => Kind::Error,
            };

            return Some(kind.spanned(start..end));
        }
    }
}
