//! Recursive-descent parser for λ-terms and constraint skeletons.

use crate::{
    error::{ParseError, Result},
    lexer::Lexer,
    span::Span,
    token::{Kind, Token},
};
use ostinato_core::{ConstraintTerm, NamedType, Term, Ty};

/// A parsed query: a term, optionally constrained (`term :: constraint`).
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub term: Term<String>,
    pub constraint: Option<ConstraintTerm>,
}

/// Parses a λ-term.
pub fn parse_term(src: &str) -> Result<Term<String>> {
    let mut parser = Parser::new(src);
    let term = parser.term()?;
    parser.finish()?;
    Ok(term)
}

/// Parses a constraint skeleton.
pub fn parse_constraint(src: &str) -> Result<ConstraintTerm> {
    let mut parser = Parser::new(src);
    let constraint = parser.constraint()?;
    parser.finish()?;
    Ok(constraint)
}

/// Parses a query: a term, optionally followed by `:: constraint`.
pub fn parse_query(src: &str) -> Result<Query> {
    let mut parser = Parser::new(src);
    let term = parser.term()?;
    let constraint = if parser.eat(Kind::ColonColon) {
        Some(parser.constraint()?)
    } else {
        None
    };
    parser.finish()?;
    Ok(Query { term, constraint })
}

struct Parser<'a> {
    src: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            tokens: Lexer::new(src).collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn at(&self, kind: Kind) -> bool {
        self.peek().is_some_and(|token| token == kind)
    }

    fn eat(&mut self, kind: Kind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: Kind) -> Result<Token> {
        match self.peek() {
            Some(token) if token == kind => {
                self.pos += 1;
                Ok(token)
            }
            found => Err(self.unexpected(found, kind.describe())),
        }
    }

    fn unexpected(&self, found: Option<Token>, expected: &str) -> ParseError {
        match found {
            Some(token) => ParseError::new(
                format!("expected {expected}, found {}", token.kind.describe()),
                token.span,
            ),
            None => ParseError::new(
                format!("expected {expected}, found end of input"),
                Span::from(self.src.len()),
            ),
        }
    }

    fn text(&self, token: Token) -> &'a str {
        &self.src[std::ops::Range::from(token.span)]
    }

    fn ident(&mut self) -> Result<String> {
        let token = self.expect(Kind::Identifier)?;
        Ok(self.text(token).to_string())
    }

    fn finish(&mut self) -> Result<()> {
        match self.peek() {
            None => Ok(()),
            found => Err(self.unexpected(found, "end of input")),
        }
    }

    fn term(&mut self) -> Result<Term<String>> {
        if self.at(Kind::Lambda) {
            self.abs()
        } else {
            self.app()
        }
    }

    fn abs(&mut self) -> Result<Term<String>> {
        self.expect(Kind::Lambda)?;
        let mut binders = vec![self.ident()?];
        while self.at(Kind::Identifier) {
            binders.push(self.ident()?);
        }
        self.expect(Kind::Dot)?;
        let body = self.term()?;
        Ok(binders
            .into_iter()
            .rev()
            .fold(body, |body, binder| Term::abs(binder, body)))
    }

    fn app(&mut self) -> Result<Term<String>> {
        let mut term = self.atom()?;
        while self.at_atom_start() {
            let arg = self.atom()?;
            term = Term::app(term, arg);
        }
        Ok(term)
    }

    fn at_atom_start(&self) -> bool {
        self.at(Kind::Identifier) || self.at(Kind::LParen)
    }

    fn atom(&mut self) -> Result<Term<String>> {
        match self.peek() {
            Some(token) if token == Kind::Identifier => {
                self.pos += 1;
                Ok(Term::Var(self.text(token).to_string()))
            }
            Some(token) if token == Kind::LParen => {
                self.pos += 1;
                let term = self.term()?;
                self.expect(Kind::RParen)?;
                Ok(term)
            }
            found => Err(self.unexpected(found, "a term")),
        }
    }

    fn constraint(&mut self) -> Result<ConstraintTerm> {
        if self.at(Kind::Lambda) {
            self.constraint_abs()
        } else {
            self.constraint_app()
        }
    }

    fn constraint_abs(&mut self) -> Result<ConstraintTerm> {
        self.expect(Kind::Lambda)?;
        // binder names are positional in a skeleton; only annotations matter
        let mut annotations = Vec::new();
        loop {
            self.ident()?;
            let annotation = if self.eat(Kind::Colon) {
                Some(self.ty()?)
            } else {
                None
            };
            annotations.push(annotation);
            if !self.at(Kind::Identifier) {
                break;
            }
        }
        self.expect(Kind::Dot)?;
        let body = self.constraint()?;
        Ok(annotations
            .into_iter()
            .rev()
            .fold(body, |body, annotation| Term::abs(annotation, body)))
    }

    fn constraint_app(&mut self) -> Result<ConstraintTerm> {
        let mut term = self.constraint_atom()?;
        while self.at_constraint_atom_start() {
            let arg = self.constraint_atom()?;
            term = Term::app(term, arg);
        }
        Ok(term)
    }

    fn at_constraint_atom_start(&self) -> bool {
        self.at(Kind::Identifier) || self.at(Kind::LParen) || self.at(Kind::Underscore)
    }

    fn constraint_atom(&mut self) -> Result<ConstraintTerm> {
        match self.peek() {
            Some(token) if token == Kind::Underscore => {
                self.pos += 1;
                Ok(Term::Var(None))
            }
            Some(token) if token == Kind::Identifier => Ok(Term::Var(Some(self.ty()?))),
            Some(token) if token == Kind::LParen => {
                self.pos += 1;
                let inner = self.constraint()?;
                self.expect(Kind::RParen)?;
                if self.at(Kind::Arrow) {
                    // `(A -> B) -> C`: the group was the domain of a type
                    let domain = match inner {
                        Term::Var(Some(ty)) => ty,
                        _ => {
                            return Err(ParseError::new(
                                "expected a type before '->'",
                                self.here(),
                            ));
                        }
                    };
                    self.expect(Kind::Arrow)?;
                    let codomain = self.ty()?;
                    Ok(Term::Var(Some(Ty::arrow(domain, codomain))))
                } else {
                    Ok(inner)
                }
            }
            found => Err(self.unexpected(found, "a constraint")),
        }
    }

    fn ty(&mut self) -> Result<NamedType> {
        let domain = self.ty_atom()?;
        if self.eat(Kind::Arrow) {
            let codomain = self.ty()?;
            Ok(Ty::arrow(domain, codomain))
        } else {
            Ok(domain)
        }
    }

    fn ty_atom(&mut self) -> Result<NamedType> {
        match self.peek() {
            Some(token) if token == Kind::Identifier => {
                self.pos += 1;
                Ok(Ty::Var(self.text(token).to_string()))
            }
            Some(token) if token == Kind::LParen => {
                self.pos += 1;
                let ty = self.ty()?;
                self.expect(Kind::RParen)?;
                Ok(ty)
            }
            found => Err(self.unexpected(found, "a type")),
        }
    }

    fn here(&self) -> Span {
        self.peek()
            .map(|token| token.span)
            .unwrap_or_else(|| Span::from(self.src.len()))
    }
}
