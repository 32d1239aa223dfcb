//! Lexer for postfix expressions.
//!
//! Splits the source on whitespace with logos and classifies each token:
//!
//! 1. an exact operator spelling (`+ - * / ^ sin cos`) → [`TokenKind::Operator`]
//! 2. exactly `x` or `y` → [`TokenKind::Variable`]
//! 3. a decimal literal (`2`, `-0.5`, `.25`, `1e3`) or one of the
//!    spellings `NaN`/`Infinity` → [`TokenKind::Number`]; `inf`, `nan` and
//!    other case variants stay words
//! 4. everything else → [`TokenKind::Word`], an opaque label
//!
//! Lexing never fails: any byte sequence is either whitespace or part of a
//! token.

mod raw_token;

use logos::Logos;
use pfx_ir::{Operator, Span, Variable};

use raw_token::RawToken;

/// Classified token kind.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TokenKind {
    Operator(Operator),
    Variable(Variable),
    Number(f64),
    /// Not an operator, variable or number. The text is the token's span.
    Word,
}

/// A token and its location in the source.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// The source text this token was lexed from.
    #[inline]
    pub fn text<'src>(&self, source: &'src str) -> &'src str {
        source.get(self.span.to_range()).unwrap_or_default()
    }
}

/// Lex source text into tokens, in source order.
pub fn lex(source: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::saturating_from_range(logos.span());
        let kind = match token_result {
            Ok(raw) => cook(raw, logos.slice()),
            // `Word` covers every non-whitespace byte, so this never happens
            // in practice; treat it as an opaque label all the same.
            Err(()) => TokenKind::Word,
        };
        tokens.push(Token::new(kind, span));
    }

    tokens
}

/// Turn a raw token into its final kind.
fn cook(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        // The registry owns the spellings; the raw token only says which
        // family the slice belongs to.
        RawToken::Plus
        | RawToken::Minus
        | RawToken::Star
        | RawToken::Slash
        | RawToken::Caret
        | RawToken::Sin
        | RawToken::Cos => Operator::from_symbol(slice).map_or(TokenKind::Word, TokenKind::Operator),
        RawToken::X | RawToken::Y => {
            Variable::from_symbol(slice).map_or(TokenKind::Word, TokenKind::Variable)
        }
        RawToken::Number => slice
            .parse::<f64>()
            .map_or(TokenKind::Word, TokenKind::Number),
        RawToken::Word => TokenKind::Word,
    }
}
