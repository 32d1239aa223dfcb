//! Raw Token Definition
//!
//! The `RawToken` enum is the logos-derived tokenizer output before literal
//! classification. Every maximal run of non-whitespace is one token. When
//! several variants match the whole run, exact operator and variable
//! spellings and numeric literals win over the catch-all `Word` by priority.

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum RawToken {
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("^")]
    Caret,
    #[token("sin")]
    Sin,
    #[token("cos")]
    Cos,

    #[token("x")]
    X,
    #[token("y")]
    Y,

    /// Decimal literal, optionally signed, with optional fraction and
    /// exponent (`2`, `-0.5`, `.25`, `1e3`), or `NaN`/`Infinity`.
    #[regex(
        r"[+-]?(([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?|NaN|Infinity)",
        priority = 2
    )]
    Number,

    // Lowest priority: a run only becomes a `Word` when no exact spelling
    // above covers all of it.
    #[regex(r"[^ \t\r\n\f]+", priority = 1)]
    Word,
}
