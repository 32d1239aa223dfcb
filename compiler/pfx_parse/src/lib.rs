//! Postfix parser.
//!
//! Builds an expression tree from a whitespace-separated postfix token
//! stream with a single operand stack:
//!
//! - a leaf token (number, `x`/`y`, any other word) pushes a leaf node;
//! - an operator of arity *k* pops *k* nodes and pushes the operator node,
//!   with the earlier-pushed operand as its left (first) child.
//!
//! At the end the stack must hold exactly one node, the root.
//!
//! ```text
//! "x 2 ^ sin x y * +"  →  ( sin( ( x ^ 2 ) ) + ( x * y ) )
//! ```
//!
//! The parser is iterative, so arbitrarily deep expressions parse in
//! constant native stack space.

mod error;

pub use error::ParseError;

use pfx_ir::{Literal, Node, Operator, Span, Tree};
use pfx_lexer::{lex, Token, TokenKind};
use tracing::{debug, trace};

/// Parse a postfix expression into a tree.
#[tracing::instrument(level = "debug", skip(source), fields(len = source.len()))]
pub fn parse(source: &str) -> Result<Tree, ParseError> {
    let tokens = lex(source);
    debug!(tokens = tokens.len(), "lexed");
    Parser::new(source).parse_tokens(&tokens)
}

/// A partially built subtree and the source range it was read from.
///
/// Held as a `Tree` so that subtrees left over after an error are torn down
/// iteratively.
struct Operand {
    tree: Tree,
    span: Span,
}

/// Parser state: the operand stack.
struct Parser<'src> {
    source: &'src str,
    stack: Vec<Operand>,
}

impl<'src> Parser<'src> {
    fn new(source: &'src str) -> Self {
        Parser {
            source,
            stack: Vec::new(),
        }
    }

    fn parse_tokens(mut self, tokens: &[Token]) -> Result<Tree, ParseError> {
        for token in tokens {
            match token.kind {
                TokenKind::Operator(op) => self.reduce(op, token.span)?,
                kind => {
                    let node = self.leaf(kind, token);
                    trace!(label = node.label(), span = %token.span, "push leaf");
                    self.stack.push(Operand {
                        tree: Tree::new(node),
                        span: token.span,
                    });
                }
            }
        }
        self.finish()
    }

    fn leaf(&self, kind: TokenKind, token: &Token) -> Node {
        let text = token.text(self.source);
        match kind {
            TokenKind::Number(value) => Node::Constant(Literal::new(value, text)),
            TokenKind::Variable(var) => Node::Variable(var),
            TokenKind::Word | TokenKind::Operator(_) => Node::Symbol(text.into()),
        }
    }

    /// Pop the operator's operands and push the operator node.
    fn reduce(&mut self, op: Operator, span: Span) -> Result<(), ParseError> {
        let underflow = ParseError::StackUnderflow {
            operator: op.as_symbol(),
            expected: op.arity(),
            found: self.stack.len(),
            span,
        };

        let operand = match op {
            Operator::Unary(unary) => {
                let Some(operand) = self.stack.pop() else {
                    return Err(underflow);
                };
                Operand {
                    span: operand.span.merge(span),
                    tree: Tree::unary(unary, operand.tree),
                }
            }
            Operator::Binary(binary) => {
                // The operand pushed last is the right-hand one.
                let (Some(right), Some(left)) = (self.stack.pop(), self.stack.pop()) else {
                    return Err(underflow);
                };
                Operand {
                    span: left.span.merge(span),
                    tree: Tree::binary(binary, left.tree, right.tree),
                }
            }
        };
        trace!(operator = op.as_symbol(), span = %operand.span, "reduce");
        self.stack.push(operand);
        Ok(())
    }

    /// The stack must hold exactly the root.
    fn finish(self) -> Result<Tree, ParseError> {
        let remaining = self.stack.len();
        let mut operands = self.stack.into_iter();
        match (operands.next(), operands.next()) {
            (Some(root), None) => Ok(root.tree),
            (None, _) => Err(ParseError::MalformedExpression {
                remaining: 0,
                span: Span::saturating_from_range(self.source.len()..self.source.len()),
            }),
            (Some(_), Some(dangling)) => {
                // Everything after the first complete subtree is unconnected.
                let span = operands.fold(dangling.span, |span, operand| span.merge(operand.span));
                debug!(remaining, %span, "unconnected operands");
                Err(ParseError::MalformedExpression { remaining, span })
            }
        }
    }
}
