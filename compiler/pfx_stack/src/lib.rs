//! Stack growth for recursive tree passes.
//!
//! The parser builds trees iteratively, so nesting depth is only limited by
//! memory. Evaluation, folding and infix rendering recurse once per level and
//! wrap each level in [`ensure_sufficient_stack`] so that a long chain such as
//! `x 1 + 1 + 1 + ...` cannot blow the native stack.
//!
//! - **Native targets**: `stacker` allocates a fresh segment when the
//!   remaining stack drops below the red zone.
//! - **WASM targets**: plain passthrough.

/// Remaining stack below which a new segment is allocated (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
///
/// ```text
/// fn eval(node: &Node, env: Bindings) -> f64 {
///     ensure_sufficient_stack(|| match node {
///         Node::Unary { op, operand } => op.apply(eval(operand, env)),
///         // ...
///     })
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
