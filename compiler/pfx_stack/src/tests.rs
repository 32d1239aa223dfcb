use super::*;

/// Minimal stand-in for a unary chain like `x sin sin sin ...`.
enum Chain {
    Leaf(f64),
    Link(Box<Chain>),
}

fn build_chain(depth: usize) -> Chain {
    let mut chain = Chain::Leaf(1.0);
    for _ in 0..depth {
        chain = Chain::Link(Box::new(chain));
    }
    chain
}

fn count_links(chain: &Chain) -> usize {
    ensure_sufficient_stack(|| match chain {
        Chain::Leaf(_) => 0,
        Chain::Link(inner) => count_links(inner) + 1,
    })
}

fn leaf_value(chain: &Chain) -> f64 {
    ensure_sufficient_stack(|| match chain {
        Chain::Leaf(v) => *v,
        Chain::Link(inner) => leaf_value(inner),
    })
}

/// Tear the chain down iteratively; the default drop would recurse.
fn dismantle(mut chain: Chain) {
    while let Chain::Link(inner) = chain {
        chain = *inner;
    }
}

#[test]
fn shallow_recursion() {
    let chain = build_chain(10);
    assert_eq!(count_links(&chain), 10);
    dismantle(chain);
}

#[test]
fn deep_recursion() {
    // 100k levels would overflow a test thread's stack without growth
    let chain = build_chain(100_000);
    assert_eq!(count_links(&chain), 100_000);
    assert!((leaf_value(&chain) - 1.0).abs() < f64::EPSILON);
    dismantle(chain);
}

#[test]
fn returns_closure_result() {
    assert_eq!(ensure_sufficient_stack(|| 42), 42);
}

#[test]
fn works_with_result_type() {
    let result: Result<f64, &str> = ensure_sufficient_stack(|| Ok(2.5));
    assert_eq!(result, Ok(2.5));
}
