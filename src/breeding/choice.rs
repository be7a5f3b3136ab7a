//! Weighted random-choice primitives shared by every crossover strand.
//!
//! The draw-and-branch pattern ("take A's side with probability `weight_a`,
//! fall back across parents when a side is missing") recurs across the
//! cognition, tone, and workflow blends, so it lives here once.

use indexmap::IndexMap;
use rand::Rng;

/// Unweighted 50/50 flip.
pub fn coin_flip<R: Rng>(rng: &mut R) -> bool {
    rng.gen::<f64>() < 0.5
}

/// Pick between two optional values with probability `weight_a` of taking
/// the first. A missing side falls back to the other, so the result is
/// `None` only when both sides are.
pub fn weighted_pick<'a, T, R: Rng>(
    rng: &mut R,
    a: Option<&'a T>,
    b: Option<&'a T>,
    weight_a: f64,
) -> Option<&'a T> {
    if rng.gen::<f64>() < weight_a {
        a.or(b)
    } else {
        b.or(a)
    }
}

/// Per-key weighted merge of two maps.
///
/// Every key present in either map gets an independent weighted pick, so
/// siblings bred from the same parents inherit different keys from
/// different sides. Key order is A's keys first, then B's novel keys.
pub fn weighted_merge<V: Clone, R: Rng>(
    rng: &mut R,
    a: &IndexMap<String, V>,
    b: &IndexMap<String, V>,
    weight_a: f64,
) -> IndexMap<String, V> {
    let mut merged = IndexMap::new();
    let keys: Vec<&String> = a
        .keys()
        .chain(b.keys().filter(|key| !a.contains_key(*key)))
        .collect();
    for key in keys {
        if let Some(value) = weighted_pick(rng, a.get(key), b.get(key), weight_a) {
            merged.insert(key.clone(), value.clone());
        }
    }
    merged
}

/// Weighted round-robin interleave of two ordered lists, capped at `cap`
/// items. At each step the first list's next item is taken when the second
/// is exhausted or a fresh draw lands under `weight_a`; otherwise the
/// second list's next item is taken.
pub fn weighted_interleave<T: Clone, R: Rng>(
    rng: &mut R,
    a: &[T],
    b: &[T],
    weight_a: f64,
    cap: usize,
) -> Vec<T> {
    let mut merged = Vec::new();
    let (mut ia, mut ib) = (0, 0);
    while merged.len() < cap && (ia < a.len() || ib < b.len()) {
        if ia < a.len() && (ib >= b.len() || rng.gen::<f64>() < weight_a) {
            merged.push(a[ia].clone());
            ia += 1;
        } else if ib < b.len() {
            merged.push(b[ib].clone());
            ib += 1;
        }
    }
    merged
}
