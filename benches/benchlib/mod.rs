use std::{collections::BTreeSet, ops::Range};

use rand::{distributions::Uniform, prelude::Distribution, rngs::ThreadRng, seq::SliceRandom, thread_rng, Rng};

/// Draws distinct values from `sample` until `cardinality` are collected,
/// returned in ascending order.
fn sorted_set<F>(cardinality: usize, mut sample: F) -> Vec<u32>
where
    F: FnMut(&mut ThreadRng) -> u32,
{
    let rng = &mut thread_rng();

    let mut set: BTreeSet<u32> = BTreeSet::new();
    while set.len() < cardinality {
        set.insert(sample(rng));
    }
    set.into_iter().collect()
}

/// Evenly spread values, the friendly case for position estimates.
/// `range` must be much wider than `cardinality`.
pub fn uniform_sorted_set(range: Range<u32>, cardinality: usize) -> Vec<u32> {
    assert!(cardinality <= range.len() / 2);

    let dist = Uniform::from(range);
    sorted_set(cardinality, |rng| dist.sample(rng))
}

/// Values crowd towards zero, so linear position estimates are poor.
pub fn skewed_sorted_set(max: u32, cardinality: usize) -> Vec<u32> {
    sorted_set(cardinality, |rng| {
        let u: f64 = rng.gen();
        (u.powi(4) * max as f64) as u32
    })
}

pub fn sample_queries(set: &[u32], count: usize) -> Vec<u32> {
    let rng = &mut thread_rng();
    (0..count).map(|_| *set.choose(rng).unwrap()).collect()
}
