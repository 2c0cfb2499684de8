#![allow(dead_code)]
pub mod properties;

use quickcheck::Arbitrary;
use sortsearch::search::{self, SearchFn};
use std::fmt;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

// Arbitrary Set //
#[derive(Debug, Clone)]
pub struct SortedSet(Vec<i32>);

impl SortedSet {
    pub fn from_unsorted(mut vec: Vec<i32>) -> Self {
        vec.sort_unstable();
        vec.dedup();
        Self(vec)
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.0
    }

    pub fn cardinality(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, value: i32) -> bool {
        self.0.binary_search(&value).is_ok()
    }

    pub fn bounds(&self) -> Option<(i32, i32)> {
        Some((*self.0.first()?, *self.0.last()?))
    }
}

impl From<Vec<i32>> for SortedSet {
    fn from(value: Vec<i32>) -> Self {
        Self::from_unsorted(value)
    }
}

impl quickcheck::Arbitrary for SortedSet {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        Self::from_unsorted(Vec::<i32>::arbitrary(g))
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        Box::new(self.0.shrink().map(Self::from_unsorted))
    }
}

// Arbitrary Search Function //
#[derive(Clone)]
pub struct AnySearchFn {
    pub name: &'static str,
    pub interpolating: bool,
    pub search: SearchFn<[i32], i32>,
}

impl fmt::Debug for AnySearchFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

pub fn search_fns() -> [AnySearchFn; 3] {
    [
        AnySearchFn {
            name: "binary_search",
            interpolating: false,
            search: search::binary_search,
        },
        AnySearchFn {
            name: "interpolation_search",
            interpolating: true,
            search: search::interpolation_search,
        },
        AnySearchFn {
            name: "quadratic_binary_search",
            interpolating: true,
            search: search::quadratic_binary_search,
        },
    ]
}

impl quickcheck::Arbitrary for AnySearchFn {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        g.choose(search_fns().as_slice())
            .unwrap()
            .clone()
    }
}

// Arbitrary set with a member picked from it //
#[derive(Debug, Clone)]
pub struct SetWithMember {
    pub set: SortedSet,
    pub index: usize,
}

impl quickcheck::Arbitrary for SetWithMember {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut values = Vec::<i32>::arbitrary(g);
        values.push(i32::arbitrary(g));
        let set = SortedSet::from_unsorted(values);
        let index = usize::arbitrary(g) % set.cardinality();
        Self { set, index }
    }
}

// Evenly spaced set, the friendly case for the estimating searches //
#[derive(Debug, Clone)]
pub struct UniformSet(pub SortedSet);

impl quickcheck::Arbitrary for UniformSet {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let len = usize::arbitrary(g) % 4096 + 2;
        let stride = i32::arbitrary(g).rem_euclid(64) + 1;
        let start = i32::arbitrary(g) % 1_000_000;
        UniformSet((0..len as i32).map(|i| start + i * stride).collect::<Vec<_>>().into())
    }
}
