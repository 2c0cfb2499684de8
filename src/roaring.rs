use roaring::RoaringBitmap;

use crate::{InterpolatingSearchable, Searchable};

/// The `index`-th smallest value of the bitmap.
#[inline]
fn select(bitmap: &RoaringBitmap, index: usize) -> u32 {
    // Searches only probe indices below `len()`, where select always hits.
    bitmap.select(index as u32).unwrap_or(u32::MAX)
}

impl Searchable<u32> for RoaringBitmap {
    fn len(&self) -> usize {
        RoaringBitmap::len(self) as usize
    }

    fn is_empty(&self) -> bool {
        RoaringBitmap::is_empty(self)
    }

    fn smaller(&self, query: &u32, index: usize) -> bool {
        *query < select(self, index)
    }

    fn matches(&self, query: &u32, index: usize) -> bool {
        *query == select(self, index)
    }
}

impl InterpolatingSearchable<u32> for RoaringBitmap {
    fn value_at(&self, index: usize) -> f64 {
        select(self, index) as f64
    }

    fn value_of(&self, query: &u32) -> f64 {
        *query as f64
    }
}
