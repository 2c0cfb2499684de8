/// Receives every index a search probes, in probe order, so callers can
/// count or replay the work a search did.
pub trait Visitor {
    fn visit(&mut self, index: usize);
    fn clear(&mut self);
}

/// Discards probes.
impl Visitor for () {
    #[inline]
    fn visit(&mut self, _index: usize) {}

    #[inline]
    fn clear(&mut self) {}
}

/// Counts probes without storing them.
#[derive(Debug, Default)]
pub struct Counter {
    count: usize,
}

impl Visitor for Counter {
    fn visit(&mut self, _index: usize) {
        self.count += 1;
    }

    fn clear(&mut self) {
        self.count = 0;
    }
}

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Records the probe sequence in a vector.
#[derive(Debug, Default)]
pub struct VecWriter {
    data: Vec<usize>,
}

impl VecWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }
}

impl AsRef<[usize]> for VecWriter {
    fn as_ref(&self) -> &[usize] {
        &self.data
    }
}

impl From<VecWriter> for Vec<usize> {
    fn from(writer: VecWriter) -> Self {
        writer.data
    }
}

impl Visitor for VecWriter {
    fn visit(&mut self, index: usize) {
        self.data.push(index);
    }

    fn clear(&mut self) {
        self.data.clear();
    }
}
