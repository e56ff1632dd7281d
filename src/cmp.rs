use std::cmp::Ordering;

/// A three-way comparator that owns its comparison counter.
///
/// The counter lives inside the comparator value, so a benchmark trial gets
/// a fresh count by calling `reset` instead of touching shared state.
pub trait Compare<T> {
    fn compare(&mut self, a: &T, b: &T) -> Ordering;

    /// Comparisons performed since creation or the last `reset`.
    fn comparisons(&self) -> u64;

    fn reset(&mut self);
}

/// Wraps an ordering function, counting one comparison per call.
pub struct Counting<F> {
    cmp: F,
    count: u64,
}

impl<F> Counting<F> {
    pub fn new(cmp: F) -> Counting<F> {
        Counting { cmp, count: 0 }
    }
}

impl<T, F> Compare<T> for Counting<F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self.count += 1;
        (self.cmp)(a, b)
    }

    fn comparisons(&self) -> u64 {
        self.count
    }

    fn reset(&mut self) {
        self.count = 0;
    }
}

/// Counting comparator over the natural order of `T`.
pub fn natural<T: Ord>() -> Counting<fn(&T, &T) -> Ordering> {
    Counting::new(T::cmp as fn(&T, &T) -> Ordering)
}
