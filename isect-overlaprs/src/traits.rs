use num_traits::{PrimInt, Unsigned};

pub use isect_core::models::Interval;

/// A static collection of intervals on one sequence that answers
/// "which intervals overlap `[start, end)`?".
pub trait Overlapper<I, T>: Send + Sync
where
    I: PrimInt + Unsigned + Send + Sync,
    T: Eq + Clone + Send + Sync,
{
    fn build(intervals: Vec<Interval<I, T>>) -> Self
    where
        Self: Sized;

    fn find(&self, start: I, end: I) -> Vec<Interval<I, T>>;

    /// Lazily yield overlapping intervals, ordered by `(start, end)`.
    fn find_iter<'a>(
        &'a self,
        start: I,
        end: I,
    ) -> Box<dyn Iterator<Item = &'a Interval<I, T>> + 'a>;

    fn count(&self, start: I, end: I) -> usize {
        self.find_iter(start, end).count()
    }

    fn any(&self, start: I, end: I) -> bool {
        self.find_iter(start, end).next().is_some()
    }
}
