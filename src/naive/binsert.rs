use crate::bisection::lower_bound;

sort_impl!("binsert_alloc");

/// Returns a sorted copy of `v`, built by inserting each element at its bisection-determined
/// position in a growing output.
///
/// The search is O(log n) but every `Vec::insert` shifts the tail, so this is
/// O(n * n * log n) overall. Additional space: O(n).
pub fn sorted_binsert<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    v.iter().fold(Vec::with_capacity(v.len()), |mut sorted, elem| {
        let i = lower_bound(&sorted, elem);
        sorted.insert(i, elem.clone());
        sorted
    })
}

pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    let sorted = sorted_binsert(v);
    for (dst, src) in v.iter_mut().zip(sorted) {
        *dst = src;
    }
}
