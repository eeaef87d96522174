sort_impl!("merge_sliced_alloc");

/// Returns a sorted copy of `v`, leaving `v` untouched.
///
/// Every recursion level copies both halves into freshly allocated vectors and grows the merged
/// output one element at a time. Simple, but allocation heavy compared to
/// [`sorted_merge_opt`](super::indexed::sorted_merge_opt).
///
/// Time: O(n * log n), additional space: O(n).
#[inline]
pub fn sorted_merge<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    merge_sort(v, &mut |a, b| a.lt(b))
}

/// Sorts `v` by way of [`sorted_merge`], moving the result back into `v`.
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    let sorted = sorted_merge(v);
    for (dst, src) in v.iter_mut().zip(sorted) {
        *dst = src;
    }
}

fn merge_sort<T, F>(v: &[T], is_less: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if v.len() <= 1 {
        return v.to_vec();
    }

    let mid = v.len() / 2;
    let (left_half, right_half) = (v[..mid].to_vec(), v[mid..].to_vec());

    let left = merge_sort(&left_half, is_less);
    let right = merge_sort(&right_half, is_less);

    let mut merged = Vec::new();
    super::merge_runs(left, right, &mut merged, is_less);

    merged
}
