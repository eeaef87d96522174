sort_impl!("merge_indexed_alloc");

/// Returns a sorted copy of `v`, leaving `v` untouched.
///
/// Unlike [`sorted_merge`](super::sliced::sorted_merge) the recursion works on index bounds into
/// `v` and only the merge output of each step is allocated, sized up front.
///
/// Time: O(n * log n), additional space: O(n).
#[inline]
pub fn sorted_merge_opt<T>(v: &[T]) -> Vec<T>
where
    T: Ord + Clone,
{
    merge_sort(v, 0, v.len(), &mut |a, b| a.lt(b))
}

/// Sorts `v` by way of [`sorted_merge_opt`], moving the result back into `v`.
pub fn sort<T>(v: &mut [T])
where
    T: Ord + Clone,
{
    let sorted = sorted_merge_opt(v);
    for (dst, src) in v.iter_mut().zip(sorted) {
        *dst = src;
    }
}

/// Returns the sorted contents of `v[lo..hi]`.
fn merge_sort<T, F>(v: &[T], lo: usize, hi: usize, is_less: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    if hi - lo <= 1 {
        return v[lo..hi].to_vec();
    }

    let mid = lo + (hi - lo) / 2;
    let left = merge_sort(v, lo, mid, is_less);
    let right = merge_sort(v, mid, hi, is_less);

    let mut merged = Vec::with_capacity(hi - lo);
    super::merge_runs(left, right, &mut merged, is_less);

    merged
}
