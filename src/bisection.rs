//! Search in sorted slices using the bisection method.
//!
//! Similar to `slice::partition_point` and `slice::binary_search`, but with explicit leftmost and
//! rightmost semantics for runs of equal elements.

/// Leftmost index for inserting `x` into the sorted `v`, such that all of `v[..i]` are less than
/// `x` and all of `v[i..]` are greater than or equal to `x`.
///
/// Time: O(log n), additional space: O(1).
#[inline]
pub fn lower_bound<T>(v: &[T], x: &T) -> usize
where
    T: Ord,
{
    // Keep everything strictly less than `x` on the left.
    bisect(v, |elem| elem < x)
}

/// Rightmost index for inserting `x` into the sorted `v`, such that all of `v[..i]` are less than
/// or equal to `x` and all of `v[i..]` are greater than `x`.
///
/// Time: O(log n), additional space: O(1).
#[inline]
pub fn upper_bound<T>(v: &[T], x: &T) -> usize
where
    T: Ord,
{
    bisect(v, |elem| elem <= x)
}

/// Index of the first element equal to `x`, or `None` if `x` is not in `v`.
pub fn search_left<T>(v: &[T], x: &T) -> Option<usize>
where
    T: Ord,
{
    let i = lower_bound(v, x);

    (i < v.len() && v[i] == *x).then_some(i)
}

/// Index of the last element equal to `x`, or `None` if `x` is not in `v`.
pub fn search_right<T>(v: &[T], x: &T) -> Option<usize>
where
    T: Ord,
{
    let i = upper_bound(v, x).checked_sub(1)?;

    (v[i] == *x).then_some(i)
}

/// Returns the first index for which `keep` is false, assuming `v` is partitioned such that all
/// elements satisfying `keep` come first.
fn bisect<T, P>(v: &[T], mut keep: P) -> usize
where
    P: FnMut(&T) -> bool,
{
    let mut l = 0;
    let mut r = v.len();

    // Invariant: keep(v[..l]) and !keep(v[r..]).
    while l < r {
        let m = l + (r - l) / 2;
        if keep(&v[m]) {
            l = m + 1;
        } else {
            r = m;
        }
    }

    l
}
