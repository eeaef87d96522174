//! In-place merge sort.
//!
//! Sorts using O(1) additional memory by treating a not yet sorted part of the input as the work
//! area for merges. Merging swaps elements into the work area instead of copying them, so the
//! former contents of the work area end up where the merged elements came from. Nothing is lost,
//! it is just unsorted again, and later iterations sort it with a work area that halves each time.
//!
//! The scheme follows the in-place merge sort from Xinyu Liu's AlgoXY
//! <https://github.com/liuxinyu95/AlgoXY/blob/algoxy/sorting/merge-sort/src/mergesort.c>.
//!
//! Every function here takes explicit index bounds into one slice, the work area and the runs
//! being merged live in the same storage.

sort_impl!("merge_in_place");

/// Sorts the whole slice in place.
///
/// Slower than the allocating merge sorts in practice, every element is moved with a swap.
///
/// Time: O(n * log n), additional space: O(1) plus O(log n) recursion depth.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    let len = v.len();
    sort_region(v, 0, len, &mut |a, b| a.lt(b));
}

/// Sorts `v[lo..hi]` in place. Elements outside of `lo..hi` are neither read nor moved.
///
/// Panics if `lo..hi` is not a valid range of `v`.
#[inline]
pub fn sort_in_place<T>(v: &mut [T], lo: usize, hi: usize)
where
    T: Ord,
{
    debug_assert!(lo <= hi && hi <= v.len());

    sort_region(v, lo, hi, &mut |a, b| a.lt(b));
}

/// Sorts `v[lo..hi]` and swaps the result into the work area `v[w..w + (hi - lo)]`. The previous
/// contents of the work area end up, in unspecified order, in `v[lo..hi]`.
///
/// The work area must not overlap `lo..hi`.
#[inline]
pub fn sort_into_work_area<T>(v: &mut [T], lo: usize, hi: usize, w: usize)
where
    T: Ord,
{
    debug_assert!(lo <= hi && (w >= hi || w + (hi - lo) <= lo));

    sort_into(v, lo, hi, w, &mut |a, b| a.lt(b));
}

/// Merges the sorted runs `v[i..m]` and `v[j..n]` into the `(m - i) + (n - j)` slots starting at
/// `w`, by swapping. On ties the element from `v[j..n]` goes first.
///
/// The slots starting at `w` may only overlap a run in positions the merge has already consumed,
/// e.g. a work area that directly precedes the second run.
#[inline]
pub fn merge_into_work_area<T>(v: &mut [T], i: usize, m: usize, j: usize, n: usize, w: usize)
where
    T: Ord,
{
    debug_assert!(i <= m && j <= n && w + (m - i) + (n - j) <= v.len());

    merge_into(v, i, m, j, n, w, &mut |a, b| a.lt(b));
}

fn sort_region<T, F>(v: &mut [T], lo: usize, hi: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if hi - lo <= 1 {
        return;
    }

    // Sort the left half into the tail of the region. Afterwards v[w..hi] is sorted and v[lo..w]
    // is scratch.
    let mid = lo + (hi - lo) / 2;
    let mut w = lo + (hi - mid);
    sort_into(v, lo, mid, w, is_less);

    // Sort the upper half of the scratch into its lower half and merge that with the sorted tail,
    // which leaves a scratch area half the size.
    while w - lo > 2 {
        let n = w;
        w = lo + (n - lo + 1) / 2;
        sort_into(v, w, n, lo, is_less);
        merge_into(v, lo, lo + n - w, n, hi, w, is_less);
    }

    // At most two unsorted elements are left in front of the sorted tail.
    for n in (lo + 1..=w).rev() {
        insert_head(v, n - 1, hi, is_less);
    }
}

/// Moves `v[head]` forward until `v[head..hi]` is sorted, assuming `v[head + 1..hi]` already is.
fn insert_head<T, F>(v: &mut [T], head: usize, hi: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for m in head + 1..hi {
        if !is_less(&v[m], &v[m - 1]) {
            break;
        }

        v.swap(m - 1, m);
    }
}

fn sort_into<T, F>(v: &mut [T], mut lo: usize, hi: usize, mut w: usize, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        sort_region(v, lo, mid, is_less);
        sort_region(v, mid, hi, is_less);
        merge_into(v, lo, mid, mid, hi, w, is_less);
    } else {
        while lo < hi {
            v.swap(lo, w);
            lo += 1;
            w += 1;
        }
    }
}

fn merge_into<T, F>(
    v: &mut [T],
    mut i: usize,
    m: usize,
    mut j: usize,
    n: usize,
    mut w: usize,
    is_less: &mut F,
) where
    F: FnMut(&T, &T) -> bool,
{
    while i < m && j < n {
        if is_less(&v[i], &v[j]) {
            v.swap(i, w);
            i += 1;
        } else {
            v.swap(j, w);
            j += 1;
        }
        w += 1;
    }

    while i < m {
        v.swap(i, w);
        i += 1;
        w += 1;
    }

    while j < n {
        v.swap(j, w);
        j += 1;
        w += 1;
    }
}
