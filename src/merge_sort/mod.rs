//! Top-down merge sorts. `sliced` and `indexed` allocate their output, `in_place` sorts within the
//! input using part of it as scratch space.
//!
//! All merges in this module take from the right run when the heads compare equal, which makes
//! them unstable.

pub mod in_place;
pub mod indexed;
pub mod sliced;

/// Merges the two ascending runs `left` and `right` by moving their elements onto the end of
/// `out`. On ties the element from `right` goes first.
pub(crate) fn merge_runs<T, F>(left: Vec<T>, right: Vec<T>, out: &mut Vec<T>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        let take_left = match (left.peek(), right.peek()) {
            (Some(a), Some(b)) => is_less(a, b),
            _ => break,
        };

        let next = if take_left { left.next() } else { right.next() };
        out.extend(next);
    }

    // At most one of them still holds elements.
    out.extend(left);
    out.extend(right);
}
