sort_impl!("bubble_in_place");

/// Bubble sort. Repeats passes of adjacent exchanges until a pass leaves everything in place.
///
/// Time: O(n * n), additional space: O(1).
pub fn sort_bubble<T>(v: &mut [T])
where
    T: Ord,
{
    if v.len() < 2 {
        return;
    }

    let mut exchanged = true;
    while exchanged {
        exchanged = false;
        for i in 1..v.len() {
            if v[i] < v[i - 1] {
                v.swap(i - 1, i);
                exchanged = true;
            }
        }
    }
}

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    sort_bubble(v);
}
