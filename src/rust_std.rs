sort_impl!("rust_std_unstable");

#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    v.sort_unstable();
}
