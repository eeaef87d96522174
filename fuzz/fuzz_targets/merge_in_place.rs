#![no_main]

use libfuzzer_sys::fuzz_target;

use sort_search::merge_sort::in_place as test_sort;

fuzz_target!(|data: (&[u8], u16, u16)| {
    let (data, a, b) = data;

    let mut v = data.to_vec();
    test_sort::sort(&mut v);

    let mut expected = data.to_vec();
    expected.sort();
    assert_eq!(v, expected);

    // Sorting a subrange must leave everything outside of it alone.
    if data.is_empty() {
        return;
    }

    let (lo, hi) = {
        let a = a as usize % (data.len() + 1);
        let b = b as usize % (data.len() + 1);
        (a.min(b), a.max(b))
    };

    let mut v = data.to_vec();
    test_sort::sort_in_place(&mut v, lo, hi);

    let mut expected = data.to_vec();
    expected[lo..hi].sort();
    assert_eq!(v, expected);
});
