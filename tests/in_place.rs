use std::cmp::Ordering;

use sort_search::merge_sort::in_place::{
    merge_into_work_area, sort, sort_in_place, sort_into_work_area,
};
use sort_search::patterns;

/// Compares by `key` only, `origin` tells equal keys apart.
#[derive(Clone, Debug)]
struct Keyed {
    key: i32,
    origin: char,
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Keyed {}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

/// Panics when compared while marked as outside of the region being sorted.
#[derive(Debug)]
struct Fenced {
    val: i32,
    outside: bool,
}

impl PartialEq for Fenced {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Fenced {}

impl PartialOrd for Fenced {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fenced {
    fn cmp(&self, other: &Self) -> Ordering {
        assert!(
            !self.outside && !other.outside,
            "compared {self:?} with {other:?}, outside of the sorted region"
        );

        self.val.cmp(&other.val)
    }
}

fn keyed(vals: &[(i32, char)]) -> Vec<Keyed> {
    vals.iter()
        .map(|&(key, origin)| Keyed { key, origin })
        .collect()
}

fn origins(v: &[Keyed]) -> Vec<(i32, char)> {
    v.iter().map(|k| (k.key, k.origin)).collect()
}

#[test]
fn three_two_one() {
    let mut v = [3, 2, 1];
    sort(&mut v);
    assert_eq!(v, [1, 2, 3]);

    let mut v = [1, 2, 3];
    sort(&mut v);
    assert_eq!(v, [1, 2, 3]);
}

#[test]
fn merge_single_elements() {
    //    i  m
    //       j  n
    //          w
    let mut v = [5, 4, 0, 0];
    merge_into_work_area(&mut v, 0, 1, 1, 2, 2);
    assert_eq!(v, [0, 0, 4, 5]);
}

#[test]
fn merge_runs_into_tail() {
    //    i        m
    //             j        n
    //                      w
    let mut v = [4, 5, 6, 1, 2, 3, 0, 0, 0, 0, 0, 0];
    merge_into_work_area(&mut v, 0, 3, 3, 6, 6);
    assert_eq!(v, [0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn merge_work_area_runs_into_second_run() {
    // The output overlaps the second run, only in slots that were already consumed.
    let mut v = [1, 4, 0, 0, 2, 3];
    merge_into_work_area(&mut v, 0, 2, 4, 6, 2);
    assert_eq!(v[2..], [1, 2, 3, 4]);

    let mut scratch = v[..2].to_vec();
    scratch.sort();
    assert_eq!(scratch, [0, 0]);
}

#[test]
fn merge_tie_takes_right_first() {
    let mut v = keyed(&[(3, 'l'), (3, 'r'), (0, 'w'), (0, 'w')]);
    merge_into_work_area(&mut v, 0, 1, 1, 2, 2);
    assert_eq!(origins(&v[2..]), [(3, 'r'), (3, 'l')]);

    let mut v = keyed(&[
        (1, 'l'),
        (3, 'l'),
        (1, 'r'),
        (2, 'r'),
        (0, 'w'),
        (0, 'w'),
        (0, 'w'),
        (0, 'w'),
    ]);
    merge_into_work_area(&mut v, 0, 2, 2, 4, 4);
    assert_eq!(
        origins(&v[4..]),
        [(1, 'r'), (1, 'l'), (2, 'r'), (3, 'l')]
    );
}

#[test]
fn sort_equal_keys_order() {
    // The order of equal keys is not stable, but it is fixed by the merge and insertion steps.
    let mut v = keyed(&[(1, 'a'), (1, 'b'), (1, 'c')]);
    sort(&mut v);
    assert_eq!(origins(&v), [(1, 'c'), (1, 'b'), (1, 'a')]);

    let mut v = keyed(&[(1, 'a'), (1, 'b'), (1, 'c'), (1, 'd'), (1, 'e')]);
    sort(&mut v);
    assert_eq!(
        origins(&v),
        [(1, 'e'), (1, 'd'), (1, 'b'), (1, 'a'), (1, 'c')]
    );

    let tagged = [
        (2, 'a'),
        (1, 'b'),
        (2, 'c'),
        (1, 'd'),
        (2, 'e'),
        (1, 'f'),
        (0, 'g'),
        (2, 'h'),
        (1, 'i'),
        (0, 'j'),
    ];

    let mut v = keyed(&tagged);
    sort_in_place(&mut v, 0, tagged.len());
    assert_eq!(
        origins(&v),
        [
            (0, 'j'),
            (0, 'g'),
            (1, 'd'),
            (1, 'b'),
            (1, 'i'),
            (1, 'f'),
            (2, 'e'),
            (2, 'c'),
            (2, 'a'),
            (2, 'h'),
        ]
    );

    let mut v = keyed(&tagged);
    sort_in_place(&mut v, 2, 8);
    assert_eq!(
        origins(&v),
        [
            (2, 'a'),
            (1, 'b'),
            (0, 'g'),
            (1, 'f'),
            (1, 'd'),
            (2, 'h'),
            (2, 'e'),
            (2, 'c'),
            (1, 'i'),
            (0, 'j'),
        ]
    );
}

#[test]
fn sort_into_work_area_single() {
    //    l  u
    //       w
    let mut v = [9, 0];
    sort_into_work_area(&mut v, 0, 1, 1);
    assert_eq!(v, [0, 9]);
}

#[test]
fn sort_into_work_area_pair() {
    //    l     u
    //          w
    let mut v = [5, 4, 0, 0];
    sort_into_work_area(&mut v, 0, 2, 2);
    assert_eq!(v, [0, 0, 4, 5]);
}

#[test]
fn sort_into_work_area_run() {
    //    l                 u
    //                      w
    let mut v = [5, 6, 1, 4, 2, 3, 0, 0, 0, 0, 0, 0];
    sort_into_work_area(&mut v, 0, 6, 6);
    assert_eq!(v, [0, 0, 0, 0, 0, 0, 1, 2, 3, 4, 5, 6]);
}

#[test]
fn sort_into_work_area_before_run() {
    // Work area in front of the range, as the in-place sort uses it for its outer iterations.
    let mut v = [-1, -2, -3, 30, 10, 20];
    sort_into_work_area(&mut v, 3, 6, 0);
    assert_eq!(v[..3], [10, 20, 30]);

    let mut scratch = v[3..].to_vec();
    scratch.sort();
    assert_eq!(scratch, [-3, -2, -1]);
}

#[test]
fn every_len_up_to_300() {
    for len in 0..=300 {
        let mut v = patterns::shuffled(len);
        sort(&mut v);
        assert_eq!(v, (0..len as i32).collect::<Vec<_>>(), "len: {len}");

        let mut v = patterns::random_uniform(len, 0..8);
        let mut expected = v.clone();
        expected.sort();
        sort(&mut v);
        assert_eq!(v, expected, "len: {len}");
    }
}

#[test]
fn subrange_only() {
    let v_orig = patterns::random(200);

    for (lo, hi) in [(0, 0), (0, 1), (5, 7), (10, 13), (0, 100), (50, 200), (37, 181)] {
        let mut v = v_orig.clone();
        sort_in_place(&mut v, lo, hi);

        let mut expected = v_orig.clone();
        expected[lo..hi].sort();
        assert_eq!(v, expected, "lo: {lo} hi: {hi}");
    }
}

#[test]
fn region_is_never_left() {
    // Every element outside lo..hi panics when compared, and has to stay where it is.
    let len = 120;
    let vals = patterns::random_uniform(len, 0..50);

    for (lo, hi) in [(1, 3), (3, 6), (7, 20), (20, 21), (30, 90), (1, 119)] {
        let mut v = vals
            .iter()
            .enumerate()
            .map(|(i, &val)| Fenced {
                val,
                outside: i < lo || i >= hi,
            })
            .collect::<Vec<_>>();

        sort_in_place(&mut v, lo, hi);

        for (i, elem) in v.iter().enumerate() {
            if i < lo || i >= hi {
                assert!(elem.outside, "region element moved to {i}");
                assert_eq!(elem.val, vals[i]);
            } else {
                assert!(!elem.outside, "outside element moved to {i}");
            }
        }

        assert!(v[lo..hi].windows(2).all(|w| w[0].val <= w[1].val));

        let mut got = v[lo..hi].iter().map(|e| e.val).collect::<Vec<_>>();
        let mut expected = vals[lo..hi].to_vec();
        got.sort();
        expected.sort();
        assert_eq!(got, expected);
    }
}

#[test]
fn values_are_moved_not_copied() {
    // Fenced is not Clone, the sort has to get by with swaps alone.
    let mut v = patterns::random(500)
        .into_iter()
        .map(|val| Fenced {
            val,
            outside: false,
        })
        .collect::<Vec<_>>();

    sort(&mut v);

    assert!(v.windows(2).all(|w| w[0].val <= w[1].val));
}
