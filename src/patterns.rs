//! Seeded `i32` inputs for the tests, the benchmarks and the timing binary.
//!
//! Every generator draws from a `StdRng` seeded with one process wide seed. By default the seed is
//! picked once and reused, so every input of a run can be reproduced by passing the printed seed to
//! [`init_seed`].

use std::cmp::Reverse;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::Uniform;
use rand::prelude::*;

static USE_FIXED_SEED: AtomicBool = AtomicBool::new(true);
static SEED: OnceCell<u64> = OnceCell::new();

/// Order of the runs [`saws`] splits its input into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Saw {
    Ascending,
    Descending,
    /// Each run picks its order at random.
    Mixed,
}

/// Uniformly random values over the whole `i32` range.
pub fn random(size: usize) -> Vec<i32> {
    let mut rng = seeded_rng();

    (0..size).map(|_| rng.gen()).collect()
}

/// Uniformly random values drawn from `range`, e.g. `0..16` or `0..=1`.
pub fn random_uniform<R>(size: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist = range.into();

    seeded_rng().sample_iter(dist).take(size).collect()
}

/// A permutation of `0..size`.
pub fn shuffled(size: usize) -> Vec<i32> {
    let mut v = ascending(size);
    v.shuffle(&mut seeded_rng());

    v
}

pub fn all_equal(size: usize) -> Vec<i32> {
    vec![66; size]
}

pub fn ascending(size: usize) -> Vec<i32> {
    (0..size as i32).collect()
}

pub fn descending(size: usize) -> Vec<i32> {
    (0..size as i32).rev().collect()
}

/// Random values split into about `saw_count` sorted runs of equal length, ordered by `saw`.
///
/// A `saw_count` of 0 is treated as 1, more runs than elements give runs of length 1.
pub fn saws(size: usize, saw_count: usize, saw: Saw) -> Vec<i32> {
    let mut v = random(size);
    let run_len = (size / saw_count.max(1)).max(1);
    let mut rng = seeded_rng();

    for run in v.chunks_mut(run_len) {
        let descending = match saw {
            Saw::Ascending => false,
            Saw::Descending => true,
            Saw::Mixed => rng.gen(),
        };

        sort_run(run, descending);
    }

    v
}

/// Random values, ascending up to the middle and descending after it.
pub fn pipe_organ(size: usize) -> Vec<i32> {
    let mut v = random(size);
    let (rising, falling) = v.split_at_mut(size / 2);

    sort_run(rising, false);
    sort_run(falling, true);

    v
}

/// `log2(size)` rounded to the nearest integer, 0 for sizes below 2.
///
/// Used to scale value ranges and run counts with the input size.
pub fn log2_round(size: usize) -> usize {
    if size < 2 {
        return 0;
    }

    (size as f64).log2().round() as usize
}

/// The input shapes every sort is benchmarked with, by name. Each provider accepts any size,
/// including 0.
pub fn presets() -> Vec<(&'static str, fn(usize) -> Vec<i32>)> {
    vec![
        ("random", random),
        ("shuffled", shuffled),
        ("random_dense", |size| {
            random_uniform(size, 0..=log2_round(size) as i32)
        }),
        ("random_binary", |size| random_uniform(size, 0..=1)),
        ("ascending", ascending),
        ("descending", descending),
        ("saws_long", |size| saws(size, log2_round(size), Saw::Mixed)),
        ("pipe_organ", pipe_organ),
    ]
}

/// Draw a new seed on every call instead of reusing the process wide one.
pub fn disable_fixed_seed() {
    USE_FIXED_SEED.store(false, Ordering::Release);
}

/// Fixes the seed used by all following pattern calls. Returns false if a seed was already
/// chosen, in which case the existing seed is kept.
pub fn init_seed(seed: u64) -> bool {
    SEED.set(seed).is_ok()
}

/// The seed the next generator call will use.
pub fn random_init_seed() -> u64 {
    if USE_FIXED_SEED.load(Ordering::Acquire) {
        *SEED.get_or_init(|| thread_rng().gen())
    } else {
        thread_rng().gen()
    }
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

fn sort_run(run: &mut [i32], descending: bool) {
    if descending {
        run.sort_unstable_by_key(|&val| Reverse(val));
    } else {
        run.sort_unstable();
    }
}
