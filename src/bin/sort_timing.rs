//! Times the sorts of this crate against each other on one large shuffled input.

use std::time::Instant;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};

use sort_search::merge_sort::{in_place, indexed, sliced};
use sort_search::naive::{binsert, bubble};
use sort_search::{patterns, rust_std, Sort};

/// Sorts a shuffled permutation of 0..len with each selected sort and prints the elapsed time.
#[derive(Parser, Debug)]
#[command(name = "sort_timing", version, about)]
struct Args {
    /// Number of elements to sort.
    #[arg(long, default_value_t = 1_000_000)]
    len: usize,

    /// Which group of sorts to compare.
    #[arg(long, value_enum, default_value_t = Suite::Merge)]
    suite: Suite,

    /// Seed for the input permutation, random if not given.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum Suite {
    /// Allocating merge sorts against the in-place merge sort.
    Merge,
    /// Allocating merge sort against binary insertion sort.
    Binsert,
    /// Everything, including bubble sort.
    All,
}

/// Sorts above this length take minutes with a quadratic algorithm.
const QUADRATIC_WARN_LEN: usize = 100_000;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    log::info!("{args:?}");

    if let Some(seed) = args.seed {
        patterns::init_seed(seed);
    }
    log::debug!("Seed: {}", patterns::random_init_seed());

    let input = patterns::shuffled(args.len);

    let mut expected = input.clone();
    expected.sort();

    println!("{} {}", std::env::consts::OS, std::env::consts::ARCH);
    println!("--------------");

    match args.suite {
        Suite::Merge => {
            time_sort::<sliced::SortImpl>(&input, &expected)?;
            time_sort::<indexed::SortImpl>(&input, &expected)?;
            time_sort::<in_place::SortImpl>(&input, &expected)?;
            time_sort::<rust_std::SortImpl>(&input, &expected)?;
        }
        Suite::Binsert => {
            time_sort::<sliced::SortImpl>(&input, &expected)?;
            time_quadratic_sort::<binsert::SortImpl>(&input, &expected)?;
            time_sort::<rust_std::SortImpl>(&input, &expected)?;
        }
        Suite::All => {
            time_sort::<sliced::SortImpl>(&input, &expected)?;
            time_sort::<indexed::SortImpl>(&input, &expected)?;
            time_sort::<in_place::SortImpl>(&input, &expected)?;
            time_quadratic_sort::<binsert::SortImpl>(&input, &expected)?;
            time_quadratic_sort::<bubble::SortImpl>(&input, &expected)?;
            time_sort::<rust_std::SortImpl>(&input, &expected)?;
        }
    }

    Ok(())
}

fn time_quadratic_sort<S: Sort>(input: &[i32], expected: &[i32]) -> anyhow::Result<()> {
    if input.len() > QUADRATIC_WARN_LEN {
        log::warn!(
            "{} is quadratic, sorting {} elements will take a long time",
            S::name(),
            input.len()
        );
    }

    time_sort::<S>(input, expected)
}

fn time_sort<S: Sort>(input: &[i32], expected: &[i32]) -> anyhow::Result<()> {
    let name = S::name();
    let mut v = input.to_vec();

    let start = Instant::now();
    S::sort(std::hint::black_box(v.as_mut_slice()));
    let elapsed = start.elapsed();

    check_sorted(&name, &v, expected).with_context(|| format!("{name} produced wrong output"))?;

    println!("{:<30} {:<10}", format!("'{name}'"), elapsed.as_secs_f64());
    log::info!("{name} done");

    Ok(())
}

fn check_sorted(name: &str, got: &[i32], expected: &[i32]) -> anyhow::Result<()> {
    if got.len() != expected.len() {
        bail!(
            "{name} changed the length from {} to {}",
            expected.len(),
            got.len()
        );
    }

    if let Some(i) = got.iter().zip(expected).position(|(a, b)| a != b) {
        bail!(
            "first mismatch at index {i}: expected {}, got {}",
            expected[i],
            got[i]
        );
    }

    Ok(())
}
