/// Common interface of every sort in this crate, so tests and benchmarks can be written once and
/// instantiated per implementation.
pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord + Clone;
}

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord + Clone,
            {
                sort(arr);
            }
        }
    };
}

pub mod bisection;
pub mod merge_sort;
pub mod naive;
pub mod patterns;

// The standard library sort, as reference point for the others.
pub mod rust_std;
