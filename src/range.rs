//! Compile-time range analysis over raw value arrays.
//!
//! A generated type needs to know, ahead of any run-time use, which indices
//! hold its smallest and largest values and how many entries iteration will
//! visit. `const fn`s cannot be generic over integer comparisons on stable,
//! so the scans are stamped out once per primitive integer type with
//! `paste` (`scan_i32`, `count_valid_u8`, ...). The generated impl picks
//! the variant matching its declared underlying type.

use paste::paste;

/// Indices of the smallest and largest valid values in a raw value array.
///
/// These are indices into the array, not values of the underlying type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min: usize,
    pub max: usize,
}

macro_rules! define_range_scans {
    ($($ty:ident),* $(,)?) => {$(
        paste! {
            /// Single left-to-right scan for the indices of the minimum and
            /// maximum values.
            ///
            /// Call with `index = 1` and both bounds set to `0`: index 0 is
            /// taken as valid, and because both cursors start on the same
            /// entry, a later entry can displace at most one of them per
            /// step. A greater value updates the max candidate; otherwise a
            /// smaller value updates the min candidate. A one-element array
            /// yields `(0, 0)` without iterating.
            pub const fn [<scan_ $ty>](
                values: &[$ty],
                mut index: usize,
                mut best_min: usize,
                mut best_max: usize,
            ) -> Bounds {
                while index < values.len() {
                    if values[index] > values[best_max] {
                        best_max = index;
                    } else if values[index] < values[best_min] {
                        best_min = index;
                    }
                    index += 1;
                }
                Bounds { min: best_min, max: best_max }
            }

            /// Counting scan over the entries iteration will visit,
            /// starting at `index`.
            ///
            /// With no filtering policy applied in this core, the count
            /// from index 0 equals the array length.
            pub const fn [<count_valid_ $ty>](values: &[$ty], mut index: usize) -> usize {
                let mut count = 0;
                while index < values.len() {
                    count += 1;
                    index += 1;
                }
                count
            }
        }
    )*};
}

define_range_scans!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_runs_in_const_context() {
        const VALUES: [i32; 3] = [0, 5, 6];
        const BOUNDS: Bounds = scan_i32(&VALUES, 1, 0, 0);
        assert_eq!(BOUNDS, Bounds { min: 0, max: 2 });
    }

    #[test]
    fn single_entry_is_both_min_and_max() {
        let bounds = scan_i64(&[42], 1, 0, 0);
        assert_eq!(bounds, Bounds { min: 0, max: 0 });
    }

    #[test]
    fn descending_values_keep_index_zero_as_max() {
        let bounds = scan_i32(&[9, 4, -1, -7], 1, 0, 0);
        assert_eq!(bounds, Bounds { min: 3, max: 0 });
    }

    #[test]
    fn equal_values_stay_at_the_first_index() {
        let bounds = scan_u8(&[3, 3, 3], 1, 0, 0);
        assert_eq!(bounds, Bounds { min: 0, max: 0 });
    }

    #[test]
    fn signedness_drives_the_comparison() {
        // As i8, -1 is the minimum; the same bits as u8 (255) would be the
        // maximum.
        let signed = scan_i8(&[0, -1, 1], 1, 0, 0);
        assert_eq!(signed, Bounds { min: 1, max: 2 });
        let unsigned = scan_u8(&[0, 255, 1], 1, 0, 0);
        assert_eq!(unsigned, Bounds { min: 0, max: 1 });
    }

    #[test]
    fn count_valid_matches_length_from_start() {
        const COUNT: usize = count_valid_i32(&[0, 5, 6], 0);
        assert_eq!(COUNT, 3);
        assert_eq!(count_valid_i32(&[0, 5, 6], 2), 1);
        assert_eq!(count_valid_i32(&[], 0), 0);
    }
}
