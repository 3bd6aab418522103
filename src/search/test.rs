use super::*;
use crate::math::Tolerance;

#[test]
fn no_match() {
    assert_eq!([1, 2, 3].index_of(&9), None);
    assert_eq!([1, 2, 3].index_of_sub([2, 9]), None);
    assert_eq!([1, 2, 3].last_index_of(&9), None);
    assert_eq!([1, 2, 3].last_index_of_sub([2, 9]), None);
    assert!(![1, 2, 3].contains_element(&9));
    assert!(![1, 2, 3].contains_sub([3, 2]));
}

#[test]
fn restart_on_mismatch() {
    assert_eq!("aaab".index_of_sub("aab"), Some(1));
    assert_eq!(b"aaab".find_sub(b"aab"), Some(1..4));
    assert_eq!(b"baaa".rfind_sub(b"baa"), Some(0..3));
    assert_eq!(b"xyxyxyz".index_of_sub(b"xyxyz"), Some(2));
}

#[test]
fn leftmost_and_rightmost() {
    let source = b"abXabXXabXab";
    let pattern = b"ab";
    let occurrences: Vec<_> = (0..source.len())
        .filter(|&i| source[i..].starts_with(pattern))
        .collect();
    assert_eq!(occurrences, vec![0, 3, 7, 10]);

    let last = isize::try_from(source.len() - 1).unwrap();
    assert_eq!(source.index_of_sub_from(pattern, 0), Some(0));
    assert_eq!(source.last_index_of_sub_from(pattern, last), Some(10));
    assert_eq!(source.index_of_sub_from(pattern, 1), Some(3));
    assert_eq!(source.index_of_sub_from(pattern, 8), Some(10));
    assert_eq!(source.last_index_of_sub_from(pattern, 9), Some(7));
    assert_eq!(source.last_index_of_sub_from(pattern, 2), Some(0));
}

#[test]
fn single_element_bounds() {
    let source = [5, 6, 5, 6];
    assert_eq!(source.index_of_from(&5, -100), Some(0));
    assert_eq!(source.index_of_from(&5, 1), Some(2));
    assert_eq!(source.index_of_from(&5, 3), None);
    assert_eq!(source.index_of_from(&5, 4), None);

    assert_eq!(source.last_index_of_from(&6, 100), Some(3));
    assert_eq!(source.last_index_of_from(&6, 2), Some(1));
    assert_eq!(source.last_index_of_from(&6, 0), None);
    assert_eq!(source.last_index_of_from(&5, -1), None);
    assert_eq!(source.last_index_of_from(&5, isize::MIN), None);
}

#[test]
fn empty_pattern_boundary() {
    let source = [1, 2, 3];
    let empty: [i32; 0] = [];

    assert_eq!(source.index_of_sub_from(empty, -2), Some(0));
    assert_eq!(source.index_of_sub_from(empty, 0), Some(0));
    assert_eq!(source.index_of_sub_from(empty, 2), Some(2));
    assert_eq!(source.index_of_sub_from(empty, 3), None);
    assert_eq!(source.index_of_sub_from(empty, 4), None);

    assert_eq!(source.last_index_of_sub_from(empty, 1), Some(1));
    assert_eq!(source.last_index_of_sub_from(empty, 3), Some(3));
    assert_eq!(source.last_index_of_sub_from(empty, isize::MAX), Some(3));
    assert_eq!(source.last_index_of_sub_from(empty, -1), None);

    assert!(source.contains_sub(empty));
    assert!(!empty.contains_sub(empty));
}

#[test]
fn absent_source_is_empty() {
    let absent: Option<&[u8]> = None;
    let source = absent.unwrap_or_default();
    assert_eq!(source.index_of(&b'a'), None);
    assert_eq!(source.last_index_of(&b'a'), None);
    assert_eq!(source.index_of_sub(b"a"), None);
    assert_eq!(source.last_index_of_sub(b"a"), None);
    assert!(!source.contains_element(&b'a'));
}

#[test]
fn backward_bound_rejection() {
    for source in [vec![1], vec![1, 1], vec![2, 1, 2]] {
        assert_eq!(source.last_index_of_from(&1, -1), None);
        assert_eq!(source.last_index_of_sub_from([1], -1), None);
        assert!(source.index_of_from(&1, -1).is_some());
    }
}

#[test]
fn null_aware_objects() {
    let source = [Some("a"), None, Some("b"), None];
    assert_eq!(source.index_of(&None), Some(1));
    assert_eq!(source.last_index_of(&None), Some(3));
    assert_eq!(source.index_of_sub([None, Some("b")]), Some(1));
    assert_eq!(source.index_of(&Some("c")), None);
    assert!(source.contains_sub([Some("b"), None]));
}

#[test]
fn tolerance_symmetry() {
    let source = [1.0, 2.0, 3.0];
    assert_eq!(source.index_of_within(2.05, 0.1), Some(1));
    assert_eq!(source.index_of_within(1.94, 0.1), Some(1));
    assert_eq!(source.last_index_of_within(2.05, 0.1), Some(1));
    assert_eq!(source.index_of_within(2.05, 0.0), None);
    assert_eq!(source.index_of_within(2.0, 0.0), Some(1));
    assert!(source.contains_within(3.09, 0.1));
    assert!(!source.contains_within(3.2, 0.1));

    let tol = Tolerance::new(0.1).unwrap();
    assert_eq!(index_of_with(&[2.05], &2.0, 0, &tol), Some(0));
    assert_eq!(index_of_with(&[2.0], &2.05, 0, &tol), Some(0));
    assert_eq!(last_index_of_with(&[1.94, 2.05], &2.0, isize::MAX, &tol), Some(1));
}

#[test]
fn tolerance_subsequences() {
    let source = [0.0_f32, 1.0, 2.0, 1.0, 2.0, 3.0];
    assert_eq!(source.index_of_sub_within([1.05, 1.95], 0.1), Some(1));
    assert_eq!(source.last_index_of_sub_within([1.05, 1.95], 0.1), Some(3));
    assert_eq!(source.index_of_sub_within([1.05, 1.95], 0.01), None);
    assert!(source.contains_sub_within([2.0, 3.0], 0.0));
    assert!(!source.contains_sub_within([3.0, 2.0], 0.5));
}

#[test]
fn malformed_tolerance_is_exact() {
    let source = [1.0, 2.0, 3.0];
    assert_eq!(source.index_of_within(2.05, -0.1), None);
    assert_eq!(source.index_of_within(2.0, -0.1), Some(1));
    assert_eq!(source.index_of_within(2.05, f64::NAN), None);
    assert!(Tolerance::new(-0.1).is_err());
}

#[test]
fn raw_float_comparison_preserved() {
    let source = [f64::NAN, -0.0, f64::INFINITY];
    assert_eq!(source.index_of(&f64::NAN), None);
    assert_eq!(source.index_of_within(f64::NAN, 1.0), None);
    assert_eq!(source.index_of(&0.0), Some(1));
    assert_eq!(source.index_of_within(0.0, 0.0), Some(1));
    assert_eq!(source.index_of(&f64::INFINITY), Some(2));
    assert_eq!(source.index_of_within(f64::INFINITY, 0.0), Some(2));
}

#[test]
fn ignore_ascii_case() {
    let source = b"Hello, World";
    assert_eq!(index_of_sub_with(source, b"WORLD", 0, &IgnoreAsciiCase), Some(7));
    assert_eq!(last_index_of_with(source, &b'L', isize::MAX, &IgnoreAsciiCase), Some(10));
    assert_eq!(index_of_sub_with(source, b"WORLD", 8, &IgnoreAsciiCase), None);

    let names = [String::from("Ada"), String::from("grace")];
    assert_eq!(index_of_with(&names, &String::from("GRACE"), 0, &IgnoreAsciiCase), Some(1));
}

#[test]
fn dynamic_policy() {
    let same_magnitude = |a: &i32, b: &i32| a.abs() == b.abs();
    let policies: [(&dyn ElementEq<i32>, Option<usize>); 2] = [(&Exact, None), (&same_magnitude, Some(1))];
    for (policy, expected) in policies {
        assert_eq!(index_of_sub_with(&[1, -2, 3], &[2, 3], 0, policy), expected);
    }
}

#[test]
fn contains_any_and_all() {
    let source = [1, 2, 3];
    assert!(source.contains_any([9, 3]));
    assert!(!source.contains_any([9, 8]));
    assert!(!source.contains_any([] as [i32; 0]));
    assert!(source.contains_all([3, 1]));
    assert!(!source.contains_all([3, 4]));
    assert!(source.contains_all([] as [i32; 0]));
}

#[test]
fn sentinel_round_trip_of_results() {
    let source = b"abc";
    assert_eq!(source.index_of(&b'c').or_not_found(), 2);
    assert_eq!(source.index_of(&b'z').or_not_found(), NOT_FOUND);
    assert_eq!(from_sentinel(source.index_of(&b'b').or_not_found()), Some(1));
}

#[cfg(feature = "rand")]
mod randomized {
    use super::*;
    use crate::generate::rand_sequence;

    const ALPHA: &[u8] = b"AB";
    const SEED: u64 = 42;

    /// Reference leftmost match for comparison with the restart scan.
    fn windows_first<E: PartialEq>(source: &[E], pattern: &[E], start: usize) -> Option<usize> {
        source
            .windows(pattern.len())
            .enumerate()
            .skip(start)
            .find(|(_, w)| *w == pattern)
            .map(|(i, _)| i)
    }

    /// Reference rightmost match for comparison with the restart scan.
    fn windows_last<E: PartialEq>(source: &[E], pattern: &[E], end: usize) -> Option<usize> {
        source
            .windows(pattern.len())
            .enumerate()
            .take(end.saturating_add(1))
            .filter(|(_, w)| *w == pattern)
            .map(|(i, _)| i)
            .last()
    }

    #[test]
    fn agrees_with_windows() {
        for trial in 0..500 {
            let source = rand_sequence(ALPHA, 40, SEED + trial);
            let pattern = rand_sequence(ALPHA, 1 + (trial as usize % 5), SEED ^ trial);

            for start in [0, 3, 17, 39] {
                let bound = isize::try_from(start).unwrap();
                assert_eq!(
                    source.index_of_sub_from(&pattern, bound),
                    windows_first(&source, &pattern, start),
                    "{source:?} {pattern:?} {start}"
                );
                assert_eq!(
                    source.last_index_of_sub_from(&pattern, bound),
                    windows_last(&source, &pattern, start),
                    "{source:?} {pattern:?} {start}"
                );
            }

            assert_eq!(source.contains_sub(&pattern), source.index_of_sub(&pattern).is_some());
        }
    }

    #[test]
    fn found_implies_valid_window() {
        for trial in 0..500 {
            let source = rand_sequence(ALPHA, 25, trial);
            let pattern = rand_sequence(ALPHA, 3, trial + 1000);

            for found in [source.index_of_sub(&pattern), source.last_index_of_sub(&pattern)]
                .into_iter()
                .flatten()
            {
                assert!(found + pattern.len() <= source.len());
                assert_eq!(&source[found..found + pattern.len()], pattern.as_slice());
            }
        }
    }

    #[test]
    fn single_element_agrees_with_position() {
        for trial in 0..200 {
            let source = rand_sequence(b"ABCD", 30, trial);
            for target in b"ABCDE" {
                assert_eq!(source.index_of(target), source.iter().position(|b| b == target));
                assert_eq!(source.last_index_of(target), source.iter().rposition(|b| b == target));
            }
        }
    }

    #[test]
    fn tolerance_agrees_with_rounding() {
        let alpha = [0.0, 1.0, 2.0];
        for trial in 0..200 {
            let source = rand_sequence(&alpha, 30, trial);
            let pattern = rand_sequence(&alpha, 2, trial + 7);
            let jittered: Vec<f64> = pattern.iter().map(|p| p + 0.01).collect();

            assert_eq!(
                source.index_of_sub_within(&jittered, 0.1),
                windows_first(&source, &pattern, 0)
            );
            assert_eq!(
                source.last_index_of_sub_within(&jittered, 0.1),
                windows_last(&source, &pattern, usize::MAX)
            );
        }
    }
}
