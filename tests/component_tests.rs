use kqsort::SideBuffer;
use kqsort::classify::classify;
use kqsort::partition::{gather_equal, partition};
use kqsort::pivot::select_pivot;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLE: [i32; 9] = [4, 67, 23, 10, 34, 5, 32, 48, 9];

fn is_sorted<T: Ord>(v: &[T]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

#[test]
fn test_select_pivot_midpoint() {
    assert_eq!(select_pivot(&SAMPLE), 34);
    assert_eq!(select_pivot(&[7]), 7);
    // Even length picks the upper middle.
    assert_eq!(select_pivot(&[1, 2, 3, 4]), 3);
}

#[test]
#[should_panic]
fn test_select_pivot_empty_panics() {
    let empty: [u8; 0] = [];
    select_pivot(&empty);
}

#[test]
fn test_partition_sample() {
    let mut v = SAMPLE;
    let pivot = select_pivot(&v);
    let split = partition(&mut v, pivot);

    assert_eq!(split, 6);
    assert!(v[..split].iter().all(|&x| x < pivot));
    assert!(v[split..].iter().all(|&x| x >= pivot));

    let mut sorted = v;
    sorted.sort_unstable();
    let mut expected = SAMPLE;
    expected.sort_unstable();
    assert_eq!(sorted, expected);
}

#[test]
fn test_partition_degenerate() {
    // All equal: nothing is below the pivot.
    let mut v = [5u32; 16];
    assert_eq!(partition(&mut v, 5), 0);

    // Pivot is the minimum.
    let mut v = [9, 8, 7, 1, 6, 5, 4];
    assert_eq!(partition(&mut v, 1), 0);

    let mut v: [i64; 0] = [];
    assert_eq!(partition(&mut v, 0), 0);
}

#[test]
fn test_partition_two_elements() {
    let mut v = [3, 5];
    let split = partition(&mut v, select_pivot(&[3, 5]));
    assert_eq!(split, 1);
    assert_eq!(v, [3, 5]);

    let mut v = [5, 3];
    // Midpoint of [5, 3] is 3, the minimum.
    assert_eq!(partition(&mut v, 3), 0);
}

#[test]
fn test_partition_fuzz_invariant() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..2_000 {
        let len = rng.random_range(1..400);
        let spread = rng.random_range(1..1_000);
        let mut v: Vec<i32> = (0..len).map(|_| rng.random_range(0..spread)).collect();

        let pivot = select_pivot(&v);
        let split = partition(&mut v, pivot);

        assert!(split < len, "split {} out of range {}", split, len);
        assert!(v[..split].iter().all(|&x| x < pivot));
        assert!(v[split..].iter().all(|&x| x >= pivot));
    }
}

#[test]
fn test_classify_sample() {
    let mut v = SAMPLE;
    let mut run = [0; 500];
    classify(&mut v, select_pivot(&SAMPLE), &mut run);
    assert_eq!(v, [4, 5, 9, 10, 23, 32, 34, 48, 67]);
}

#[test]
fn test_classify_any_pivot() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..2_000 {
        let len = rng.random_range(1..302);
        let input: Vec<i32> = (0..len).map(|_| rng.random_range(-50..50)).collect();
        let mut expected = input.clone();
        expected.sort_unstable();

        // Pivots inside, at and beyond the extremes of the range.
        let candidates = [
            input[rng.random_range(0..len)],
            expected[0],
            expected[len - 1],
            i32::MIN,
            i32::MAX,
        ];
        for pivot in candidates {
            let mut v = input.clone();
            let mut run = vec![0; len];
            classify(&mut v, pivot, &mut run);
            assert_eq!(v, expected, "pivot {}", pivot);
        }
    }
}

#[test]
fn test_classify_skewed_runs() {
    // Ascending input with the maximum as pivot sends everything low until
    // the pivot switch fires.
    let mut v: Vec<u16> = (0..301).collect();
    let mut run = vec![0; v.len()];
    classify(&mut v, 300, &mut run);
    assert!(is_sorted(&v));

    // Descending input with the minimum as pivot sends everything high.
    let mut v: Vec<u16> = (0..301).rev().collect();
    classify(&mut v, 0, &mut run);
    assert_eq!(v, (0..301).collect::<Vec<u16>>());

    let mut v = vec![42i8; 200];
    let mut run = vec![0i8; 200];
    classify(&mut v, 42, &mut run);
    assert_eq!(v, vec![42i8; 200]);
}

#[test]
fn test_classify_empty_and_single() {
    let mut v: [u64; 0] = [];
    classify(&mut v, 0, &mut []);

    let mut v = [9u64];
    classify(&mut v, 9, &mut [0]);
    assert_eq!(v, [9]);
}

#[test]
#[should_panic(expected = "side buffer")]
fn test_classify_short_buffer_panics() {
    let mut v = SAMPLE;
    let mut run = [0; 4];
    classify(&mut v, 34, &mut run);
}

#[test]
fn test_gather_equal() {
    let mut v = [4, 2, 9, 2, 2, 7];
    let count = gather_equal(&mut v, 2);
    assert_eq!(count, 3);
    assert_eq!(&v[..3], &[2, 2, 2]);

    let mut rest = v[3..].to_vec();
    rest.sort_unstable();
    assert_eq!(rest, vec![4, 7, 9]);

    let mut v = [1u8; 10];
    assert_eq!(gather_equal(&mut v, 1), 10);
    assert_eq!(gather_equal(&mut v, 3), 0);
}

#[test]
fn test_side_buffer_scratch() {
    let mut buffer: SideBuffer<i64> = SideBuffer::new();
    assert_eq!(buffer.capacity(), kqsort::DEFAULT_BUFFER_CAPACITY);

    assert_eq!(buffer.scratch(0).len(), 0);
    assert_eq!(buffer.scratch(301).len(), 301);
    assert_eq!(buffer.capacity(), 301);

    // Beyond the inline block the buffer spills and keeps the allocation.
    assert_eq!(buffer.scratch(1_000).len(), 1_000);
    assert_eq!(buffer.capacity(), 1_000);
    assert_eq!(buffer.scratch(500).len(), 500);
    assert_eq!(buffer.capacity(), 1_000);
}
