use crate::cmp::Compare;
use std::cmp::Ordering;

pub mod tree;

/// Bubble sort with the early-exit flag. Stable.
pub fn bubble_sort<T, C: Compare<T>>(arr: &mut [T], cmp: &mut C) {
    let n = arr.len();

    for i in 0..n.saturating_sub(1) {
        let mut swapped = false;

        for j in 0..n - 1 - i {
            if cmp.compare(&arr[j], &arr[j + 1]) == Ordering::Greater {
                arr.swap(j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }
}

/// Selection sort. Not stable.
pub fn selection_sort<T, C: Compare<T>>(arr: &mut [T], cmp: &mut C) {
    let n = arr.len();

    for i in 0..n.saturating_sub(1) {
        let mut min = i;

        for j in i + 1..n {
            if cmp.compare(&arr[j], &arr[min]) == Ordering::Less {
                min = j;
            }
        }

        if min != i {
            arr.swap(i, min);
        }
    }
}

/// Insertion sort. Stable.
pub fn insertion_sort<T, C: Compare<T>>(arr: &mut [T], cmp: &mut C) {
    for i in 1..arr.len() {
        let mut j = i;

        while j > 0 && cmp.compare(&arr[j - 1], &arr[j]) == Ordering::Greater {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// Shell sort over the plain n/2 gap sequence.
pub fn shell_sort_basic<T, C: Compare<T>>(arr: &mut [T], cmp: &mut C) {
    let n = arr.len();
    let mut gap = n / 2;

    while gap > 0 {
        for i in gap..n {
            gap_insert(arr, i, gap, cmp);
        }
        gap /= 2;
    }
}

/// Shell sort over Knuth's 1, 4, 13, 40, ... gap sequence.
pub fn shell_sort_knuth<T, C: Compare<T>>(arr: &mut [T], cmp: &mut C) {
    let n = arr.len();

    let mut gaps = Vec::new();
    let mut h = 1;
    while h < n {
        gaps.push(h);
        h = h * 3 + 1;
    }

    for &gap in gaps.iter().rev() {
        for i in gap..n {
            gap_insert(arr, i, gap, cmp);
        }
    }
}

fn gap_insert<T, C: Compare<T>>(arr: &mut [T], i: usize, gap: usize, cmp: &mut C) {
    let mut j = i;

    while j >= gap && cmp.compare(&arr[j - gap], &arr[j]) == Ordering::Greater {
        arr.swap(j - gap, j);
        j -= gap;
    }
}

/// Quicksort with the last element as pivot, Lomuto partition.
pub fn quick_sort_basic<T, C: Compare<T>>(arr: &mut [T], cmp: &mut C) {
    if arr.len() > 1 {
        let pivot = partition_lomuto(arr, cmp);
        let (left, right) = arr.split_at_mut(pivot);
        quick_sort_basic(left, cmp);
        quick_sort_basic(&mut right[1..], cmp);
    }
}

fn partition_lomuto<T, C: Compare<T>>(arr: &mut [T], cmp: &mut C) -> usize {
    let high = arr.len() - 1;
    let mut i = 0;

    for j in 0..high {
        if cmp.compare(&arr[j], &arr[high]) == Ordering::Less {
            arr.swap(i, j);
            i += 1;
        }
    }

    arr.swap(i, high);
    i
}

/// Quicksort with median-of-three pivot selection and a Hoare-style
/// partition.
pub fn quick_sort_median<T, C: Compare<T>>(arr: &mut [T], cmp: &mut C) {
    if !arr.is_empty() {
        quick_median(arr, 0, arr.len() - 1, cmp);
    }
}

fn quick_median<T, C: Compare<T>>(arr: &mut [T], low: usize, high: usize, cmp: &mut C) {
    if low < high {
        let p = partition_median(arr, low, high, cmp);
        if p > low {
            quick_median(arr, low, p - 1, cmp);
        }
        quick_median(arr, p + 1, high, cmp);
    }
}

fn partition_median<T, C: Compare<T>>(arr: &mut [T], low: usize, high: usize, cmp: &mut C) -> usize {
    let mid = low + (high - low) / 2;

    // order low, mid, high; the median lands at mid
    if cmp.compare(&arr[low], &arr[mid]) == Ordering::Greater {
        arr.swap(low, mid);
    }
    if cmp.compare(&arr[low], &arr[high]) == Ordering::Greater {
        arr.swap(low, high);
    }
    if cmp.compare(&arr[mid], &arr[high]) == Ordering::Greater {
        arr.swap(mid, high);
    }
    arr.swap(mid, low);

    let mut i = low + 1;
    let mut j = high;

    loop {
        while i <= high && cmp.compare(&arr[i], &arr[low]) == Ordering::Less {
            i += 1;
        }
        while cmp.compare(&arr[j], &arr[low]) == Ordering::Greater {
            j -= 1;
        }

        if i >= j {
            break;
        }

        arr.swap(i, j);
        i += 1;
        j -= 1;
    }

    arr.swap(low, j);
    j
}

/// Heap sort. Not stable; the benchmark table only runs it on unique keys.
pub fn heap_sort<T, C: Compare<T>>(arr: &mut [T], cmp: &mut C) {
    let n = arr.len();
    if n <= 1 {
        return;
    }

    for i in (0..n / 2).rev() {
        heapify(arr, n, i, cmp);
    }

    for i in (1..n).rev() {
        arr.swap(0, i);
        heapify(arr, i, 0, cmp);
    }
}

fn heapify<T, C: Compare<T>>(arr: &mut [T], n: usize, i: usize, cmp: &mut C) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;

    if left < n && cmp.compare(&arr[left], &arr[largest]) == Ordering::Greater {
        largest = left;
    }
    if right < n && cmp.compare(&arr[right], &arr[largest]) == Ordering::Greater {
        largest = right;
    }

    if largest != i {
        arr.swap(i, largest);
        heapify(arr, n, largest, cmp);
    }
}

/// Merge sort with one dataset-sized scratch buffer. Stable.
pub fn merge_sort<T: Clone, C: Compare<T>>(arr: &mut [T], cmp: &mut C) {
    let n = arr.len();
    if n <= 1 {
        return;
    }

    let mut scratch = arr.to_vec();
    merge_split(arr, 0, n - 1, cmp, &mut scratch);
}

fn merge_split<T: Clone, C: Compare<T>>(
    arr: &mut [T],
    l: usize,
    r: usize,
    cmp: &mut C,
    scratch: &mut [T],
) {
    if l < r {
        let m = l + (r - l) / 2;
        merge_split(arr, l, m, cmp, scratch);
        merge_split(arr, m + 1, r, cmp, scratch);
        merge(arr, l, m, r, cmp, scratch);
    }
}

fn merge<T: Clone, C: Compare<T>>(
    arr: &mut [T],
    l: usize,
    m: usize,
    r: usize,
    cmp: &mut C,
    scratch: &mut [T],
) {
    let n1 = m - l + 1;
    let n2 = r - m;

    for i in 0..n1 {
        scratch[i] = arr[l + i].clone();
    }
    for j in 0..n2 {
        scratch[n1 + j] = arr[m + 1 + j].clone();
    }

    let mut i = 0;
    let mut j = n1;
    let mut k = l;

    while i < n1 && j < n1 + n2 {
        // ties take the left run, which keeps the sort stable
        if cmp.compare(&scratch[i], &scratch[j]) != Ordering::Greater {
            arr[k] = scratch[i].clone();
            i += 1;
        } else {
            arr[k] = scratch[j].clone();
            j += 1;
        }
        k += 1;
    }

    while i < n1 {
        arr[k] = scratch[i].clone();
        i += 1;
        k += 1;
    }
    while j < n1 + n2 {
        arr[k] = scratch[j].clone();
        j += 1;
        k += 1;
    }
}

/// LSD radix sort on a base-10 integer key. Performs no comparator calls;
/// the harness reports 0 comparisons for it by contract.
pub fn radix_sort_by<T, F>(arr: &mut [T], key: F)
where
    T: Clone,
    F: Fn(&T) -> u32,
{
    if arr.len() <= 1 {
        return;
    }

    let max = arr.iter().map(|item| key(item)).max().unwrap();
    let mut output = arr.to_vec();

    let mut exp = 1u32;
    loop {
        let mut count = [0usize; 10];

        for item in arr.iter() {
            count[(key(item) / exp % 10) as usize] += 1;
        }
        for d in 1..10 {
            count[d] += count[d - 1];
        }
        // walk backwards so equal digits keep their order
        for item in arr.iter().rev() {
            let d = (key(item) / exp % 10) as usize;
            count[d] -= 1;
            output[count[d]] = item.clone();
        }

        arr.clone_from_slice(&output);

        if max / exp < 10 {
            return;
        }
        exp *= 10;
    }
}
