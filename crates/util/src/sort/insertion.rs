use std::cmp::Ordering;

/// Stable insertion sort driven by a fallible comparator.
///
/// Elements only move past neighbours the comparator reports as
/// [`Ordering::Greater`], so equal elements keep their relative order. The
/// first comparator error aborts the sort and is returned; the slice is then
/// left as some permutation of its original contents.
///
/// # Examples
///
/// ```
/// use ordinal_key_util::sort::try_insertion_sort_by;
///
/// let mut arr = vec![3, 1, 2];
/// try_insertion_sort_by(&mut arr, |a, b| Ok::<_, ()>(a.cmp(b))).unwrap();
/// assert_eq!(arr, vec![1, 2, 3]);
///
/// let mut arr = vec![3, -1, 2];
/// let res = try_insertion_sort_by(&mut arr, |a: &i32, b: &i32| {
///     if *a < 0 || *b < 0 {
///         Err("negative")
///     } else {
///         Ok(a.cmp(b))
///     }
/// });
/// assert_eq!(res, Err("negative"));
/// ```
pub fn try_insertion_sort_by<T, E, F>(arr: &mut [T], mut compare: F) -> Result<(), E>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    for i in 1..arr.len() {
        let mut j = i;
        while j > 0 && compare(&arr[j - 1], &arr[j])? == Ordering::Greater {
            arr.swap(j - 1, j);
            j -= 1;
        }
    }
    Ok(())
}
