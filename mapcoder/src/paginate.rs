//! Offset/count windows over fixed, ordered catalogs.

/// Slice `items` by `offset` and `count`.
///
/// A negative `offset` counts backward from the end. The window is always
/// clamped to `[0, items.len()]`, so this never fails; negative counts are
/// rejected by [`crate::params::count`] before they get here.
///
/// # Examples
///
/// ```
/// use mapcoder::paginate::paginate;
///
/// let items = ["a", "b", "c", "d"];
/// assert_eq!(paginate(&items, -1, 1), ["d"]);
/// assert_eq!(paginate(&items, 1, 2), ["b", "c"]);
/// assert!(paginate(&items, 9, 2).is_empty());
/// ```
pub fn paginate<T>(items: &[T], offset: i64, count: usize) -> &[T] {
    let (from, to) = window(items.len(), offset, count);
    &items[from..to]
}

/// The `[from, to)` bounds for a catalog of `len` items.
pub fn window(len: usize, offset: i64, count: usize) -> (usize, usize) {
    let from = if offset < 0 {
        let back = usize::try_from(offset.unsigned_abs()).unwrap_or(usize::MAX);
        len.saturating_sub(back)
    } else {
        usize::try_from(offset).unwrap_or(usize::MAX).min(len)
    };
    let to = from.saturating_add(count).min(len);
    (from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Alphabet;

    #[test]
    fn test_last_element() {
        let alphabets = Alphabet::all();
        assert_eq!(alphabets.len(), 14);
        assert_eq!(paginate(&alphabets, -1, 1), [Alphabet::Tibetan]);
    }

    #[test]
    fn test_second_element() {
        let alphabets = Alphabet::all();
        assert_eq!(paginate(&alphabets, 1, 1), [Alphabet::Greek]);
    }

    #[test]
    fn test_zero_count_is_empty() {
        let alphabets = Alphabet::all();
        assert!(paginate(&alphabets, 0, 0).is_empty());
        assert!(paginate(&alphabets, -3, 0).is_empty());
    }

    #[test]
    fn test_window_clamps() {
        assert_eq!(window(14, 0, 1000), (0, 14));
        assert_eq!(window(14, 20, 5), (14, 14));
        assert_eq!(window(14, -20, 3), (0, 3));
        assert_eq!(window(14, -2, 10), (12, 14));
        assert_eq!(window(14, i64::MIN, usize::MAX), (0, 14));
        assert_eq!(window(14, i64::MAX, usize::MAX), (14, 14));
        assert_eq!(window(0, -1, 1), (0, 0));
    }
}
