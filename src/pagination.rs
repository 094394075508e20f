//! Page arithmetic over in-memory rows.
//!
//! Independent of the cache: these helpers slice a dataset already held in
//! memory and describe the result with navigation metadata.
//!
//! ## Page Layout
//!
//! ```text
//!   page_size = 3
//!
//!   rows:   [r0 r1 r2 | r3 r4 r5 | r6 r7]
//!   page:       1          2         3
//!
//!   index_range(2, 3) = 3..6
//!   total_pages       = ceil(8 / 3) = 3
//! ```
//!
//! ## Deletion-Resilient Paging
//!
//! [`IndexedDataset`] keys rows by their original position. Deleting rows
//! leaves gaps that [`IndexedDataset::get_hyper_index`] skips, so a client
//! following `next_index` never misses a row that still exists.
//!
//! ```text
//!   indices: 0  1  2  3  4  5
//!   rows:    a  b  ✗  d  e  f      (2 deleted)
//!
//!   get_hyper_index(Some(1), 2) → data [b, d], next_index 4
//! ```
//!
//! ## Example
//!
//! ```
//! use cachestore::pagination::{get_hyper, index_range};
//!
//! assert_eq!(index_range(3, 15).unwrap(), 30..45);
//!
//! let rows: Vec<u32> = (0..10).collect();
//! let page = get_hyper(&rows, 2, 4).unwrap();
//! assert_eq!(page.data, &[4, 5, 6, 7]);
//! assert_eq!(page.next_page, Some(3));
//! assert_eq!(page.prev_page, Some(1));
//! assert_eq!(page.total_pages, 3);
//! ```

use std::collections::BTreeMap;
use std::ops::Range;

use serde::Serialize;

use crate::error::PageError;

/// Row range of a 1-indexed page, end exclusive.
///
/// # Errors
///
/// Returns [`PageError::InvalidPage`] for page 0 and
/// [`PageError::InvalidPageSize`] for a page size of 0.
pub fn index_range(page: usize, page_size: usize) -> Result<Range<usize>, PageError> {
    check_page_args(page, page_size)?;
    let start = (page - 1).saturating_mul(page_size);
    Ok(start..start.saturating_add(page_size))
}

/// Rows of the requested page. Empty when the page starts past the end.
pub fn get_page<T>(rows: &[T], page: usize, page_size: usize) -> Result<&[T], PageError> {
    let range = index_range(page, page_size)?;
    if range.start >= rows.len() {
        return Ok(&[]);
    }
    Ok(&rows[range.start..range.end.min(rows.len())])
}

/// A page plus navigation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HyperPage<'a, T> {
    /// Number of rows actually returned.
    pub page_size: usize,
    pub page: usize,
    pub data: &'a [T],
    pub next_page: Option<usize>,
    pub prev_page: Option<usize>,
    pub total_pages: usize,
}

/// [`get_page`] with navigation metadata.
pub fn get_hyper<T>(
    rows: &[T],
    page: usize,
    page_size: usize,
) -> Result<HyperPage<'_, T>, PageError> {
    let data = get_page(rows, page, page_size)?;
    let total_pages = rows.len().div_ceil(page_size);
    Ok(HyperPage {
        page_size: data.len(),
        page,
        data,
        next_page: (page < total_pages).then(|| page + 1),
        prev_page: (page > 1).then(|| page - 1),
        total_pages,
    })
}

fn check_page_args(page: usize, page_size: usize) -> Result<(), PageError> {
    if page == 0 {
        return Err(PageError::InvalidPage);
    }
    if page_size == 0 {
        return Err(PageError::InvalidPageSize);
    }
    Ok(())
}

/// A page of an [`IndexedDataset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexPage<'a, T> {
    /// Requested start index.
    pub index: usize,
    pub data: Vec<&'a T>,
    /// Number of rows actually returned.
    pub page_size: usize,
    /// First index not scanned by this page.
    pub next_index: usize,
}

/// Rows keyed by their original position, tolerant of deletions.
#[derive(Debug, Clone, Default)]
pub struct IndexedDataset<T> {
    rows: BTreeMap<usize, T>,
    span: usize,
}

impl<T> IndexedDataset<T> {
    /// Indexes `rows` by position, starting at 0.
    pub fn new(rows: Vec<T>) -> Self {
        let span = rows.len();
        Self {
            rows: rows.into_iter().enumerate().collect(),
            span,
        }
    }

    /// Number of rows still present.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of positions ever indexed, deleted ones included.
    pub fn span(&self) -> usize {
        self.span
    }

    /// Row at its original position `index`, unless deleted.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.rows.get(&index)
    }

    /// Deletes the row at `index`, leaving a gap.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        self.rows.remove(&index)
    }

    /// Up to `page_size` rows starting at `index` (0 when `None`),
    /// skipping deleted positions.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::InvalidPageSize`] for a page size of 0 and
    /// [`PageError::IndexOutOfRange`] when `index` is not below
    /// [`span`](Self::span).
    ///
    /// # Example
    ///
    /// ```
    /// use cachestore::pagination::IndexedDataset;
    ///
    /// let mut dataset = IndexedDataset::new(vec!["a", "b", "c", "d", "e"]);
    /// let first = dataset.get_hyper_index(None, 2).unwrap();
    /// assert_eq!(first.data, vec![&"a", &"b"]);
    /// let next = first.next_index;
    /// assert_eq!(next, 2);
    ///
    /// dataset.remove(2);
    /// let second = dataset.get_hyper_index(Some(next), 2).unwrap();
    /// assert_eq!(second.data, vec![&"d", &"e"]);
    /// assert_eq!(second.next_index, 5);
    /// ```
    pub fn get_hyper_index(
        &self,
        index: Option<usize>,
        page_size: usize,
    ) -> Result<IndexPage<'_, T>, PageError> {
        let index = index.unwrap_or(0);
        if page_size == 0 {
            return Err(PageError::InvalidPageSize);
        }
        if index >= self.span {
            return Err(PageError::IndexOutOfRange {
                index,
                len: self.span,
            });
        }

        let taken: Vec<(&usize, &T)> = self.rows.range(index..).take(page_size).collect();
        let next_index = match taken.last() {
            Some(&(&last, _)) if taken.len() == page_size => last + 1,
            _ => self.span,
        };
        let data: Vec<&T> = taken.into_iter().map(|(_, row)| row).collect();

        Ok(IndexPage {
            index,
            page_size: data.len(),
            data,
            next_index,
        })
    }
}

impl<T> FromIterator<T> for IndexedDataset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==============================================
    // index_range / get_page
    // ==============================================

    mod pages {
        use super::*;

        #[test]
        fn index_range_is_one_indexed() {
            assert_eq!(index_range(1, 7).unwrap(), 0..7);
            assert_eq!(index_range(3, 15).unwrap(), 30..45);
        }

        #[test]
        fn index_range_rejects_zero_arguments() {
            assert_eq!(index_range(0, 10), Err(PageError::InvalidPage));
            assert_eq!(index_range(1, 0), Err(PageError::InvalidPageSize));
        }

        #[test]
        fn index_range_saturates_instead_of_overflowing() {
            let range = index_range(usize::MAX, 2).unwrap();
            assert_eq!(range.end, usize::MAX);
        }

        #[test]
        fn get_page_truncates_last_page() {
            let rows: Vec<u8> = (0..5).collect();
            assert_eq!(get_page(&rows, 2, 3).unwrap(), &[3, 4]);
        }

        #[test]
        fn get_page_past_end_is_empty() {
            let rows = vec!["x"; 4];
            assert!(get_page(&rows, 3, 2).unwrap().is_empty());
            assert!(get_page(&rows, 3000, 100).unwrap().is_empty());
            let empty: Vec<u8> = Vec::new();
            assert!(get_page(&empty, 1, 10).unwrap().is_empty());
        }
    }

    // ==============================================
    // get_hyper
    // ==============================================

    mod hyper {
        use super::*;

        #[test]
        fn first_page_has_no_prev() {
            let rows: Vec<u32> = (0..20).collect();
            let page = get_hyper(&rows, 1, 2).unwrap();
            assert_eq!(page.page_size, 2);
            assert_eq!(page.data, &[0, 1]);
            assert_eq!(page.next_page, Some(2));
            assert_eq!(page.prev_page, None);
            assert_eq!(page.total_pages, 10);
        }

        #[test]
        fn last_page_has_no_next() {
            let rows: Vec<u32> = (0..7).collect();
            let page = get_hyper(&rows, 3, 3).unwrap();
            assert_eq!(page.page_size, 1);
            assert_eq!(page.next_page, None);
            assert_eq!(page.prev_page, Some(2));
            assert_eq!(page.total_pages, 3);
        }

        #[test]
        fn page_beyond_total_is_empty() {
            let rows: Vec<u32> = (0..7).collect();
            let page = get_hyper(&rows, 100, 3).unwrap();
            assert_eq!(page.page_size, 0);
            assert!(page.data.is_empty());
            assert_eq!(page.next_page, None);
            assert_eq!(page.prev_page, Some(99));
        }

        #[test]
        fn serializes_with_null_links() {
            let rows = vec!["a", "b"];
            let page = get_hyper(&rows, 1, 5).unwrap();
            let json = serde_json::to_value(&page).unwrap();
            assert_eq!(
                json,
                serde_json::json!({
                    "page_size": 2,
                    "page": 1,
                    "data": ["a", "b"],
                    "next_page": null,
                    "prev_page": null,
                    "total_pages": 1
                })
            );
        }
    }

    // ==============================================
    // IndexedDataset
    // ==============================================

    mod indexed {
        use super::*;

        fn dataset() -> IndexedDataset<u32> {
            (0..10).map(|i| i * 10).collect()
        }

        #[test]
        fn default_index_starts_at_zero() {
            let data = dataset();
            let page = data.get_hyper_index(None, 3).unwrap();
            assert_eq!(page.index, 0);
            assert_eq!(page.data, vec![&0, &10, &20]);
            assert_eq!(page.page_size, 3);
            assert_eq!(page.next_index, 3);
        }

        #[test]
        fn deleted_rows_are_skipped_without_loss() {
            let mut data = dataset();
            let first = data.get_hyper_index(Some(0), 3).unwrap();
            let resume = first.next_index;
            drop(first);

            data.remove(3);
            data.remove(4);
            let second = data.get_hyper_index(Some(resume), 3).unwrap();
            assert_eq!(second.data, vec![&50, &60, &70]);
            assert_eq!(second.next_index, 8);
        }

        #[test]
        fn short_final_page_points_past_span() {
            let data = dataset();
            let page = data.get_hyper_index(Some(8), 5).unwrap();
            assert_eq!(page.data, vec![&80, &90]);
            assert_eq!(page.next_index, 10);
        }

        #[test]
        fn trailing_rows_survive_deletions_elsewhere() {
            let mut data = dataset();
            for i in 0..5 {
                data.remove(i);
            }
            assert_eq!(data.len(), 5);
            assert_eq!(data.span(), 10);
            let page = data.get_hyper_index(Some(7), 3).unwrap();
            assert_eq!(page.data, vec![&70, &80, &90]);
        }

        #[test]
        fn out_of_range_index_is_rejected() {
            assert_eq!(
                dataset().get_hyper_index(Some(10), 2),
                Err(PageError::IndexOutOfRange { index: 10, len: 10 })
            );
            assert_eq!(
                dataset().get_hyper_index(Some(0), 0),
                Err(PageError::InvalidPageSize)
            );
            let empty: IndexedDataset<u8> = IndexedDataset::default();
            assert!(empty.get_hyper_index(None, 1).is_err());
        }
    }
}
