pub mod request;

use crate::error::Error;

pub use request::PageRequest;

/// Index window of one page in a newest-first walk over an append-only collection.
///
/// `max_id` is inclusive, `min_id` is the exclusive stop. Pages past the end of the
/// collection are not rejected: their window sits at or below the floor and
/// [`PageWindow::is_empty`] reports it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    pub max_id: i64,
    pub min_id: i64,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageWindow {
    pub fn is_empty(&self) -> bool {
        self.max_id <= self.min_id
    }

    pub fn len(&self) -> u64 {
        if self.is_empty() {
            0
        } else {
            self.max_id.abs_diff(self.min_id)
        }
    }

    /// Indices to fetch, newest first.
    pub fn ids(&self) -> std::iter::Rev<std::ops::RangeInclusive<i64>> {
        (self.min_id.saturating_add(1)..=self.max_id).rev()
    }
}

pub struct PaginationPlanner;

impl PaginationPlanner {
    pub fn plan(total: i64, request: PageRequest) -> Result<PageWindow, Error> {
        if total < 0 {
            tracing::warn!(total, "rejected negative collection size");
            return Err(Error::InvalidArgument {
                reason: format!("total must be >= 0, got {total}"),
            });
        }
        if let Err(e) = request.validate() {
            tracing::warn!(page = request.page, per_page = request.per_page, "{e}");
            return Err(e);
        }

        let effective_total = if request.zero_based { total - 1 } else { total };
        let offset = (request.page - 1)
            .checked_mul(request.per_page)
            .ok_or_else(|| Error::InvalidArgument {
                reason: format!(
                    "page {} with {} per page overflows the index space",
                    request.page, request.per_page
                ),
            })?;

        let floor = request.floor();
        let max_id = effective_total - offset;
        let min_id = max_id.saturating_sub(request.per_page).max(floor);

        let window = PageWindow {
            max_id,
            min_id,
            has_prev: max_id < effective_total,
            has_next: min_id > floor,
        };
        tracing::debug!(
            total,
            page = request.page,
            per_page = request.per_page,
            max_id,
            min_id,
            "planned page window"
        );
        Ok(window)
    }
}

/// Positional form of [`PaginationPlanner::plan`].
pub fn plan(total: i64, page: i64, per_page: i64, zero_based: bool) -> Result<PageWindow, Error> {
    PaginationPlanner::plan(
        total,
        PageRequest {
            page,
            per_page,
            zero_based,
        },
    )
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;

    fn lcg_next(state: &mut u64) -> u64 {
        *state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        *state
    }

    fn window(max_id: i64, min_id: i64, has_prev: bool, has_next: bool) -> PageWindow {
        PageWindow {
            max_id,
            min_id,
            has_prev,
            has_next,
        }
    }

    #[test]
    fn first_page_of_zero_based_collection() {
        assert_eq!(plan(25, 1, 10, true).unwrap(), window(24, 14, false, true));
    }

    #[test]
    fn middle_page_has_both_neighbours() {
        assert_eq!(plan(25, 2, 10, true).unwrap(), window(14, 4, true, true));
    }

    #[test]
    fn last_partial_page_stops_at_floor() {
        let w = plan(25, 3, 10, true).unwrap();
        assert_eq!(w, window(4, -1, true, false));
        assert_eq!(w.ids().collect::<Vec<_>>(), vec![4, 3, 2, 1, 0]);
        assert_eq!(w.len(), 5);
    }

    #[test]
    fn one_based_collection_uses_zero_floor() {
        assert_eq!(plan(25, 1, 10, false).unwrap(), window(25, 15, false, true));
        let last = plan(25, 3, 10, false).unwrap();
        assert_eq!(last, window(5, 0, true, false));
        assert_eq!(last.ids().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn exact_multiple_has_no_trailing_page() {
        let w = plan(20, 2, 10, true).unwrap();
        assert_eq!(w, window(9, -1, true, false));
        assert_eq!(w.len(), 10);
    }

    #[test]
    fn empty_collection_yields_empty_window() {
        let w = plan(0, 1, 10, true).unwrap();
        assert_eq!(w, window(-1, -1, false, false));
        assert!(w.is_empty());
        assert_eq!(w.ids().count(), 0);

        let w = plan(0, 1, 10, false).unwrap();
        assert_eq!(w, window(0, 0, false, false));
        assert!(w.is_empty());
    }

    #[test]
    fn page_past_the_end_is_empty_not_an_error() {
        let w = plan(25, 4, 10, true).unwrap();
        assert_eq!(w, window(-6, -1, true, false));
        assert!(w.is_empty());
        assert_eq!(w.len(), 0);
        assert_eq!(w.ids().count(), 0);
    }

    #[test]
    fn invalid_arguments_are_rejected() {
        assert!(matches!(
            plan(-1, 1, 10, true),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            plan(10, 0, 10, true),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            plan(10, 1, 0, true),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            plan(10, i64::MAX, i64::MAX, true),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn window_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(plan(25, 1, 10, true).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"maxId": 24, "minId": 14, "hasPrev": false, "hasNext": true})
        );
    }

    #[test]
    fn first_page_starts_at_newest_item() {
        let mut seed = 0x5EED_u64;
        for _ in 0..5_000 {
            let total = (lcg_next(&mut seed) % 10_000) as i64 + 1;
            let per_page = (lcg_next(&mut seed) % 100) as i64 + 1;
            let w = plan(total, 1, per_page, true).unwrap();
            assert_eq!(w.max_id, total - 1);
            assert!(!w.has_prev);
        }
    }

    #[test]
    fn has_next_is_false_exactly_at_floor() {
        let mut seed = 0xF100_u64;
        for _ in 0..10_000 {
            let total = (lcg_next(&mut seed) % 500) as i64;
            let page = (lcg_next(&mut seed) % 60) as i64 + 1;
            let per_page = (lcg_next(&mut seed) % 30) as i64 + 1;
            let zero_based = lcg_next(&mut seed) % 2 == 0;
            let w = plan(total, page, per_page, zero_based).unwrap();
            let floor = if zero_based { -1 } else { 0 };
            assert_eq!(!w.has_next, w.min_id == floor, "{w:?}");
            assert!(w.min_id >= floor);
        }
    }

    #[test]
    fn next_page_slides_down_by_page_size() {
        let mut seed = 0xD0_u64;
        for _ in 0..10_000 {
            let total = (lcg_next(&mut seed) % 1_000) as i64;
            let page = (lcg_next(&mut seed) % 100) as i64 + 1;
            let per_page = (lcg_next(&mut seed) % 50) as i64 + 1;
            let zero_based = lcg_next(&mut seed) % 2 == 0;
            let request = PageRequest {
                page,
                per_page,
                zero_based,
            };
            let here = PaginationPlanner::plan(total, request).unwrap();
            let there = PaginationPlanner::plan(total, request.next()).unwrap();
            assert_eq!(here.max_id - there.max_id, per_page);
        }
    }

    #[test]
    fn pages_cover_every_index_once_newest_first() {
        let mut seed = 0xC0FE_u64;
        for _ in 0..500 {
            let total = (lcg_next(&mut seed) % 200) as i64;
            let per_page = (lcg_next(&mut seed) % 25) as i64 + 1;
            let zero_based = lcg_next(&mut seed) % 2 == 0;

            let mut request = PageRequest {
                page: 1,
                per_page,
                zero_based,
            };
            let mut seen = Vec::new();
            loop {
                let w = PaginationPlanner::plan(total, request).unwrap();
                if w.is_empty() {
                    break;
                }
                assert!(w.max_id >= w.min_id);
                assert!(w.len() <= per_page as u64);
                seen.extend(w.ids());
                if !w.has_next {
                    break;
                }
                request = request.next();
            }

            let expected: Vec<i64> = if zero_based {
                (0..total).rev().collect()
            } else {
                (1..=total).rev().collect()
            };
            assert_eq!(seen, expected);
        }
    }
}
