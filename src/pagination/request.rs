use crate::error::Error;

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Which page of a newest-first listing the caller wants.
///
/// Missing fields fall back to page 1, ten items per page, zero-based ids,
/// so `{}` and `{"page": 2}` are both valid requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageRequest {
    /// One-based page number; page 1 holds the newest items.
    pub page: i64,
    pub per_page: i64,
    /// `true` when the collection is indexed `0..total`, `false` for `1..=total`.
    pub zero_based: bool,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            zero_based: true,
        }
    }
}

impl PageRequest {
    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page,
            per_page,
            ..Self::default()
        }
    }

    pub fn one_based(self) -> Self {
        Self {
            zero_based: false,
            ..self
        }
    }

    /// The request for older items.
    pub fn next(self) -> Self {
        Self {
            page: self.page.saturating_add(1),
            ..self
        }
    }

    /// The request for newer items, or `None` on the first page.
    pub fn prev(self) -> Option<Self> {
        (self.page > DEFAULT_PAGE).then(|| Self {
            page: self.page - 1,
            ..self
        })
    }

    /// Lowest index minus one: the value `min_id` bottoms out at.
    pub fn floor(&self) -> i64 {
        if self.zero_based { -1 } else { 0 }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.page < 1 {
            return Err(Error::InvalidArgument {
                reason: format!("page must be >= 1, got {}", self.page),
            });
        }
        if self.per_page < 1 {
            return Err(Error::InvalidArgument {
                reason: format!("per_page must be >= 1, got {}", self.per_page),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "test assertions")]
mod tests {
    use super::*;

    #[test]
    fn empty_object_deserializes_to_defaults() {
        let request: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, PageRequest::default());
        assert_eq!(request.page, 1);
        assert_eq!(request.per_page, 10);
        assert!(request.zero_based);
    }

    #[test]
    fn partial_object_keeps_remaining_defaults() {
        let request: PageRequest =
            serde_json::from_str(r#"{"page": 3, "zeroBased": false}"#).unwrap();
        assert_eq!(
            request,
            PageRequest {
                page: 3,
                per_page: 10,
                zero_based: false
            }
        );
    }

    #[test]
    fn validate_rejects_non_positive_page_and_size() {
        assert!(PageRequest::new(1, 1).validate().is_ok());
        assert!(matches!(
            PageRequest::new(0, 10).validate(),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            PageRequest::new(1, 0).validate(),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            PageRequest::new(-4, -4).validate(),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn next_and_prev_step_between_pages() {
        let first = PageRequest::default();
        assert_eq!(first.prev(), None);
        let second = first.next();
        assert_eq!(second.page, 2);
        assert_eq!(second.prev(), Some(first));
        assert_eq!(PageRequest::new(i64::MAX, 10).next().page, i64::MAX);
    }

    #[test]
    fn floor_depends_on_index_base() {
        assert_eq!(PageRequest::default().floor(), -1);
        assert_eq!(PageRequest::default().one_based().floor(), 0);
    }
}
