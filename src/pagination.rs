pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PER_PAGE: i64 = 10;
pub const MIN_PER_PAGE: i64 = 5;
pub const MAX_PER_PAGE: i64 = 20;

/// Resolved pagination controls. `page` is always >= 1 and `per_page` is
/// always within `[MIN_PER_PAGE, MAX_PER_PAGE]` after `resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub per_page: i64,
}

impl PageRequest {
    /// Apply the clamping rules: a missing, zero or negative `page` means
    /// page 1; a missing `perPage` or one outside `[5, 20]` means 10.
    pub fn resolve(page: Option<i64>, per_page: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p,
            _ => DEFAULT_PAGE,
        };
        let per_page = match per_page {
            Some(n) if (MIN_PER_PAGE..=MAX_PER_PAGE).contains(&n) => n,
            _ => DEFAULT_PER_PAGE,
        };
        PageRequest { page, per_page }
    }

    // `page` is >= 1 after resolve, so only the multiplication can
    // overflow; saturate so an absurd page stays a far-past-the-end page.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }

    pub fn is_first(&self) -> bool {
        self.page < 2
    }

    pub fn is_last(&self, total_documents: i64) -> bool {
        self.offset().saturating_add(self.per_page) >= total_documents
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_params_resolve_to_defaults() {
        let page = PageRequest::resolve(None, None);
        assert_eq!(page, PageRequest { page: 1, per_page: 10 });
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn zero_and_negative_page_mean_first_page() {
        assert_eq!(PageRequest::resolve(Some(0), None).page, 1);
        assert_eq!(PageRequest::resolve(Some(-3), None).page, 1);
        assert_eq!(PageRequest::resolve(Some(4), None).page, 4);
    }

    #[test]
    fn per_page_outside_bounds_falls_back_to_default() {
        assert_eq!(PageRequest::resolve(None, Some(0)).per_page, 10);
        assert_eq!(PageRequest::resolve(None, Some(4)).per_page, 10);
        assert_eq!(PageRequest::resolve(None, Some(21)).per_page, 10);
        assert_eq!(PageRequest::resolve(None, Some(5)).per_page, 5);
        assert_eq!(PageRequest::resolve(None, Some(20)).per_page, 20);
    }

    #[test]
    fn offset_is_derived_from_resolved_values() {
        assert_eq!(PageRequest::resolve(Some(3), Some(7)).offset(), 14);
        // perPage clamps first, then the offset uses the clamped size
        assert_eq!(PageRequest::resolve(Some(3), Some(50)).offset(), 20);
    }

    #[test]
    fn huge_page_numbers_saturate_instead_of_overflowing() {
        let page = PageRequest::resolve(Some(i64::MAX), Some(20));
        assert_eq!(page.offset(), i64::MAX);
        assert!(!page.is_first());
        assert!(page.is_last(52));

        let unclamped = PageRequest::resolve(Some(i64::MAX), Some(0));
        assert_eq!(unclamped.per_page, 10);
        assert_eq!(unclamped.offset(), i64::MAX);
        assert!(unclamped.is_last(0));
    }

    #[test]
    fn first_and_last_page_flags() {
        let page = PageRequest::resolve(Some(1), Some(10));
        assert!(page.is_first());
        assert!(!page.is_last(52));

        let past_end = PageRequest::resolve(Some(8), Some(7));
        assert!(!past_end.is_first());
        assert!(past_end.is_last(52));

        // empty collection: the single default page is both first and last
        let empty = PageRequest::resolve(None, None);
        assert!(empty.is_first());
        assert!(empty.is_last(0));
    }
}
