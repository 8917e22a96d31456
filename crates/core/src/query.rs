//! Query translator for the article listing endpoint.
//!
//! Turns the flat string parameters of `GET /articles` into a
//! [`QueryDescriptor`] that a storage backend can execute directly. Every
//! input maps to a valid descriptor: malformed numbers fall back to their
//! defaults instead of being rejected.

use std::collections::HashMap;

// ---------------------------------------------------------------------------
// Parameter names
// ---------------------------------------------------------------------------

/// Case-insensitive substring filter on the article title.
pub const PARAM_TITLE: &str = "title";

/// Case-insensitive substring filter on the article description.
pub const PARAM_DESC: &str = "desc";

/// Field to order results by.
pub const PARAM_SORT: &str = "sort";

/// Sort direction: `1` ascending, `-1` descending.
pub const PARAM_ORDER: &str = "order";

/// 1-based page number.
pub const PARAM_PAGE: &str = "page";

/// Page size.
pub const PARAM_LIMIT: &str = "limit";

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Page used when `page` is missing, malformed, or not positive.
pub const DEFAULT_PAGE: u64 = 1;

/// Page size used when `limit` is missing, malformed, or not positive.
pub const DEFAULT_LIMIT: u64 = 10;

// ---------------------------------------------------------------------------
// Descriptor types
// ---------------------------------------------------------------------------

/// Direction of a sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Interpret an `order` parameter. Only `-1` selects descending order.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw.and_then(parse_int) {
            Some(-1) => Self::Descending,
            _ => Self::Ascending,
        }
    }

    /// Numeric form used by document stores (`1` / `-1`).
    pub fn as_i32(self) -> i32 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }
}

/// A single sort key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

/// Filter, sort and pagination intent for one listing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryDescriptor {
    /// Case-insensitive substring the title must contain.
    pub title_contains: Option<String>,
    /// Case-insensitive substring the description must contain.
    pub desc_contains: Option<String>,
    /// Explicit ordering; `None` keeps the store's natural order.
    pub sort: Option<SortSpec>,
    /// 1-based page number, always `>= 1`.
    pub page: u64,
    /// Number of records to skip, always `(page - 1) * limit`.
    pub skip: u64,
    /// Maximum number of records to return, always `>= 1`.
    pub limit: u64,
}

impl Default for QueryDescriptor {
    fn default() -> Self {
        Self::paginated(DEFAULT_PAGE, DEFAULT_LIMIT)
    }
}

impl QueryDescriptor {
    /// Build a descriptor with no filters or sort for the given page.
    ///
    /// `page` and `limit` are coerced exactly like request parameters.
    pub fn paginated(page: u64, limit: u64) -> Self {
        let page = if page == 0 { DEFAULT_PAGE } else { page };
        let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };

        Self {
            title_contains: None,
            desc_contains: None,
            sort: None,
            page,
            skip: (page - 1).saturating_mul(limit),
            limit,
        }
    }

    /// Translate raw query-string parameters into a descriptor.
    ///
    /// Never fails. See the module docs for the coercion rules.
    pub fn from_params(params: &HashMap<String, String>) -> Self {
        let get = |key: &str| params.get(key).map(String::as_str);

        let page = positive_or(get(PARAM_PAGE), DEFAULT_PAGE);
        let limit = positive_or(get(PARAM_LIMIT), DEFAULT_LIMIT);

        let sort = non_empty(get(PARAM_SORT)).map(|field| SortSpec {
            field,
            direction: SortDirection::from_param(get(PARAM_ORDER)),
        });

        Self {
            title_contains: non_empty(get(PARAM_TITLE)),
            desc_contains: non_empty(get(PARAM_DESC)),
            sort,
            ..Self::paginated(page, limit)
        }
    }

    /// Whether any substring predicate is present.
    pub fn has_filters(&self) -> bool {
        self.title_contains.is_some() || self.desc_contains.is_some()
    }
}

// ---------------------------------------------------------------------------
// Coercion helpers
// ---------------------------------------------------------------------------

/// Parse a base-10 integer with an optional sign. Surrounding whitespace is
/// not accepted.
fn parse_int(raw: &str) -> Option<i64> {
    raw.parse::<i64>().ok()
}

/// Parse `raw` as a positive integer, falling back to `default` otherwise.
fn positive_or(raw: Option<&str>, default: u64) -> u64 {
    match raw.and_then(parse_int) {
        Some(n) if n > 0 => n.unsigned_abs(),
        _ => default,
    }
}

fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.filter(|s| !s.is_empty()).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    // -- defaults ------------------------------------------------------------

    #[test]
    fn empty_params_yield_defaults() {
        let q = QueryDescriptor::from_params(&HashMap::new());

        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);
        assert_eq!(q.skip, 0);
        assert_eq!(q.title_contains, None);
        assert_eq!(q.desc_contains, None);
        assert_eq!(q.sort, None);
        assert!(!q.has_filters());
        assert_eq!(q, QueryDescriptor::default());
    }

    // -- page ----------------------------------------------------------------

    #[test]
    fn invalid_page_coerces_to_one() {
        for raw in ["", "0", "-3", "abc", "1.5", " 2", "99999999999999999999"] {
            let q = QueryDescriptor::from_params(&params(&[("page", raw)]));
            assert_eq!(q.page, 1, "page={raw:?}");
            assert_eq!(q.skip, 0, "page={raw:?}");
        }
    }

    #[test]
    fn valid_page_is_kept() {
        let q = QueryDescriptor::from_params(&params(&[("page", "4")]));
        assert_eq!(q.page, 4);
        assert_eq!(q.skip, 30);
    }

    #[test]
    fn explicit_plus_sign_is_accepted() {
        let q = QueryDescriptor::from_params(&params(&[("page", "+3")]));
        assert_eq!(q.page, 3);
    }

    // -- limit ---------------------------------------------------------------

    #[test]
    fn invalid_limit_coerces_to_ten() {
        for raw in ["", "0", "-1", "ten", "5x"] {
            let q = QueryDescriptor::from_params(&params(&[("limit", raw)]));
            assert_eq!(q.limit, 10, "limit={raw:?}");
        }
    }

    #[test]
    fn page_and_limit_compute_skip() {
        let q = QueryDescriptor::from_params(&params(&[("page", "2"), ("limit", "5")]));
        assert_eq!(q.page, 2);
        assert_eq!(q.limit, 5);
        assert_eq!(q.skip, 5);
    }

    #[test]
    fn skip_uses_coerced_values() {
        let q = QueryDescriptor::from_params(&params(&[("page", "3"), ("limit", "nope")]));
        assert_eq!(q.skip, 20);

        let q = QueryDescriptor::from_params(&params(&[("page", "-1"), ("limit", "7")]));
        assert_eq!(q.skip, 0);
    }

    #[test]
    fn skip_saturates_instead_of_overflowing() {
        let max = i64::MAX.to_string();
        let q = QueryDescriptor::from_params(&params(&[
            ("page", max.as_str()),
            ("limit", max.as_str()),
        ]));
        assert_eq!(q.skip, u64::MAX);
    }

    // -- filters -------------------------------------------------------------

    #[test]
    fn title_and_desc_become_predicates() {
        let q = QueryDescriptor::from_params(&params(&[("title", "Go"), ("desc", "API")]));
        assert_eq!(q.title_contains.as_deref(), Some("Go"));
        assert_eq!(q.desc_contains.as_deref(), Some("API"));
        assert!(q.has_filters());
    }

    #[test]
    fn empty_filters_are_dropped() {
        let q = QueryDescriptor::from_params(&params(&[("title", ""), ("desc", "")]));
        assert!(!q.has_filters());
    }

    #[test]
    fn parameter_keys_are_case_sensitive() {
        let q = QueryDescriptor::from_params(&params(&[("Title", "Go"), ("PAGE", "3")]));
        assert_eq!(q.title_contains, None);
        assert_eq!(q.page, 1);
    }

    // -- sort ----------------------------------------------------------------

    #[test]
    fn sort_descending() {
        let q = QueryDescriptor::from_params(&params(&[("sort", "title"), ("order", "-1")]));
        let sort = q.sort.expect("sort should be set");
        assert_eq!(sort.field, "title");
        assert_eq!(sort.direction, SortDirection::Descending);
    }

    #[test]
    fn sort_without_order_is_ascending() {
        let q = QueryDescriptor::from_params(&params(&[("sort", "content")]));
        assert_matches!(
            q.sort,
            Some(SortSpec { ref field, direction: SortDirection::Ascending }) if field == "content"
        );
    }

    #[test]
    fn invalid_order_coerces_to_ascending() {
        for raw in ["", "0", "2", "-2", "desc", "1.0"] {
            let q = QueryDescriptor::from_params(&params(&[("sort", "title"), ("order", raw)]));
            assert_eq!(
                q.sort.map(|s| s.direction),
                Some(SortDirection::Ascending),
                "order={raw:?}"
            );
        }
    }

    #[test]
    fn order_without_sort_has_no_effect() {
        let with_order = QueryDescriptor::from_params(&params(&[("order", "-1")]));
        assert_eq!(with_order.sort, None);
        assert_eq!(with_order, QueryDescriptor::from_params(&HashMap::new()));

        let empty_sort = QueryDescriptor::from_params(&params(&[("sort", ""), ("order", "-1")]));
        assert_eq!(empty_sort.sort, None);
    }

    #[test]
    fn direction_numeric_form() {
        assert_eq!(SortDirection::Ascending.as_i32(), 1);
        assert_eq!(SortDirection::Descending.as_i32(), -1);
        assert_eq!(SortDirection::from_param(None), SortDirection::Ascending);
        assert_eq!(SortDirection::from_param(Some("1")), SortDirection::Ascending);
    }

    // -- paginated -----------------------------------------------------------

    #[test]
    fn paginated_coerces_zero_values() {
        let q = QueryDescriptor::paginated(0, 0);
        assert_eq!((q.page, q.limit, q.skip), (1, 10, 0));
    }
}
