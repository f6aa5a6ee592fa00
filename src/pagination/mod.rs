//! Pagination link planning
//!
//! [`build_pagination_links`] runs the two stages in order: the planner
//! decides which [`Token`]s appear and in what order, then the renderer
//! turns each token into a [`Link`] using the [`Options`], dropping the
//! ones whose option is disabled.

mod planner;
mod renderer;

use serde::Serialize;
use std::fmt;

pub use crate::error::PaginationError;
pub use planner::plan;
pub use renderer::render;

use crate::config::Options;

/// Where the caller currently is in a paginated collection.
///
/// Both values may come from a query string, so nothing here is trusted:
/// the page can be past the end and the total can be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaginationState {
    pub page_number: i64,
    pub total_pages: i64,
}

impl PaginationState {
    pub fn new(page_number: i64, total_pages: i64) -> Self {
        Self {
            page_number,
            total_pages,
        }
    }

    /// Build a state from an item count, rounding the page count up
    pub fn from_items(
        page_number: i64,
        total_items: i64,
        per_page: i64,
    ) -> Result<Self, PaginationError> {
        if per_page < 1 {
            return Err(PaginationError::InvalidPerPage(per_page));
        }
        let total_items = total_items.max(0);
        let total_pages = total_items / per_page + i64::from(total_items % per_page != 0);
        Ok(Self::new(page_number, total_pages))
    }
}

/// One link slot, before labels and targets are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    Previous,
    Next,
    First,
    Last,
    FirstEllipsis,
    LastEllipsis,
    PageNumber(i64),
}

/// Visible text of a page link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Label {
    Text(String),
    Page(i64),
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Text(text) => f.write_str(text),
            Label::Page(page) => write!(f, "{}", page),
        }
    }
}

/// A rendered link, in left-to-right order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Link {
    /// A navigable link to `page`
    Page { label: Label, page: i64 },
    /// Non-interactive marker for skipped pages
    Ellipsis { text: String },
}

impl Link {
    pub fn page(label: Label, page: i64) -> Self {
        Link::Page { label, page }
    }

    pub fn number(page: i64) -> Self {
        Link::Page {
            label: Label::Page(page),
            page,
        }
    }

    pub fn text(text: &str, page: i64) -> Self {
        Link::Page {
            label: Label::Text(text.to_string()),
            page,
        }
    }

    pub fn label_text(&self) -> String {
        match self {
            Link::Page { label, .. } => label.to_string(),
            Link::Ellipsis { text } => text.clone(),
        }
    }

    /// Target page, or `None` for an ellipsis
    pub fn target_page(&self) -> Option<i64> {
        match self {
            Link::Page { page, .. } => Some(*page),
            Link::Ellipsis { .. } => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, Link::Ellipsis { .. })
    }
}

/// Compute the links a pagination widget should show.
///
/// Fails only when `options` is invalid; any page/total combination yields
/// a bounded list.
///
/// # Examples
/// ```
/// use pagination_links::{build_pagination_links, Link, Options, PaginationState};
///
/// let links = build_pagination_links(PaginationState::new(2, 3), &Options::default()).unwrap();
/// assert_eq!(
///     links,
///     vec![
///         Link::text("<<", 1),
///         Link::number(1),
///         Link::number(2),
///         Link::number(3),
///         Link::text(">>", 3),
///     ]
/// );
/// ```
pub fn build_pagination_links(
    state: PaginationState,
    options: &Options,
) -> Result<Vec<Link>, PaginationError> {
    options.validate()?;
    let tokens = plan(&state, options.distance, &options.first, &options.last)?;
    Ok(render(&tokens, &state, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EdgeLink;

    fn page_numbers(links: &[Link]) -> Vec<i64> {
        links
            .iter()
            .filter_map(|link| match link {
                Link::Page {
                    label: Label::Page(n),
                    ..
                } => Some(*n),
                _ => None,
            })
            .collect()
    }

    fn custom_edges() -> Options {
        Options::default()
            .with_first(EdgeLink::Label("First".to_string()))
            .with_last(EdgeLink::Label("Last".to_string()))
    }

    #[test]
    fn test_default_middle_page() {
        let links = build_pagination_links(PaginationState::new(5, 10), &Options::default()).unwrap();

        let mut expected = vec![Link::text("<<", 4)];
        expected.extend((1..=10).map(Link::number));
        expected.push(Link::text(">>", 6));
        assert_eq!(links, expected);
    }

    #[test]
    fn test_custom_edge_labels() {
        let options = custom_edges().with_distance(5);
        let links = build_pagination_links(PaginationState::new(10, 20), &options).unwrap();

        let mut expected = vec![
            Link::text("First", 1),
            Link::Ellipsis {
                text: "…".to_string(),
            },
            Link::text("<<", 9),
        ];
        expected.extend((5..=15).map(Link::number));
        expected.push(Link::Ellipsis {
            text: "…".to_string(),
        });
        expected.push(Link::text("Last", 20));
        expected.push(Link::text(">>", 11));
        assert_eq!(links, expected);
    }

    #[test]
    fn test_default_edges_are_page_numbers() {
        let links = build_pagination_links(PaginationState::new(10, 20), &Options::default()).unwrap();
        let n = links.len();
        assert_eq!(links[0], Link::number(1));
        assert!(links[1].is_ellipsis());
        assert!(links[n - 3].is_ellipsis());
        assert_eq!(links[n - 2], Link::number(20));
        assert_eq!(links[n - 1], Link::text(">>", 11));
    }

    #[test]
    fn test_invalid_distance_aborts() {
        for distance in [0, -1, -100] {
            let options = Options::default().with_distance(distance);
            let result = build_pagination_links(PaginationState::new(1, 10), &options);
            assert!(matches!(result, Err(PaginationError::InvalidDistance(d)) if d == distance));
        }
    }

    #[test]
    fn test_page_numbers_ascending_in_range() {
        for distance in 1..=4 {
            for options in [Options::default(), custom_edges()] {
                let options = options.with_distance(distance);
                for total in 0..=12 {
                    for page in 1..=total.max(1) {
                        let state = PaginationState::new(page, total);
                        let numbers = page_numbers(&build_pagination_links(state, &options).unwrap());
                        assert!(
                            numbers.windows(2).all(|w| w[0] < w[1]),
                            "page {} of {} distance {}: {:?}",
                            page,
                            total,
                            distance,
                            numbers
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_zero_total_pages() {
        for page in 1..=20 {
            let links =
                build_pagination_links(PaginationState::new(page, 0), &Options::default()).unwrap();
            let numbers = page_numbers(&links);
            assert!(numbers.len() <= 2 * 5 + 1);
            assert!(numbers.iter().all(|&n| n <= 1));
            assert!(!links.contains(&Link::text(">>", page + 1)));
        }
    }

    #[test]
    fn test_page_past_the_end_is_bounded() {
        for page in [11, 50, 1_000_000, i64::MAX] {
            let links =
                build_pagination_links(PaginationState::new(page, 10), &Options::default()).unwrap();
            let numbers = page_numbers(&links);
            assert!(numbers.len() <= 2 * 5 + 1, "page {}: {:?}", page, numbers);
            assert!(numbers.iter().all(|&n| n <= 10));
            assert!(!links.iter().any(|l| l.label_text() == ">>"));
        }
    }

    #[test]
    fn test_idempotent() {
        let state = PaginationState::new(7, 30);
        let options = custom_edges().with_distance(2);
        let first = build_pagination_links(state, &options).unwrap();
        let second = build_pagination_links(state, &options).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_disabling_removes_only_that_class() {
        let state = PaginationState::new(10, 20);
        let base = build_pagination_links(state, &custom_edges()).unwrap();
        let n = base.len();

        let links = |options: Options| build_pagination_links(state, &options).unwrap();
        let without = |drop: &[usize]| -> Vec<Link> {
            base.iter()
                .enumerate()
                .filter(|(i, _)| !drop.contains(i))
                .map(|(_, link)| link.clone())
                .collect()
        };

        // [First, …, <<, 5..=15, …, Last, >>]
        assert_eq!(links(custom_edges().with_next(None)), without(&[n - 1]));
        assert_eq!(links(custom_edges().with_previous(None)), without(&[2]));
        assert_eq!(links(custom_edges().with_ellipsis(None)), without(&[1, n - 3]));
        assert_eq!(links(custom_edges().with_first(EdgeLink::Disabled)), without(&[0, 1]));
        assert_eq!(
            links(custom_edges().with_last(EdgeLink::Disabled)),
            without(&[n - 3, n - 2])
        );
    }

    #[test]
    fn test_from_items() {
        assert_eq!(
            PaginationState::from_items(1, 95, 10).unwrap(),
            PaginationState::new(1, 10)
        );
        assert_eq!(
            PaginationState::from_items(2, 100, 10).unwrap(),
            PaginationState::new(2, 10)
        );
        assert_eq!(
            PaginationState::from_items(1, 0, 10).unwrap(),
            PaginationState::new(1, 0)
        );
        assert!(matches!(
            PaginationState::from_items(1, 10, 0),
            Err(PaginationError::InvalidPerPage(0))
        ));
    }

    #[test]
    fn test_link_json() {
        let json = serde_json::to_string(&vec![
            Link::text("<<", 1),
            Link::number(2),
            Link::Ellipsis {
                text: "…".to_string(),
            },
        ])
        .unwrap();
        assert_eq!(
            json,
            r#"[{"kind":"page","label":"<<","page":1},{"kind":"page","label":2,"page":2},{"kind":"ellipsis","text":"…"}]"#
        );
    }
}
