//! Token planner: decides which link slots appear and in what order

use super::{PaginationError, PaginationState, Token};
use crate::config::EdgeLink;

/// Plan the tokens for `state`, left to right.
///
/// The order is: first shortcut, first ellipsis, previous, the numeric
/// window around the current page, last ellipsis, last shortcut, next.
///
/// Page numbers past `total_pages` and a zero page count are not errors;
/// they select dedicated window formulas so the number of planned page
/// links never depends on how large the requested page is.
pub fn plan(
    state: &PaginationState,
    distance: i64,
    first: &EdgeLink,
    last: &EdgeLink,
) -> Result<Vec<Token>, PaginationError> {
    if distance < 1 {
        return Err(PaginationError::InvalidDistance(distance));
    }

    let page = state.page_number;
    let total = state.total_pages;
    let mut tokens = Vec::new();

    if page.saturating_sub(distance) > 1 {
        match first {
            EdgeLink::Number => tokens.push(Token::PageNumber(1)),
            EdgeLink::Label(_) => tokens.push(Token::First),
            EdgeLink::Disabled => {}
        }
    }

    // With an edge shortcut shown, only draw the ellipsis when at least one
    // page is hidden between the shortcut and the window.
    let first_distance = edge_distance(first, distance);
    if page.saturating_sub(first_distance) > 1 && page > 1 {
        tokens.push(Token::FirstEllipsis);
    }

    if page != 1 {
        tokens.push(Token::Previous);
    }

    let (beginning, end) = window(page, total, distance);
    tracing::debug!(
        "Page {} of {}: window {}..={}",
        page,
        total,
        beginning,
        end
    );
    tokens.extend((beginning..=end).map(Token::PageNumber));

    let last_distance = edge_distance(last, distance);
    if page.saturating_add(last_distance) < total && page != total {
        tokens.push(Token::LastEllipsis);
    }

    if page.saturating_add(distance) < total {
        match last {
            EdgeLink::Number => tokens.push(Token::PageNumber(total)),
            EdgeLink::Label(_) => tokens.push(Token::Last),
            EdgeLink::Disabled => {}
        }
    }

    if page != total && page < total {
        tokens.push(Token::Next);
    }

    Ok(tokens)
}

fn edge_distance(edge: &EdgeLink, distance: i64) -> i64 {
    if edge.is_enabled() {
        distance.saturating_add(1)
    } else {
        distance
    }
}

/// Bounds of the numeric window. `beginning > end` means an empty window.
fn window(page: i64, total: i64, distance: i64) -> (i64, i64) {
    let beginning = if page.saturating_sub(distance) < 1 {
        // page - (distance + (page - distance - 1))
        1
    } else if page <= total {
        page - distance
    } else {
        // Requested page is past the end: anchor on the total instead, even
        // if that goes below 1.
        total.saturating_sub(distance)
    };

    let end = if total != 0 && page.saturating_add(distance) >= total {
        total
    } else if total == 0 {
        1
    } else {
        page + distance
    };

    (beginning, end)
}
