//! Token renderer: attaches labels and target pages to planned tokens

use super::{Label, Link, PaginationState, Token};
use crate::config::{EdgeLink, Options};

/// Map each token to a [`Link`], dropping tokens whose option is disabled.
pub fn render(tokens: &[Token], state: &PaginationState, options: &Options) -> Vec<Link> {
    tokens
        .iter()
        .filter_map(|token| {
            let link = render_token(*token, state, options);
            if link.is_none() {
                tracing::trace!("Dropping {:?}: option disabled", token);
            }
            link
        })
        .collect()
}

fn render_token(token: Token, state: &PaginationState, options: &Options) -> Option<Link> {
    match token {
        Token::Previous => options
            .previous
            .as_deref()
            .map(|text| Link::text(text, state.page_number.saturating_sub(1))),
        Token::Next => options
            .next
            .as_deref()
            .map(|text| Link::text(text, state.page_number.saturating_add(1))),
        Token::First => edge_link(&options.first, 1),
        Token::Last => edge_link(&options.last, state.total_pages),
        Token::FirstEllipsis => ellipsis(options, &options.first),
        Token::LastEllipsis => ellipsis(options, &options.last),
        Token::PageNumber(page) => Some(Link::number(page)),
    }
}

fn edge_link(edge: &EdgeLink, page: i64) -> Option<Link> {
    match edge {
        EdgeLink::Disabled => None,
        EdgeLink::Number => Some(Link::number(page)),
        EdgeLink::Label(text) => Some(Link::page(Label::Text(text.clone()), page)),
    }
}

fn ellipsis(options: &Options, edge: &EdgeLink) -> Option<Link> {
    if !edge.is_enabled() {
        return None;
    }
    options.ellipsis.as_ref().map(|text| Link::Ellipsis { text: text.clone() })
}
