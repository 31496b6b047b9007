//! Candidate repository link extraction from listing markup

use crate::url::repo_url;
use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::collections::BTreeSet;

/// Which `/owner/repo` hrefs are accepted
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LinkFilter {
    /// Any root-relative path with two non-empty leading segments
    #[default]
    Syntactic,
    /// Like `Syntactic`, but the owner segment must equal this name
    Owner(String),
}

impl LinkFilter {
    /// `Owner` when an owner is configured, `Syntactic` otherwise
    pub fn from_owner(owner: Option<&str>) -> Self {
        match owner {
            Some(owner) => LinkFilter::Owner(owner.to_string()),
            None => LinkFilter::Syntactic,
        }
    }

    fn accepts(&self, owner: &str) -> bool {
        match self {
            LinkFilter::Syntactic => true,
            LinkFilter::Owner(expected) => owner == expected,
        }
    }
}

/// Extracts candidate repository URLs from one page of markup
///
/// Every `<a href>` is considered. Navigation links of the same shape
/// (`/features/actions`, `/orgs/acme`) pass the syntactic filter too.
///
/// # Arguments
///
/// * `html` - Page markup
/// * `link_base` - Scheme and host for the canonical URLs
/// * `filter` - Acceptance rule for `(owner, repo)`
///
/// # Examples
///
/// ```
/// use harvestlab_links::{LinkFilter, extract_repo_links};
///
/// let html = r#"<a href="/acme/widgets/issues">issues</a><a href="//cdn.example">x</a>"#;
/// let links = extract_repo_links(html, "https://github.com", &LinkFilter::Syntactic);
/// assert_eq!(links.into_iter().collect::<Vec<_>>(), ["https://github.com/acme/widgets"]);
/// ```
pub fn extract_repo_links(html: &str, link_base: &str, filter: &LinkFilter) -> BTreeSet<String> {
    let dom = parse_document(RcDom::default(), Default::default()).one(html);

    collect_hrefs(&dom.document)
        .iter()
        .filter_map(|href| owner_and_repo(href))
        .filter(|(owner, _)| filter.accepts(owner))
        .map(|(owner, repo)| repo_url(link_base, owner, repo))
        .collect()
}

/// Splits a root-relative href into its first two path segments
///
/// Returns `None` for protocol-relative (`//host`), absolute, or
/// single-segment hrefs, and when either segment is empty.
pub fn owner_and_repo(href: &str) -> Option<(&str, &str)> {
    if !href.starts_with('/') || href.starts_with("//") {
        return None;
    }

    let mut parts = href.trim_matches('/').split('/');
    let owner = parts.next()?;
    let repo = parts.next()?;

    if owner.is_empty() || repo.is_empty() {
        return None;
    }

    Some((owner, repo))
}

/// Collects the `href` of every `<a>` element in document order
fn collect_hrefs(root: &Handle) -> Vec<String> {
    let mut hrefs = Vec::new();
    let mut stack = vec![root.clone()];

    while let Some(node) = stack.pop() {
        if let NodeData::Element { name, attrs, .. } = &node.data
            && &*name.local == "a"
            && let Some(href) = attrs
                .borrow()
                .iter()
                .find(|attr| &*attr.name.local == "href")
        {
            hrefs.push(href.value.to_string());
        }

        // Reverse so that popping visits children left to right
        for child in node.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }

    hrefs
}
