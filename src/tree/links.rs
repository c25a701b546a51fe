// src/tree/links.rs
// =============================================================================
// Builds the link tree from raw HTML.
//
// Steps:
// 1. Parse the HTML (scraper / html5ever)
// 2. Find the top-level headings
// 3. For each of them, collect every valid link inside the heading's
//    parent element (the whole block, not just up to the next heading)
// 4. Group those links by their nearest heading, keeping first-seen order
// 5. Copy everything into owned model types and drop the document
//
// Nothing in here fails: odd markup just ends up as empty groups, the
// NoHeading key, or text-less headings and links.
// =============================================================================

use scraper::{ElementRef, Html};
use tracing::debug;

use super::headers::{find_nearest_header, find_top_headers, heading_level};
use super::model::{Heading, HeadingKey, Link, LinkTree, Node};

// Checks that an href is an absolute http:// or https:// URL
//
// Same rule as the pattern ^https?://.+$ : the scheme must be followed by
// at least one character, and '.' never matches a line feed.
//
// Examples:
//   "https://example.com" -> true
//   "http://"             -> false (nothing after the scheme)
//   "mailto:a@b.com"      -> false
//   "/docs", "#top"       -> false (relative)
pub fn is_link_valid(href: &str) -> bool {
    let rest = href
        .strip_prefix("https://")
        .or_else(|| href.strip_prefix("http://"));

    match rest {
        Some(rest) => !rest.is_empty() && !rest.contains('\n'),
        None => false,
    }
}

// Collects the valid links that belong to a top-level heading
//
// The scope is everything below the heading's parent element, so a heading
// sharing its parent with other headings sees their links too.
pub fn find_links_for_article(heading: ElementRef<'_>) -> Vec<ElementRef<'_>> {
    let Some(parent) = heading.parent() else {
        return Vec::new();
    };

    parent
        .descendants()
        .skip(1) // the parent itself
        .filter_map(ElementRef::wrap)
        .filter(|element| element.value().attr("href").is_some_and(is_link_valid))
        .collect()
}

// Groups links under their nearest heading
//
// Groups appear in the order their heading was first needed; links keep
// their document order inside a group. Links without any heading end up
// under HeadingKey::NoHeading.
pub fn find_nearest_headers_for_links(links: &[ElementRef<'_>]) -> Node {
    let mut groups: Vec<(Option<ElementRef>, Vec<ElementRef>)> = Vec::new();

    for link in links {
        let nearest = find_nearest_header(*link);

        // ElementRef compares by node identity, so equal text doesn't merge
        match groups.iter_mut().find(|(key, _)| *key == nearest) {
            Some((_, members)) => members.push(*link),
            None => groups.push((nearest, vec![*link])),
        }
    }

    Node::Section(
        groups
            .into_iter()
            .map(|(key, members)| {
                let key = match key {
                    Some(heading) => HeadingKey::Heading(to_heading(heading)),
                    None => HeadingKey::NoHeading,
                };
                let members = members.into_iter().filter_map(to_link).collect();
                (key, Node::Leaf(members))
            })
            .collect(),
    )
}

// Parses `html` and builds the complete link tree
//
// An HTML page without headings gives an empty tree.
pub fn build_link_tree(html: &str) -> LinkTree {
    let document = Html::parse_document(html);
    let top_headers = find_top_headers(&document);

    match top_headers.first().and_then(|h| heading_level(*h)) {
        Some(level) => debug!(level, count = top_headers.len(), "top-level headings found"),
        None => debug!("page has no headings"),
    }

    let sections = top_headers
        .into_iter()
        .map(|header| {
            let links = find_links_for_article(header);
            debug!(links = links.len(), "collected links for section");
            (
                HeadingKey::Heading(to_heading(header)),
                find_nearest_headers_for_links(&links),
            )
        })
        .collect();

    LinkTree::new(sections)
}

fn to_heading(element: ElementRef<'_>) -> Heading {
    Heading {
        // Only called on elements found as headings
        level: heading_level(element).unwrap_or(1),
        text: element_text(element),
    }
}

fn to_link(element: ElementRef<'_>) -> Option<Link> {
    let url = element.value().attr("href")?.to_string();
    let text = element_text(element);
    if text.is_none() {
        debug!(%url, "link has no text");
    }
    Some(Link { url, text })
}

fn element_text(element: ElementRef<'_>) -> Option<String> {
    let text: String = element.text().collect();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}
