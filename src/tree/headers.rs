// src/tree/headers.rs
// =============================================================================
// Heading lookups on the parsed document.
//
// Two searches live here, both bounded by the six heading levels:
// - find_top_headers: the shallowest level that occurs in the page
// - find_nearest_header: the heading a link belongs to
//
// Both are plain loops over the levels, no recursion.
// =============================================================================

use scraper::{ElementRef, Html};

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 6;

// Returns the heading level of an element, or None if it isn't <h1>..<h6>
pub fn heading_level(element: ElementRef) -> Option<u8> {
    match element.value().name() {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}

// Finds the page's top-level headings
//
// Scans h1, then h2, ... down to h6 and returns every heading of the first
// level that has at least one occurrence, in document order.
//
// Returns an empty Vec when the page has no headings at all.
pub fn find_top_headers(document: &Html) -> Vec<ElementRef<'_>> {
    for level in MIN_LEVEL..=MAX_LEVEL {
        let headers = headers_at_level(document, level);
        if !headers.is_empty() {
            return headers;
        }
    }
    Vec::new()
}

fn headers_at_level(document: &Html, level: u8) -> Vec<ElementRef<'_>> {
    document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .filter(|element| heading_level(*element) == Some(level))
        .collect()
}

// Finds the heading a link belongs to
//
// Starting with the most specific level (h6) and widening to h1:
// walk up the link's ancestors and, at each one, look at the siblings that
// come before it. The first ancestor with a preceding heading of the current
// level wins, and of those headings the closest one is taken.
//
// A level is searched over the whole ancestor chain before the next, wider
// level is tried. Returns None if no level matches anywhere.
pub fn find_nearest_header(link: ElementRef<'_>) -> Option<ElementRef<'_>> {
    (MIN_LEVEL..=MAX_LEVEL)
        .rev()
        .find_map(|level| preceding_header_at_level(link, level))
}

fn preceding_header_at_level(link: ElementRef<'_>, level: u8) -> Option<ElementRef<'_>> {
    link.ancestors().find_map(|ancestor| {
        // prev_siblings() walks backwards, so the first hit is the closest
        ancestor
            .prev_siblings()
            .filter_map(ElementRef::wrap)
            .find(|sibling| heading_level(*sibling) == Some(level))
    })
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is ElementRef::wrap?
//    - The scraper DOM holds text, comments and elements as generic nodes
//    - wrap() returns Some(element) only for element nodes
//    - filter_map(ElementRef::wrap) keeps the elements and skips the rest
//
// 2. Why .rev() on the level range?
//    - (1..=6).rev() yields 6, 5, 4, 3, 2, 1
//    - find_map stops at the first level that produces Some(...)
//
// 3. Why is ElementRef passed by value?
//    - It's Copy: just a reference into the parsed tree
//    - The '_ lifetime ties the returned heading to the same document
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    fn first<'a>(document: &'a Html, css: &str) -> ElementRef<'a> {
        let selector = Selector::parse(css).unwrap();
        document.select(&selector).next().unwrap()
    }

    fn texts(elements: &[ElementRef]) -> Vec<String> {
        elements.iter().map(|e| e.text().collect::<String>()).collect()
    }

    #[test]
    fn test_heading_level() {
        let document = Html::parse_fragment("<h4>x</h4><p>y</p>");
        assert_eq!(heading_level(first(&document, "h4")), Some(4));
        assert_eq!(heading_level(first(&document, "p")), None);
    }

    #[test]
    fn test_top_headers_prefers_h1() {
        let html = "<h2>Sub</h2><h1>One</h1><div><h1>Two</h1></div>";
        let document = Html::parse_document(html);
        assert_eq!(texts(&find_top_headers(&document)), vec!["One", "Two"]);
    }

    #[test]
    fn test_top_headers_only_level_three() {
        let html = "<h3>A</h3><p>text</p><h4>deeper</h4><h3>B</h3>";
        let document = Html::parse_document(html);
        let headers = find_top_headers(&document);
        assert_eq!(texts(&headers), vec!["A", "B"]);
        assert!(headers.iter().all(|h| heading_level(*h) == Some(3)));
    }

    #[test]
    fn test_top_headers_empty_without_headings() {
        let document = Html::parse_document("<p><a href='http://a.test'>a</a></p>");
        assert!(find_top_headers(&document).is_empty());
    }

    #[test]
    fn test_nearest_header_three_levels_down() {
        let html = r#"
            <body>
              <h2>Section</h2>
              <div><section><p><a id="target" href="http://example.com">Example</a></p></section></div>
            </body>
        "#;
        let document = Html::parse_document(html);
        let link = first(&document, "#target");
        let header = find_nearest_header(link).unwrap();
        assert_eq!(header.text().collect::<String>(), "Section");
    }

    #[test]
    fn test_nearest_header_takes_closest_sibling() {
        let html = r#"
            <h2>First</h2>
            <h2>Second</h2>
            <p><a id="target" href="http://x.test">x</a></p>
        "#;
        let document = Html::parse_document(html);
        let header = find_nearest_header(first(&document, "#target")).unwrap();
        assert_eq!(header.text().collect::<String>(), "Second");
    }

    #[test]
    fn test_nearest_header_prefers_specific_level() {
        // The h4 is further away than the h2 but more specific
        let html = r#"
            <h4>Detail</h4>
            <h2>Broad</h2>
            <p><a id="target" href="http://x.test">x</a></p>
        "#;
        let document = Html::parse_document(html);
        let header = find_nearest_header(first(&document, "#target")).unwrap();
        assert_eq!(header.text().collect::<String>(), "Detail");
    }

    #[test]
    fn test_nearest_header_none_before_any_heading() {
        let html = r#"
            <p><a id="target" href="http://x.test">x</a></p>
            <h1>After</h1>
        "#;
        let document = Html::parse_document(html);
        assert!(find_nearest_header(first(&document, "#target")).is_none());
    }

    #[test]
    fn test_nearest_header_ignores_links_own_siblings() {
        // Only ancestors' siblings are searched, not the link's own
        let html = r#"<div><h3>Inside</h3><a id="target" href="http://x.test">x</a></div>"#;
        let document = Html::parse_document(html);
        assert!(find_nearest_header(first(&document, "#target")).is_none());
    }
}
