//! Pagination response headers

use axum::http::{header::LINK, HeaderMap, HeaderName, HeaderValue};

use crate::models::Page;

pub const TOTAL_COUNT_HEADER: HeaderName = HeaderName::from_static("x-total-count");

fn page_uri(base_url: &str, page: i64, size: i64) -> String {
    format!("{}?page={}&size={}", base_url, page, size)
}

/// Build the `Link` header value for a page: `next` and `prev` when they
/// exist, then `last` and `first`
pub fn link_header<T>(page: &Page<T>, base_url: &str) -> String {
    let mut links = Vec::with_capacity(4);

    if page.number < page.total_pages() - 1 {
        links.push(format!("<{}>; rel=\"next\"", page_uri(base_url, page.number + 1, page.size)));
    }
    if page.number > 0 {
        links.push(format!("<{}>; rel=\"prev\"", page_uri(base_url, page.number - 1, page.size)));
    }

    let last_page = (page.total_pages() - 1).max(0);
    links.push(format!("<{}>; rel=\"last\"", page_uri(base_url, last_page, page.size)));
    links.push(format!("<{}>; rel=\"first\"", page_uri(base_url, 0, page.size)));

    links.join(",")
}

pub fn pagination_headers<T>(page: &Page<T>, base_url: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(TOTAL_COUNT_HEADER, HeaderValue::from(page.total_elements));
    if let Ok(value) = HeaderValue::from_str(&link_header(page, base_url)) {
        headers.insert(LINK, value);
    }
    headers
}
