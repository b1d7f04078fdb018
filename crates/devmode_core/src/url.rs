//! Substring-based URL helpers.
//!
//! These deliberately avoid a conforming URL parser: no percent-decoding,
//! no validation, and malformed input degrades to whatever the successive
//! searches produce. Every search is for an ASCII delimiter, so slicing at
//! the returned byte offsets always lands on a char boundary.

/// Query parameter naming the development code server.
pub const CODE_SERVER_PARAM: &str = "gwt.codesvr=";
/// Query parameter marking a hosted-mode page.
pub const HOSTED_PARAM: &str = "gwt.hosted=";

/// Returns the network host of `url`, without scheme, userinfo, port or path.
///
/// Without `://` the whole input is treated as the authority.
pub fn host_from_url(url: &str) -> &str {
    let mut host = match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    };
    if let Some(idx) = host.find('/') {
        host = &host[..idx];
    }
    if let Some(idx) = host.find('@') {
        host = &host[idx + 1..];
    }
    if let Some(idx) = host.find(':') {
        host = &host[..idx];
    }
    host
}

/// Returns the value of the `gwt.codesvr=` query parameter, cut at the
/// earlier of the next `:` or `&`. Empty when there is no query or no marker.
pub fn code_server_from_url(url: &str) -> &str {
    let Some(query_start) = url.find('?') else {
        return "";
    };
    let query = &url[query_start + 1..];
    let Some(marker) = query.find(CODE_SERVER_PARAM) else {
        return "";
    };
    let value = &query[marker + CODE_SERVER_PARAM.len()..];

    let cut = match (value.find(':'), value.find('&')) {
        (Some(colon), Some(amp)) => Some(colon.min(amp)),
        (colon, amp) => colon.or(amp),
    };
    match cut {
        Some(idx) => &value[..idx],
        None => value,
    }
}

/// The query string of `url` including its leading `?`, or `""` if absent.
pub fn query_part(url: &str) -> &str {
    url.find('?').map_or("", |idx| &url[idx..])
}

/// True when the query string carries a dev-mode marker.
pub fn is_dev_mode_url(url: &str) -> bool {
    let search = query_part(url);
    search.contains(CODE_SERVER_PARAM) || search.contains(HOSTED_PARAM)
}
