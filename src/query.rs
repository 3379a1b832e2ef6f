//! Query string editing.

/// Set `key=value` in the query string of `url`.
///
/// An existing `key` is replaced in place and later duplicates are dropped;
/// otherwise the pair is appended with `?` or `&` as needed. Other pairs and
/// the fragment are kept verbatim.
///
/// # Examples
/// ```
/// use cdn_rewrite::add_query_arg;
///
/// assert_eq!(add_query_arg("/a.jpg", "v", "7"), "/a.jpg?v=7");
/// assert_eq!(add_query_arg("/a.jpg?x=1#top", "v", "7"), "/a.jpg?x=1&v=7#top");
/// assert_eq!(add_query_arg("/a.jpg?v=1&x=2", "v", "7"), "/a.jpg?v=7&x=2");
/// ```
pub fn add_query_arg(url: &str, key: &str, value: &str) -> String {
    let (rest, fragment) = match url.split_once('#') {
        Some((head, tail)) => (head, Some(tail)),
        None => (url, None),
    };
    let (base, query) = match rest.split_once('?') {
        Some((head, tail)) => (head, tail),
        None => (rest, ""),
    };

    let pair = format!("{}={}", key, value);
    let mut replaced = false;
    let mut pairs: Vec<&str> = Vec::new();

    for part in query.split('&').filter(|p| !p.is_empty()) {
        let part_key = part.split_once('=').map_or(part, |(k, _)| k);
        if part_key == key {
            if !replaced {
                pairs.push(&pair);
                replaced = true;
            }
            continue;
        }
        pairs.push(part);
    }
    if !replaced {
        pairs.push(&pair);
    }

    let mut out = String::with_capacity(url.len() + pair.len() + 1);
    out.push_str(base);
    out.push('?');
    out.push_str(&pairs.join("&"));
    if let Some(fragment) = fragment {
        out.push('#');
        out.push_str(fragment);
    }
    out
}
