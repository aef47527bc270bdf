//! RFC 8288 `Link` header handling for GitHub pagination.

/// Page number of the `rel="last"` target in a `Link` header value.
///
/// With `per_page=1` this is the total item count. Returns `None` when there
/// is no `last` relation or its URL carries no numeric `page` parameter.
pub fn last_page(link: &str) -> Option<u64> {
    link.split(',').find_map(|entry| {
        let (target, params) = entry.split_once(';')?;
        let is_last = params.split(';').any(|param| {
            let param = param.trim();
            param == r#"rel="last""# || param == "rel=last"
        });
        if !is_last {
            return None;
        }

        let target = target.trim().strip_prefix('<')?.strip_suffix('>')?;
        let url = reqwest::Url::parse(target).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok())
    })
}
