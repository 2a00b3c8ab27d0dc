/// Look up a parameter in a URL query string (`a=1&b=2`, a leading `?` is
/// ignored). The first match wins; a key without `=` has no value.
///
/// Values are returned as written, without percent-decoding.
///
/// # Examples
///
/// ```
/// use applet_util::query::query_variable;
///
/// assert_eq!(query_variable("?openid=abc&s=3", "s"), Some("3"));
/// assert_eq!(query_variable("openid=abc", "s"), None);
/// ```
pub fn query_variable<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    let query = query.strip_prefix('?').unwrap_or(query);
    let pair = query.split('&').find(|pair| pair.split('=').next() == Some(name))?;
    pair.split('=').nth(1)
}
