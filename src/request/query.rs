use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped in a query key or value: everything except ASCII
/// alphanumerics and `- _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Ensures a non-empty `endpoint` starts with a `/`. The empty endpoint maps
/// to the empty path so the base endpoint is returned as-is.
#[must_use]
pub fn normalize_endpoint(endpoint: &str) -> String {
    if endpoint.is_empty() || endpoint.starts_with('/') {
        endpoint.to_owned()
    } else {
        format!("/{}", endpoint)
    }
}

/// Encodes the parameters that carry a non-empty value as `key=value` pairs
/// joined by `&`, keeping input order. Keys and values are percent-encoded as
/// URI components, so a space becomes `%20`. Returns `None` when nothing is left.
#[must_use]
pub fn encode_query<I, K, V>(params: I) -> Option<String>
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut query = String::new();
    for (key, value) in params {
        let Some(value) = value else {
            continue;
        };
        if value.as_ref().is_empty() {
            continue;
        }
        if !query.is_empty() {
            query.push('&');
        }
        query.extend(utf8_percent_encode(key.as_ref(), COMPONENT));
        query.push('=');
        query.extend(utf8_percent_encode(value.as_ref(), COMPONENT));
    }
    (!query.is_empty()).then_some(query)
}
