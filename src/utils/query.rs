use url::form_urlencoded;

/// First value of `key` in a query string (with or without the leading `?`).
/// Empty values count as absent.
pub fn query_param(search: &str, key: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

/// `window.location.search`, or "" outside a browser
pub fn current_search() -> String {
    web_sys::window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_params_with_and_without_question_mark() {
        assert_eq!(query_param("?patientId=p1&doctorId=d2", "doctorId").as_deref(), Some("d2"));
        assert_eq!(query_param("patientId=p1", "patientId").as_deref(), Some("p1"));
    }

    #[test]
    fn missing_or_empty_values_are_none() {
        assert_eq!(query_param("", "patientId"), None);
        assert_eq!(query_param("?patientId=", "patientId"), None);
        assert_eq!(query_param("?doctorId=d2", "patientId"), None);
    }

    #[test]
    fn values_are_percent_decoded_and_first_wins() {
        assert_eq!(query_param("?patientId=a%20b&patientId=c", "patientId").as_deref(), Some("a b"));
    }
}
