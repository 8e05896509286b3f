//! Refresh hints from `Cache-Control` headers.
//!
//! TfL sets `max-age` on line-status responses to say how long the data is
//! good for. We don't cache anything; the value only tells the poller when
//! it's worth asking again.

const MAX_AGE: &str = "max-age";

/// Extract the `max-age` value, in whole seconds, from a `Cache-Control`
/// header.
///
/// Whitespace is allowed around the `=`. Returns `None` when the header is
/// missing or empty, has no `max-age` directive, or the value isn't a whole
/// number of seconds (`max-age=30.5` and `max-age=abc` are both rejected,
/// not rounded). A fraction of only zeros (`max-age=30.0`) is accepted.
///
/// # Examples
///
/// ```
/// use tfl_status::tfl::extract_max_age;
///
/// assert_eq!(extract_max_age(Some("public, must-revalidate, max-age=30")), Some(30));
/// assert_eq!(extract_max_age(Some("max-age = 60 , public")), Some(60));
/// assert_eq!(extract_max_age(Some("public, max-age=30.5")), None);
/// assert_eq!(extract_max_age(None), None);
/// ```
pub fn extract_max_age(header: Option<&str>) -> Option<u64> {
    let header = header.filter(|h| !h.is_empty())?;

    header
        .match_indices(MAX_AGE)
        .find_map(|(start, _)| directive_value(&header[start + MAX_AGE.len()..]))
        .and_then(whole_seconds)
}

/// The run of digits and dots after `= `, if `rest` starts with an
/// assignment to one.
fn directive_value(rest: &str) -> Option<&str> {
    let value = rest.trim_start().strip_prefix('=')?.trim_start();
    let end = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());

    (end > 0).then(|| &value[..end])
}

/// Read a digits-and-dots run the way a lenient float reader would: the
/// fraction stops at the second dot.
fn whole_seconds(run: &str) -> Option<u64> {
    let (whole, rest) = run.split_once('.').unwrap_or((run, ""));
    let fraction = rest.split('.').next().unwrap_or_default();

    if whole.is_empty() || fraction.bytes().any(|b| b != b'0') {
        return None;
    }

    whole.parse().ok()
}
