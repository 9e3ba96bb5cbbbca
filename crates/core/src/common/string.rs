//! String conversion utilities.

/// Converts an empty string to `None`, otherwise returns `Some(value)`.
///
/// # Examples
///
/// ```
/// use toolbelt_core::common::none_if_empty;
///
/// assert_eq!(none_if_empty("hello"), Some("hello"));
/// assert_eq!(none_if_empty(""), None);
/// assert_eq!(none_if_empty(" "), Some(" ")); // Whitespace is not empty
/// ```
pub fn none_if_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Owned version of [`none_if_empty`] for when you have a `String`.
pub fn some_if_not_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Extension trait for strings providing `into_option` as a method.
///
/// # Examples
///
/// ```
/// use toolbelt_core::common::StringExt;
///
/// assert_eq!("hello".to_string().into_option(), Some("hello".to_string()));
/// assert_eq!(String::new().into_option(), None);
/// ```
pub trait StringExt {
    /// Converts this string to `None` if empty, otherwise `Some(self)`.
    fn into_option(self) -> Option<String>;
}

impl StringExt for String {
    fn into_option(self) -> Option<String> {
        some_if_not_empty(self)
    }
}

/// Upper-cases the first character and leaves the rest untouched.
///
/// ```
/// use toolbelt_core::common::capitalize;
///
/// assert_eq!(capitalize("production"), "Production");
/// assert_eq!(capitalize(""), "");
/// ```
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Truncates to at most `max` characters (not bytes), appending `suffix`
/// when anything was cut.
pub fn truncate_chars(value: &str, max: usize, suffix: &str) -> String {
    if value.chars().count() <= max {
        return value.to_string();
    }
    let mut out: String = value.chars().take(max).collect();
    out.push_str(suffix);
    out
}
