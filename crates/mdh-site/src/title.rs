/// Default title suffix.
pub const SITE_NAME: &str = "MD Homecare";

/// Document title: `"<title> | <suffix>"`, or just `title` for an empty suffix.
#[must_use]
pub fn page_title(title: &str, suffix: &str) -> String {
    if suffix.is_empty() {
        title.to_owned()
    } else {
        format!("{title} | {suffix}")
    }
}
