//! Where the vibration helper script lives relative to the current page.

pub const HELPER_SCRIPT: &str = "/js/vibration.js";

/// Path part of an absolute or relative URL (no query or fragment).
pub fn url_path(url: &str) -> &str {
    let rest = match url.find("://") {
        Some(i) => {
            let after = &url[i + 3..];
            match after.find('/') {
                Some(j) => &after[j..],
                None => "/",
            }
        }
        None => url,
    };
    let end = rest.find(['?', '#']).unwrap_or(rest.len());
    &rest[..end]
}

/// Base directory the site is served from.
///
/// Prefers the location of an already-included helper script, then falls
/// back to the page path: pages under `/html/` sit one level down.
pub fn base_path<'a, I>(script_srcs: I, page_path: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    for src in script_srcs {
        if src.contains("vibration.js") {
            return url_path(src).replace(HELPER_SCRIPT, "");
        }
    }
    if page_path.contains("/html/") {
        "..".to_string()
    } else {
        ".".to_string()
    }
}

pub fn helper_script_path(base: &str) -> String {
    format!("{base}{HELPER_SCRIPT}")
}
