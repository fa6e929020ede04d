//! Relative link rebasing
//!
//! Pages written at different directory depths share one link definition;
//! relative hrefs are rewritten for the depth a page is written at.

use tagloom_html::PARENT_DIR;

/// Whether `href` is a relative path that depth changes affect
pub fn is_relative(href: &str) -> bool {
    !(href.is_empty() || href.starts_with('/') || href.starts_with('#') || has_scheme(href))
}

/// `https:`, `mailto:` and the like
fn has_scheme(href: &str) -> bool {
    let Some((scheme, _)) = href.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Rewrite a relative href for a page `level` directories deep.
///
/// Leading `..` segments are dropped and `level` fresh ones prefixed. Other
/// hrefs come back unchanged.
pub fn rebase_href(href: &str, level: usize) -> String {
    if !is_relative(href) {
        return href.to_string();
    }
    let rest = href.split('/').skip_while(|segment| *segment == PARENT_DIR);
    std::iter::repeat_n(PARENT_DIR, level)
        .chain(rest)
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_depth_is_unchanged() {
        assert_eq!(rebase_href("../viewer/x.css", 1), "../viewer/x.css");
    }

    #[test]
    fn test_deeper() {
        assert_eq!(rebase_href("../viewer/x.css", 2), "../../viewer/x.css");
        assert_eq!(rebase_href("index.html", 3), "../../../index.html");
    }

    #[test]
    fn test_to_root() {
        assert_eq!(rebase_href("../../runs/a/index.html", 0), "runs/a/index.html");
    }

    #[test]
    fn test_inner_parent_segments_kept() {
        assert_eq!(rebase_href("../a/../b.html", 1), "../a/../b.html");
    }

    #[test]
    fn test_non_relative_untouched() {
        for href in ["/abs/x.html", "#", "#top", "https://example.com/a", "mailto:x@y.z", ""] {
            assert_eq!(rebase_href(href, 2), href);
        }
    }

    #[test]
    fn test_colon_after_slash_is_path() {
        assert!(is_relative("runs/10:30/index.html"));
        assert!(!is_relative("ftp://host/file"));
    }
}
