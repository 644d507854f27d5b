/// Pulls the image URL out of a `url(...)` declaration such as
/// `url("/wind.png")`. Anything else, including an empty `url()`, means the
/// section has no image.
pub fn resolve_image_url(declaration: &str) -> Option<String> {
    let start = declaration.find("url(")? + "url(".len();
    let rest = &declaration[start..];
    let inner = &rest[..rest.find(')')?];

    let inner = inner.trim();
    let inner = inner.strip_prefix(['"', '\'']).unwrap_or(inner);
    let inner = inner.strip_suffix(['"', '\'']).unwrap_or(inner);

    if inner.is_empty() {
        None
    } else {
        Some(inner.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::resolve_image_url;

    #[test]
    fn extracts_quoted_and_bare_urls() {
        assert_eq!(resolve_image_url(r#"url("/wind.png")"#).as_deref(), Some("/wind.png"));
        assert_eq!(resolve_image_url("url('/solar-farm.jpg')").as_deref(), Some("/solar-farm.jpg"));
        assert_eq!(
            resolve_image_url("url(https://static.wixstatic.com/media/a.jpg)").as_deref(),
            Some("https://static.wixstatic.com/media/a.jpg")
        );
        assert_eq!(resolve_image_url(r#"  url( "/x.png" ) "#).as_deref(), Some("/x.png"));
    }

    #[test]
    fn malformed_or_missing_is_no_image() {
        assert_eq!(resolve_image_url(""), None);
        assert_eq!(resolve_image_url("none"), None);
        assert_eq!(resolve_image_url("url(/never-closed.png"), None);
        assert_eq!(resolve_image_url("url()"), None);
        assert_eq!(resolve_image_url(r#"url("")"#), None);
    }
}
