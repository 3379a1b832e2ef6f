//! Integration tests for HTML content rewriting and host hooks.

use cdn_rewrite::{CdnOptions, CdnRewriter, Environment, FilterHook};

fn rewriter() -> CdnRewriter {
    let options = CdnOptions {
        cdn_enable: true,
        htmlc_enable: true,
        cdn_host: "cdn.example.com".to_string(),
        cdn_invalidation_var: "ver".to_string(),
        cdn_invalidation_counter: 3,
        ..Default::default()
    };
    CdnRewriter::from_options(&options, &Environment::new("example.com"))
}

#[test]
fn test_page_body() {
    let html = r#"<!DOCTYPE html>
<html>
<head>
  <link rel='stylesheet' href='http://example.com/wp-content/themes/t/style.css?ver=4.2' type='text/css' />
  <script type="text/javascript" src="/wp-includes/js/jquery.js"></script>
</head>
<body>
  <a href="http://example.com/about/">About</a>
  <a href="http://example.com/wp-admin/css/admin.css">Admin</a>
  <img src="http://example.com/wp-content/uploads/a.JPG" alt="a" width="10">
  <img src="https://example.com/wp-content/uploads/b.png?x=1&amp;y=2">
  <iframe src="http://video.example.org/embed.mp4"></iframe>
  <p>Plain text with src="/not/a/tag.jpg" inside.</p>
</body>
</html>"#;

    let expected = r#"<!DOCTYPE html>
<html>
<head>
  <link rel='stylesheet' href='http://cdn.example.com/wp-content/themes/t/style.css?ver=3' type='text/css' />
  <script type="text/javascript" src="http://cdn.example.com/wp-includes/js/jquery.js?ver=3"></script>
</head>
<body>
  <a href="http://example.com/about/">About</a>
  <a href="http://example.com/wp-admin/css/admin.css">Admin</a>
  <img src="http://cdn.example.com/wp-content/uploads/a.JPG?ver=3" alt="a" width="10">
  <img src="https://cdn.example.com/wp-content/uploads/b.png?x=1&amp;y=2&amp;ver=3">
  <iframe src="http://video.example.org/embed.mp4"></iframe>
  <p>Plain text with src="/not/a/tag.jpg" inside.</p>
</body>
</html>"#;

    assert_eq!(rewriter().rewrite_content(html), expected);
}

#[test]
fn test_content_without_markup_unchanged() {
    let text = "http://example.com/a.jpg and src=\"/b.jpg\"";
    assert_eq!(rewriter().rewrite_content(text), text);
}

#[test]
fn test_rejected_attribute_kept_verbatim() {
    let html = "<a href=\"/download.php?id=1&amp;t=2\">x</a>";
    assert_eq!(rewriter().rewrite_content(html), html);
}

#[test]
fn test_hooks_dispatch() {
    let rewriter = rewriter();
    let hooks = rewriter.hooks();
    assert!(hooks.contains(&FilterHook::PartUrl));
    assert!(hooks.contains(&FilterHook::TheContent));

    assert_eq!(
        rewriter.apply_filter(FilterHook::StyleLoaderSrc, "/a.css", None),
        "http://cdn.example.com/a.css?ver=3"
    );
    assert_eq!(
        rewriter.apply_filter(FilterHook::SiteUrl, "/a.css", Some("https")),
        "https://cdn.example.com/a.css?ver=3"
    );
    assert_eq!(
        rewriter.apply_filter(FilterHook::WidgetText, "<img src=\"/a.gif\">", None),
        "<img src=\"http://cdn.example.com/a.gif?ver=3\">"
    );
    // Site URLs without a file are left alone
    assert_eq!(
        rewriter.apply_filter(FilterHook::HomeUrl, "http://example.com/", Some("https")),
        "http://example.com/"
    );
}
