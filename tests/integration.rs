//! Integration tests for URL rewriting.

use cdn_rewrite::{classify_url, CdnOptions, CdnRewriter, Decision, Environment, Stage};

fn options() -> CdnOptions {
    CdnOptions {
        cdn_enable: true,
        cdn_host: "cdn.example.com".to_string(),
        cdn_whitelisted_extensions: "jpg|css".to_string(),
        cdn_blacklisted_extensions: "php".to_string(),
        cdn_invalidation_var: "v".to_string(),
        cdn_invalidation_counter: 7,
        ..Default::default()
    }
}

fn rewriter_with(options: &CdnOptions) -> CdnRewriter {
    CdnRewriter::from_options(options, &Environment::new("example.com"))
}

#[test]
fn test_documented_examples() {
    let rewriter = rewriter_with(&options());

    assert_eq!(
        rewriter.rewrite_url("http://example.com/img/a.jpg", None),
        "http://cdn.example.com/img/a.jpg?v=7"
    );
    assert_eq!(
        rewriter.rewrite_url("http://example.com/x.php", None),
        "http://example.com/x.php"
    );
    assert_eq!(
        rewriter.rewrite_url("http://example.com/dir/", None),
        "http://example.com/dir/"
    );
    assert_eq!(
        rewriter.rewrite_url("http://other.com/a.jpg", None),
        "http://other.com/a.jpg"
    );
    assert_eq!(
        rewriter.rewrite_content(r#"<img src="http://example.com/a.jpg">"#),
        r#"<img src="http://cdn.example.com/a.jpg?v=7">"#
    );
}

#[test]
fn test_foreign_hosts_unchanged() {
    let rewriter = rewriter_with(&options());
    for url in [
        "http://other.com/a.jpg",
        "https://other.com/img/b.css?x=1",
        "//other.com/a.jpg",
        "//static.other.com/a.css",
    ] {
        assert_eq!(rewriter.rewrite_url(url, None), url);
        assert_eq!(rewriter.evaluate(url), Decision::NotLocal);
    }
}

#[test]
fn test_directories_and_traversal_never_classified() {
    for url in [
        "/",
        "/wp-content/",
        "http://example.com/a/b/",
        "/a/../b.jpg",
        "/a/..%2fb.jpg",
        "/a/./b.jpg",
        "/files/report..jpg",
    ] {
        assert!(classify_url(url, "example.com").is_none(), "{}", url);
    }
}

#[test]
fn test_whitelist_controls_eligibility() {
    let rewriter = rewriter_with(&options());
    assert_eq!(rewriter.rewrite_url("/a.png", None), "/a.png");
    assert_eq!(
        rewriter.evaluate("/a.png"),
        Decision::Rejected(Stage::ExtensionWhitelist)
    );

    let widened = CdnOptions {
        cdn_whitelisted_extensions: "jpg|css|png".to_string(),
        ..options()
    };
    assert_eq!(
        rewriter_with(&widened).rewrite_url("/a.png", None),
        "http://cdn.example.com/a.png?v=7"
    );
}

#[test]
fn test_blacklist_wins_and_php_never_rewritten() {
    let options = CdnOptions {
        cdn_whitelisted_extensions: "jpg|css|php".to_string(),
        cdn_blacklisted_extensions: "css".to_string(),
        ..options()
    };
    let rewriter = rewriter_with(&options);

    assert_eq!(rewriter.rewrite_url("/style.css", None), "/style.css");
    assert_eq!(rewriter.rewrite_url("/index.php", None), "/index.php");
    assert_eq!(
        rewriter.evaluate("/index.php"),
        Decision::Rejected(Stage::ExtensionBlacklist)
    );
}

#[test]
fn test_cdn_urls_are_not_rewritten_twice() {
    let rewriter = rewriter_with(&options());
    let once = rewriter.rewrite_url("http://example.com/a.jpg", None);
    assert_eq!(once, "http://cdn.example.com/a.jpg?v=7");
    assert_eq!(rewriter.rewrite_url(&once, None), once);
}

#[test]
fn test_invalidation_parameter_appears_once() {
    let rewriter = rewriter_with(&options());
    for url in ["/a.jpg", "/a.jpg?v=1", "/a.jpg?x=1&v=2&v=3", "/a.jpg?x=1#frag"] {
        let out = rewriter.rewrite_url(url, None);
        let query = out.split('?').nth(1).unwrap().split('#').next().unwrap();
        let count = query.split('&').filter(|p| *p == "v=7").count();
        assert_eq!(count, 1, "{}", out);
        assert!(!query.split('&').any(|p| p.starts_with("v=") && p != "v=7"));
    }
}

#[test]
fn test_uri_filters() {
    let options = CdnOptions {
        cdn_whitelisted_uri_patterns: "/wp-content/*\n/wp-includes/*".to_string(),
        cdn_blacklisted_uri_patterns: "/wp-content/uploads/private/*".to_string(),
        ..options()
    };
    let rewriter = rewriter_with(&options);

    assert!(rewriter.evaluate("/wp-content/themes/a/style.css").is_rewrite());
    assert!(rewriter.evaluate("/wp-includes/css/a.css").is_rewrite());
    assert_eq!(
        rewriter.evaluate("/other/a.css"),
        Decision::Rejected(Stage::UriWhitelist)
    );
    assert_eq!(
        rewriter.evaluate("/wp-content/uploads/private/a.jpg"),
        Decision::Rejected(Stage::UriBlacklist)
    );
    assert_eq!(
        rewriter.evaluate("/WP-CONTENT/Uploads/PRIVATE/a.jpg"),
        Decision::Rejected(Stage::UriBlacklist)
    );
}

#[test]
fn test_deployment_blacklist() {
    let env = Environment {
        multisite: true,
        membership_plugin: true,
        ..Environment::new("example.com")
    };
    let rewriter = CdnRewriter::from_options(&options(), &env);

    assert_eq!(
        rewriter.evaluate("/site2/files/2015/a.jpg"),
        Decision::Rejected(Stage::UriBlacklist)
    );
    assert_eq!(
        rewriter.evaluate("/wp-content/plugins/s2member-files/a.jpg"),
        Decision::Rejected(Stage::UriBlacklist)
    );
    assert!(rewriter.evaluate("/wp-content/uploads/a.jpg").is_rewrite());

    // Single-site deployments do not exclude these paths
    let rewriter = rewriter_with(&options());
    assert!(rewriter.evaluate("/site2/files/2015/a.jpg").is_rewrite());
}

#[test]
fn test_ssl_policy() {
    let ssl = Environment::new("example.com").with_ssl(true);

    let rewriter = CdnRewriter::from_options(&options(), &ssl);
    assert!(!rewriter.is_active());
    assert_eq!(rewriter.rewrite_url("/a.jpg", None), "/a.jpg");

    let over_ssl = CdnOptions {
        cdn_over_ssl: true,
        ..options()
    };
    let rewriter = CdnRewriter::from_options(&over_ssl, &ssl);
    assert_eq!(
        rewriter.rewrite_url("/a.jpg", None),
        "https://cdn.example.com/a.jpg?v=7"
    );
}

#[test]
fn test_rewriter_is_shareable_across_threads() {
    use std::sync::Arc;

    let rewriter = Arc::new(rewriter_with(&options()));
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let rewriter = Arc::clone(&rewriter);
            std::thread::spawn(move || rewriter.rewrite_url(&format!("/img/{}.jpg", i), None))
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(
            handle.join().unwrap(),
            format!("http://cdn.example.com/img/{}.jpg?v=7", i)
        );
    }
}
