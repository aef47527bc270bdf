use pretty_assertions::assert_eq;

use super::*;

fn release(tag: &str, name: Option<&str>) -> Release {
    Release {
        tag_name: tag.to_owned(),
        name: name.map(str::to_owned),
        ..Release::default()
    }
}

fn asset(name: &str, downloads: u64) -> Asset {
    Asset {
        name: name.to_owned(),
        download_count: downloads,
        browser_download_url: Some(format!("https://example.invalid/{name}")),
    }
}

#[test]
fn version_match_ignores_leading_v_on_release() {
    let releases = vec![release("v1.0.0", None), release("vv1.1.0", Some("v1.1.0"))];
    assert_eq!(
        find_release(&releases, "1.1.0").map(|r| r.tag_name.as_str()),
        Some("vv1.1.0")
    );
    assert_eq!(
        find_release(&releases, "1.0.0").map(|r| r.tag_name.as_str()),
        Some("v1.0.0")
    );
    // The requested version is compared as given.
    assert_eq!(find_release(&releases, "v1.0.0"), None);
    assert_eq!(find_release(&releases, "2.0.0"), None);
}

#[test]
fn version_match_falls_back_to_name() {
    let releases = vec![release("build-42", Some("v0.9.0"))];
    assert!(find_release(&releases, "0.9.0").is_some());
}

#[test]
fn label_prefers_non_empty_name() {
    assert_eq!(release("v1", Some("First")).label(), "First");
    assert_eq!(release("v1", Some("")).label(), "v1");
    assert_eq!(release("v1", None).label(), "v1");
}

#[test]
fn release_type_classification() {
    assert_eq!(ReleaseType::classify("v2.0.0-Alpha.1"), ReleaseType::Alpha);
    assert_eq!(ReleaseType::classify("v2.0.0-beta"), ReleaseType::Beta);
    assert_eq!(ReleaseType::classify("v2.0.0rc1"), ReleaseType::Rc);
    assert_eq!(ReleaseType::classify("2.0 Release Candidate"), ReleaseType::Rc);
    assert_eq!(ReleaseType::classify("v2.0.0"), ReleaseType::Release);
    assert_eq!(ReleaseType::Rc.as_str(), "rc");
}

#[test]
fn dates_are_humanized_or_passed_through() {
    assert_eq!(format_release_date("2025-01-05T12:30:00Z"), "January 05, 2025");
    assert_eq!(format_release_date("yesterday"), "yesterday");
}

#[test]
fn downloads_sum_over_assets_and_releases() {
    let mut first = release("v1", None);
    first.assets = vec![asset("a.whl", 10), asset("a.tar.gz", 5)];
    let mut second = release("v2", None);
    second.assets = vec![asset("b.whl", 100)];
    let empty = release("v3", None);

    assert_eq!(first.download_count(), 15);
    assert_eq!(total_downloads(&[first, second, empty]), 115);
    assert_eq!(total_downloads(&[]), 0);
}

#[test]
fn details_for_release_page() {
    let mut rel = release("v1.2.0b1", Some("v1.2.0 Beta 1"));
    rel.body = Some("Notes".to_owned());
    rel.html_url = Some("https://github.com/clyplang/clyp/releases/tag/v1.2.0b1".to_owned());
    rel.published_at = Some("2024-11-20T08:00:00Z".to_owned());
    rel.assets = vec![asset("clyp-1.2.0b1-py3-none-any.whl", 1), asset("clyp-1.2.0b1.tar.gz", 2)];

    let details = ReleaseDetails::new(&rel, "1.2.0b1", "clyp");
    assert_eq!(
        details,
        ReleaseDetails {
            version: "1.2.0b1-[beta]".to_owned(),
            base_version: "1.2.0b1".to_owned(),
            release_type: ReleaseType::Beta,
            release_date: "November 20, 2024".to_owned(),
            description: "Notes".to_owned(),
            description_html: "<p>Notes</p>\n".to_owned(),
            pip_command: Some(
                "pip install https://example.invalid/clyp-1.2.0b1.tar.gz".to_owned()
            ),
            tar_gz_url: Some("https://example.invalid/clyp-1.2.0b1.tar.gz".to_owned()),
            github_url: Some(
                "https://github.com/clyplang/clyp/releases/tag/v1.2.0b1".to_owned()
            ),
        }
    );
}

#[test]
fn details_tolerate_sparse_release() {
    let details = ReleaseDetails::new(&release("v0.1.0", None), "0.1.0", "clyp");
    assert_eq!(details.version, "0.1.0");
    assert_eq!(details.pip_command.as_deref(), Some("pip install clyp==0.1.0"));
    assert_eq!(details.release_date, "");
    assert_eq!(details.description, "");
    assert_eq!(details.description_html, "");
    assert_eq!(details.tar_gz_url, None);
    assert_eq!(details.github_url, None);
    assert_eq!(details.release_type, ReleaseType::Release);
}

#[test]
fn notes_render_markdown_with_highlighted_clyp() {
    let mut rel = release("v1.3.0", None);
    rel.body = Some(
        "## Fixed\n\n- ~~crash~~ on empty input\n\n```clyp\nlet x = 1;\n```\n".to_owned(),
    );

    let details = ReleaseDetails::new(&rel, "1.3.0", "clyp");
    let html = details.description_html;
    assert!(html.starts_with("<h2>Fixed</h2>"), "{html}");
    assert!(html.contains("<del>crash</del>"), "{html}");
    assert!(html.contains(r#"<span class="k">let</span>"#), "{html}");
    assert!(details.description.contains("```clyp"));
}

#[test]
fn pre_release_without_tarball_has_no_pip_command() {
    let details = ReleaseDetails::new(&release("v3.0.0-alpha", None), "3.0.0-alpha", "clyp");
    assert_eq!(details.version, "3.0.0-alpha-[alpha]");
    assert_eq!(details.pip_command, None);
}

#[test]
fn sparse_payload_deserializes() {
    let releases: Vec<Release> = serde_json::from_str(
        r#"[{"tag_name":"v1","name":null,"assets":[{"download_count":3}]},{}]"#,
    )
    .unwrap_or_default();
    assert_eq!(releases.len(), 2);
    assert_eq!(releases[0].download_count(), 3);
    assert_eq!(releases[1].tag_name, "");
}
