use std::collections::BTreeSet;

use folio_pages::validate::{validate_all, validate_page_html, validate_project, AssetProbe, Report};
use folio_pages::{PagesConfig, Project, ProjectId};

use similar_asserts::assert_eq;

fn project(json: &str) -> Project {
    serde_json::from_str(json).unwrap()
}

struct Assets(BTreeSet<&'static str>);

impl AssetProbe for Assets {
    fn exists(&self, path: &str) -> bool {
        self.0.contains(path)
    }
}

const COMPLETE: &str = r#"{
    "id": 1,
    "displayTitle": "Neon",
    "fullTitle": "Neon City",
    "description": "Compositing.",
    "category": "vfx",
    "role": ["Compositing"],
    "tools": ["Nuke"]
}"#;

#[test]
fn test_complete_project() {
    let report = validate_project(&project(COMPLETE), None);
    assert!(report.is_clean(), "{report}");
}

#[test]
fn test_missing_fields() {
    let report = validate_project(&project(r#"{"id": 1, "fullTitle": "", "tools": ["AE"]}"#), None);
    assert_eq!(
        report.issues,
        [
            "Missing displayTitle",
            "Missing fullTitle",
            "Missing description",
            "Missing category",
        ]
    );
    assert_eq!(report.warnings, ["Missing or empty role array"]);
}

#[test]
fn test_missing_assets() {
    let p = project(
        r#"{
            "id": 2,
            "displayTitle": "Drift",
            "fullTitle": "Drift Titles",
            "description": "Typography.",
            "category": "motion",
            "role": ["Design"],
            "tools": ["AE"],
            "thumbnail": "thumb.webp",
            "heroImage": "hero.webp",
            "mainVideo": "main.mp4",
            "videoPoster": "poster.webp",
            "beforeAfterMedia": [{"type": "video", "before": "b.mp4", "after": "a.mp4"}]
        }"#,
    );
    let assets = Assets(["thumb.webp", "b.mp4"].into_iter().collect());
    let report = validate_project(&p, Some(&assets));
    insta::assert_snapshot!(report.to_string(), @r###"
    error: Missing main video: main.mp4
    error: Missing after media [0]: a.mp4
    warning: Missing hero image: hero.webp
    warning: Missing video poster: poster.webp
    "###);

    // without a probe assets are not checked
    assert!(validate_project(&p, None).is_clean());
}

#[test]
fn test_process_media_assets() {
    let mut p = project(COMPLETE);
    p.process_media = Some(serde_json::from_str(
        r#"[
            {"type": "image", "src": "1.png"},
            {"type": "before-after-image", "before": "b.png", "after": "a.png"}
        ]"#,
    )
    .unwrap());
    let probe = |path: &str| path == "a.png";
    let report = validate_project(&p, Some(&probe));
    assert_eq!(
        report.issues,
        ["Missing image #1: 1.png", "Missing before media #2: b.png"]
    );
}

#[test]
fn test_page_html() {
    let plain = project(COMPLETE);
    let good = "<!-- PROJECT_INFO_START --><!-- PROJECT_INFO_END --><script src=\"../assets/js/main.js\">";
    assert!(validate_page_html(&plain, good, &PagesConfig::default()).is_clean());

    let report = validate_page_html(&plain, "<html></html>", &PagesConfig::default());
    assert_eq!(report.issues, ["Missing main.js script in Project-1.html"]);
    assert_eq!(report.warnings, ["Missing PROJECT_INFO markers in Project-1.html"]);

    let mut comparisons = project(COMPLETE);
    comparisons.process_media = Some(serde_json::from_str(
        r#"[{"type": "before-after-video", "before": "b.mp4", "after": "a.mp4"}]"#,
    )
    .unwrap());
    let mut report = validate_page_html(&comparisons, good, &PagesConfig::default());
    assert_eq!(
        report.issues,
        ["Missing before-after.js script in Project-1.html (has before/after media)"]
    );
    assert_eq!(
        report.warnings,
        ["Missing BEFORE_AFTER_SECTION markers in Project-1.html"]
    );

    report.extend(validate_project(&comparisons, None));
    assert_eq!(report.issues.len(), 1);
    assert_eq!(report.warnings.len(), 1);
}

#[test]
fn test_page_html_uses_configured_file_name() {
    let config: PagesConfig =
        serde_json::from_str(r#"{"page-prefix": "work-", "page-suffix": ".htm"}"#).unwrap();
    let report = validate_page_html(&project(COMPLETE), "", &config);
    assert_eq!(report.issues, ["Missing main.js script in work-1.htm"]);
    assert_eq!(report.warnings, ["Missing PROJECT_INFO markers in work-1.htm"]);
}

#[test]
fn test_validate_all() {
    let projects = vec![
        project(COMPLETE),
        project(r#"{"id": 2, "displayTitle": "A", "fullTitle": "B", "description": "C", "category": "vfx"}"#),
        project(r#"{"id": "draft"}"#),
    ];
    let summary = validate_all(&projects, None);
    assert!(!summary.is_clean());
    assert_eq!(summary.issue_count, 4);
    assert_eq!(summary.warning_count, 4);
    assert_eq!(summary.projects_with_issues, [ProjectId::from("draft")]);
    let with_findings: Vec<_> = summary.reports.iter().map(|x| x.0.to_string()).collect();
    assert_eq!(with_findings, ["2", "draft"]);
    assert_eq!(summary.reports[0].1, Report {
        issues: vec![],
        warnings: vec![
            "Missing or empty role array".to_string(),
            "Missing or empty tools array".to_string(),
        ],
    });

    assert!(validate_all(&projects[..1], None).is_clean());
}
