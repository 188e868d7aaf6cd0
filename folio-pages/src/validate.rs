//! Checks project data and generated pages for problems.
//!
//! Findings are returned as data.  Issues are problems that break a page
//! (missing titles, missing required media), warnings are things worth
//! fixing that do not.
use std::fmt;

use crate::config::PagesConfig;
use crate::project::{Project, ProjectId};

/// Answers whether an asset exists.
///
/// Paths are given as they appear in the data file, relative to the site
/// root.  Implemented for closures so a file system check is a one-liner:
///
/// ```
/// # use folio_pages::validate::AssetProbe;
/// let probe = |path: &str| std::path::Path::new("site").join(path).exists();
/// assert!(!probe.exists("no/such/file.webp"));
/// ```
pub trait AssetProbe {
    /// Returns `true` if the asset exists.
    fn exists(&self, path: &str) -> bool;
}

impl<F: Fn(&str) -> bool> AssetProbe for F {
    fn exists(&self, path: &str) -> bool {
        self(path)
    }
}

/// The findings for a single project or page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub issues: Vec<String>,
    pub warnings: Vec<String>,
}

impl Report {
    /// Returns `true` if there is nothing to report.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty() && self.warnings.is_empty()
    }

    /// Appends the findings of another report.
    pub fn extend(&mut self, other: Report) {
        self.issues.extend(other.issues);
        self.warnings.extend(other.warnings);
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for issue in &self.issues {
            writeln!(f, "error: {issue}")?;
        }
        for warning in &self.warnings {
            writeln!(f, "warning: {warning}")?;
        }
        Ok(())
    }
}

fn check_asset(
    probe: &dyn AssetProbe,
    path: Option<&str>,
    what: &str,
    out: &mut Vec<String>,
) {
    if let Some(path) = path {
        if !probe.exists(path) {
            out.push(format!("Missing {what}: {path}"));
        }
    }
}

/// Validates the data of a project.
///
/// Without a probe only the data fields are checked.
pub fn validate_project(project: &Project, probe: Option<&dyn AssetProbe>) -> Report {
    let mut rv = Report::default();

    if let Some(probe) = probe {
        check_asset(probe, project.thumbnail.as_deref(), "thumbnail", &mut rv.issues);
        check_asset(probe, project.hero_image.as_deref(), "hero image", &mut rv.warnings);
        check_asset(probe, project.main_video.as_deref(), "main video", &mut rv.issues);
        check_asset(probe, project.video_poster.as_deref(), "video poster", &mut rv.warnings);
        for (idx, media) in project.before_after_media.iter().enumerate() {
            check_asset(
                probe,
                Some(media.before.as_str()),
                &format!("before media [{idx}]"),
                &mut rv.issues,
            );
            check_asset(
                probe,
                Some(media.after.as_str()),
                &format!("after media [{idx}]"),
                &mut rv.issues,
            );
        }
        for (idx, item) in project.process_media().iter().enumerate() {
            let n = idx + 1;
            if item.media_type().is_before_after() {
                let before = format!("before media #{n}");
                check_asset(probe, item.before.as_deref(), &before, &mut rv.issues);
                let after = format!("after media #{n}");
                check_asset(probe, item.after.as_deref(), &after, &mut rv.issues);
            } else {
                let kind = if item.kind.is_empty() { "media" } else { item.kind.as_str() };
                let what = format!("{kind} #{n}");
                check_asset(probe, item.src.as_deref(), &what, &mut rv.issues);
            }
        }
    }

    let missing = |value: &Option<String>| value.as_deref().map_or(true, str::is_empty);
    for (name, value) in [
        ("displayTitle", &project.display_title),
        ("fullTitle", &project.full_title),
        ("description", &project.description),
        ("category", &project.category),
    ] {
        if missing(value) {
            rv.issues.push(format!("Missing {name}"));
        }
    }
    if project.role.is_empty() {
        rv.warnings.push("Missing or empty role array".into());
    }
    if project.tools.is_empty() {
        rv.warnings.push("Missing or empty tools array".into());
    }

    rv
}

/// Validates a generated page of a project.
///
/// The page must load `main.js`, and `before-after.js` when the project
/// has slider comparisons.  The `PROJECT_INFO_START`/`PROJECT_INFO_END`
/// and `BEFORE_AFTER_SECTION_START`/`BEFORE_AFTER_SECTION_END` markers are
/// expected for later in-place updates; missing markers are warnings.
///
/// Findings name the page by its file name under `config`.
pub fn validate_page_html(project: &Project, html: &str, config: &PagesConfig) -> Report {
    let mut rv = Report::default();
    let file_name = config.page_file_name(&project.id);
    let has_before_after = project.has_before_after();

    if has_before_after && !html.contains("before-after.js") {
        rv.issues.push(format!(
            "Missing before-after.js script in {file_name} (has before/after media)"
        ));
    }
    if !html.contains("main.js") {
        rv.issues.push(format!("Missing main.js script in {file_name}"));
    }
    if !html.contains("PROJECT_INFO_START") || !html.contains("PROJECT_INFO_END") {
        rv.warnings.push(format!("Missing PROJECT_INFO markers in {file_name}"));
    }
    if has_before_after
        && (!html.contains("BEFORE_AFTER_SECTION_START") || !html.contains("BEFORE_AFTER_SECTION_END"))
    {
        rv.warnings.push(format!("Missing BEFORE_AFTER_SECTION markers in {file_name}"));
    }

    rv
}

/// Aggregated findings over all projects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub issue_count: usize,
    pub warning_count: usize,
    /// Ids of the projects with at least one issue, in data order.
    pub projects_with_issues: Vec<ProjectId>,
    /// Projects with findings and their reports, in data order.
    pub reports: Vec<(ProjectId, Report)>,
}

impl Summary {
    /// Returns `true` if no project has issues or warnings.
    pub fn is_clean(&self) -> bool {
        self.issue_count == 0 && self.warning_count == 0
    }
}

/// Validates all projects.
pub fn validate_all(projects: &[Project], probe: Option<&dyn AssetProbe>) -> Summary {
    let mut rv = Summary::default();
    for project in projects {
        let report = validate_project(project, probe);
        if report.is_clean() {
            continue;
        }
        if !report.issues.is_empty() {
            rv.projects_with_issues.push(project.id.clone());
        }
        rv.issue_count += report.issues.len();
        rv.warning_count += report.warnings.len();
        log::debug!(
            "project {}: {} issues, {} warnings",
            project.id,
            report.issues.len(),
            report.warnings.len()
        );
        rv.reports.push((project.id.clone(), report));
    }
    rv
}
