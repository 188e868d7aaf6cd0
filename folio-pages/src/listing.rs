//! Project card grids for the listing pages.
//!
//! The projects page and the home page carry grids of project cards between
//! a pair of marker comments:
//!
//! ```text
//! <!-- ALL_PROJECTS_START -->
//! ...
//! <!-- ALL_PROJECTS_END -->
//! ```
//!
//! [`update_projects_page`] and [`update_featured`] regenerate these grids
//! in the HTML of a page and return the new HTML.
use std::cmp::Ordering;
use std::fmt;

use crate::config::PagesConfig;
use crate::project::Project;

/// Section name of the grid with all visible projects.
pub const ALL_PROJECTS: &str = "ALL_PROJECTS";

/// Section name of the featured grid on the home page.
pub const FEATURED_PROJECTS: &str = "FEATURED_PROJECTS";

/// Cards listed under the first comment of the projects grid.
const LEAD_CARDS: usize = 6;

/// Why a listing section could not be updated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionError {
    /// The start or end marker of the section is missing.
    MissingMarkers(String),
    /// There is no project to list.
    NothingToList,
}

impl fmt::Display for SectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SectionError::MissingMarkers(name) => write!(
                f,
                "could not find <!-- {name}_START --> and <!-- {name}_END --> markers"
            ),
            SectionError::NothingToList => f.write_str("no projects to list"),
        }
    }
}

impl std::error::Error for SectionError {}

/// Orders projects by an optional sort key.  Projects without a key go
/// last, ties keep data order.
fn sorted_by<'a, F>(projects: impl Iterator<Item = &'a Project>, key: F) -> Vec<&'a Project>
where
    F: Fn(&Project) -> Option<f64>,
{
    let mut rv: Vec<_> = projects.collect();
    rv.sort_by(|a, b| match (key(a), key(b)) {
        (Some(a), Some(b)) => a.total_cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    rv
}

/// Renders the grid of all visible projects, sorted by
/// `projectsPageOrder`.
///
/// The first six cards are listed under an `Existing Projects` comment, the
/// rest under `New Projects`.  Returns an empty string if no project is
/// visible.
pub fn projects_grid_html(projects: &[Project], config: &PagesConfig) -> String {
    let visible = sorted_by(projects.iter().filter(|p| p.visible), |p| {
        p.projects_page_order
    });
    if visible.is_empty() {
        log::warn!("no visible projects found");
        return String::new();
    }
    log::debug!("listing {} visible projects", visible.len());

    let cards: Vec<_> = visible
        .iter()
        .map(|project| {
            let name = project.display_name();
            format!(
                "{:20}<a href=\"{}\" class=\"project-card\" data-category=\"{}\" aria-label=\"View {name}\">\n\
                 {:24}<img src=\"{}\" alt=\"{name}\" loading=\"lazy\">\n\
                 {:24}<span>{name}</span>\n\
                 {:20}</a>",
                "",
                config.page_link(&project.id),
                project.category.as_deref().unwrap_or(""),
                "",
                project.thumbnail.as_deref().unwrap_or(""),
                "",
                "",
            )
        })
        .collect();

    let (lead, rest) = cards.split_at(cards.len().min(LEAD_CARDS));
    let mut rv = format!("\n{:20}<!-- Existing Projects -->\n", "");
    rv.push_str(&lead.join("\n\n"));
    if !rest.is_empty() {
        rv.push_str(&format!("\n\n{:20}<!-- New Projects -->\n", ""));
        rv.push_str(&rest.join("\n\n"));
    }
    rv.push_str(&format!("\n{:20}", ""));
    rv
}

/// Renders the featured grid: visible featured projects sorted by
/// `featuredOrder`, at most [`featured_count`](PagesConfig::featured_count)
/// of them.
///
/// Returns an empty string if no project is featured.
pub fn featured_grid_html(projects: &[Project], config: &PagesConfig) -> String {
    let featured = sorted_by(projects.iter().filter(|p| p.featured && p.visible), |p| {
        p.featured_order
    });
    if featured.is_empty() {
        log::warn!("no featured projects found");
        return String::new();
    }

    let cards: Vec<_> = featured
        .iter()
        .take(config.featured_count)
        .map(|project| {
            let name = project.display_name();
            let full_title = project.full_title.as_deref().unwrap_or(&name);
            format!(
                "{:20}<a href=\"{}\" class=\"project-card\" aria-label=\"View {full_title} project details\">\n\
                 {:24}<img src=\"{}\" alt=\"{full_title}\" />\n\
                 {:24}<span>{name}</span>\n\
                 {:20}</a>",
                "",
                config.page_link(&project.id),
                "",
                project.thumbnail.as_deref().unwrap_or(""),
                "",
                "",
            )
        })
        .collect();
    log::debug!("listing {} featured projects", cards.len());

    format!(
        "{:16}<div class=\"projects-grid\">\n{}\n{:16}</div>",
        "",
        cards.join("\n"),
        ""
    )
}

/// Replaces the content between `<!-- {name}_START -->` and
/// `<!-- {name}_END -->`.
///
/// Both markers are kept.  Returns `None` if either marker is missing or
/// the end marker does not follow the start marker.
pub fn replace_section(html: &str, name: &str, content: &str) -> Option<String> {
    let start_marker = format!("<!-- {name}_START -->");
    let end_marker = format!("<!-- {name}_END -->");
    let start = html.find(&start_marker)? + start_marker.len();
    let end = start + html[start..].find(&end_marker)?;
    let mut rv = String::with_capacity(html.len() - (end - start) + content.len());
    rv.push_str(&html[..start]);
    rv.push_str(content);
    rv.push_str(&html[end..]);
    Some(rv)
}

/// Regenerates the grid of all projects in the HTML of the projects page.
pub fn update_projects_page(
    html: &str,
    projects: &[Project],
    config: &PagesConfig,
) -> Result<String, SectionError> {
    let grid = projects_grid_html(projects, config);
    if grid.is_empty() {
        return Err(SectionError::NothingToList);
    }
    replace_section(html, ALL_PROJECTS, &grid)
        .ok_or_else(|| SectionError::MissingMarkers(ALL_PROJECTS.into()))
}

/// Regenerates the featured grid in the HTML of the home page.
pub fn update_featured(
    html: &str,
    projects: &[Project],
    config: &PagesConfig,
) -> Result<String, SectionError> {
    let grid = featured_grid_html(projects, config);
    if grid.is_empty() {
        return Err(SectionError::NothingToList);
    }
    let content = format!("\n{grid}\n{:16}", "");
    replace_section(html, FEATURED_PROJECTS, &content)
        .ok_or_else(|| SectionError::MissingMarkers(FEATURED_PROJECTS.into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    use similar_asserts::assert_eq;

    #[test]
    fn test_replace_section() {
        let html = "a<!-- X_START -->old<!-- X_END -->b";
        assert_eq!(
            replace_section(html, "X", "new").as_deref(),
            Some("a<!-- X_START -->new<!-- X_END -->b")
        );
        assert_eq!(replace_section("<!-- X_START -->", "X", ""), None);
        assert_eq!(replace_section("<!-- X_END --><!-- X_START -->", "X", ""), None);
        assert_eq!(replace_section(html, "Y", ""), None);
    }

    #[test]
    fn test_sort_keys() {
        let mut projects: Vec<_> = (1..=4).map(|id: i64| Project::new(id)).collect();
        projects[0].projects_page_order = Some(3.0);
        projects[1].projects_page_order = None;
        projects[2].projects_page_order = Some(1.0);
        projects[3].projects_page_order = Some(1.0);
        let sorted = sorted_by(projects.iter(), |p| p.projects_page_order);
        let ids: Vec<_> = sorted.iter().map(|p| p.id.to_string()).collect();
        assert_eq!(ids, ["3", "4", "1", "2"]);
    }
}
