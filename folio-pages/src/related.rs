use serde::Serialize;

use crate::config::PagesConfig;
use crate::project::{Project, ProjectId};

/// The fields of a related project that a page links to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedProject {
    pub id: ProjectId,
    pub display_title: Option<String>,
    pub full_title: Option<String>,
    pub thumbnail: Option<String>,
    pub url: String,
    pub category: Option<String>,
}

impl RelatedProject {
    /// Creates the link record of a project.
    pub fn new(project: &Project, config: &PagesConfig) -> RelatedProject {
        RelatedProject {
            id: project.id.clone(),
            display_title: project.display_title.clone(),
            full_title: project.full_title.clone(),
            thumbnail: project.thumbnail.clone(),
            url: config.page_file_name(&project.id),
            category: project.category.clone(),
        }
    }
}

/// Picks the projects a page links to.
///
/// Visible projects of the same category come first, followed by other
/// visible projects, each group in data order, until `count` are found.
/// The project itself is never included.
pub fn find_related<'a>(current: &Project, all: &'a [Project], count: usize) -> Vec<&'a Project> {
    let candidates = || all.iter().filter(|p| p.id != current.id && p.visible);
    let mut rv: Vec<&Project> = candidates()
        .filter(|p| p.category == current.category)
        .take(count)
        .collect();
    if rv.len() < count {
        let missing = count - rv.len();
        let others: Vec<_> = candidates()
            .filter(|p| p.category != current.category)
            .take(missing)
            .collect();
        rv.extend(others);
    }
    log::debug!(
        "related projects for {}: {:?}",
        current.id,
        rv.iter().map(|p| &p.id).collect::<Vec<_>>()
    );
    rv
}

#[cfg(test)]
mod tests {
    use super::*;

    use similar_asserts::assert_eq;

    fn project(id: i64, category: &str, visible: bool) -> Project {
        let mut rv = Project::new(id);
        rv.category = Some(category.into());
        rv.visible = visible;
        rv
    }

    fn ids(projects: &[&Project]) -> Vec<String> {
        projects.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_same_category_first() {
        let all = vec![
            project(1, "vfx", true),
            project(2, "motion", true),
            project(3, "vfx", true),
            project(4, "vfx", true),
        ];
        assert_eq!(ids(&find_related(&all[3], &all, 2)), ["1", "3"]);
    }

    #[test]
    fn test_fill_with_others() {
        let all = vec![
            project(1, "motion", true),
            project(2, "vfx", false),
            project(3, "vfx", true),
            project(4, "editing", true),
        ];
        assert_eq!(ids(&find_related(&all[2], &all, 2)), ["1", "4"]);
        assert_eq!(ids(&find_related(&all[2], &all, 5)), ["1", "4"]);
    }

    #[test]
    fn test_mixed_and_empty() {
        let all = vec![
            project(1, "motion", true),
            project(2, "vfx", true),
            project(3, "vfx", true),
        ];
        assert_eq!(ids(&find_related(&all[1], &all, 2)), ["3", "1"]);
        assert!(find_related(&all[0], &all[..1], 2).is_empty());
        assert!(find_related(&all[0], &all, 0).is_empty());
    }

    #[test]
    fn test_related_record() {
        let mut p = project(9, "vfx", true);
        p.display_title = Some("Neon".into());
        let record = RelatedProject::new(&p, &PagesConfig::default());
        assert_eq!(record.url, "Project-9.html");
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            serde_json::json!({
                "id": 9,
                "displayTitle": "Neon",
                "fullTitle": null,
                "thumbnail": null,
                "url": "Project-9.html",
                "category": "vfx",
            })
        );
    }
}
