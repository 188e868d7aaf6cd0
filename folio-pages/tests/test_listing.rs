use folio_pages::listing::{
    featured_grid_html, projects_grid_html, update_featured, update_projects_page, SectionError,
};
use folio_pages::{PagesConfig, Project};

use similar_asserts::assert_eq;

fn projects(json: &str) -> Vec<Project> {
    serde_json::from_str(json).unwrap()
}

fn hrefs(html: &str) -> Vec<&str> {
    html.split("href=\"")
        .skip(1)
        .filter_map(|x| x.split('"').next())
        .collect()
}

const PROJECTS: &str = r#"[
    {"id": 1, "displayTitle": "Neon", "fullTitle": "Neon City", "category": "vfx",
     "thumbnail": "t/1.webp", "projectsPageOrder": 2, "featured": true, "featuredOrder": 2},
    {"id": 2, "displayTitle": "Drift", "fullTitle": "Drift Titles", "category": "motion",
     "thumbnail": "t/2.webp", "projectsPageOrder": 1, "featured": true, "featuredOrder": 1},
    {"id": 3, "displayTitle": "Hidden", "category": "vfx", "visible": false,
     "projectsPageOrder": 0, "featured": true, "featuredOrder": 0},
    {"id": 4, "fullTitle": "Smoke Simulation", "category": "vfx", "projectsPageOrder": 3}
]"#;

#[test]
fn test_projects_grid() {
    let html = projects_grid_html(&projects(PROJECTS), &PagesConfig::default());
    assert_eq!(
        hrefs(&html),
        ["projects/Project-2.html", "projects/Project-1.html", "projects/Project-4.html"]
    );
    assert!(html.starts_with("\n                    <!-- Existing Projects -->\n"));
    assert!(html.ends_with("</a>\n                    "));
    assert!(!html.contains("New Projects"));

    let card = [
        "                    <a href=\"projects/Project-2.html\" class=\"project-card\" data-category=\"motion\" aria-label=\"View Drift\">",
        "                        <img src=\"t/2.webp\" alt=\"Drift\" loading=\"lazy\">",
        "                        <span>Drift</span>",
        "                    </a>",
    ]
    .join("\n");
    assert!(html.contains(&format!("-->\n{card}\n\n")));

    // the title falls back to the full title
    assert!(html.contains("<span>Smoke Simulation</span>"));
}

#[test]
fn test_projects_grid_splits_after_six() {
    let many: Vec<_> = (1..=8i64)
        .map(|id| {
            let mut p = Project::new(id);
            p.projects_page_order = Some((10 - id) as f64);
            p
        })
        .collect();
    let html = projects_grid_html(&many, &PagesConfig::default());
    let (lead, rest) = html.split_once("<!-- New Projects -->").unwrap();
    assert_eq!(hrefs(lead).len(), 6);
    assert_eq!(hrefs(rest), ["projects/Project-2.html", "projects/Project-1.html"]);
    assert!(lead.ends_with("</a>\n\n                    "));

    assert_eq!(projects_grid_html(&[], &PagesConfig::default()), "");
}

#[test]
fn test_featured_grid() {
    let html = featured_grid_html(&projects(PROJECTS), &PagesConfig::default());
    assert_eq!(hrefs(&html), ["projects/Project-2.html", "projects/Project-1.html"]);
    assert!(html.starts_with("                <div class=\"projects-grid\">\n"));
    assert!(html.ends_with("</a>\n                </div>"));
    assert!(html.contains(
        "aria-label=\"View Drift Titles project details\">\n                        <img src=\"t/2.webp\" alt=\"Drift Titles\" />"
    ));
    assert!(html.contains("</a>\n                    <a href"));

    let config = PagesConfig {
        featured_count: 1,
        ..PagesConfig::default()
    };
    assert_eq!(
        hrefs(&featured_grid_html(&projects(PROJECTS), &config)),
        ["projects/Project-2.html"]
    );
}

#[test]
fn test_update_projects_page() {
    let page = "<main>\n    <!-- ALL_PROJECTS_START -->stale<!-- ALL_PROJECTS_END -->\n</main>";
    let all = projects(PROJECTS);
    let config = PagesConfig::default();
    let updated = update_projects_page(page, &all, &config).unwrap();
    assert!(updated.starts_with("<main>\n    <!-- ALL_PROJECTS_START -->\n"));
    assert!(updated.ends_with("</a>\n                    <!-- ALL_PROJECTS_END -->\n</main>"));
    assert!(!updated.contains("stale"));

    // updating again gives the same page
    assert_eq!(update_projects_page(&updated, &all, &config).unwrap(), updated);

    assert_eq!(
        update_projects_page("<main></main>", &all, &config),
        Err(SectionError::MissingMarkers("ALL_PROJECTS".into()))
    );
    assert_eq!(
        update_projects_page(page, &[], &config),
        Err(SectionError::NothingToList)
    );
}

#[test]
fn test_update_featured() {
    let page = "<!-- FEATURED_PROJECTS_START --><!-- FEATURED_PROJECTS_END -->";
    let all = projects(PROJECTS);
    let updated = update_featured(page, &all, &PagesConfig::default()).unwrap();
    assert!(updated.starts_with(
        "<!-- FEATURED_PROJECTS_START -->\n                <div class=\"projects-grid\">\n"
    ));
    assert!(updated.ends_with("</div>\n                <!-- FEATURED_PROJECTS_END -->"));

    let err = update_featured("", &all, &PagesConfig::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "could not find <!-- FEATURED_PROJECTS_START --> and <!-- FEATURED_PROJECTS_END --> markers"
    );
}
