use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::project::ProjectId;

/// Settings for page preparation.
///
/// All fields have defaults matching the portfolio site layout, so an
/// empty config file (or [`PagesConfig::default`]) works out of the box.
///
/// ```
/// # use folio_pages::PagesConfig;
/// let config: PagesConfig = serde_json::from_str(r#"{"related-count": 3}"#).unwrap();
/// assert_eq!(config.related_count, 3);
/// assert_eq!(config.asset_prefix, "../");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct PagesConfig {
    /// Prepended to asset paths in generated media HTML.
    pub asset_prefix: String,
    /// File name prefix of generated pages.
    pub page_prefix: String,
    /// File name suffix of generated pages.
    pub page_suffix: String,
    /// How many related projects a page links to.
    pub related_count: usize,
    /// Number of characters of the description used for the meta tag.
    pub meta_description_length: usize,
    /// Display names of categories.
    pub categories: BTreeMap<String, String>,
    /// Directory of the project pages as seen from listing pages.
    pub pages_dir: String,
    /// How many projects the featured grid shows.
    pub featured_count: usize,
}

impl Default for PagesConfig {
    fn default() -> Self {
        PagesConfig {
            asset_prefix: "../".to_string(),
            page_prefix: "Project-".to_string(),
            page_suffix: ".html".to_string(),
            related_count: 2,
            meta_description_length: 150,
            categories: [
                ("vfx", "Visual Effects"),
                ("motion", "Motion Graphics"),
                ("editing", "Video Editing"),
                ("personal", "Personal Project"),
            ]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
            pages_dir: "projects/".to_string(),
            featured_count: 6,
        }
    }
}

impl PagesConfig {
    /// Returns the display name of a category.
    ///
    /// Unknown categories are displayed as they are.
    pub fn category_display<'a>(&'a self, category: &'a str) -> &'a str {
        self.categories
            .get(category)
            .map(|x| x.as_str())
            .unwrap_or(category)
    }

    /// Returns the file name of a project's page.
    pub fn page_file_name(&self, id: &ProjectId) -> String {
        format!("{}{}{}", self.page_prefix, id, self.page_suffix)
    }

    /// Returns the link to a project's page from a listing page.
    pub fn page_link(&self, id: &ProjectId) -> String {
        format!("{}{}", self.pages_dir, self.page_file_name(id))
    }

    /// Prefixes an asset path for use in a page.
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}{}", self.asset_prefix, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use similar_asserts::assert_eq;

    #[test]
    fn test_defaults() {
        let config = PagesConfig::default();
        assert_eq!(config.category_display("vfx"), "Visual Effects");
        assert_eq!(config.category_display("3d"), "3d");
        assert_eq!(config.page_file_name(&ProjectId::Number(4)), "Project-4.html");
        assert_eq!(config.asset_url("assets/a.webp"), "../assets/a.webp");
        assert_eq!(config.page_link(&ProjectId::Number(4)), "projects/Project-4.html");
        assert_eq!(config.featured_count, 6);
    }

    #[test]
    fn test_partial_config() {
        let config: PagesConfig = serde_json::from_str(
            r#"{"asset-prefix": "/", "categories": {"3d": "3D Animation"}}"#,
        )
        .unwrap();
        assert_eq!(config.asset_url("a.png"), "/a.png");
        assert_eq!(config.category_display("3d"), "3D Animation");
        // a categories table replaces the defaults
        assert_eq!(config.category_display("vfx"), "vfx");
        assert_eq!(config.meta_description_length, 150);
    }
}
