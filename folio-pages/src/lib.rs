//! Folio-Pages turns portfolio project data into page records for the
//! [folio](folio) template renderer and renders the project pages.
//!
//! The crate is pure: it never touches the file system.  Reading the data
//! file and the template, writing pages and looking up file times is left
//! to the caller.
//!
//! ```
//! use folio_pages::{PageGenerator, PagesConfig, ProjectsData};
//!
//! let data = ProjectsData::from_json(r#"{"projects": [
//!     {"id": 1, "displayTitle": "Neon", "category": "vfx", "tools": ["AE", "C4D"]},
//!     {"id": 2, "displayTitle": "Drift", "category": "vfx"}
//! ]}"#).unwrap();
//!
//! let generator = PageGenerator::new(
//!     "<h1>{{displayTitle}}</h1> {{categoryDisplay}}: {{#each tools}}{{this}} {{/each}}\
//!      {{#each relatedProjects}}<a href=\"{{this.url}}\">{{this.displayTitle}}</a>{{/each}}",
//!     PagesConfig::default(),
//! );
//! let pages = generator.generate_selected(&data.projects, None);
//! assert_eq!(pages[0].0, "Project-1.html");
//! assert_eq!(
//!     pages[0].1,
//!     "<h1>Neon</h1> Visual Effects: AE C4D <a href=\"Project-2.html\">Drift</a>"
//! );
//! ```
//!
//! Besides generation the crate can [validate](validate) project data and
//! generated pages, decide which pages are [out of date](freshness) and
//! update the project grids of the [listing pages](listing).
#![cfg_attr(docsrs, feature(doc_cfg))]

mod config;
mod media;
mod page;
mod project;
mod related;

pub mod freshness;
pub mod listing;
pub mod validate;

pub use self::config::PagesConfig;
pub use self::media::{hero_media_html, process_media_html, process_media_item_html};
pub use self::page::{generate_page, meta_description, page_context, page_file_name, PageGenerator};
pub use self::project::{BeforeAfterMedia, MediaItem, MediaType, Project, ProjectId, ProjectsData};
pub use self::related::{find_related, RelatedProject};
