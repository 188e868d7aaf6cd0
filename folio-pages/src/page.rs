use std::collections::BTreeSet;

use folio::value::Value;
use folio::{context, Template};

use crate::config::PagesConfig;
use crate::media::{hero_media_html, process_media_html};
use crate::project::{Project, ProjectId};
use crate::related::{find_related, RelatedProject};

/// Returns the default file name of a project page (`Project-{id}.html`).
pub fn page_file_name(id: &ProjectId) -> String {
    PagesConfig::default().page_file_name(id)
}

/// Shortens a description for the meta description tag.
///
/// Takes the first `max_chars` characters and always appends `...`.
pub fn meta_description(description: &str, max_chars: usize) -> String {
    let mut rv: String = description.chars().take(max_chars).collect();
    rv.push_str("...");
    rv
}

/// Builds the record a project page is rendered with.
///
/// The record holds all fields of the project (converted with
/// [`Project::to_advanced`]) plus these derived fields:
///
/// * `metaDescription`: the shortened description
/// * `heroMediaContent`, `processMediaContent`: media HTML
/// * `hasProcessMedia`, `processMediaCount`, `hasBeforeAfter`
/// * `hasVideo`, `hasDescription`, `hasRole`, `hasTools`: whether the
///   main video, the description, roles and tools are present
/// * `categoryDisplay`: the display name of the category
/// * `relatedProjects`: link records of related projects
pub fn page_context(project: &Project, all: &[Project], config: &PagesConfig) -> Value {
    log::debug!("preparing page record for project {}", project.id);
    let advanced = project.to_advanced();
    let process_media = advanced.process_media();
    let related: Vec<_> = find_related(&advanced, all, config.related_count)
        .into_iter()
        .map(|p| RelatedProject::new(p, config))
        .collect();

    let present = |value: &Option<String>| value.as_deref().map_or(false, |x| !x.is_empty());

    let derived = context! {
        metaDescription => meta_description(
            advanced.description.as_deref().unwrap_or(""),
            config.meta_description_length,
        ),
        heroMediaContent => hero_media_html(advanced.hero_media.as_ref(), config),
        processMediaContent => process_media_html(process_media, config),
        hasProcessMedia => !process_media.is_empty(),
        processMediaCount => process_media.len(),
        hasBeforeAfter => process_media
            .iter()
            .any(|item| item.media_type().is_before_after()),
        hasVideo => present(&advanced.main_video),
        hasDescription => present(&advanced.description),
        hasRole => !advanced.role.is_empty(),
        hasTools => !advanced.tools.is_empty(),
        categoryDisplay => advanced
            .category
            .as_deref()
            .map(|c| config.category_display(c)),
        relatedProjects => related,
    };

    Value::from_serialize(&advanced).merge(&derived)
}

/// Renders the page of a single project.
///
/// `all` is the full project list, used to pick related projects.
pub fn generate_page(project: &Project, template: &str, all: &[Project], config: &PagesConfig) -> String {
    folio::render(template, page_context(project, all, config))
}

/// Renders project pages from a single template.
///
/// The template is parsed once and reused for every page.
#[derive(Debug)]
pub struct PageGenerator<'source> {
    template: Template<'source>,
    referenced: BTreeSet<String>,
    config: PagesConfig,
}

impl<'source> PageGenerator<'source> {
    /// Creates a generator for a template source.
    pub fn new(source: &'source str, config: PagesConfig) -> PageGenerator<'source> {
        let template = Template::new(source);
        let referenced = template.undeclared_variables();
        PageGenerator {
            template,
            referenced,
            config,
        }
    }

    /// Returns the config.
    pub fn config(&self) -> &PagesConfig {
        &self.config
    }

    /// Renders the page of a single project.
    pub fn generate(&self, project: &Project, all: &[Project]) -> String {
        let ctx = page_context(project, all, &self.config);
        for name in &self.referenced {
            if ctx.get_attr(name).is_none() {
                log::warn!("page of project {} has no value for {:?}", project.id, name);
            }
        }
        self.template.render_value(&ctx)
    }

    /// Renders the pages of the given projects, or of all projects if
    /// `ids` is `None`.
    ///
    /// Returns `(file_name, html)` pairs in data order.  Ids that do not
    /// name a project are skipped.
    pub fn generate_selected(&self, all: &[Project], ids: Option<&[ProjectId]>) -> Vec<(String, String)> {
        all.iter()
            .filter(|p| ids.map_or(true, |ids| ids.contains(&p.id)))
            .map(|p| {
                let file_name = self.config.page_file_name(&p.id);
                log::debug!("generating {}", file_name);
                (file_name, self.generate(p, all))
            })
            .collect()
    }
}
