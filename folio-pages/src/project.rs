use std::collections::BTreeMap;
use std::fmt;

use folio::value::Value;
use serde::{Deserialize, Serialize};

/// Identifies a project.
///
/// The data file uses numbers for most projects but strings are accepted
/// too.  Both display without quotes, which is what ends up in file names.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProjectId {
    /// A numeric id.
    Number(i64),
    /// A textual id.
    Text(String),
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectId::Number(n) => write!(f, "{n}"),
            ProjectId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for ProjectId {
    fn from(value: i64) -> Self {
        ProjectId::Number(value)
    }
}

impl<'a> From<&'a str> for ProjectId {
    fn from(value: &'a str) -> Self {
        ProjectId::Text(value.to_string())
    }
}

/// The kind of a media item, as given by its `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    /// A video.
    Video,
    /// An image.
    Image,
    /// Two videos compared with a slider.
    BeforeAfterVideo,
    /// Two images compared with a slider.
    BeforeAfterImage,
    /// Anything else.  Such items are kept in the data but produce no HTML.
    Unknown,
}

impl MediaType {
    /// Returns `true` for the slider comparison types.
    pub fn is_before_after(self) -> bool {
        matches!(self, MediaType::BeforeAfterVideo | MediaType::BeforeAfterImage)
    }
}

/// A hero or process media item.
///
/// Which fields matter depends on the [`MediaType`]: plain media use `src`
/// (plus `poster` or `alt`), comparisons use `before` and `after`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaItem {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_before: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label_after: Option<String>,
}

impl MediaItem {
    /// Parses the `type` field.
    pub fn media_type(&self) -> MediaType {
        match self.kind.as_str() {
            "video" => MediaType::Video,
            "image" => MediaType::Image,
            "before-after-video" => MediaType::BeforeAfterVideo,
            "before-after-image" => MediaType::BeforeAfterImage,
            _ => MediaType::Unknown,
        }
    }
}

/// A before/after pair in the legacy project format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BeforeAfterMedia {
    /// `video` for video comparisons, anything else means images.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub before: String,
    #[serde(default)]
    pub after: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl BeforeAfterMedia {
    /// Returns `true` if this compares videos.
    pub fn is_video(&self) -> bool {
        self.kind.as_deref() == Some("video")
    }
}

fn default_visible() -> bool {
    true
}

/// A single project from the data file.
///
/// Fields the page generator does not know about are kept in
/// [`extra`](Self::extra) and are passed through to the page record, so
/// templates can use them (`client`, `year` and so on).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured_order: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projects_page_order: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_poster: Option<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub role: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub before_after_media: Vec<BeforeAfterMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_media: Option<MediaItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub process_media: Option<Vec<MediaItem>>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Project {
    /// Creates an otherwise empty visible project.
    pub fn new<I: Into<ProjectId>>(id: I) -> Project {
        Project {
            id: id.into(),
            display_title: None,
            full_title: None,
            description: None,
            category: None,
            visible: true,
            featured: false,
            featured_order: None,
            projects_page_order: None,
            thumbnail: None,
            hero_image: None,
            main_video: None,
            video_poster: None,
            tools: Vec::new(),
            role: Vec::new(),
            before_after_media: Vec::new(),
            hero_media: None,
            process_media: None,
            extra: BTreeMap::new(),
        }
    }

    /// Returns the title used in listings.
    ///
    /// Falls back to the full title and then to `Project {id}`.
    pub fn display_name(&self) -> String {
        self.display_title
            .as_deref()
            .or(self.full_title.as_deref())
            .map(|x| x.to_string())
            .unwrap_or_else(|| format!("Project {}", self.id))
    }

    /// Converts a project in the legacy format.
    ///
    /// A missing `heroMedia` is built from `mainVideo` (with `videoPoster`)
    /// or else from `heroImage`.  A missing `processMedia` is built from
    /// `beforeAfterMedia`, labelling unlabelled comparisons
    /// `Comparison 1`, `Comparison 2` and so on.  All other fields,
    /// including the legacy ones, are kept.
    pub fn to_advanced(&self) -> Project {
        let mut rv = self.clone();

        if rv.hero_media.is_none() {
            if let Some(ref video) = self.main_video {
                rv.hero_media = Some(MediaItem {
                    kind: "video".into(),
                    src: Some(video.clone()),
                    poster: self.video_poster.clone(),
                    ..MediaItem::default()
                });
            } else if let Some(ref image) = self.hero_image {
                rv.hero_media = Some(MediaItem {
                    kind: "image".into(),
                    src: Some(image.clone()),
                    alt: self.full_title.clone(),
                    ..MediaItem::default()
                });
            }
        }

        if rv.process_media.is_none() && !self.before_after_media.is_empty() {
            rv.process_media = Some(
                self.before_after_media
                    .iter()
                    .enumerate()
                    .map(|(idx, media)| MediaItem {
                        kind: if media.is_video() {
                            "before-after-video".into()
                        } else {
                            "before-after-image".into()
                        },
                        before: Some(media.before.clone()),
                        after: Some(media.after.clone()),
                        label: Some(match media.label.as_deref() {
                            Some(label) if !label.is_empty() => label.to_string(),
                            _ => format!("Comparison {}", idx + 1),
                        }),
                        ..MediaItem::default()
                    })
                    .collect(),
            );
        }

        rv
    }

    /// Returns the process media, or an empty slice.
    pub fn process_media(&self) -> &[MediaItem] {
        self.process_media.as_deref().unwrap_or_default()
    }

    /// Returns `true` if the project has slider comparisons, in either
    /// format.
    pub fn has_before_after(&self) -> bool {
        !self.before_after_media.is_empty()
            || self
                .process_media()
                .iter()
                .any(|item| item.media_type().is_before_after())
    }
}

/// The contents of the projects data file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectsData {
    pub projects: Vec<Project>,
}

impl ProjectsData {
    /// Parses the data file.
    pub fn from_json(source: &str) -> Result<ProjectsData, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Looks up a project by id.
    pub fn get(&self, id: &ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| &p.id == id)
    }
}
