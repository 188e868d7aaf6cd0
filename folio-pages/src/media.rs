//! HTML fragments for hero and process media.
//!
//! The fragments are plain strings that end up in the page record as
//! `heroMediaContent` and `processMediaContent`.  The page template places
//! them with ordinary variable markers.
use std::fmt::Write;

use crate::config::PagesConfig;
use crate::project::{MediaItem, MediaType};

const SLIDER_TIP: &str = "Hover or drag the slider to compare before and after";

/// Treats empty strings like missing values.
fn non_empty(text: Option<&str>) -> Option<&str> {
    text.filter(|x| !x.is_empty())
}

/// Collects indented lines.
struct Fragment<'c> {
    buf: String,
    config: &'c PagesConfig,
    indent: usize,
}

impl<'c> Fragment<'c> {
    fn new(config: &'c PagesConfig, indent: usize) -> Fragment<'c> {
        Fragment {
            buf: String::new(),
            config,
            indent,
        }
    }

    fn line(&mut self, depth: usize, text: &str) {
        let _ = write!(self.buf, "\n{:width$}{}", "", text, width = self.indent + depth * 4);
    }

    fn optional(&mut self, depth: usize, class: &str, text: Option<&str>) {
        if let Some(text) = non_empty(text) {
            self.line(depth, &format!("<div class=\"{class}\">{text}</div>"));
        }
    }

    fn asset(&self, path: Option<&str>) -> String {
        self.config.asset_url(path.unwrap_or(""))
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Renders the hero media of a page.
///
/// Returns an empty string for missing or unknown media.
pub fn hero_media_html(hero: Option<&MediaItem>, config: &PagesConfig) -> String {
    let hero = match hero {
        Some(hero) => hero,
        None => return String::new(),
    };
    let mut out = Fragment::new(config, 20);
    match hero.media_type() {
        MediaType::Video => {
            out.line(
                0,
                &format!(
                    "<video controls loop disablePictureInPicture controlsList=\"nodownload\" poster=\"{}\">",
                    out.asset(hero.poster.as_deref())
                ),
            );
            out.line(
                1,
                &format!("<source src=\"{}\" type=\"video/mp4\">", out.asset(hero.src.as_deref())),
            );
            out.line(1, "Your browser does not support the video tag.");
            out.line(0, "</video>");
        }
        MediaType::Image => {
            out.line(
                0,
                &format!(
                    "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                    out.asset(hero.src.as_deref()),
                    hero.alt.as_deref().unwrap_or("")
                ),
            );
        }
        other => {
            log::warn!("hero media of type {:?} ({}) is not supported", other, hero.kind);
        }
    }
    out.finish()
}

/// Renders a single process media item.
///
/// Items of unknown type render to an empty string.
pub fn process_media_item_html(item: &MediaItem, config: &PagesConfig) -> String {
    let media_type = item.media_type();
    let mut out = Fragment::new(config, 24);
    match media_type {
        MediaType::Video => {
            out.line(0, "<div class=\"media-item\">");
            out.optional(1, "media-label", item.label.as_deref());
            let poster = match non_empty(item.poster.as_deref()) {
                Some(poster) => format!(" poster=\"{}\"", out.asset(Some(poster))),
                None => String::new(),
            };
            out.line(
                1,
                &format!(
                    "<video controls loop disablePictureInPicture controlsList=\"nodownload\"{poster}>"
                ),
            );
            out.line(
                2,
                &format!("<source src=\"{}\" type=\"video/mp4\">", out.asset(item.src.as_deref())),
            );
            out.line(2, "Your browser does not support the video tag.");
            out.line(1, "</video>");
            out.optional(1, "media-caption", item.caption.as_deref());
            out.line(0, "</div>");
        }
        MediaType::Image => {
            out.line(0, "<div class=\"media-item\">");
            out.optional(1, "media-label", item.label.as_deref());
            let alt = non_empty(item.alt.as_deref())
                .or(non_empty(item.caption.as_deref()))
                .unwrap_or("");
            out.line(
                1,
                &format!(
                    "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                    out.asset(item.src.as_deref()),
                    alt
                ),
            );
            out.optional(1, "media-caption", item.caption.as_deref());
            out.line(0, "</div>");
        }
        MediaType::BeforeAfterVideo | MediaType::BeforeAfterImage => {
            let data_type = if media_type == MediaType::BeforeAfterVideo {
                "video"
            } else {
                "image"
            };
            out.line(0, "<div class=\"media-item before-after-wrapper\">");
            out.optional(1, "media-label", item.label.as_deref());
            out.line(1, "<div class=\"before-after-container\"");
            out.line(
                2,
                &format!("data-before=\"{}\"", out.asset(item.before.as_deref())),
            );
            out.line(2, &format!("data-after=\"{}\"", out.asset(item.after.as_deref())));
            out.line(2, &format!("data-type=\"{data_type}\""));
            out.line(
                2,
                &format!(
                    "data-label-before=\"{}\"",
                    non_empty(item.label_before.as_deref()).unwrap_or("Before")
                ),
            );
            out.line(
                2,
                &format!(
                    "data-label-after=\"{}\">",
                    non_empty(item.label_after.as_deref()).unwrap_or("After")
                ),
            );
            out.line(1, "</div>");
            out.line(1, "<div class=\"slider-tip\">");
            out.line(2, "<span class=\"tip-icon\">💡</span>");
            out.line(2, &format!("<span class=\"tip-text\">{SLIDER_TIP}</span>"));
            out.line(1, "</div>");
            out.optional(1, "media-caption", item.caption.as_deref());
            out.line(0, "</div>");
        }
        MediaType::Unknown => {
            log::warn!("skipping process media of unknown type {:?}", item.kind);
        }
    }
    out.finish()
}

/// Renders all process media, one item after the other.
pub fn process_media_html(items: &[MediaItem], config: &PagesConfig) -> String {
    items
        .iter()
        .map(|item| process_media_item_html(item, config))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use similar_asserts::assert_eq;

    fn item(json: &str) -> MediaItem {
        serde_json::from_str(json).unwrap()
    }

    fn dedent(html: &str) -> String {
        let lines: Vec<_> = html.lines().filter(|x| !x.trim().is_empty()).collect();
        let indent = lines
            .iter()
            .map(|x| x.len() - x.trim_start().len())
            .min()
            .unwrap_or(0);
        lines
            .iter()
            .map(|x| &x[indent..])
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_hero_video() {
        let hero = item(r#"{"type": "video", "src": "v/hero.mp4", "poster": "p.webp"}"#);
        let html = hero_media_html(Some(&hero), &PagesConfig::default());
        assert!(html.starts_with(&format!("\n{:20}<video", "")));
        insta::assert_snapshot!(dedent(&html), @r###"
        <video controls loop disablePictureInPicture controlsList="nodownload" poster="../p.webp">
            <source src="../v/hero.mp4" type="video/mp4">
            Your browser does not support the video tag.
        </video>
        "###);
    }

    #[test]
    fn test_hero_image() {
        let hero = item(r#"{"type": "image", "src": "h.webp", "alt": "Sky"}"#);
        assert_eq!(
            hero_media_html(Some(&hero), &PagesConfig::default()).trim(),
            "<img src=\"../h.webp\" alt=\"Sky\" loading=\"lazy\">"
        );
    }

    #[test]
    fn test_hero_missing_or_unknown() {
        let config = PagesConfig::default();
        assert_eq!(hero_media_html(None, &config), "");
        let hero = item(r#"{"type": "embed", "src": "x"}"#);
        assert_eq!(hero_media_html(Some(&hero), &config), "");
    }

    #[test]
    fn test_process_video_without_extras() {
        let video = item(r#"{"type": "video", "src": "a.mp4"}"#);
        let html = process_media_item_html(&video, &PagesConfig::default());
        assert!(html.contains("<video controls loop disablePictureInPicture controlsList=\"nodownload\">"));
        assert!(html.contains("<source src=\"../a.mp4\" type=\"video/mp4\">"));
        assert!(!html.contains("media-label"));
        assert!(!html.contains("media-caption"));
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let config = PagesConfig::default();
        let video = item(r#"{"type": "video", "src": "a.mp4", "poster": "", "label": "", "caption": ""}"#);
        let html = process_media_item_html(&video, &config);
        assert!(!html.contains("poster="));
        assert!(!html.contains("media-label"));
        assert!(!html.contains("media-caption"));

        let image = item(r#"{"type": "image", "src": "a.png", "alt": "", "caption": "Wireframe"}"#);
        assert!(process_media_item_html(&image, &config).contains("alt=\"Wireframe\""));

        let comparison = item(
            r#"{"type": "before-after-video", "before": "b.mp4", "after": "a.mp4", "labelBefore": "", "labelAfter": ""}"#,
        );
        let html = process_media_item_html(&comparison, &config);
        assert!(html.contains("data-label-before=\"Before\""));
        assert!(html.contains("data-label-after=\"After\""));
    }

    #[test]
    fn test_process_image_alt_fallback() {
        let image = item(r#"{"type": "image", "src": "a.png", "caption": "Wireframe", "label": "Step 1"}"#);
        let html = process_media_item_html(&image, &PagesConfig::default());
        assert!(html.contains("<div class=\"media-label\">Step 1</div>"));
        assert!(html.contains("alt=\"Wireframe\""));
        assert!(html.contains("<div class=\"media-caption\">Wireframe</div>"));
    }

    #[test]
    fn test_before_after() {
        let comparison = item(
            r#"{"type": "before-after-image", "before": "b.png", "after": "a.png", "label": "Comparison 1", "labelAfter": "Final"}"#,
        );
        let html = process_media_item_html(&comparison, &PagesConfig::default());
        insta::assert_snapshot!(dedent(&html), @r###"
        <div class="media-item before-after-wrapper">
            <div class="media-label">Comparison 1</div>
            <div class="before-after-container"
                data-before="../b.png"
                data-after="../a.png"
                data-type="image"
                data-label-before="Before"
                data-label-after="Final">
            </div>
            <div class="slider-tip">
                <span class="tip-icon">💡</span>
                <span class="tip-text">Hover or drag the slider to compare before and after</span>
            </div>
        </div>
        "###);
    }

    #[test]
    fn test_process_media_joined() {
        let items = vec![
            item(r#"{"type": "image", "src": "1.png"}"#),
            item(r#"{"type": "unknown"}"#),
            item(r#"{"type": "before-after-video", "before": "b.mp4", "after": "a.mp4"}"#),
        ];
        let html = process_media_html(&items, &PagesConfig::default());
        assert_eq!(html.matches("class=\"media-item").count(), 2);
        assert!(html.contains("data-type=\"video\""));
        assert!(html.contains("</div>\n\n\n"));
        assert_eq!(process_media_html(&[], &PagesConfig::default()), "");
    }
}
