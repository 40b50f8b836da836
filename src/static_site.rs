//! Build-time surface: pre-render the three views into a directory that can be
//! published as-is (e.g. GitHub Pages).
//!
//! `index.html` and `talk.html` come from editable page templates with
//! `{{ placeholder }}` slots; the contact flow runs client-side off the embedded
//! JSON. `all.html` uses the same compiled template as the server.

use askama::Template;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::constants::MAX_SAMPLE_SIZE;
use crate::error::{Result, SiteError};
use crate::pipeline::{sample_contacts, DatasetPipeline};
use crate::types::{Contact, Testimonial};
use crate::web::templates::AllStoriesTemplate;

pub const INDEX_TEMPLATE: &str = "index.html";
pub const TALK_TEMPLATE: &str = "talk.html";
pub const ALL_PAGE: &str = "all.html";
pub const STATIC_SUBDIR: &str = "static";

#[derive(Debug, Clone)]
pub struct BuildOptions {
    pub template_dir: PathBuf,
    pub static_dir: PathBuf,
    pub output_dir: PathBuf,
    pub sign_up_link: String,
    pub mail_subject: String,
    pub sample_size: usize,
    /// Embed a pre-drawn sample instead of every valid contact.
    pub presample: bool,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub pages_written: Vec<PathBuf>,
    pub pages_skipped: Vec<String>,
    pub assets_copied: usize,
    pub testimonials: usize,
    pub contacts_embedded: usize,
}

/// Generate the site. Fails when the template directory or the index
/// template is missing; a missing talk template only skips that page.
pub async fn build_site(pipeline: &DatasetPipeline, options: &BuildOptions) -> Result<BuildReport> {
    let mut report = BuildReport::default();

    if !options.template_dir.is_dir() {
        return Err(SiteError::TemplateDirMissing(options.template_dir.clone()));
    }
    let index_template = read_template(&options.template_dir.join(INDEX_TEMPLATE))?;
    let talk_template = match read_template(&options.template_dir.join(TALK_TEMPLATE)) {
        Ok(template) => Some(template),
        Err(e) => {
            warn!(error = %e, "skipping talk page");
            None
        }
    };

    fs::create_dir_all(&options.output_dir)?;

    if options.static_dir.is_dir() {
        let dest = options.output_dir.join(STATIC_SUBDIR);
        report.assets_copied = copy_static_assets(&options.static_dir, &dest)?;
        info!(count = report.assets_copied, dest = %dest.display(), "copied static assets");
    } else {
        warn!(dir = %options.static_dir.display(), "static directory not found, skipping copy");
    }

    let views = pipeline.story_views().await;
    let highlights = views.highlight;
    let all_stories = views.full_list;
    report.testimonials = all_stories.len();

    let index_path = options.output_dir.join(INDEX_TEMPLATE);
    fs::write(&index_path, render_index_page(&index_template, &highlights, &options.sign_up_link)?)?;
    report.pages_written.push(index_path);

    let all_path = options.output_dir.join(ALL_PAGE);
    fs::write(&all_path, render_all_page(all_stories)?)?;
    report.pages_written.push(all_path);

    match talk_template {
        Some(template) => {
            let pool = pipeline.contacts().await;
            let sample_size = options.sample_size.min(MAX_SAMPLE_SIZE);
            let embedded = if options.presample {
                sample_contacts(&pool, sample_size, &mut rand::thread_rng())
            } else {
                pool
            };
            report.contacts_embedded = embedded.len();

            let talk_path = options.output_dir.join(TALK_TEMPLATE);
            fs::write(
                &talk_path,
                render_talk_page(&template, &embedded, &options.mail_subject, sample_size)?,
            )?;
            info!(contacts = embedded.len(), presample = options.presample, "embedded senior contacts");
            report.pages_written.push(talk_path);
        }
        None => report.pages_skipped.push(TALK_TEMPLATE.to_string()),
    }

    for page in &report.pages_written {
        info!(page = %page.display(), "generated page");
    }
    Ok(report)
}

fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => SiteError::TemplateMissing(path.to_path_buf()),
        _ => SiteError::Io(e),
    })
}

pub fn render_index_page(template: &str, testimonials: &[Testimonial], sign_up_link: &str) -> Result<String> {
    Ok(fill_placeholders(
        template,
        &[
            ("testimonials_json", embed_json(testimonials)?),
            ("sign_up_link", askama::filters::escape(askama::Html, sign_up_link)?.to_string()),
            ("talk_link", TALK_TEMPLATE.to_string()),
            ("all_link", ALL_PAGE.to_string()),
        ],
    ))
}

pub fn render_all_page(testimonials: Vec<Testimonial>) -> Result<String> {
    let page = AllStoriesTemplate {
        testimonials,
        home_link: INDEX_TEMPLATE.to_string(),
        static_prefix: format!("{}/", STATIC_SUBDIR),
    };
    Ok(page.render()?)
}

pub fn render_talk_page(template: &str, contacts: &[Contact], subject: &str, sample_size: usize) -> Result<String> {
    Ok(fill_placeholders(
        template,
        &[
            ("seniors_json", embed_json(contacts)?),
            ("mail_subject_json", embed_json(subject)?),
            ("sample_size", sample_size.to_string()),
            ("home_link", INDEX_TEMPLATE.to_string()),
        ],
    ))
}

/// Replace each `{{ name }}` slot with its value.
pub fn fill_placeholders(template: &str, values: &[(&str, String)]) -> String {
    values.iter().fold(template.to_string(), |page, (name, value)| {
        page.replace(&format!("{{{{ {} }}}}", name), value)
    })
}

/// JSON safe to drop inside a `<script>` element.
pub fn embed_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Recursively copy `src` into `dest`, overwriting existing files.
/// Returns the number of files copied.
pub fn copy_static_assets(src: &Path, dest: &Path) -> Result<usize> {
    fs::create_dir_all(dest)?;
    let mut copied = 0;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copied += copy_static_assets(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_are_filled_everywhere() {
        let page = fill_placeholders(
            "<a href=\"{{ all_link }}\">x</a><a href=\"{{ all_link }}\">y</a>{{ other }}",
            &[("all_link", "all.html".to_string())],
        );
        assert_eq!(page, "<a href=\"all.html\">x</a><a href=\"all.html\">y</a>{{ other }}");
    }

    #[test]
    fn embedded_json_cannot_close_the_script() {
        let stories = vec![Testimonial::new("bad </script><script>alert(1)", "")];
        let json = embed_json(&stories).unwrap();
        assert!(!json.contains("</script>"));
        let back: Vec<Testimonial> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stories);
    }

    #[test]
    fn index_page_embeds_stories_and_links() {
        let template = "<script>const T = {{ testimonials_json }};</script>\
                        <a href=\"{{ sign_up_link }}\">s</a><a href=\"{{ talk_link }}\">t</a>";
        let page = render_index_page(
            template,
            &[Testimonial::new("Helped me a lot", "2016B4")],
            "https://forms.gle/a?b=1&c=2",
        )
        .unwrap();
        assert!(page.contains(r#"[{"story":"Helped me a lot","identifier":"2016B4"}]"#));
        assert!(page.contains("https://forms.gle/a?b=1&amp;c=2"));
        assert!(page.contains("href=\"talk.html\""));
    }

    #[test]
    fn sign_up_link_cannot_break_out_of_the_attribute() {
        let page = render_index_page("<a href=\"{{ sign_up_link }}\">s</a>", &[], "x\" onclick=\"alert(1)").unwrap();
        assert!(!page.contains("\" onclick"));
        assert!(page.contains("&quot;"));
    }

    #[test]
    fn all_page_uses_relative_links() {
        let page = render_all_page(vec![Testimonial::new("A story", "2019A7")]).unwrap();
        assert!(page.contains("A story"));
        assert!(page.contains("- 2019A7"));
        assert!(page.contains("href=\"index.html\""));
        assert!(page.contains("href=\"static/css/site.css\""));
    }

    #[test]
    fn all_page_escapes_story_markup() {
        let page = render_all_page(vec![Testimonial::new("<b>hi</b>", "")]).unwrap();
        assert!(page.contains("&lt;b&gt;hi"));
        assert!(!page.contains("<b>"));
    }
}
