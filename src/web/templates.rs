use askama::Template;

use crate::types::{Contact, Testimonial};

pub const SERVER_STATIC_PREFIX: &str = "/static/";

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub highlight: Testimonial,
    pub sign_up_link: String,
    pub talk_link: String,
    pub all_link: String,
    pub static_prefix: String,
}

/// Full story list; rendered per request and by the static build.
#[derive(Template)]
#[template(path = "all.html")]
pub struct AllStoriesTemplate {
    pub testimonials: Vec<Testimonial>,
    pub home_link: String,
    pub static_prefix: String,
}

#[derive(Template)]
#[template(path = "talk_form.html")]
pub struct TalkFormTemplate {
    pub action: String,
    pub sample_size: usize,
    pub home_link: String,
    pub static_prefix: String,
}

#[derive(Template)]
#[template(path = "talk_result.html")]
pub struct TalkResultTemplate {
    pub email_link: String,
    pub selected: Vec<Contact>,
    pub message: String,
    pub user_email: String,
    pub email_recipients: Vec<String>,
    pub unavailable_notice: String,
    pub home_link: String,
    pub static_prefix: String,
}
