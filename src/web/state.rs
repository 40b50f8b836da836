use crate::config::SiteConfig;
use crate::constants::MAX_SAMPLE_SIZE;
use crate::pipeline::DatasetPipeline;

#[derive(Clone)]
pub struct AppState {
    pub pipeline: DatasetPipeline,
    pub sign_up_link: String,
    pub mail_subject: String,
    pub sample_size: usize,
}

impl AppState {
    pub fn new(pipeline: DatasetPipeline, config: &SiteConfig) -> Self {
        Self {
            pipeline,
            sign_up_link: config.links.sign_up_form_url.clone(),
            mail_subject: config.mail.subject.clone(),
            sample_size: config.mail.sample_size.min(MAX_SAMPLE_SIZE),
        }
    }
}
