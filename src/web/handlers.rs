use askama::Template;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
};
use tracing::{error, info};

use crate::constants::{CONTACTS_UNAVAILABLE, NO_STORIES_YET};
use crate::pipeline::{build_mailto, recipient_emails, sample_contacts, select_random_testimonial};
use crate::types::{StoryPolicy, Testimonial};
use crate::web::models::TalkRequest;
use crate::web::state::AppState;
use crate::web::templates::{
    AllStoriesTemplate, IndexTemplate, TalkFormTemplate, TalkResultTemplate, SERVER_STATIC_PREFIX,
};

fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "template rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Template rendering failed").into_response()
        }
    }
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn index(State(state): State<AppState>) -> Response {
    let stories = state.pipeline.stories(StoryPolicy::Highlight).await;
    let highlight = select_random_testimonial(&stories, &mut rand::thread_rng())
        .cloned()
        .unwrap_or_else(|| Testimonial::new(NO_STORIES_YET, ""));

    render(IndexTemplate {
        highlight,
        sign_up_link: state.sign_up_link.clone(),
        talk_link: "/talk".to_string(),
        all_link: "/all".to_string(),
        static_prefix: SERVER_STATIC_PREFIX.to_string(),
    })
}

pub async fn all_stories(State(state): State<AppState>) -> Response {
    let testimonials = state.pipeline.stories(StoryPolicy::FullList).await;
    render(AllStoriesTemplate {
        testimonials,
        home_link: "/".to_string(),
        static_prefix: SERVER_STATIC_PREFIX.to_string(),
    })
}

pub async fn talk_form(State(state): State<AppState>) -> Response {
    render(TalkFormTemplate {
        action: "/talk".to_string(),
        sample_size: state.sample_size,
        home_link: "/".to_string(),
        static_prefix: SERVER_STATIC_PREFIX.to_string(),
    })
}

pub async fn talk_submit(State(state): State<AppState>, Form(request): Form<TalkRequest>) -> Response {
    let contacts = state.pipeline.contacts().await;
    let selected = sample_contacts(&contacts, state.sample_size, &mut rand::thread_rng());

    let message = request.message.trim().to_string();
    let user_email = request.email.trim().to_string();
    let email_recipients = recipient_emails(&selected);
    let email_link = build_mailto(&state.mail_subject, &message, &user_email, &email_recipients);

    info!(pool = contacts.len(), selected = selected.len(), "prepared senior introduction");

    render(TalkResultTemplate {
        email_link,
        selected,
        message,
        user_email,
        email_recipients,
        unavailable_notice: CONTACTS_UNAVAILABLE.to_string(),
        home_link: "/".to_string(),
        static_prefix: SERVER_STATIC_PREFIX.to_string(),
    })
}
