use super::form::EventForm;
use crate::generator::GenerateError;
use askama::Template;

/// Page title shown in the browser and the heading
pub const PAGE_TITLE: &str = "LinkedScribe: Your University Event to LinkedIn Post Generator";

/// Message banner rendered above the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// CSS modifier, one of `config`, `generation` or `input`
    pub kind: &'static str,
    pub title: &'static str,
    pub message: String,
}

impl Notice {
    pub fn from_generate_error(err: &GenerateError) -> Self {
        if err.is_configuration() {
            Self {
                kind: "config",
                title: "Configuration error",
                message: err.to_string(),
            }
        } else {
            Self {
                kind: "generation",
                title: "Generation failed",
                message: err.to_string(),
            }
        }
    }

    pub fn invalid_input(message: String) -> Self {
        Self {
            kind: "input",
            title: "Invalid input",
            message,
        }
    }
}

/// The single form page
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage {
    pub title: &'static str,
    pub form: EventForm,
    pub creativity: u8,
    pub post: Option<String>,
    pub notice: Option<Notice>,
}

impl IndexPage {
    pub fn new(form: EventForm, post: Option<String>, notice: Option<Notice>) -> Self {
        Self {
            title: PAGE_TITLE,
            creativity: form.creativity_level(),
            form,
            post,
            notice,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_render_empty_page() {
        let html = IndexPage::new(EventForm::with_defaults(today()), None, None)
            .render()
            .unwrap();

        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains(r#"value="09:00""#));
        assert!(html.contains(r#"value="17:00""#));
        assert!(html.contains(r#"value="2024-03-01""#));
        assert!(html.contains(r#"value="50""#));
        assert!(!html.contains("class=\"post-output\""));
        assert!(html.contains("Powered by Google Generative AI"));
    }

    #[test]
    fn test_render_post_in_output_and_code_block() {
        let html = IndexPage::new(
            EventForm::with_defaults(today()),
            Some("Great post!".to_string()),
            None,
        )
        .render()
        .unwrap();

        assert!(html.contains(r#"<div class="post-output">Great post!</div>"#));
        assert!(html.contains(r#"<pre class="post-code"><code>Great post!</code></pre>"#));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut form = EventForm::with_defaults(today());
        form.name = "<script>alert(1)</script>".to_string();

        let html = IndexPage::new(form, None, None).render().unwrap();

        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_notice() {
        let notice = Notice::from_generate_error(&GenerateError::MissingApiKey);
        let html = IndexPage::new(EventForm::with_defaults(today()), None, Some(notice))
            .render()
            .unwrap();

        assert!(html.contains(r#"class="notice notice-config""#));
        assert!(html.contains("API key is not set"));
    }
}
