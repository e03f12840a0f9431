use crate::models::EventDetails;

const PERSONA: &str = "You are a university student pursuing a Bachelor's degree in Computer Science at Universiti Teknologi PETRONAS (UTP). You recently participated in an event and would like to share your experience on LinkedIn to highlight your involvement and professional growth.";

const REQUIREMENTS: &str = "### Requirements for the Post:
1. Begin with a **strong introduction** that highlights the significance of the event.
2. Provide a **detailed description** of your personal experience and what you gained from participating.
3. Include specific **examples or anecdotes** to make the post more compelling.
4. Discuss how the event has **enhanced your professional skills** or knowledge.
5. End with a **call-to-action** for your network, encouraging engagement or expressing gratitude.

The post should be written in a conversational yet professional tone, using first-person language (e.g., \"I had the opportunity to…\"). Aim for at least **150 words** to ensure the content is informative and impactful.";

/// Render the LinkedIn post prompt for an event.
///
/// Field values are inserted verbatim, without escaping or trimming. Values
/// are substituted in a single pass, so text inside one field is never
/// re-interpreted as a placeholder.
pub fn render_prompt(details: &EventDetails) -> String {
    format!(
        "{PERSONA}

Create a professional and engaging LinkedIn post that captures the following event details:

- **Event Name**: {name}
- **Venue**: {venue}
- **Start Date and Time**: {start}
- **End Date and Time**: {end}
- **Description**: {description}
- **Category**: {category}
- **Your Involvement**: {involvement}
- **Additional Details**: {additional}

{REQUIREMENTS}
",
        name = details.name,
        venue = details.venue,
        start = details.start_date_time,
        end = details.end_date_time,
        description = details.description,
        category = details.category,
        involvement = details.involvement,
        additional = details.additional_details,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_details() -> EventDetails {
        EventDetails {
            name: "Tech Symposium 2024".to_string(),
            venue: "Main Hall".to_string(),
            start_date_time: "2024-03-01 09:00:00".to_string(),
            end_date_time: "2024-03-01 17:00:00".to_string(),
            description: "A day of talks on distributed systems".to_string(),
            category: "Technology".to_string(),
            involvement: "Volunteer".to_string(),
            additional_details: "Met the keynote speaker".to_string(),
        }
    }

    #[test]
    fn test_every_field_appears_exactly_once() {
        let details = sample_details();
        let prompt = render_prompt(&details);

        for value in [
            &details.name,
            &details.venue,
            &details.start_date_time,
            &details.end_date_time,
            &details.description,
            &details.category,
            &details.involvement,
            &details.additional_details,
        ] {
            assert_eq!(prompt.matches(value.as_str()).count(), 1, "value {:?}", value);
        }
    }

    #[test]
    fn test_user_text_is_not_escaped() {
        let mut details = sample_details();
        details.description = "<b>Robots & \"AI\"</b>\nsecond line {venue}".to_string();

        let prompt = render_prompt(&details);

        assert!(prompt.contains("- **Description**: <b>Robots & \"AI\"</b>\nsecond line {venue}\n"));
        assert!(prompt.contains("- **Venue**: Main Hall\n"));
    }

    #[test]
    fn test_empty_additional_details_keeps_the_line() {
        let mut details = sample_details();
        details.additional_details = String::new();

        let prompt = render_prompt(&details);

        assert!(prompt.contains("- **Additional Details**: \n"));
    }

    #[test]
    fn test_prompt_includes_persona_and_requirements() {
        let prompt = render_prompt(&sample_details());
        assert!(prompt.starts_with("You are a university student"));
        assert!(prompt.contains("Universiti Teknologi PETRONAS"));
        assert!(prompt.contains("5. End with a **call-to-action**"));
        assert!(prompt.contains("at least **150 words**"));
    }
}
