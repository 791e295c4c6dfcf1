//! Embedded fallback prompts
//!
//! These are compiled into the binary and used when no override file exists
//! under the user prompt directory.

/// Fixed persona sent as the system instruction on every request
pub const SYSTEM_PERSONA: &str =
    "You are a senior developer mentor who is smart, funny, and keeps up \
     with Gen Z internet culture. You provide realistic, actionable advice for Computer Science \
     students. Your tone should match the requested vibe. Return strictly JSON.";

/// Base plan prompt template
///
/// Triple-stache placeholders keep the form values verbatim - no HTML
/// escaping. The feedback block only renders on regeneration.
pub const PLAN_TEMPLATE: &str = r#"I am a CS student. Create a study plan for me.
Current Semester/Status: {{{semester}}}
Subjects/Backlogs: {{{subjects}}}
Upcoming Exams: {{{exams}}}
Daily Free Time: {{{free_time}}}
Goals: {{{goals}}}
Desired Vibe: {{{vibe}}} ({{{tone}}}).
{{#if feedback}}
ADJUSTMENT REQUEST: The user has this feedback on the previous plan: "{{{feedback}}}". Please adjust the schedule accordingly but keep the personality.
{{/if}}"#;

/// Look up an embedded template by name
pub fn get_embedded(name: &str) -> Option<&'static str> {
    match name {
        "plan" => Some(PLAN_TEMPLATE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_embedded_plan() {
        assert!(get_embedded("plan").is_some());
        assert!(get_embedded("unknown-template").is_none());
    }

    #[test]
    fn test_persona_demands_json() {
        assert!(SYSTEM_PERSONA.contains("strictly JSON"));
    }
}
