//! Study-plan domain types
//!
//! The request captured from the form and the structured plan returned by the
//! generative model. The plan types mirror the provider response schema
//! exactly: camelCase keys on the wire, snake_case fields in Rust.

use serde::{Deserialize, Serialize};

pub mod schema;

/// Coaching persona selected on the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vibe {
    /// Supportive mentor (default)
    #[default]
    Chill,
    /// Drill sergeant
    Hardcore,
    /// Mean but helpful
    Roast,
}

impl Vibe {
    /// All selectable vibes, in form order
    pub const ALL: [Vibe; 3] = [Vibe::Chill, Vibe::Hardcore, Vibe::Roast];

    /// Label shown on the form selector
    pub fn label(&self) -> &'static str {
        match self {
            Self::Chill => "Chill Mentor",
            Self::Hardcore => "Drill Sergeant",
            Self::Roast => "Roast Me",
        }
    }

    /// Tone instruction embedded in the prompt for this vibe
    pub fn tone_instruction(&self) -> &'static str {
        match self {
            Self::Chill => "be supportive and encouraging",
            Self::Hardcore => "be intense and demanding",
            Self::Roast => "be mean but helpful",
        }
    }

    /// The next vibe in form order, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Chill => Self::Hardcore,
            Self::Hardcore => Self::Roast,
            Self::Roast => Self::Chill,
        }
    }

    /// The previous vibe in form order, wrapping around
    pub fn prev(&self) -> Self {
        match self {
            Self::Chill => Self::Roast,
            Self::Hardcore => Self::Chill,
            Self::Roast => Self::Hardcore,
        }
    }
}

impl std::fmt::Display for Vibe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chill => write!(f, "chill"),
            Self::Hardcore => write!(f, "hardcore"),
            Self::Roast => write!(f, "roast"),
        }
    }
}

impl std::str::FromStr for Vibe {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "chill" => Ok(Self::Chill),
            "hardcore" => Ok(Self::Hardcore),
            "roast" => Ok(Self::Roast),
            _ => Err(format!("Unknown vibe: {}. Use: chill, hardcore, or roast", s)),
        }
    }
}

/// Everything the form collects - immutable once submitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyRequest {
    /// Current semester or year (free text)
    pub semester: String,

    /// Subjects and backlogs (free text)
    pub subjects: String,

    /// Upcoming exam dates (free text)
    pub exams: String,

    /// Daily free time (free text)
    pub free_time: String,

    /// What the student is aiming for (free text)
    pub goals: String,

    /// Selected coaching persona
    pub vibe: Vibe,
}

impl StudyRequest {
    /// Presence validation - every text field must be non-empty
    ///
    /// This is the only validation the form performs; content is never
    /// inspected beyond trimmed emptiness.
    pub fn is_complete(&self) -> bool {
        !self.semester.trim().is_empty()
            && !self.subjects.trim().is_empty()
            && !self.exams.trim().is_empty()
            && !self.free_time.trim().is_empty()
            && !self.goals.trim().is_empty()
    }
}

/// The structured plan returned by the model
///
/// Replaced wholesale on regeneration - there is no incremental merge.
/// Typed deserialization is the structural validation: a document missing any
/// required key fails to parse, while empty schedule/resource arrays are
/// accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    /// Short critical-but-humorous remark about the situation
    pub roast: String,

    /// Weirdly specific motivational quote
    pub motivational_quote: String,

    /// Day-by-day schedule
    pub weekly_schedule: Vec<DayPlan>,

    /// Recommended learning resources
    pub resources: Vec<Resource>,

    /// Actionable, slightly unconventional career advice
    pub career_advice: String,
}

/// One day of the weekly schedule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayPlan {
    pub day: String,
    /// Funny theme title for the day
    pub theme: String,
    pub tasks: Vec<StudyTask>,
}

/// A single scheduled activity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyTask {
    pub time: String,
    pub activity: String,
    pub description: String,
}

/// A recommended learning resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    /// Free-form category, e.g. "Video", "Article", "Project"
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}
