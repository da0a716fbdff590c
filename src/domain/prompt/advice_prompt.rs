//! Advice prompt templates, one per situation

use crate::domain::form::ValidatedRequest;
use crate::domain::profile::{Goal, Mood, SituationDetails};

use super::text::Prompt;

/// Framing wrapped around every advice prompt
const LIFE_COACH_INSTRUCTION: &str =
    "As a life coach, give the user detailed, motivating and practical advice:";

const STUDENT_TOPICS: &[&str] = &[
    "Specific career goals related to their field of study",
    "Suggestions for internships and work experience",
    "Personal development and skill-building strategies",
    "Motivation and support suggestions for their emotional state",
    "Technical competencies and skills they should target in their field",
];

const WORKING_TOPICS: &[&str] = &[
    "Strategies for advancing in their current position",
    "Side skills and professional development suggestions",
    "Concrete steps toward their career goals",
    "Practical suggestions for work-life balance",
    "Motivation strategies suited to their emotional state",
];

const JOB_SEEKING_TOPICS: &[&str] = &[
    "Strategies for becoming competitive in the target field",
    "Resume and interview preparation suggestions",
    "Skill development and certification suggestions",
    "Networking and job search channels",
    "Motivation and psychological support approaches",
];

const INFORMATION_TOPICS: &[&str] = &[
    "Core information about the topic",
    "Resources for a deeper understanding",
    "Practical suggestions and insights",
    "Strategies for making progress on this topic in the future",
];

/// Builds the advice prompt for a validated request
pub struct AdvicePrompt;

impl AdvicePrompt {
    /// Select the template for the request's situation and wrap it with the
    /// life-coach framing. Same input, same output.
    pub fn build(request: &ValidatedRequest) -> Prompt {
        let body = match &request.details {
            SituationDetails::Student {
                field_of_study,
                goal,
            } => student(request.mood, field_of_study, goal),
            SituationDetails::NotWorking { goal } => not_working(request.mood, goal),
            SituationDetails::Working {
                industry,
                years_experience,
                goal,
            } => working(request.mood, industry, *years_experience, goal),
            SituationDetails::JobSeeking {
                industry,
                years_experience,
                goal,
            } => job_seeking(request.mood, industry, *years_experience, goal),
            SituationDetails::InformationSeeking { information_topic } => {
                information(request.mood, information_topic)
            }
        };

        Prompt::new(format!("{} {}", LIFE_COACH_INSTRUCTION, body))
    }
}

fn student(mood: Mood, field_of_study: &str, goal: &Goal) -> String {
    format!(
        "A {} career plan is to be prepared for a {} student.\n\
         The student's current state: feeling {}.\n\
         Future goal: {}\n\
         Create a detailed roadmap:\n{}",
        goal.roadmap_duration,
        field_of_study,
        mood,
        goal.future_goal,
        bullets(STUDENT_TOPICS),
    )
}

fn not_working(mood: Mood, goal: &Goal) -> String {
    let topics = [
        format!(
            "Personal development strategies for reaching the goal \"{}\"",
            goal.future_goal
        ),
        "Suggestions for using free time and for personal growth".to_string(),
        "Alternative income sources and opportunities".to_string(),
        "Methods for psychological health and motivation support".to_string(),
        "Suggestions for social relationships and building a network".to_string(),
        "Ways to acquire skills and improve oneself".to_string(),
    ];

    format!(
        "Prepare a {} life plan for someone who is currently not working and is feeling {}.\n\
         Future goal: {}\n\
         Create a comprehensive life roadmap:\n{}",
        goal.roadmap_duration,
        mood,
        goal.future_goal,
        bullets(&topics),
    )
}

fn working(mood: Mood, industry: &str, years_experience: u32, goal: &Goal) -> String {
    format!(
        "Prepare a {} career development plan for a professional who has been working in {} for {} years and is feeling {}.\n\
         Future goal: {}\n\
         The detailed roadmap should include:\n{}",
        goal.roadmap_duration,
        industry,
        years_experience,
        mood,
        goal.future_goal,
        bullets(WORKING_TOPICS),
    )
}

fn job_seeking(mood: Mood, industry: &str, years_experience: u32, goal: &Goal) -> String {
    format!(
        "Prepare a {} career plan for someone with {} years of experience who is looking for a job in {} and is feeling {}.\n\
         Future goal: {}\n\
         Create a comprehensive roadmap:\n{}",
        goal.roadmap_duration,
        years_experience,
        industry,
        mood,
        goal.future_goal,
        bullets(JOB_SEEKING_TOPICS),
    )
}

fn information(mood: Mood, information_topic: &str) -> String {
    format!(
        "Information request topic: {}\n\
         The user's current emotional state: {}\n\
         Provide a comprehensive explanation and guidance for the user's information request:\n{}",
        information_topic,
        mood,
        bullets(INFORMATION_TOPICS),
    )
}

fn bullets<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item.as_ref()))
        .collect::<Vec<_>>()
        .join("\n")
}
