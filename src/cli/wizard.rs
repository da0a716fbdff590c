//! Guided form filling with dialoguer prompts

use dialoguer::{Error as DialoguerError, Input, Select};

use crate::domain::form::FormState;
use crate::domain::profile::{
    Mood, Situation, ALL_MOODS, ALL_ROADMAP_DURATIONS, ALL_SITUATIONS,
};

/// Top-level pages of the interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Advice,
    Music,
    Quit,
}

const PAGES: &[(Page, &str)] = &[
    (Page::Advice, "Life coach advice"),
    (Page::Music, "Today's music recommendations"),
    (Page::Quit, "Quit"),
];

/// Ask which page to open; Esc quits
pub fn select_page() -> Result<Page, DialoguerError> {
    let items: Vec<&str> = PAGES.iter().map(|(_, label)| *label).collect();
    let selection = Select::new()
        .with_prompt("Pages")
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|index| PAGES[index].0).unwrap_or(Page::Quit))
}

/// Walk the user through the advice form.
///
/// Only the follow-up questions for the chosen situation are asked. Blank
/// answers and skipped choices are left for the form tracker to report.
pub fn fill_form(previous_mood: Option<Mood>) -> Result<FormState, DialoguerError> {
    let mut form = FormState::new();

    let mood_labels: Vec<&str> = ALL_MOODS.iter().map(Mood::label).collect();
    let default_mood = previous_mood
        .and_then(|mood| ALL_MOODS.iter().position(|m| *m == mood))
        .unwrap_or(0);
    let mood = Select::new()
        .with_prompt("How are you feeling today?")
        .items(&mood_labels)
        .default(default_mood)
        .interact()?;
    form.set_mood(ALL_MOODS[mood]);

    let situation_labels: Vec<&str> = ALL_SITUATIONS.iter().map(Situation::label).collect();
    let situation = Select::new()
        .with_prompt("Which of these describes your current situation? (Esc to skip)")
        .items(&situation_labels)
        .interact_opt()?;

    if let Some(index) = situation {
        let situation = ALL_SITUATIONS[index];
        form.set_situation(situation);

        match situation {
            Situation::Working | Situation::JobSeeking => {
                form.set_industry(text("Which industry do you (or did you) work in?")?);
                let years: u32 = Input::new()
                    .with_prompt("How many years of experience do you have?")
                    .default(0)
                    .interact_text()?;
                form.set_years_experience(years);
            }
            Situation::Student => {
                form.set_field_of_study(text("What is your field of study?")?);
            }
            Situation::InformationSeeking => {
                form.set_information_topic(text(
                    "What would you like to learn about in life?",
                )?);
            }
            Situation::NotWorking => {}
        }

        form.set_future_goal(text("What would you like to do in the future?")?);
    }

    let roadmap_labels: Vec<&str> = ALL_ROADMAP_DURATIONS.iter().map(|d| d.label()).collect();
    let roadmap = Select::new()
        .with_prompt("How long should your roadmap be? (Esc to skip)")
        .items(&roadmap_labels)
        .interact_opt()?;
    if let Some(index) = roadmap {
        form.set_roadmap_duration(ALL_ROADMAP_DURATIONS[index]);
    }

    Ok(form)
}

fn text(prompt: &str) -> Result<String, DialoguerError> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
}
