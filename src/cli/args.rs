//! CLI argument definitions using Clap

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::domain::error::InvalidRoadmapError;
use crate::domain::form::FormState;
use crate::domain::profile::{Mood, RoadmapDuration, Situation};

/// Life Coach - mood-aware career advice and music recommendations
#[derive(Parser, Debug)]
#[command(name = "life-coach")]
#[command(version)]
#[command(about = "Mood-aware life coaching and music recommendations using Google Gemini")]
#[command(long_about = None)]
pub struct Cli {
    /// Show debug logs on stderr (RUST_LOG overrides)
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Gemini model to use
    #[arg(long, value_name = "MODEL", global = true)]
    pub model: Option<String>,

    /// Subcommand; without one an interactive session starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get personal advice for your situation in one shot
    Advice(AdviceArgs),
    /// Get song recommendations for a mood
    Music {
        /// Your mood today
        #[arg(short = 'm', long, value_name = "MOOD")]
        mood: MoodArg,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Form values for a one-shot advice request.
///
/// Everything is optional here; completeness is checked by the form tracker
/// so the rules are the same as in the interactive session.
#[derive(Args, Debug, Default, Clone)]
pub struct AdviceArgs {
    /// Your mood today
    #[arg(short = 'm', long, value_name = "MOOD")]
    pub mood: Option<MoodArg>,

    /// Your current situation
    #[arg(short = 's', long, value_name = "SITUATION")]
    pub situation: Option<SituationArg>,

    /// Field of study (students)
    #[arg(long, value_name = "FIELD")]
    pub field_of_study: Option<String>,

    /// Industry you work or worked in (working, job-seeking)
    #[arg(long, value_name = "INDUSTRY")]
    pub industry: Option<String>,

    /// Years of experience (working, job-seeking)
    #[arg(long, value_name = "YEARS")]
    pub experience: Option<u32>,

    /// Topic you want information about (information-seeking)
    #[arg(long, value_name = "TOPIC")]
    pub topic: Option<String>,

    /// What you want to do in the future
    #[arg(short = 'g', long, value_name = "GOAL")]
    pub goal: Option<String>,

    /// Roadmap horizon (6m, 1y, 2y, 3y, 5y, 10y or e.g. "1 year")
    #[arg(short = 'r', long, value_name = "DURATION")]
    pub roadmap: Option<String>,
}

impl AdviceArgs {
    /// Fill a form from the given flags
    pub fn to_form(&self) -> Result<FormState, InvalidRoadmapError> {
        let mut form = FormState::new();

        if let Some(mood) = self.mood {
            form.set_mood(mood.into());
        }
        if let Some(situation) = self.situation {
            form.set_situation(situation.into());
        }
        if let Some(ref value) = self.field_of_study {
            form.set_field_of_study(value.as_str());
        }
        if let Some(ref value) = self.industry {
            form.set_industry(value.as_str());
        }
        if let Some(years) = self.experience {
            form.set_years_experience(years);
        }
        if let Some(ref value) = self.topic {
            form.set_information_topic(value.as_str());
        }
        if let Some(ref value) = self.goal {
            form.set_future_goal(value.as_str());
        }
        if let Some(ref value) = self.roadmap {
            form.set_roadmap_duration(value.parse::<RoadmapDuration>()?);
        }

        Ok(form)
    }
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create config file with defaults
    Init,
    /// Set a config value
    Set {
        /// Config key
        key: String,
        /// Config value
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Show config file path
    Path,
}

/// Mood argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum MoodArg {
    Happy,
    Sad,
    Excited,
    Hopeful,
    Pessimistic,
    Angry,
    Exhausted,
}

impl From<MoodArg> for Mood {
    fn from(arg: MoodArg) -> Self {
        match arg {
            MoodArg::Happy => Mood::Happy,
            MoodArg::Sad => Mood::Sad,
            MoodArg::Excited => Mood::Excited,
            MoodArg::Hopeful => Mood::Hopeful,
            MoodArg::Pessimistic => Mood::Pessimistic,
            MoodArg::Angry => Mood::Angry,
            MoodArg::Exhausted => Mood::Exhausted,
        }
    }
}

/// Situation argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SituationArg {
    /// I'm a student
    Student,
    /// I'm not working at the moment
    NotWorking,
    /// I'm actively working
    Working,
    /// I'm not working, but I'm looking for a job
    JobSeeking,
    /// No particular goal, just here for information
    InformationSeeking,
}

impl From<SituationArg> for Situation {
    fn from(arg: SituationArg) -> Self {
        match arg {
            SituationArg::Student => Situation::Student,
            SituationArg::NotWorking => Situation::NotWorking,
            SituationArg::Working => Situation::Working,
            SituationArg::JobSeeking => Situation::JobSeeking,
            SituationArg::InformationSeeking => Situation::InformationSeeking,
        }
    }
}

/// Valid config keys
pub const VALID_CONFIG_KEYS: &[&str] = &["api_key", "model", "base_url", "timeout", "cache_ttl"];

/// Check if a config key is valid
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::form::FieldId;
    use clap::CommandFactory;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::parse_from(["life-coach"]);
        assert!(!cli.verbose);
        assert!(cli.model.is_none());
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["life-coach", "music", "-m", "sad", "-v", "--model", "m2"]);
        assert!(cli.verbose);
        assert_eq!(cli.model, Some("m2".to_string()));
        assert!(matches!(
            cli.command,
            Some(Commands::Music {
                mood: MoodArg::Sad
            })
        ));
    }

    #[test]
    fn cli_parses_advice() {
        let cli = Cli::parse_from([
            "life-coach",
            "advice",
            "--mood",
            "hopeful",
            "--situation",
            "working",
            "--industry",
            "finance",
            "--experience",
            "3",
            "--goal",
            "start a business",
            "--roadmap",
            "1y",
        ]);
        let Some(Commands::Advice(args)) = cli.command else {
            panic!("Expected Advice command");
        };
        assert_eq!(args.mood, Some(MoodArg::Hopeful));
        assert_eq!(args.situation, Some(SituationArg::Working));
        assert_eq!(args.experience, Some(3));

        let form = args.to_form().unwrap();
        assert!(form.is_complete());
    }

    #[test]
    fn situation_values_are_kebab_case() {
        let cli = Cli::parse_from(["life-coach", "advice", "-s", "information-seeking"]);
        let Some(Commands::Advice(args)) = cli.command else {
            panic!("Expected Advice command");
        };
        assert_eq!(args.situation, Some(SituationArg::InformationSeeking));
    }

    #[test]
    fn to_form_leaves_absent_flags_unset() {
        let args = AdviceArgs {
            situation: Some(SituationArg::Student),
            mood: Some(MoodArg::Sad),
            ..Default::default()
        };
        let form = args.to_form().unwrap();
        assert_eq!(
            form.missing_fields(),
            vec![
                FieldId::FieldOfStudy,
                FieldId::FutureGoal,
                FieldId::RoadmapDuration
            ]
        );
    }

    #[test]
    fn to_form_rejects_unknown_roadmap() {
        let args = AdviceArgs {
            roadmap: Some("4 years".to_string()),
            ..Default::default()
        };
        assert!(args.to_form().is_err());
    }

    #[test]
    fn cli_parses_config_set() {
        let cli = Cli::parse_from(["life-coach", "config", "set", "model", "gemini-pro"]);
        if let Some(Commands::Config {
            action: ConfigAction::Set { key, value },
        }) = cli.command
        {
            assert_eq!(key, "model");
            assert_eq!(value, "gemini-pro");
        } else {
            panic!("Expected Config Set command");
        }
    }

    #[test]
    fn mood_arg_converts_to_mood() {
        assert_eq!(Mood::from(MoodArg::Happy), Mood::Happy);
        assert_eq!(Mood::from(MoodArg::Exhausted), Mood::Exhausted);
    }

    #[test]
    fn valid_config_keys() {
        assert!(is_valid_config_key("api_key"));
        assert!(is_valid_config_key("cache_ttl"));
        assert!(!is_valid_config_key("duration"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
