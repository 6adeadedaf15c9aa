// src/config/consts.rs

// Dataset discovery (most preferred first)
pub const CANDIDATE_DATASETS: &[&str] = &[
    "Objection_Rebuttal_Master_500 (1).csv",
    "Objection_Rebuttal_Master_500.csv",
    "100_Unique_Objections___Rebuttals - 100_Unique_Objections___Rebuttals.csv (3).csv",
    "100_Unique_Objections___Rebuttals.csv",
    "Agent_Objection_Rebuttals_Dataset_Categorized.csv",
    "rebuttals.csv",
    "training_dataset.csv",
    "Agent_Objections_Rebuttals.xlsx",
];

pub const BROKERAGE_FILES: &[&str] = &[
    "Top_25_Brokerage_Rebuttals_FunnelPilot.xlsx",
    "Top_25_Brokerage_Rebuttals_Final_with_Power_Statements.xlsx",
    "Top_25_Brokerage_Rebuttals_FunnelPilot.csv",
    "brokerages.csv",
];

// Header aliases, per canonical field, earlier = preferred
pub const QUESTION_ALIASES: &[&str] = &["objection/question", "objection", "question", "prompt", "q"];
pub const ANSWER_ALIASES: &[&str] = &["rebuttal/answer", "rebuttal", "answer", "response", "reply", "script"];
pub const CATEGORY_ALIASES: &[&str] = &["category", "topic", "bucket"];
pub const TAGS_ALIASES: &[&str] = &["tags", "keywords", "labels"];

pub const BROKERAGE_ALIASES: &[&str] = &["brokerage", "broker", "company", "brand"];
pub const REBUTTAL_ALIASES: &[&str] = &["rebuttal", "answer", "response", "script"];
pub const SMS_ALIASES: &[&str] = &["sms", "text", "text_message"];
pub const ONE_LINER_ALIASES: &[&str] = &["one_liner", "one-liner", "oneliner"];
pub const NOTES_ALIASES: &[&str] = &["notes", "context"];

// Rows
pub const TOPIC_SEPARATORS: &str = r"[|;,/]+";
pub const ID_SEPARATOR: &str = "||";
pub const ENTRY_ID_LEN: usize = 16;
pub const BROKERAGE_ID_LEN: usize = 12;
pub const TAG_JOIN: &str = "|";

// Topics
pub const TOPIC_MIN_LEN: usize = 2;
pub const TOPIC_MAX_LEN: usize = 40;
pub const TOPIC_OPTIONS_CAP: usize = 200;

// Filters / views
pub const ALL: &str = "All";
pub const MOST_USED_CAP: usize = 50;
pub const MOST_USED_SUMMARY: usize = 10;
pub const QUESTION_PREVIEW_CHARS: usize = 120;

// Brokerage compare
pub const FUNNEL_PILOT: &str = "funnel pilot";

// Voice
pub const RATE_MIN: f32 = 0.6;
pub const RATE_MAX: f32 = 1.4;
pub const PITCH_MIN: f32 = 0.5;
pub const PITCH_MAX: f32 = 1.5;
pub const VOICE_STEP: f32 = 0.05;
pub const SPEECH_PROGRAM: &str = "espeak";
pub const SPEECH_BASE_WPM: f32 = 175.0;

// Downloads / export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const REBUTTAL_FILE: &str = "rebuttal.txt";
pub const DECK_STEM: &str = "my_deck";
pub const BROKERAGE_EXPORT_STEM: &str = "brokerage_dataset_current";
pub const BROKERAGE_DECK_STEM: &str = "brokerage_favorites";

// Logging
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = ".store/debug.log";
pub const LOG_ENV: &str = "POCKET_LOG";
