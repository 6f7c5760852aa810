pub mod get_stats_by_field;
pub mod get_survey_stats;
