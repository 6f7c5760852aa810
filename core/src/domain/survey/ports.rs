use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    survey::value_objects::{SurveyField, SurveyGroupStats, SurveyStats},
};

#[cfg_attr(test, mockall::automock)]
pub trait SurveyService: Send + Sync {
    fn get_survey_stats(&self) -> impl Future<Output = Result<SurveyStats, CoreError>> + Send;

    fn get_stats_by_field(
        &self,
        field: SurveyField,
    ) -> impl Future<Output = Result<Vec<SurveyGroupStats>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait SurveyRepository: Send + Sync {
    /// Sums of q1..q4 and response counts grouped by `field`.
    fn stats_by_field(
        &self,
        field: SurveyField,
    ) -> impl Future<Output = Result<Vec<SurveyGroupStats>, CoreError>> + Send;
}
