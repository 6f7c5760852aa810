use chrono::Utc;
use tracing::instrument;

use crate::domain::{
    airport::ports::AirportRepository,
    amenity::ports::AmenityRepository,
    booking::ports::BookingRepository,
    common::{entities::app_errors::CoreError, non_blank, services::Service},
    health::ports::HealthCheckRepository,
    report::{
        ports::{ServiceReportRepository, ServiceReportService},
        value_objects::{ReportDates, ServiceReportFilter, ServiceReportLine},
    },
    schedule::ports::ScheduleRepository,
    survey::ports::SurveyRepository,
    user::ports::UserRepository,
};

impl<S, A, B, AM, RP, SV, U, HC> ServiceReportService for Service<S, A, B, AM, RP, SV, U, HC>
where
    S: ScheduleRepository,
    A: AirportRepository,
    B: BookingRepository,
    AM: AmenityRepository,
    RP: ServiceReportRepository,
    SV: SurveyRepository,
    U: UserRepository,
    HC: HealthCheckRepository,
{
    /// Without a flight date the report covers today and every later flight.
    #[instrument(skip(self))]
    async fn generate_service_report(
        &self,
        filter: ServiceReportFilter,
    ) -> Result<Vec<ServiceReportLine>, CoreError> {
        let dates = filter
            .flight_date
            .map(ReportDates::On)
            .unwrap_or_else(|| ReportDates::From(Utc::now().date_naive()));
        let flight_number = non_blank(filter.flight_number.as_deref()).map(str::to_string);

        self.report_repository
            .fetch_service_lines(flight_number, dates)
            .await
    }
}
