use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    report::value_objects::{ReportDates, ServiceReportFilter, ServiceReportLine},
};

#[cfg_attr(test, mockall::automock)]
pub trait ServiceReportService: Send + Sync {
    fn generate_service_report(
        &self,
        filter: ServiceReportFilter,
    ) -> impl Future<Output = Result<Vec<ServiceReportLine>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait ServiceReportRepository: Send + Sync {
    fn fetch_service_lines(
        &self,
        flight_number: Option<String>,
        dates: ReportDates,
    ) -> impl Future<Output = Result<Vec<ServiceReportLine>, CoreError>> + Send;
}
