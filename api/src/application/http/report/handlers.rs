pub mod get_service_report;
