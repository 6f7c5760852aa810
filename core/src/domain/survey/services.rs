use tracing::instrument;

use crate::domain::{
    airport::ports::AirportRepository,
    amenity::ports::AmenityRepository,
    booking::ports::BookingRepository,
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    report::ports::ServiceReportRepository,
    schedule::ports::ScheduleRepository,
    survey::{
        ports::{SurveyRepository, SurveyService},
        value_objects::{SurveyField, SurveyGroupStats, SurveyStats},
    },
    user::ports::UserRepository,
};

impl<S, A, B, AM, RP, SV, U, HC> SurveyService for Service<S, A, B, AM, RP, SV, U, HC>
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
    #[instrument(skip(self))]
    async fn get_survey_stats(&self) -> Result<SurveyStats, CoreError> {
        let mut stats = SurveyStats::default();

        for field in SurveyField::ALL {
            let groups = self.survey_repository.stats_by_field(field).await?;
            stats.set(field, groups);
        }

        Ok(stats)
    }

    #[instrument(skip(self))]
    async fn get_stats_by_field(
        &self,
        field: SurveyField,
    ) -> Result<Vec<SurveyGroupStats>, CoreError> {
        self.survey_repository.stats_by_field(field).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        airport::ports::MockAirportRepository, amenity::ports::MockAmenityRepository,
        booking::ports::MockBookingRepository, health::ports::MockHealthCheckRepository,
        report::ports::MockServiceReportRepository, schedule::ports::MockScheduleRepository,
        user::ports::MockUserRepository,
    };

    struct Response {
        departure: &'static str,
        arrival: &'static str,
        age: i32,
        gender: &'static str,
        cabin_type: &'static str,
        answers: [i64; 4],
    }

    /// Groups responses in memory the way the SQL adapter does.
    struct InMemorySurvey {
        responses: Vec<Response>,
    }

    impl SurveyRepository for InMemorySurvey {
        async fn stats_by_field(
            &self,
            field: SurveyField,
        ) -> Result<Vec<SurveyGroupStats>, CoreError> {
            let mut groups: Vec<SurveyGroupStats> = Vec::new();

            for response in &self.responses {
                let value = match field {
                    SurveyField::Gender => response.gender.to_string(),
                    SurveyField::Age => response.age.to_string(),
                    SurveyField::CabinType => response.cabin_type.to_string(),
                    SurveyField::Departure => response.departure.to_string(),
                    SurveyField::Arrival => response.arrival.to_string(),
                };

                let index = match groups
                    .iter()
                    .position(|g| g.value.as_deref() == Some(value.as_str()))
                {
                    Some(index) => index,
                    None => {
                        groups.push(SurveyGroupStats {
                            value: Some(value),
                            q1: 0,
                            q2: 0,
                            q3: 0,
                            q4: 0,
                            count: 0,
                        });
                        groups.len() - 1
                    }
                };

                let group = &mut groups[index];
                group.q1 += response.answers[0];
                group.q2 += response.answers[1];
                group.q3 += response.answers[2];
                group.q4 += response.answers[3];
                group.count += 1;
            }

            groups.sort_by(|a, b| a.value.cmp(&b.value));
            Ok(groups)
        }
    }

    fn service() -> Service<
        MockScheduleRepository,
        MockAirportRepository,
        MockBookingRepository,
        MockAmenityRepository,
        MockServiceReportRepository,
        InMemorySurvey,
        MockUserRepository,
        MockHealthCheckRepository,
    > {
        let responses = vec![
            Response {
                departure: "AUH",
                arrival: "DOH",
                age: 34,
                gender: "M",
                cabin_type: "Economy",
                answers: [4, 5, 3, 2],
            },
            Response {
                departure: "AUH",
                arrival: "CAI",
                age: 28,
                gender: "F",
                cabin_type: "Business",
                answers: [5, 5, 5, 4],
            },
            Response {
                departure: "DOH",
                arrival: "AUH",
                age: 34,
                gender: "F",
                cabin_type: "Economy",
                answers: [2, 3, 1, 1],
            },
        ];

        Service::new(
            MockScheduleRepository::new(),
            MockAirportRepository::new(),
            MockBookingRepository::new(),
            MockAmenityRepository::new(),
            MockServiceReportRepository::new(),
            InMemorySurvey { responses },
            MockUserRepository::new(),
            MockHealthCheckRepository::new(),
        )
    }

    #[tokio::test]
    async fn stats_cover_every_dimension() {
        let stats = service().get_survey_stats().await.unwrap();

        assert_eq!(stats.gender.len(), 2);
        assert_eq!(stats.age.len(), 2);
        assert_eq!(stats.cabin_type.len(), 2);
        assert_eq!(stats.departure.len(), 2);
        assert_eq!(stats.arrival.len(), 3);

        let female = &stats.gender[0];
        assert_eq!(female.value.as_deref(), Some("F"));
        assert_eq!((female.q1, female.q2, female.q3, female.q4), (7, 8, 6, 5));
        assert_eq!(female.count, 2);
    }

    #[tokio::test]
    async fn single_dimension() {
        let groups = service()
            .get_stats_by_field(SurveyField::CabinType)
            .await
            .unwrap();

        let values: Vec<Option<&str>> = groups.iter().map(|g| g.value.as_deref()).collect();
        assert_eq!(values, vec![Some("Business"), Some("Economy")]);
        assert_eq!(groups[1].count, 2);
    }
}
