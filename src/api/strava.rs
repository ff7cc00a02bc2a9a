use chrono::{DateTime, Utc};

use crate::api::{ApiCallOptions, ApiClient, ApiError, SummaryActivity, SummaryAthlete};
use crate::config::STRAVA_API_URL;

/// Largest page Strava serves for activity listings
pub const MAX_PER_PAGE: u32 = 200;

/// Paging and time window for `GET /athlete/activities`
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityQuery {
    pub page: u32,
    pub per_page: u32,
    pub before: Option<DateTime<Utc>>,
    pub after: Option<DateTime<Utc>>,
}

impl Default for ActivityQuery {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: MAX_PER_PAGE,
            before: None,
            after: None,
        }
    }
}

impl ActivityQuery {
    pub(crate) fn to_endpoint(&self) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        query.append_pair("page", &self.page.to_string());
        query.append_pair("per_page", &self.per_page.to_string());
        if let Some(before) = self.before {
            query.append_pair("before", &before.timestamp().to_string());
        }
        if let Some(after) = self.after {
            query.append_pair("after", &after.timestamp().to_string());
        }
        format!("/athlete/activities?{}", query.finish())
    }
}

/// Typed access to the Strava v3 endpoints the client needs
#[derive(Debug, Clone)]
pub struct StravaApi {
    client: ApiClient,
}

impl StravaApi {
    pub fn new(debug: bool) -> Result<Self, ApiError> {
        Self::with_base_url(STRAVA_API_URL, debug)
    }

    pub fn with_base_url(base_url: impl Into<String>, debug: bool) -> Result<Self, ApiError> {
        Ok(Self {
            client: ApiClient::new(base_url, debug)?,
        })
    }

    pub async fn authenticated_athlete(
        &self,
        access_token: &str,
    ) -> Result<SummaryAthlete, ApiError> {
        self.client
            .call_as("/athlete", Some(ApiCallOptions::new().bearer_auth(access_token)))
            .await
    }

    pub async fn athlete_activities(
        &self,
        access_token: &str,
        query: &ActivityQuery,
    ) -> Result<Vec<SummaryActivity>, ApiError> {
        self.client
            .call_as(
                &query.to_endpoint(),
                Some(ApiCallOptions::new().bearer_auth(access_token)),
            )
            .await
    }

    /// Every activity started after `after`, fetched page by page until a
    /// short page comes back
    pub async fn activities_since(
        &self,
        access_token: &str,
        after: Option<DateTime<Utc>>,
    ) -> Result<Vec<SummaryActivity>, ApiError> {
        let mut query = ActivityQuery {
            after,
            ..Default::default()
        };
        let mut activities = Vec::new();

        loop {
            let page = self.athlete_activities(access_token, &query).await?;
            let page_len = page.len();
            activities.extend(page);

            if page_len < query.per_page as usize {
                break;
            }
            query.page += 1;
        }

        log::info!(
            "Fetched {} activities over {} page(s)",
            activities.len(),
            query.page
        );
        Ok(activities)
    }
}
