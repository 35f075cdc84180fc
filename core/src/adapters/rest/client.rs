//! Course store REST client implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use urlencoding::encode;

use crate::config::Config;
use crate::domain::entities::{Course, CourseDraft, CourseId, CourseUpdate};
use crate::domain::ports::CourseStore;
use crate::error::StoreError;

/// Implementation of the course store client.
///
/// Stateless apart from the connection pool; safe for concurrent use by any
/// number of callers.
pub struct RestCourseStore {
    http: Client,
    base_url: String,
}

impl RestCourseStore {
    /// Build a client with a bounded per-request timeout. A timed-out
    /// request surfaces as a transport error.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, StoreError> {
        let base_url: String = base_url.into();
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        Self::new(config.store_base_url.clone(), config.store_timeout())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, StoreError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| StoreError::Deserialization(e.to_string()))
        } else if status.as_u16() == 409 {
            let message = response.text().await.unwrap_or_default();
            Err(StoreError::Conflict(message))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(StoreError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<(), StoreError> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else if status.as_u16() == 409 {
            let message = response.text().await.unwrap_or_default();
            Err(StoreError::Conflict(message))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(StoreError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Request types for the course store API
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateCourseRequest<'a> {
    id: &'a str,
    name: &'a str,
    time_zone: &'a str,
    institute: &'a str,
}

impl<'a> From<&'a CourseDraft> for CreateCourseRequest<'a> {
    fn from(draft: &'a CourseDraft) -> Self {
        Self {
            id: draft.id.as_str(),
            name: &draft.name,
            time_zone: &draft.time_zone,
            institute: &draft.institute,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdateCourseRequest<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time_zone: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    institute: Option<&'a str>,
}

/// Response types from the course store API
///
/// Timestamps arrive as RFC 3339 text with whatever fractional-second
/// precision the store produced; they are normalized to UTC while parsing.
/// A null or absent `deletedAt` means the course is active.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CourseResponse {
    id: String,
    name: String,
    time_zone: String,
    institute: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    deleted_at: Option<DateTime<Utc>>,
}

impl From<CourseResponse> for Course {
    fn from(r: CourseResponse) -> Self {
        Course {
            id: CourseId::new(r.id),
            name: r.name,
            institute: r.institute,
            time_zone: r.time_zone,
            created_at: r.created_at,
            deleted_at: r.deleted_at,
        }
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SoftDeleteResponse {
    deleted_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct CountResponse {
    count: u64,
}

#[async_trait]
impl CourseStore for RestCourseStore {
    async fn create(&self, draft: &CourseDraft) -> Result<Course, StoreError> {
        let resp = self
            .http
            .post(self.url("/Courses"))
            .json(&CreateCourseRequest::from(draft))
            .send()
            .await?;

        let course: CourseResponse = self.handle_response(resp).await?;
        Ok(course.into())
    }

    async fn get(&self, id: &CourseId) -> Result<Option<Course>, StoreError> {
        let resp = self
            .http
            .get(self.url(&format!("/Course/{}", encode(id.as_str()))))
            .send()
            .await?;

        if resp.status().as_u16() == 404 {
            return Ok(None);
        }

        let course: CourseResponse = self.handle_response(resp).await?;
        Ok(Some(course.into()))
    }

    async fn get_many(&self, ids: &[CourseId]) -> Result<Vec<Course>, StoreError> {
        // The store exposes no batch read; ids that no longer resolve are
        // left out of the result.
        let mut courses = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(course) = self.get(id).await? {
                courses.push(course);
            }
        }
        Ok(courses)
    }

    async fn update(&self, id: &CourseId, changes: &CourseUpdate) -> Result<Course, StoreError> {
        let resp = self
            .http
            .put(self.url(&format!("/Course/{}", encode(id.as_str()))))
            .json(&UpdateCourseRequest {
                name: changes.name.as_deref(),
                time_zone: changes.time_zone.as_deref(),
                institute: changes.institute.as_deref(),
            })
            .send()
            .await?;

        if resp.status().as_u16() == 404 {
            return Err(StoreError::CourseNotFound(id.clone()));
        }

        let course: CourseResponse = self.handle_response(resp).await?;
        Ok(course.into())
    }

    async fn soft_delete(&self, id: &CourseId) -> Result<DateTime<Utc>, StoreError> {
        let resp = self
            .http
            .put(self.url(&format!("/Course/{}/bin", encode(id.as_str()))))
            .send()
            .await?;

        if resp.status().as_u16() == 404 {
            return Err(StoreError::CourseNotFound(id.clone()));
        }

        let body: SoftDeleteResponse = self.handle_response(resp).await?;
        Ok(body.deleted_at)
    }

    async fn restore(&self, id: &CourseId) -> Result<(), StoreError> {
        let resp = self
            .http
            .delete(self.url(&format!("/Course/{}/bin", encode(id.as_str()))))
            .send()
            .await?;

        if resp.status().as_u16() == 404 {
            return Err(StoreError::CourseNotFound(id.clone()));
        }

        self.handle_empty_response(resp).await
    }

    async fn delete(&self, id: &CourseId) -> Result<(), StoreError> {
        let resp = self
            .http
            .delete(self.url(&format!("/Course/{}", encode(id.as_str()))))
            .send()
            .await?;

        if resp.status().as_u16() == 404 {
            return Err(StoreError::CourseNotFound(id.clone()));
        }

        self.handle_empty_response(resp).await
    }

    async fn count_created_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<u64, StoreError> {
        let resp = self
            .http
            .get(self.url("/Courses/count"))
            .query(&[("from", from.to_rfc3339()), ("to", to.to_rfc3339())])
            .send()
            .await?;

        let body: CountResponse = self.handle_response(resp).await?;
        Ok(body.count)
    }
}
