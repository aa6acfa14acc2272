use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

use crate::{
    client::AssessmentBankClient,
    error::BankError,
    types::{
        Assessment, AssessmentOffered, AssessmentTaken, AssessmentTakenUpdate, Bank,
        NewAssessmentTaken, NewBank,
    },
};

const PROXY_HEADER: &str = "x-api-proxy";
const DEFAULT_BANK_GENUS: &str = "assessment-bank-genus%3Asln-project-bank%40ODL.MIT.EDU";
const DEFAULT_BANK_NAME: &str = "StarLogo Nova projects";

/// Assessment bank client talking to the bank's REST API
pub struct HttpAssessmentBankClient {
    base_url: String,
    proxy_user: String,
    bank_genus: String,
    bank_name: String,
    http_client: reqwest::Client,
}

impl HttpAssessmentBankClient {
    /// Create a client for the bank at `base_url`, acting as `proxy_user`
    pub fn new(
        base_url: impl Into<String>,
        proxy_user: impl Into<String>,
    ) -> Result<Self, BankError> {
        let proxy_user = proxy_user.into();
        if proxy_user.is_empty() {
            return Err(BankError::authentication("Proxy user cannot be empty"));
        }

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            proxy_user,
            bank_genus: DEFAULT_BANK_GENUS.to_string(),
            bank_name: DEFAULT_BANK_NAME.to_string(),
            http_client: build_http_client(Duration::from_secs(30))?,
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, BankError> {
        self.http_client = build_http_client(timeout)?;
        Ok(self)
    }

    /// Override the genus type and display name used to find the bank
    pub fn with_bank(mut self, genus: impl Into<String>, name: impl Into<String>) -> Self {
        self.bank_genus = genus.into();
        self.bank_name = name.into();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/api/v1/assessment/{}", self.base_url, path)
    }

    fn headers(&self) -> Result<HeaderMap, BankError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            PROXY_HEADER,
            HeaderValue::from_str(&self.proxy_user)
                .map_err(|_| BankError::authentication("Invalid proxy user format"))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, BankError> {
        let response = request
            .headers(self.headers()?)
            .send()
            .await
            .map_err(|e| BankError::Network { source: e })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BankError::Network { source: e })?;

        if status.is_success() {
            Ok(serde_json::from_str(&body)?)
        } else {
            let message = if body.is_empty() {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            } else {
                body
            };
            Err(BankError::from_status(status.as_u16(), message))
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, BankError> {
        self.get_with_query(path, &[]).await
    }

    async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, BankError> {
        let url = self.url(path);
        debug!(url = %url, ?query, "GET");
        self.send(self.http_client.get(&url).query(query)).await
    }

    async fn post<B: serde::Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BankError> {
        let url = self.url(path);
        debug!(url = %url, "POST");
        self.send(self.http_client.post(&url).json(body)).await
    }

    async fn put<B: serde::Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, BankError> {
        let url = self.url(path);
        debug!(url = %url, "PUT");
        self.send(self.http_client.put(&url).json(body)).await
    }

    async fn get_or_create_assessment(&self, bank_id: &str) -> Result<Assessment, BankError> {
        let path = format!("banks/{bank_id}/assessments");
        let assessments: Vec<Assessment> = self.get(&path).await?;
        if let Some(assessment) = assessments.into_iter().next() {
            return Ok(assessment);
        }

        debug!(bank_id = %bank_id, "Creating assessment");
        self.post(
            &path,
            &json!({
                "name": format!("{} assessment", self.bank_name),
                "description": "Holds StarLogo Nova project records",
            }),
        )
        .await
    }
}

fn build_http_client(timeout: Duration) -> Result<reqwest::Client, BankError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| BankError::Network { source: e })
}

#[async_trait]
impl AssessmentBankClient for HttpAssessmentBankClient {
    async fn get_or_create_bank(&self) -> Result<Bank, BankError> {
        // Configured genus ids are percent-encoded; reqwest encodes the query itself
        let genus = urlencoding::decode(&self.bank_genus)
            .map(|g| g.into_owned())
            .unwrap_or_else(|_| self.bank_genus.clone());
        let banks: Vec<Bank> = self
            .get_with_query("banks", &[("genusTypeId", genus.as_str())])
            .await?;

        // Older bank versions ignore the query filter
        if let Some(bank) = banks.into_iter().find(|bank| {
            bank.genus_type_id
                .as_deref()
                .map(|g| g == self.bank_genus || g == genus)
                .unwrap_or(false)
        }) {
            return Ok(bank);
        }

        debug!(genus = %genus, "Creating bank");
        let form = NewBank {
            name: self.bank_name.clone(),
            description: format!("{} bank", self.bank_name),
            genus_type_id: genus,
        };
        self.post("banks", &form).await
    }

    async fn get_or_create_assessment_offered(
        &self,
        bank_id: &str,
    ) -> Result<AssessmentOffered, BankError> {
        let assessment = self.get_or_create_assessment(bank_id).await?;
        let path = format!(
            "banks/{bank_id}/assessments/{}/assessmentsoffered",
            assessment.id
        );
        let offereds: Vec<AssessmentOffered> = self.get(&path).await?;
        if let Some(offered) = offereds.into_iter().next() {
            return Ok(offered);
        }

        debug!(bank_id = %bank_id, assessment_id = %assessment.id, "Creating assessment offered");
        self.post(&path, &json!({})).await
    }

    async fn list_assessments_taken(
        &self,
        bank_id: &str,
        offered_id: &str,
    ) -> Result<Vec<AssessmentTaken>, BankError> {
        self.get(&format!(
            "banks/{bank_id}/assessmentsoffered/{offered_id}/assessmentstaken"
        ))
        .await
    }

    async fn get_assessment_taken(
        &self,
        bank_id: &str,
        taken_id: &str,
    ) -> Result<AssessmentTaken, BankError> {
        self.get(&format!("banks/{bank_id}/assessmentstaken/{taken_id}"))
            .await
    }

    async fn create_assessment_taken(
        &self,
        bank_id: &str,
        offered_id: &str,
        form: NewAssessmentTaken,
    ) -> Result<AssessmentTaken, BankError> {
        self.post(
            &format!("banks/{bank_id}/assessmentsoffered/{offered_id}/assessmentstaken"),
            &form,
        )
        .await
    }

    async fn update_assessment_taken(
        &self,
        bank_id: &str,
        taken_id: &str,
        form: AssessmentTakenUpdate,
    ) -> Result<AssessmentTaken, BankError> {
        self.put(&format!("banks/{bank_id}/assessmentstaken/{taken_id}"), &form)
            .await
    }

    fn service_name(&self) -> &str {
        &self.base_url
    }
}
