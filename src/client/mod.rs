//! Prediction Service Client
//!
//! Maps the service operations onto HTTP requests and normalizes every
//! failure into a [`RequestError`]. Each call is a single attempt: no
//! retries, no timeouts, no caching.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::config::{ApiConfig, Endpoint};
use crate::model::{
    AggregateStats, BatchRecord, ClientProfile, FeedbackEntry, FeedbackStats, PredictionResult,
    TemplateFile, UploadFile,
};

pub mod error;
#[cfg(feature = "reqwest-transport")]
pub mod http;
pub mod transport;

#[cfg(test)]
pub(crate) mod fake;

pub use error::RequestError;
#[cfg(feature = "reqwest-transport")]
pub use http::ReqwestTransport;
pub use transport::{
    FilePart, HttpRequest, HttpResponse, Method, RequestBody, Transport, TransportError,
};

/// Multipart field name the service reads the batch file from
pub const BATCH_FILE_FIELD: &str = "file";

/// Acknowledgement returned by the feedback endpoint
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Acknowledgement {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Typed client for the loan-approval service
pub struct ApiClient<T> {
    transport: T,
    config: ApiConfig,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Predict approval for one applicant
    pub async fn predict_one(
        &self,
        profile: &ClientProfile,
    ) -> Result<PredictionResult, RequestError> {
        profile
            .validate()
            .map_err(|e| RequestError::Invalid(e.to_string()))?;

        let request = HttpRequest::post_json(self.config.url(Endpoint::PredictOne), profile)
            .map_err(|e| RequestError::Invalid(e.to_string()))?;
        self.fetch_json(request).await
    }

    /// Upload a spreadsheet and get one prediction per row, in row order
    pub async fn predict_batch(&self, file: &UploadFile) -> Result<Vec<BatchRecord>, RequestError> {
        tracing::debug!(file = %file.name, bytes = file.size(), "Submitting batch file");

        let request = HttpRequest::post_file(
            self.config.url(Endpoint::PredictBatch),
            BATCH_FILE_FIELD,
            file.clone(),
        );
        let records: Option<Vec<BatchRecord>> = self.fetch_json(request).await?;
        Ok(records.unwrap_or_default())
    }

    /// Send the optional survey. Callers treat failures as best-effort.
    pub async fn submit_feedback(
        &self,
        entry: &FeedbackEntry,
    ) -> Result<Acknowledgement, RequestError> {
        let request = HttpRequest::post_json(self.config.url(Endpoint::Feedback), entry)
            .map_err(|e| RequestError::Invalid(e.to_string()))?;
        let ack: Option<Acknowledgement> = self.fetch_json(request).await?;
        Ok(ack.unwrap_or_default())
    }

    /// Download the batch CSV template.
    ///
    /// Any failure collapses into [`RequestError::TemplateUnavailable`].
    pub async fn fetch_template(&self) -> Result<TemplateFile, RequestError> {
        let request = HttpRequest::get(self.config.url(Endpoint::Template));

        match self.execute(request).await {
            Ok(response) => Ok(TemplateFile {
                content_type: response
                    .content_type
                    .unwrap_or_else(|| "text/csv".to_string()),
                bytes: response.body,
            }),
            Err(e) => {
                tracing::debug!("Template download failed: {}", e);
                Err(RequestError::TemplateUnavailable)
            }
        }
    }

    /// Prediction statistics for the dashboard
    pub async fn fetch_stats(&self) -> Result<AggregateStats, RequestError> {
        self.fetch_json(HttpRequest::get(self.config.url(Endpoint::Stats)))
            .await
    }

    /// Survey statistics for the dashboard
    pub async fn fetch_feedback_stats(&self) -> Result<FeedbackStats, RequestError> {
        self.fetch_json(HttpRequest::get(self.config.url(Endpoint::FeedbackStats)))
            .await
    }

    async fn fetch_json<R: DeserializeOwned>(&self, request: HttpRequest) -> Result<R, RequestError> {
        let url = request.url.clone();
        let response = self.execute(request).await?;

        serde_json::from_slice(&response.body).map_err(|e| {
            tracing::warn!(%url, "Failed to decode response: {}", e);
            RequestError::Decode(e.to_string())
        })
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, RequestError> {
        let method = request.method;
        let url = request.url.clone();
        tracing::debug!(method = method.as_str(), %url, "Sending request");

        let response = self.transport.send(request).await.map_err(|e| {
            tracing::warn!(method = method.as_str(), %url, "Request failed: {}", e);
            RequestError::from(e)
        })?;

        if !response.is_success() {
            let err = RequestError::from_response(&response);
            tracing::warn!(
                method = method.as_str(),
                %url,
                status = response.status,
                "Service returned an error: {}",
                err
            );
            return Err(err);
        }

        tracing::debug!(method = method.as_str(), %url, status = response.status, "Request completed");
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeTransport;
    use super::*;
    use crate::model::{AmountField, Decision};
    use serde_json::json;

    fn client(transport: FakeTransport) -> ApiClient<FakeTransport> {
        ApiClient::new(transport, ApiConfig::default())
    }

    #[tokio::test]
    async fn test_predict_one_approved() {
        let transport = FakeTransport::new();
        transport.respond_json("/predict-one", 200, json!({"prediction": 1, "probability": 0.82}));
        let client = client(transport);

        let result = client.predict_one(&ClientProfile::default()).await.unwrap();
        assert_eq!(result.prediction, Decision::Approved);
        assert_eq!(result.probability_label(), "82.00%");

        let requests = client.transport().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].url, "http://localhost:8000/predict-one");
        match &requests[0].body {
            RequestBody::Json(bytes) => {
                let sent: serde_json::Value = serde_json::from_slice(bytes).unwrap();
                assert_eq!(sent["Gender"], "Male");
                assert_eq!(sent["ApplicantIncome"], 5000.0);
                assert_eq!(sent["CoapplicantIncome"], 2000.0);
                assert_eq!(sent["LoanAmount"], 200000.0);
            }
            other => panic!("expected JSON body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_predict_one_error_body() {
        let transport = FakeTransport::new();
        transport.respond_text("/predict-one", 400, "Invalid input");
        let client = client(transport);

        let err = client.predict_one(&ClientProfile::default()).await.unwrap_err();
        assert_eq!(err.message(), "Invalid input");
    }

    #[tokio::test]
    async fn test_predict_one_rejects_negative_income_before_sending() {
        let client = client(FakeTransport::new());
        let mut profile = ClientProfile::default();
        profile.set_amount(AmountField::ApplicantIncome, -100.0);

        let err = client.predict_one(&profile).await.unwrap_err();
        assert_eq!(err.message(), "ApplicantIncome cannot be negative");
        assert!(client.transport().requests().is_empty());
    }

    #[tokio::test]
    async fn test_predict_one_undecodable_body() {
        let transport = FakeTransport::new();
        transport.respond_text("/predict-one", 200, "<html>proxy page</html>");
        let client = client(transport);

        let err = client.predict_one(&ClientProfile::default()).await.unwrap_err();
        assert!(matches!(err, RequestError::Decode(_)));
        assert_eq!(err.message(), error::UNEXPECTED_RESPONSE);
    }

    #[tokio::test]
    async fn test_network_failure() {
        let transport = FakeTransport::new();
        transport.fail("/stats", "connection refused");
        let client = client(transport);

        let err = client.fetch_stats().await.unwrap_err();
        assert_eq!(err, RequestError::Network("connection refused".to_string()));
    }

    #[tokio::test]
    async fn test_predict_batch_sends_multipart_file() {
        let transport = FakeTransport::new();
        transport.respond_json(
            "/predict-batch-file",
            200,
            json!([
                {"Gender": "Male", "prediction": 1, "probability": 0.9},
                {"Gender": "Female", "prediction": 0, "probability": 0.3}
            ]),
        );
        let client = client(transport);

        let file = UploadFile::new("clients.csv", b"Gender,Married\nMale,Yes\n".to_vec())
            .with_content_type("text/csv");
        let records = client.predict_batch(&file).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].applicant.gender, "Female");

        let requests = client.transport().requests();
        match &requests[0].body {
            RequestBody::Multipart(part) => {
                assert_eq!(part.field, "file");
                assert_eq!(part.file, file);
            }
            other => panic!("expected multipart body, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_predict_batch_null_body_is_empty() {
        let transport = FakeTransport::new();
        transport.respond_text("/predict-batch-file", 200, "null");
        let client = client(transport);

        let records = client
            .predict_batch(&UploadFile::new("empty.csv", Vec::new()))
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_submit_feedback() {
        let transport = FakeTransport::new();
        transport.respond_json(
            "/feedback",
            200,
            json!({"status": "ok", "message": "Feedback enregistré"}),
        );
        let client = client(transport);

        let mut entry = FeedbackEntry::default();
        entry.job_situation = "CDI".to_string();
        let ack = client.submit_feedback(&entry).await.unwrap();
        assert_eq!(ack.status.as_deref(), Some("ok"));
    }

    #[tokio::test]
    async fn test_fetch_template() {
        let transport = FakeTransport::new();
        transport.respond(
            "/csv-template",
            HttpResponse {
                status: 200,
                status_text: "OK".to_string(),
                content_type: Some("text/csv; charset=utf-8".to_string()),
                body: b"Gender,Married\n".to_vec(),
            },
        );
        let client = client(transport);

        let template = client.fetch_template().await.unwrap();
        assert_eq!(template.content_type, "text/csv; charset=utf-8");
        assert_eq!(template.bytes, b"Gender,Married\n".to_vec());
    }

    #[tokio::test]
    async fn test_fetch_template_failure_is_fixed_message() {
        let transport = FakeTransport::new();
        transport.respond_text("/csv-template", 500, "Traceback: model file missing");
        let client = client(transport);

        let err = client.fetch_template().await.unwrap_err();
        assert_eq!(err, RequestError::TemplateUnavailable);
        assert_eq!(err.message(), "Unable to download the template");

        let transport = FakeTransport::new();
        transport.fail("/csv-template", "dns error");
        let client = ApiClient::new(transport, ApiConfig::default());
        assert_eq!(
            client.fetch_template().await.unwrap_err(),
            RequestError::TemplateUnavailable
        );
    }

    #[tokio::test]
    async fn test_fetch_feedback_stats() {
        let transport = FakeTransport::new();
        transport.respond_json(
            "/feedback-stats",
            200,
            json!({
                "total": 1, "jobSituation": {"CDI": 1}, "loanObjective": {},
                "purchaseDelay": {}, "avgContribution": 10000.0,
                "discovery": {}, "discovery_texts": []
            }),
        );
        let client = client(transport);

        let stats = client.fetch_feedback_stats().await.unwrap();
        assert_eq!(stats.total, 1);
        assert_eq!(stats.job_situation["CDI"], 1);
    }
}
