use super::AppState;
use actix_web::{get, web, HttpResponse, Result};
use chrono::Utc;
use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "sln-api";

/// Identity of this service and the bank it proxies to
#[derive(Debug, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub bank: String,
    pub user_realm: String,
}

impl ServiceInfo {
    fn from_state(data: &AppState) -> Self {
        ServiceInfo {
            service: SERVICE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            bank: data.bank.service_name().to_string(),
            user_realm: data.identity.user_realm.clone(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub checked_at: String,
    #[serde(flatten)]
    pub info: ServiceInfo,
}

/// Liveness only; the bank is not contacted
#[get("/health")]
pub async fn health_check(data: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        checked_at: Utc::now().to_rfc3339(),
        info: ServiceInfo::from_state(&data),
    }))
}

#[get("/version")]
pub async fn version_info(data: web::Data<AppState>) -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(ServiceInfo::from_state(&data)))
}
