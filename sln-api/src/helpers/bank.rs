use crate::config::BankConfig;
use assessment_bank::rest::HttpAssessmentBankClient;
use assessment_bank::AssessmentBankClient;
use std::sync::Arc;
use std::time::Duration;

pub fn create_bank_client(config: &BankConfig) -> anyhow::Result<Arc<dyn AssessmentBankClient>> {
    let client = HttpAssessmentBankClient::new(&config.base_url, &config.proxy_user)?
        .with_timeout(Duration::from_secs(config.timeout_secs))?
        .with_bank(&config.bank_genus, &config.bank_name);

    Ok(Arc::new(client))
}
