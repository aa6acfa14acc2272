pub mod health;
pub mod projects;

use crate::helpers::identity::IdentitySettings;
use assessment_bank::AssessmentBankClient;
use std::sync::Arc;

pub struct AppState {
    pub bank: Arc<dyn AssessmentBankClient>,
    pub identity: IdentitySettings,
}
