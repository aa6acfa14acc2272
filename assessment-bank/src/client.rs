use crate::{
    error::BankError,
    types::{AssessmentOffered, AssessmentTaken, AssessmentTakenUpdate, Bank, NewAssessmentTaken},
};
use async_trait::async_trait;

/// Operations the projects API needs from an assessment bank.
///
/// Ids are passed in the bank's percent-encoded form.
#[async_trait]
pub trait AssessmentBankClient: Send + Sync {
    /// Find the StarLogo Nova bank, creating it on first use
    async fn get_or_create_bank(&self) -> Result<Bank, BankError>;

    /// Find the offered that project takens hang off, creating the
    /// assessment and offered when the bank has none yet
    async fn get_or_create_assessment_offered(
        &self,
        bank_id: &str,
    ) -> Result<AssessmentOffered, BankError>;

    async fn list_assessments_taken(
        &self,
        bank_id: &str,
        offered_id: &str,
    ) -> Result<Vec<AssessmentTaken>, BankError>;

    async fn get_assessment_taken(
        &self,
        bank_id: &str,
        taken_id: &str,
    ) -> Result<AssessmentTaken, BankError>;

    async fn create_assessment_taken(
        &self,
        bank_id: &str,
        offered_id: &str,
        form: NewAssessmentTaken,
    ) -> Result<AssessmentTaken, BankError>;

    async fn update_assessment_taken(
        &self,
        bank_id: &str,
        taken_id: &str,
        form: AssessmentTakenUpdate,
    ) -> Result<AssessmentTaken, BankError>;

    /// Get bank service name (used in logs)
    fn service_name(&self) -> &str {
        "assessment-bank"
    }
}
