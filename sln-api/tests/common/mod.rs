#![allow(dead_code)]

pub mod logging;

use actix_web::{test, web, App};
use assessment_bank::client::AssessmentBankClient;
use assessment_bank::error::BankError;
use assessment_bank::types::{
    AssessmentOffered, AssessmentTaken, AssessmentTakenUpdate, Bank, DisplayText,
    NewAssessmentTaken,
};
use sln_api::handlers::AppState;
use sln_api::helpers::identity::IdentitySettings;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const BANK_ID: &str = "bank";
pub const OFFERED_ID: &str = "offered";

pub struct TestApp<S> {
    pub mock_bank: Arc<MockAssessmentBank>,
    pub app: S,
}

/// In-memory bank that records every call made against it
pub struct MockAssessmentBank {
    pub calls: Mutex<Vec<&'static str>>,
    pub takens: Mutex<HashMap<String, AssessmentTaken>>,
    pub created: Mutex<Vec<NewAssessmentTaken>>,
    pub updates: Mutex<Vec<(String, AssessmentTakenUpdate)>>,
    pub failure: Mutex<Option<BankError>>,
}

impl MockAssessmentBank {
    pub fn new() -> Self {
        MockAssessmentBank {
            calls: Mutex::new(Vec::new()),
            takens: Mutex::new(HashMap::new()),
            created: Mutex::new(Vec::new()),
            updates: Mutex::new(Vec::new()),
            failure: Mutex::new(None),
        }
    }

    pub fn insert_taken(&self, taken: AssessmentTaken) {
        self.takens.lock().unwrap().insert(taken.id.clone(), taken);
    }

    /// Make the next bank call fail with `error`
    pub fn fail_next(&self, error: BankError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn called(&self, name: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|call| *call == name)
    }

    pub fn call_names(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_created(&self) -> Option<NewAssessmentTaken> {
        self.created.lock().unwrap().last().cloned()
    }

    fn record(&self, name: &'static str) -> Result<(), BankError> {
        self.calls.lock().unwrap().push(name);
        match self.failure.lock().unwrap().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

impl Default for MockAssessmentBank {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl AssessmentBankClient for MockAssessmentBank {
    async fn get_or_create_bank(&self) -> Result<Bank, BankError> {
        self.record("get_or_create_bank")?;
        Ok(Bank {
            id: BANK_ID.to_string(),
            display_name: DisplayText::new("SLN"),
            description: DisplayText::default(),
            genus_type_id: None,
        })
    }

    async fn get_or_create_assessment_offered(
        &self,
        bank_id: &str,
    ) -> Result<AssessmentOffered, BankError> {
        self.record("get_or_create_assessment_offered")?;
        assert_eq!(bank_id, BANK_ID);
        Ok(AssessmentOffered {
            id: OFFERED_ID.to_string(),
            display_name: DisplayText::default(),
            assessment_id: None,
        })
    }

    async fn list_assessments_taken(
        &self,
        bank_id: &str,
        offered_id: &str,
    ) -> Result<Vec<AssessmentTaken>, BankError> {
        self.record("list_assessments_taken")?;
        assert_eq!(bank_id, BANK_ID);
        assert_eq!(offered_id, OFFERED_ID);
        let mut takens: Vec<AssessmentTaken> =
            self.takens.lock().unwrap().values().cloned().collect();
        takens.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(takens)
    }

    async fn get_assessment_taken(
        &self,
        bank_id: &str,
        taken_id: &str,
    ) -> Result<AssessmentTaken, BankError> {
        self.record("get_assessment_taken")?;
        assert_eq!(bank_id, BANK_ID);
        self.takens
            .lock()
            .unwrap()
            .get(taken_id)
            .cloned()
            .ok_or_else(|| BankError::not_found(format!("{taken_id} not found")))
    }

    async fn create_assessment_taken(
        &self,
        bank_id: &str,
        offered_id: &str,
        form: NewAssessmentTaken,
    ) -> Result<AssessmentTaken, BankError> {
        self.record("create_assessment_taken")?;
        assert_eq!(bank_id, BANK_ID);
        assert_eq!(offered_id, OFFERED_ID);

        let mut created = self.created.lock().unwrap();
        created.push(form.clone());
        let taken = taken_from_form(format!("created{}", created.len()), &form);
        drop(created);

        self.insert_taken(taken.clone());
        Ok(taken)
    }

    async fn update_assessment_taken(
        &self,
        bank_id: &str,
        taken_id: &str,
        form: AssessmentTakenUpdate,
    ) -> Result<AssessmentTaken, BankError> {
        self.record("update_assessment_taken")?;
        assert_eq!(bank_id, BANK_ID);
        self.updates
            .lock()
            .unwrap()
            .push((taken_id.to_string(), form.clone()));

        let mut takens = self.takens.lock().unwrap();
        let taken = takens
            .get_mut(taken_id)
            .ok_or_else(|| BankError::not_found(format!("{taken_id} not found")))?;
        if let Some(title) = form.title {
            taken.display_name = DisplayText::new(title);
        }
        if let Some(description) = form.description {
            taken.description = DisplayText::new(description);
        }
        if let Some(project_str) = form.project_str {
            taken.project_str = Some(project_str);
        }
        Ok(taken.clone())
    }
}

fn taken_from_form(id: String, form: &NewAssessmentTaken) -> AssessmentTaken {
    AssessmentTaken {
        id,
        display_name: DisplayText::new(form.title.clone()),
        description: DisplayText::new(form.description.clone()),
        taking_agent_id: Some(form.user_id.clone()),
        provenance_id: form.provenance_id.clone(),
        project_str: Some(form.project_str.clone()),
        assessment_offered_id: Some(OFFERED_ID.to_string()),
        created_at: None,
        updated_at: None,
    }
}

pub fn taken(id: &str, title: &str, description: &str) -> AssessmentTaken {
    AssessmentTaken {
        id: id.to_string(),
        display_name: DisplayText::new(title),
        description: DisplayText::new(description),
        taking_agent_id: Some("owner--ODL".to_string()),
        provenance_id: None,
        project_str: Some("000a".to_string()),
        assessment_offered_id: Some(OFFERED_ID.to_string()),
        created_at: None,
        updated_at: None,
    }
}

pub async fn setup_test_app() -> TestApp<
    impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
> {
    let mock_bank = Arc::new(MockAssessmentBank::new());
    let bank = mock_bank.clone() as Arc<dyn AssessmentBankClient>;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(AppState {
                bank,
                identity: IdentitySettings {
                    user_realm: "ODL".to_string(),
                    default_user: "anonymous".to_string(),
                },
            }))
            .configure(sln_api::configure),
    )
    .await;

    TestApp { mock_bank, app }
}
