use super::AppState;
use crate::error::{AppError, AppResult};
use crate::helpers::identity::resolve_user_id;
use crate::models::{
    serialize_projects, CreateProjectRequest, Project, ProjectId, RemixProjectRequest,
    UpdateProjectRequest,
};
use actix_web::{get, patch, post, web, HttpRequest, HttpResponse};
use assessment_bank::types::{AssessmentTaken, AssessmentTakenUpdate, NewAssessmentTaken};
use tracing::{debug, error, info};

#[get("/projects")]
pub async fn list_projects(data: web::Data<AppState>) -> AppResult<HttpResponse> {
    let takens = fetch_projects(&data).await.map_err(|e| {
        error!(error = %e, "Failed to list projects");
        e
    })?;
    info!(count = takens.len(), "Retrieved projects");

    Ok(HttpResponse::Ok().json(serialize_projects(takens)))
}

async fn fetch_projects(data: &AppState) -> AppResult<Vec<AssessmentTaken>> {
    let bank = data.bank.get_or_create_bank().await?;
    let offered = data.bank.get_or_create_assessment_offered(&bank.id).await?;
    debug!(bank_id = %bank.id, offered_id = %offered.id, "Listing projects");

    Ok(data
        .bank
        .list_assessments_taken(&bank.id, &offered.id)
        .await?)
}

#[get("/project/{project_id}")]
pub async fn get_project(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let project_id = ProjectId::from_path(&path.into_inner());
    info!(project_id = %project_id, "Retrieving project");

    let taken = fetch_project(&data, &project_id).await.map_err(|e| {
        error!(error = %e, project_id = %project_id, "Failed to retrieve project");
        e
    })?;

    Ok(HttpResponse::Ok().json(Project::from(taken)))
}

async fn fetch_project(data: &AppState, project_id: &ProjectId) -> AppResult<AssessmentTaken> {
    let bank = data.bank.get_or_create_bank().await?;
    Ok(data
        .bank
        .get_assessment_taken(&bank.id, project_id.as_str())
        .await?)
}

#[patch("/project/{project_id}")]
pub async fn update_project(
    path: web::Path<String>,
    payload: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let project_id = ProjectId::from_path(&path.into_inner());
    let update: AssessmentTakenUpdate = payload.into_inner().into();

    if update.is_empty() {
        return Err(AppError::InvalidRequest(
            "At least one of title, description or project_str is required".to_string(),
        ));
    }

    info!(project_id = %project_id, "Updating project");
    let taken = store_update(&data, &project_id, update)
        .await
        .map_err(|e| {
            error!(error = %e, project_id = %project_id, "Failed to update project");
            e
        })?;

    Ok(HttpResponse::Ok().json(Project::from(taken)))
}

async fn store_update(
    data: &AppState,
    project_id: &ProjectId,
    update: AssessmentTakenUpdate,
) -> AppResult<AssessmentTaken> {
    let bank = data.bank.get_or_create_bank().await?;
    Ok(data
        .bank
        .update_assessment_taken(&bank.id, project_id.as_str(), update)
        .await?)
}

#[post("/project/{project_id}/remixes")]
pub async fn remix_project(
    path: web::Path<String>,
    payload: web::Json<RemixProjectRequest>,
    req: HttpRequest,
    data: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let source = ProjectId::from_path(&path.into_inner());
    let user_id = resolve_user_id(&req, &data.identity)?;

    let taken = store_remix(&data, &source, user_id, payload.into_inner())
        .await
        .map_err(|e| {
            error!(error = %e, project_id = %source, "Failed to remix project");
            e
        })?;

    Ok(HttpResponse::Ok().json(Project::from(taken)))
}

async fn store_remix(
    data: &AppState,
    source: &ProjectId,
    user_id: String,
    payload: RemixProjectRequest,
) -> AppResult<AssessmentTaken> {
    let bank = data.bank.get_or_create_bank().await?;
    let offered = data.bank.get_or_create_assessment_offered(&bank.id).await?;

    let original = if payload.needs_original() {
        debug!(project_id = %source, "Fetching original project for remix defaults");
        Some(
            data.bank
                .get_assessment_taken(&bank.id, source.as_str())
                .await?,
        )
    } else {
        None
    };

    let form = payload.into_form(user_id, source, original.as_ref());
    info!(
        project_id = %source,
        user_id = %form.user_id,
        title = %form.title,
        "Remixing project"
    );

    Ok(data
        .bank
        .create_assessment_taken(&bank.id, &offered.id, form)
        .await?)
}

#[post("/projects")]
pub async fn create_project(
    payload: web::Json<CreateProjectRequest>,
    req: HttpRequest,
    data: web::Data<AppState>,
) -> AppResult<HttpResponse> {
    let user_id = resolve_user_id(&req, &data.identity)?;
    let form = payload.into_inner().into_form(user_id);
    info!(user_id = %form.user_id, title = %form.title, "Creating project");

    let user_id = form.user_id.clone();
    let taken = store_new(&data, form).await.map_err(|e| {
        error!(error = %e, user_id = %user_id, "Failed to create project");
        e
    })?;

    Ok(HttpResponse::Ok().json(Project::from(taken)))
}

async fn store_new(data: &AppState, form: NewAssessmentTaken) -> AppResult<AssessmentTaken> {
    let bank = data.bank.get_or_create_bank().await?;
    let offered = data.bank.get_or_create_assessment_offered(&bank.id).await?;

    Ok(data
        .bank
        .create_assessment_taken(&bank.id, &offered.id, form)
        .await?)
}
