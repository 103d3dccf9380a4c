use axum::{
    extract::{rejection::{JsonRejection, QueryRejection}, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use models::{Building, BuildingFilters, BuildingInfo};

use crate::{errors::JsonApiError, state::ServerState};

/// Request body for creating a building. Every field is required.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct BuildingInput {
    pub name: String,
    pub city: String,
    pub handover_year: u64,
    pub floors_count: u64,
}

impl BuildingInput {
    pub fn into_info(self) -> Result<BuildingInfo, JsonApiError> {
        if self.name.trim().is_empty() {
            return Err(JsonApiError::bad_request("name must not be empty"));
        }
        if self.city.trim().is_empty() {
            return Err(JsonApiError::bad_request("city must not be empty"));
        }
        Ok(BuildingInfo::new(self.name, self.city, self.handover_year, self.floors_count))
    }
}

/// Raw query string filters; empty values mean "not set".
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FilterQuery {
    /// Exact city name
    pub city: Option<String>,
    /// Exact handover year
    pub handover_year: Option<String>,
    /// Exact number of floors
    pub floors_count: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn parse_u64_filter(name: &str, value: Option<String>) -> Result<Option<u64>, JsonApiError> {
    non_empty(value)
        .map(|v| v.parse::<u64>())
        .transpose()
        .map_err(|_| JsonApiError::bad_request(format!("filter {name} is not uint64 type")))
}

impl FilterQuery {
    pub fn into_filters(self) -> Result<BuildingFilters, JsonApiError> {
        Ok(BuildingFilters::new(
            non_empty(self.city),
            parse_u64_filter("handover_year", self.handover_year)?,
            parse_u64_filter("floors_count", self.floors_count)?,
        ))
    }
}

#[utoipa::path(
    get, path = "/api/v1/buildings", tag = "buildings",
    params(FilterQuery),
    responses(
        (status = 200, description = "Buildings matching every given filter", body = [crate::openapi::BuildingView]),
        (status = 400, description = "Malformed filter"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    query: Result<Query<FilterQuery>, QueryRejection>,
) -> Result<Json<Vec<Building>>, JsonApiError> {
    let Query(query) = query.map_err(|e| JsonApiError::bad_request(e.body_text()))?;
    let filters = query.into_filters()?;
    let buildings = state.buildings.get_all(&state.request_context(), &filters).await?;
    info!(count = buildings.len(), "list buildings");
    Ok(Json(buildings))
}

#[utoipa::path(
    post, path = "/api/v1/buildings", tag = "buildings",
    request_body = BuildingInput,
    responses(
        (status = 201, description = "Created", body = crate::openapi::BuildingView),
        (status = 400, description = "Validation Error"),
        (status = 500, description = "Internal error")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    input: Result<Json<BuildingInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Building>), JsonApiError> {
    let Json(input) = input.map_err(|e| JsonApiError::bad_request(e.body_text()))?;
    let info = input.into_info()?;
    let building = state.buildings.create(&state.request_context(), &info).await?;
    Ok((StatusCode::CREATED, Json(building)))
}
