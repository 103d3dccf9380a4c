use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// JSON view of a stored building.
#[derive(ToSchema)]
pub struct BuildingView {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub handover_year: u64,
    pub floors_count: u64,
}

#[derive(ToSchema)]
pub struct ErrorResponse { pub error: String }

#[derive(OpenApi)]
#[openapi(
    info(title = "Building Catalog", description = "Create and filter buildings"),
    paths(
        crate::routes::health,
        crate::routes::buildings::list,
        crate::routes::buildings::create,
    ),
    components(
        schemas(
            HealthResponse,
            BuildingView,
            ErrorResponse,
            crate::routes::buildings::BuildingInput,
        )
    ),
    tags(
        (name = "health"),
        (name = "buildings")
    )
)]
pub struct ApiDoc;
