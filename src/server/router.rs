use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{auth, report, user, water, BEARER_SECURITY},
    state::AppState,
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Hydration Tracker API", description = "Water intake logging and reports"),
    modifiers(&BearerSecurity)
)]
struct ApiDoc;

/// Registers the bearer token scheme referenced by authenticated endpoints.
struct BearerSecurity;

impl Modify for BearerSecurity {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            BEARER_SECURITY,
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

/// Builds the API router with Swagger UI served at `/api/docs`.
pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(auth::register))
        .routes(routes!(auth::login))
        .routes(routes!(user::get_profile))
        .routes(routes!(user::update_goal))
        .routes(routes!(user::get_leaderboard))
        .routes(routes!(water::add_water))
        .routes(routes!(water::get_history))
        .routes(routes!(water::delete_water))
        .routes(routes!(report::get_daily_report))
        .routes(routes!(report::get_weekly_report))
        .routes(routes!(report::get_monthly_report))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", api))
}
