use axum::{routing::get, Router};

use crate::types::app_state::AppState;

mod get_places;
mod get_suggestions;
mod get_weather;

pub fn apply_routes(app: Router<AppState>) -> Router<AppState> {
    app.route("/weather", get(get_weather::get_weather))
        .route("/suggestions", get(get_suggestions::get_suggestions))
        .route("/api/places", get(get_places::get_places))
}
