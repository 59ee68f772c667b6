mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};

use crate::server::handlers::{
    activity, bookings, distances, previews, quotes, rentals, settlements, validations,
};
use crate::simulation::BoardHandle;
use crate::{api::API, auth::User};

type DynAPI = Arc<dyn API + Send + Sync>;

pub async fn serve<T: API + Sync + Send + 'static>(api: T, board: BoardHandle, addr: SocketAddr) {
    let api = Arc::new(api) as DynAPI;

    let app = Router::new()
        .route("/previews", post(previews::create))
        .route("/quotes", post(quotes::create))
        .route("/validations", post(validations::create))
        .route("/bookings", post(bookings::create))
        .route("/bookings/last", get(bookings::last))
        .route("/rentals", post(rentals::create))
        .route("/rentals/estimates", post(rentals::estimate))
        .route("/settlements", post(settlements::create))
        .route("/distances", get(distances::find))
        .route("/activity", get(activity::find))
        .layer(Extension(api))
        .layer(Extension(User::new_system_user()))
        .layer(Extension(board));

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
