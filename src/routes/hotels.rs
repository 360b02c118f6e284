use actix_web::{web, HttpResponse, Responder};

use crate::routes::upstream_error_response;
use crate::services::upstream_client::{HotelSearchParams, UpstreamClient};

/*
    /api/hotels?destination&checkInDate&checkOutDate&adults&currency&key
*/
pub async fn search_hotels(
    client: web::Data<UpstreamClient>,
    params: web::Query<HotelSearchParams>,
) -> impl Responder {
    match client.search_hotels(&params).await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(err) => upstream_error_response("hotels", &err),
    }
}
