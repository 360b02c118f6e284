use actix_web::{web, HttpResponse, Responder};

use crate::routes::upstream_error_response;
use crate::services::upstream_client::{FlightSearchParams, UpstreamClient};

/*
    /api/flights?origin&destination&date&return&currency&key
*/
pub async fn search_flights(
    client: web::Data<UpstreamClient>,
    params: web::Query<FlightSearchParams>,
) -> impl Responder {
    match client.search_flights(&params).await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(err) => upstream_error_response("flights", &err),
    }
}
