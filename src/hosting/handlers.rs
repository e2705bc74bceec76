use super::*;
use crate::Error;
use actix_web::HttpRequest;
use actix_web::HttpResponse;
use actix_web::Responder;
use actix_web::error::InternalError;
use actix_web::error::JsonPayloadError;
use actix_web::web;

pub async fn start(arena: web::Data<Arena>, req: web::Json<StartRequest>) -> impl Responder {
    match arena.start(&req).await {
        Ok(state) => HttpResponse::Ok().json(state),
        Err(e) => reject(&e),
    }
}
pub async fn play_round(arena: web::Data<Arena>, req: web::Json<PlayRoundRequest>) -> impl Responder {
    match arena.play_round(&req).await {
        Ok(round) => HttpResponse::Ok().json(round),
        Err(e) => reject(&e),
    }
}
pub async fn state(arena: web::Data<Arena>) -> impl Responder {
    HttpResponse::Ok().json(arena.state().await)
}
pub async fn register(arena: web::Data<Arena>, req: web::Json<RegisterRequest>) -> impl Responder {
    match arena.register(&req).await {
        Ok(player) => HttpResponse::Ok().json(player),
        Err(e) => reject(&e),
    }
}
pub async fn leaderboard(arena: web::Data<Arena>) -> impl Responder {
    HttpResponse::Ok().json(arena.leaderboard().await)
}
pub async fn health() -> impl Responder {
    HttpResponse::Ok().body("ok")
}

/// Map a domain error onto its status code and the JSON error envelope.
fn reject(e: &Error) -> HttpResponse {
    log::debug!("rejected: {}", e);
    let mut response = match e {
        Error::InvalidPlayerName(_) | Error::InvalidMove(_) => HttpResponse::BadRequest(),
        Error::NoActiveMatch | Error::MatchAlreadyComplete => HttpResponse::Conflict(),
    };
    response.json(ErrorResponse::from(e))
}

/// Malformed bodies get the same envelope as domain errors.
pub fn malformed(err: JsonPayloadError, _: &HttpRequest) -> actix_web::Error {
    let body = HttpResponse::BadRequest().json(serde_json::json!({
        "ok": false,
        "error": err.to_string(),
        "kind": "MalformedRequest",
    }));
    InternalError::from_response(err, body).into()
}
