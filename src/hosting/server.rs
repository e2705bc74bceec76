use super::*;
use actix_cors::Cors;
use actix_web::App;
use actix_web::HttpServer;
use actix_web::middleware::Logger;
use actix_web::web;

pub struct Server;

impl Server {
    pub async fn run(config: Config) -> Result<(), std::io::Error> {
        let arena = web::Data::new(Arena::default());
        log::info!("starting hosting server on {}", config.bind);
        HttpServer::new(move || {
            App::new()
                .wrap(Logger::new("%r %s %Ts"))
                .wrap(
                    Cors::default()
                        .allow_any_origin()
                        .allow_any_method()
                        .allow_any_header(),
                )
                .app_data(arena.clone())
                .configure(routes)
        })
        .workers(config.workers)
        .bind(config.bind)?
        .run()
        .await
    }
}

#[rustfmt::skip]
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(malformed))
        .route("/health", web::get().to(health))
        .service(
            web::scope("/api")
                .route("/game/start",      web::post().to(start))
                .route("/game/play_round", web::post().to(play_round))
                .route("/game/state",      web::get().to(state))
                .route("/player/register", web::post().to(register))
                .route("/leaderboard",     web::get().to(leaderboard)),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MAX_ROUNDS;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use serde_json::Value;
    use serde_json::json;

    macro_rules! app {
        () => {
            test::init_service(
                App::new()
                    .app_data(web::Data::new(Arena::default()))
                    .configure(routes),
            )
            .await
        };
    }

    macro_rules! post {
        ($app:expr, $uri:expr, $body:expr) => {{
            let req = test::TestRequest::post().uri($uri).set_json($body).to_request();
            let res = test::call_service(&$app, req).await;
            let status = res.status();
            (status, test::read_body_json::<Value, _>(res).await)
        }};
    }

    macro_rules! get {
        ($app:expr, $uri:expr) => {{
            let req = test::TestRequest::get().uri($uri).to_request();
            let res = test::call_service(&$app, req).await;
            let status = res.status();
            (status, test::read_body_json::<Value, _>(res).await)
        }};
    }

    #[actix_web::test]
    async fn full_match_over_http() {
        let app = app!();
        let (status, body) = post!(app, "/api/game/start", json!({"p1": "Alice", "p2": "Bob"}));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["p1"], "Alice");
        assert_eq!(body["state"]["round"], 0);
        assert_eq!(body["state"]["active"], true);
        for i in 1..=MAX_ROUNDS {
            let (status, body) = post!(app, "/api/game/play_round", json!({"p1_move": "Rock", "p2_move": "scissors"}));
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["round"]["rounds_played"], i);
            assert_eq!(body["round"]["p1_move"], "rock");
            assert_eq!(body["round"]["round_winner"], "Alice");
            assert_eq!(body.get("leaderboard").is_some(), i == MAX_ROUNDS);
        }
        let (status, body) = get!(app, "/api/game/state");
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["winner"], "Alice");
        assert_eq!(body["state"]["locked_winner_as_p1"], true);
        let (status, body) = post!(app, "/api/game/play_round", json!({"p1_move": "rock", "p2_move": "rock"}));
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["kind"], "MatchAlreadyComplete");
        let (_, body) = get!(app, "/api/leaderboard");
        assert_eq!(body["scoring"], "match_wins");
        assert_eq!(body["leaderboard"], json!([
            {"name": "Alice", "score": 1, "wins": 1, "losses": 0, "ties": 0, "played": 1},
            {"name": "Bob",   "score": 0, "wins": 0, "losses": 1, "ties": 0, "played": 1},
        ]));
        let (_, body) = post!(app, "/api/game/start", json!({"p1": "Mallory", "p2": "Carol"}));
        assert_eq!(body["state"]["p1"], "Alice");
        assert_eq!(body["state"]["p2"], "Carol");
    }

    #[actix_web::test]
    async fn errors_use_envelope() {
        let app = app!();
        let (status, body) = post!(app, "/api/game/play_round", json!({"p1_move": "rock", "p2_move": "rock"}));
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["ok"], false);
        assert_eq!(body["kind"], "NoActiveMatch");
        let (status, body) = post!(app, "/api/game/start", json!({"p1": "Alice"}));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "InvalidPlayerName");
        post!(app, "/api/game/start", json!({"p1": "Alice", "p2": "Bob"}));
        let (status, body) = post!(app, "/api/game/play_round", json!({"p1_move": "rock", "p2_move": "lizard"}));
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["kind"], "InvalidMove");
        let (_, body) = get!(app, "/api/game/state");
        assert_eq!(body["state"]["round"], 0);
    }

    #[actix_web::test]
    async fn malformed_json_rejected() {
        let app = app!();
        let req = test::TestRequest::post()
            .uri("/api/game/start")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        let body = test::read_body_json::<Value, _>(res).await;
        assert_eq!(body["ok"], false);
    }

    #[actix_web::test]
    async fn register_then_list() {
        let app = app!();
        let (status, body) = post!(app, "/api/player/register", json!({"name": "  Zoe  "}));
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["player"]["name"], "Zoe");
        assert_eq!(body["player"]["score"], 0);
        post!(app, "/api/player/register", json!({"name": "Adam"}));
        post!(app, "/api/player/register", json!({"name": "Zoe"}));
        let (_, body) = get!(app, "/api/leaderboard");
        let names = body["leaderboard"]
            .as_array()
            .unwrap()
            .iter()
            .map(|row| row["name"].as_str().unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(names, vec!["Adam", "Zoe"]);
    }

    #[actix_web::test]
    async fn health_ok() {
        let app = app!();
        let req = test::TestRequest::get().uri("/health").to_request();
        let res = test::call_service(&app, req).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(test::read_body(res).await, "ok");
    }
}
