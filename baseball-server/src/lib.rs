use std::sync::Arc;

use serde::{Deserialize, Serialize};
use warp::Filter;

use crate::auth::TokenService;
use crate::service::{GameService, ServiceError};
use baseball_types::GameSnapshot;

pub mod auth;
pub mod config;
pub mod service;

#[derive(Deserialize)]
struct TokenRequest {
    #[serde(rename = "userId")]
    user_id: String,
}

#[derive(Serialize)]
struct TokenResponse {
    token: String,
}

pub fn create_routes(
    game_service: Arc<GameService>,
    token_service: Arc<TokenService>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    // Clone for filters
    let game_service_filter = warp::any().map({
        let game_service = game_service.clone();
        move || game_service.clone()
    });

    let token_service_filter = warp::any().map({
        let token_service = token_service.clone();
        move || token_service.clone()
    });

    // Health check endpoint
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("OK", warp::http::StatusCode::OK));

    let game_list = warp::path!("games")
        .and(warp::get())
        .and(game_service_filter.clone())
        .and_then(handle_game_list);

    let team_members = warp::path!("teams" / String / "members")
        .and(warp::get())
        .and(game_service_filter.clone())
        .and_then(handle_team_members);

    let game_start = warp::path!("games" / String / "start")
        .and(warp::post())
        .and(warp::header::optional::<String>("authorization"))
        .and(game_service_filter.clone())
        .and(token_service_filter.clone())
        .and_then(handle_game_start);

    let game_pitch = warp::path!("games" / "pitch")
        .and(warp::post())
        .and(warp::body::json())
        .and(warp::header::optional::<String>("authorization"))
        .and(game_service_filter.clone())
        .and(token_service_filter.clone())
        .and_then(handle_game_pitch);

    let score_board = warp::path!("games" / "scores")
        .and(warp::get())
        .and(game_service_filter.clone())
        .and_then(handle_score_board);

    let member_scores = warp::path!("teams" / String / "scores")
        .and(warp::get())
        .and(game_service_filter.clone())
        .and_then(handle_member_scores);

    let issue_token = warp::path!("auth" / "token")
        .and(warp::post())
        .and(warp::body::json())
        .and(token_service_filter.clone())
        .and_then(handle_issue_token);

    // CORS configuration
    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type", "authorization"])
        .allow_methods(vec!["GET", "POST"]);

    health
        .or(game_list)
        .or(score_board)
        .or(game_pitch)
        .or(game_start)
        .or(team_members)
        .or(member_scores)
        .or(issue_token)
        .with(cors)
        .with(warp::log("baseball_server"))
}

fn error_body(message: &str) -> warp::reply::Json {
    warp::reply::json(&serde_json::json!({ "error": message }))
}

fn service_error_reply(err: ServiceError) -> warp::reply::WithStatus<warp::reply::Json> {
    match &err {
        ServiceError::NotFound(_) => warp::reply::with_status(
            error_body(&err.to_string()),
            warp::http::StatusCode::NOT_FOUND,
        ),
        ServiceError::Storage(cause) => {
            tracing::error!("storage failure: {cause:#}");
            warp::reply::with_status(
                error_body("storage failure"),
                warp::http::StatusCode::INTERNAL_SERVER_ERROR,
            )
        }
    }
}

/// Game requests may carry a bearer token; when one is present it must
/// verify. Returns the rejection reply on a bad token.
fn check_bearer(
    auth_header: Option<String>,
    tokens: &TokenService,
) -> Option<warp::reply::WithStatus<warp::reply::Json>> {
    let header = auth_header?;
    let token = header.strip_prefix("Bearer ").unwrap_or(&header);

    match tokens.user_id_from_token(token) {
        Ok(_) => None,
        Err(_) => Some(warp::reply::with_status(
            error_body("invalid authentication token"),
            warp::http::StatusCode::UNAUTHORIZED,
        )),
    }
}

async fn handle_game_list(
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match service.list_games().await {
        Ok(games) => Ok(warp::reply::with_status(
            warp::reply::json(&games),
            warp::http::StatusCode::OK,
        )),
        Err(err) => Ok(service_error_reply(err)),
    }
}

async fn handle_team_members(
    team_name: String,
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match service.list_members(&team_name).await {
        Ok(members) => Ok(warp::reply::with_status(
            warp::reply::json(&members),
            warp::http::StatusCode::OK,
        )),
        Err(err) => Ok(service_error_reply(err)),
    }
}

async fn handle_game_start(
    team_name: String,
    auth_header: Option<String>,
    service: Arc<GameService>,
    tokens: Arc<TokenService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    if let Some(rejection) = check_bearer(auth_header, &tokens) {
        return Ok(rejection);
    }

    match service.start_game(&team_name).await {
        Ok(snapshot) => Ok(warp::reply::with_status(
            warp::reply::json(&snapshot),
            warp::http::StatusCode::OK,
        )),
        Err(err) => Ok(service_error_reply(err)),
    }
}

async fn handle_game_pitch(
    snapshot: GameSnapshot,
    auth_header: Option<String>,
    service: Arc<GameService>,
    tokens: Arc<TokenService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    if let Some(rejection) = check_bearer(auth_header, &tokens) {
        return Ok(rejection);
    }

    let echoed = service.advance_pitch(snapshot);
    Ok(warp::reply::with_status(
        warp::reply::json(&echoed),
        warp::http::StatusCode::OK,
    ))
}

async fn handle_score_board(
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::with_status(
        warp::reply::json(&service.score_board()),
        warp::http::StatusCode::OK,
    ))
}

async fn handle_member_scores(
    team_name: String,
    service: Arc<GameService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    Ok(warp::reply::with_status(
        warp::reply::json(&service.member_scores(&team_name)),
        warp::http::StatusCode::OK,
    ))
}

async fn handle_issue_token(
    request: TokenRequest,
    tokens: Arc<TokenService>,
) -> Result<impl warp::Reply, warp::Rejection> {
    match tokens.create_token(&request.user_id) {
        Ok(token) => Ok(warp::reply::with_status(
            warp::reply::json(&TokenResponse { token }),
            warp::http::StatusCode::OK,
        )),
        Err(err) => Ok(warp::reply::with_status(
            error_body(&err.to_string()),
            warp::http::StatusCode::BAD_REQUEST,
        )),
    }
}

#[cfg(test)]
mod integration_tests {
    use super::*;
    use baseball_persistence::{
        connection::connect_to_memory_database, repositories::GameRepository, seed,
    };
    use baseball_types::{GameSummary, MemberScore, MemberSummary, ScoreBoard};
    use migration::{Migrator, MigratorTrait};

    async fn create_test_app()
    -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        seed::seed_sample_league(&db).await.unwrap();

        let repository = Arc::new(GameRepository::new(db));
        let game_service = Arc::new(GameService::new(repository));
        let token_service = Arc::new(TokenService::new("test-secret"));

        create_routes(game_service, token_service)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/health")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
        assert_eq!(response.body(), "OK");
    }

    #[tokio::test]
    async fn test_game_list() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/games")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);

        let games: Vec<GameSummary> =
            serde_json::from_slice(response.body()).expect("Should parse JSON");

        assert_eq!(games.len(), 2);
        assert_eq!(games[0].home, "Marvel");
        assert_eq!(games[0].away, "Captin");
        assert_eq!(games[1].home, "Twins");
        assert_eq!(games[1].away, "Rockets");
    }

    #[tokio::test]
    async fn test_team_members() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/teams/Marvel/members")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);

        let members: Vec<MemberSummary> =
            serde_json::from_slice(response.body()).expect("Should parse JSON");

        assert_eq!(members.len(), 9);
        assert_eq!(members[0].name, "Tony Parker");
    }

    #[tokio::test]
    async fn test_team_members_unknown_team() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/teams/Nobody/members")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 404);

        let error: serde_json::Value =
            serde_json::from_slice(response.body()).expect("Should parse JSON");
        assert_eq!(error["error"], "team Nobody not found");
    }

    #[tokio::test]
    async fn test_game_start_offense_is_away() {
        let app = create_test_app().await;

        // Starting as the home side still puts the away side on offense
        let response = warp::test::request()
            .method("POST")
            .path("/games/Marvel/start")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);

        let snapshot: serde_json::Value =
            serde_json::from_slice(response.body()).expect("Should parse JSON");

        assert_eq!(snapshot["playTeam"], "Marvel");
        assert_eq!(snapshot["offenceTeam"]["teamName"], "Captin");
        assert_eq!(snapshot["defenseTeam"]["teamName"], "Marvel");
        assert_eq!(snapshot["offenceTeam"]["hitter"]["name"], "Dan Harmon");
        assert_eq!(snapshot["defenseTeam"]["pitcher"]["name"], "Tony Parker");
        assert_eq!(snapshot["roundInfo"]["round"], 1);
        assert_eq!(snapshot["roundInfo"]["firstBase"], false);
    }

    #[tokio::test]
    async fn test_game_start_unknown_team() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("POST")
            .path("/games/Nobody/start")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 404);
    }

    #[tokio::test]
    async fn test_game_start_with_issued_token() {
        let app = create_test_app().await;

        let token_response = warp::test::request()
            .method("POST")
            .path("/auth/token")
            .json(&serde_json::json!({ "userId": "user-1" }))
            .reply(&app)
            .await;

        assert_eq!(token_response.status(), 200);
        let body: serde_json::Value =
            serde_json::from_slice(token_response.body()).expect("Should parse JSON");
        let token = body["token"].as_str().expect("Should contain a token");

        let response = warp::test::request()
            .method("POST")
            .path("/games/Captin/start")
            .header("authorization", format!("Bearer {token}"))
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);
    }

    #[tokio::test]
    async fn test_game_start_with_invalid_token() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("POST")
            .path("/games/Captin/start")
            .header("authorization", "Bearer garbage")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 401);

        let error: serde_json::Value =
            serde_json::from_slice(response.body()).expect("Should parse JSON");
        assert_eq!(error["error"], "invalid authentication token");
    }

    #[tokio::test]
    async fn test_pitch_echoes_submitted_state() {
        let app = create_test_app().await;

        let start_response = warp::test::request()
            .method("POST")
            .path("/games/Rockets/start")
            .reply(&app)
            .await;
        assert_eq!(start_response.status(), 200);

        let snapshot: serde_json::Value =
            serde_json::from_slice(start_response.body()).expect("Should parse JSON");

        let pitch_response = warp::test::request()
            .method("POST")
            .path("/games/pitch")
            .json(&snapshot)
            .reply(&app)
            .await;

        assert_eq!(pitch_response.status(), 200);

        let echoed: serde_json::Value =
            serde_json::from_slice(pitch_response.body()).expect("Should parse JSON");
        assert_eq!(echoed, snapshot);
    }

    #[tokio::test]
    async fn test_score_board_sample() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/games/scores")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);

        let board: ScoreBoard =
            serde_json::from_slice(response.body()).expect("Should parse JSON");

        assert_eq!(board.home_team.team_name, "Marvel");
        assert_eq!(board.home_team.scores, vec![1, 2, 2]);
        assert_eq!(board.away_team.team_name, "Captin");
        assert_eq!(board.away_team.scores, vec![1, 0, 0, 0]);
    }

    #[tokio::test]
    async fn test_member_scores_sample() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/teams/Marvel/scores")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 200);

        let scores: Vec<MemberScore> =
            serde_json::from_slice(response.body()).expect("Should parse JSON");

        assert_eq!(scores.len(), 9);
        assert_eq!(scores[0].name, "김광진");
        assert_eq!(scores[0].tpa, 1);
    }

    #[tokio::test]
    async fn test_issue_token_rejects_empty_user_id() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("POST")
            .path("/auth/token")
            .json(&serde_json::json!({ "userId": "" }))
            .reply(&app)
            .await;

        assert_eq!(response.status(), 400);
    }

    #[tokio::test]
    async fn test_invalid_routes() {
        let app = create_test_app().await;

        let response = warp::test::request()
            .method("GET")
            .path("/invalid")
            .reply(&app)
            .await;

        assert_eq!(response.status(), 404);
    }
}
