//! Single binary web server: club pages rendered from the JSON documents in DATA_DIR.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default so the site is reachable via DNS on a VPS.
//! Override with env: HOST, PORT, DATA_DIR, CLUB_NAME, CLUB_MATCH.

use actix_files::Files;
use actix_web::{
    get,
    web::{Data, Path},
    App, HttpResponse, HttpServer, Responder,
};
use club_site_web::logic::{clean_sheets, newest_first, place_match};
use club_site_web::render::{self, home, results, table};
use club_site_web::{ClubInfo, DataStore, Settings};
use serde::Deserialize;

/// Shared, read-only per-process context. Documents are re-read on every request.
struct Site {
    store: DataStore,
    club: ClubInfo,
}

type AppState = Data<Site>;

#[derive(serde::Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Path segment: match index in newest-first order (e.g. /api/matches/{index}/lineup)
#[derive(Deserialize)]
struct MatchPath {
    index: usize,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "club-site-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for the site.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

/// Home page: recent results, team stats and key players. Both documents are fetched independently.
#[get("/")]
async fn index(state: AppState) -> HttpResponse {
    let (matches, roster) = tokio::join!(state.store.load_matches(), state.store.load_roster());
    let matches = matches
        .map_err(|e| log::error!("Error loading matches data: {}", e))
        .ok();
    let roster = roster
        .map_err(|e| log::error!("Error loading key players data: {}", e))
        .ok();
    let body = home::home_body(&state.club, matches.as_ref(), roster.as_ref());
    html(render::page("Home", &state.club, &body))
}

/// Full results with lineups; an inline error notice when the match document is unavailable.
#[get("/results")]
async fn results_page(state: AppState) -> HttpResponse {
    let body = match state.store.load_matches().await {
        Ok(collection) => results::matches_section(&state.club, &collection.matches),
        Err(e) => {
            log::error!("Error loading match data: {}", e);
            results::load_error_section()
        }
    };
    html(render::page("Results", &state.club, &body))
}

/// League table; the match document only contributes the clean-sheet count.
#[get("/table")]
async fn table_page(state: AppState) -> HttpResponse {
    let (standings, matches) =
        tokio::join!(state.store.load_standings(), state.store.load_matches());
    let standings = match standings {
        Ok(s) => {
            log::info!("League data loaded: {} teams", s.teams.len());
            Some(s)
        }
        Err(e) => {
            log::error!("Error loading league data: {}", e);
            None
        }
    };
    let sheets = matches.map(|m| clean_sheets(&m.matches)).unwrap_or(0);
    let body = table::table_body(&state.club, standings.as_ref(), sheets);
    html(render::page("League Table", &state.club, &body))
}

/// Lineup placement for one match (newest first), as consumed by the results page.
#[get("/api/matches/{index}/lineup")]
async fn api_match_lineup(state: AppState, path: Path<MatchPath>) -> HttpResponse {
    let collection = match state.store.load_matches().await {
        Ok(c) => c,
        Err(e) => {
            log::error!("Error loading match data: {}", e);
            return HttpResponse::ServiceUnavailable()
                .json(serde_json::json!({ "error": results::LOAD_ERROR }));
        }
    };
    match newest_first(&collection.matches).get(path.index) {
        Some(game) => HttpResponse::Ok().json(place_match(game)),
        None => HttpResponse::NotFound().json(serde_json::json!({ "error": "No such match" })),
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let settings = Settings::from_env();
    let bind = (settings.host.as_str(), settings.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let data_dir = settings.data_dir.clone();
    let state = Data::new(Site {
        store: DataStore::new(settings.data_dir.clone()),
        club: settings.club.clone(),
    });
    log::info!("Serving documents from {}", state.store.dir().display());

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(index)
            .service(results_page)
            .service(table_page)
            .service(api_health)
            .service(api_match_lineup)
            .service(favicon)
            .service(Files::new("/data", data_dir.clone()))
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}
