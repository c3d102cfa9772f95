use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;
use triagex_core::{
    compute_stats, filter_escalations, rank_similar, Error, EscalationFilter, SimilarityConfig,
};
use triagex_storage::CorpusStore;

#[derive(Debug, Deserialize)]
struct SimilarParams {
    threshold: Option<f64>,
    limit: Option<usize>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(store: Arc<CorpusStore>, port: u16) -> std::io::Result<()> {
        HttpServer::new(move || {
            // The dashboard is served separately, so stay permissive.
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(store.clone()))
                .route("/escalations", web::get().to(list_escalations))
                .route("/escalations/stats", web::get().to(get_stats))
                .route("/escalations/{id}", web::get().to(get_escalation))
                .route("/escalations/{id}/similar", web::get().to(get_similar))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn list_escalations(
    store: web::Data<Arc<CorpusStore>>,
    filter: web::Query<EscalationFilter>,
) -> ActixResult<HttpResponse> {
    let corpus = store.snapshot();
    let filtered = filter_escalations(&corpus, &filter);
    debug!("Filter matched {} of {} escalations", filtered.len(), corpus.len());
    Ok(HttpResponse::Ok().json(filtered))
}

async fn get_stats(store: web::Data<Arc<CorpusStore>>) -> ActixResult<HttpResponse> {
    let corpus = store.snapshot();
    Ok(HttpResponse::Ok().json(compute_stats(&corpus)))
}

async fn get_escalation(
    store: web::Data<Arc<CorpusStore>>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let corpus = store.snapshot();

    if let Some(escalation) = corpus.iter().find(|e| e.id == id) {
        Ok(HttpResponse::Ok().json(escalation))
    } else {
        Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "Escalation not found"
        })))
    }
}

async fn get_similar(
    store: web::Data<Arc<CorpusStore>>,
    path: web::Path<String>,
    params: web::Query<SimilarParams>,
) -> ActixResult<HttpResponse> {
    let id = path.into_inner();
    let corpus = store.snapshot();

    let mut config = SimilarityConfig::default();
    if let Some(threshold) = params.threshold {
        config.threshold = threshold;
    }
    if let Some(limit) = params.limit {
        config.max_results = limit;
    }

    match rank_similar(&corpus, &id, &config) {
        Ok(results) => Ok(HttpResponse::Ok().json(results)),
        Err(e @ Error::NotFound(_)) => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": e.to_string()
        }))),
        Err(e) => Ok(HttpResponse::BadRequest().json(serde_json::json!({
            "error": e.to_string()
        }))),
    }
}
