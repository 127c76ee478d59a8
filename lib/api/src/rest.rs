use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer};
use addiscreen_core::{FeatureVector, LabeledDataset};
use addiscreen_dataset::normalize_answer;
use addiscreen_similarity::{predict, ClassificationResult, KeywordSentiment};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::chatbot::{Reply, SequencerConfig, SessionStore};
use crate::error::ApiError;

const WELCOME: &str = "Welcome to the screening. Please answer 'Yes' or 'No' to the following questions. Your answers are private. Let's start.";
const REASK: &str = "I didn't understand that. Please answer clearly 'Yes' or 'No'.";
const NOT_STARTED: &str = "Please start the assessment first by calling the /start-assessment endpoint.";

/// Where the HTTP server listens
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

/// Shared, per-process state handed to every handler
pub struct AppState {
    dataset: Arc<LabeledDataset>,
    sentiment: KeywordSentiment,
    sessions: SessionStore,
}

impl AppState {
    pub fn new(dataset: Arc<LabeledDataset>) -> Self {
        Self::with_sequencer(dataset, SequencerConfig::default())
    }

    pub fn with_sequencer(dataset: Arc<LabeledDataset>, sequencer: SequencerConfig) -> Self {
        Self {
            dataset,
            sentiment: KeywordSentiment::default(),
            sessions: SessionStore::new(sequencer),
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }
}

#[derive(Deserialize)]
struct AnswerRequest {
    #[serde(default)]
    message: String,
    session_id: Option<String>,
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    #[serde(default)]
    responses: Vec<String>,
}

#[derive(Deserialize)]
struct PredictRequest {
    #[serde(default)]
    answers: BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct SentimentRequest {
    #[serde(default)]
    text: String,
}

#[derive(Serialize)]
struct FeatureInfo<'a> {
    name: &'a str,
    label: String,
}

#[derive(Serialize)]
struct FeatureValue<'a> {
    name: &'a str,
    value: f64,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(state: Arc<AppState>, config: ServerConfig) -> std::io::Result<()> {
        let data = web::Data::from(state);

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(data.clone())
                .configure(Self::configure)
        })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
    }

    /// Register all routes; shared by the server and handler tests
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.route("/start-assessment", web::get().to(start_assessment))
            .route("/get-response", web::post().to(get_response))
            .route("/analyze", web::post().to(analyze))
            .route("/predict", web::post().to(predict_answers))
            .route("/features", web::get().to(list_features))
            .route("/sentiment", web::post().to(sentiment));
    }
}

fn render_reply(reply: Reply, session_id: Option<Uuid>, greeting: bool) -> HttpResponse {
    match reply {
        Reply::Question { number, text } => {
            let question = format!("**Question {}:** {}", number, text);
            let response = if greeting {
                format!("{} \n\n{}", WELCOME, question)
            } else {
                question
            };
            HttpResponse::Ok().json(serde_json::json!({
                "response": response,
                "status": "in_progress",
                "question_number": number,
                "session_id": session_id,
            }))
        }
        Reply::Reask { number, text } => HttpResponse::Ok().json(serde_json::json!({
            "response": format!("{}\n\n**Question {}:** {}", REASK, number, text),
            "status": "in_progress",
            "question_number": number,
            "session_id": session_id,
        })),
        Reply::Complete { score, total, category, conclusion } => HttpResponse::Ok().json(serde_json::json!({
            "response": format!("Assessment complete! Thank you for your honest answers. \n\n**RESULT:** {}", conclusion),
            "status": "complete",
            "score": score,
            "total": total,
            "category": category.as_str(),
        })),
        Reply::NotStarted => HttpResponse::Ok().json(serde_json::json!({
            "response": NOT_STARTED,
            "status": "ready_to_start",
        })),
    }
}

fn render_classification(result: &ClassificationResult) -> serde_json::Value {
    serde_json::json!({
        "predicted_class": result.predicted_label,
        "addiction_percent": result.percent,
        "similarity": result.similarity,
    })
}

async fn start_assessment(state: web::Data<AppState>) -> HttpResponse {
    let (id, reply) = state.sessions.start();
    render_reply(reply, Some(id), true)
}

async fn get_response(
    state: web::Data<AppState>,
    req: web::Json<AnswerRequest>,
) -> HttpResponse {
    let session_id = req
        .session_id
        .as_deref()
        .and_then(|id| Uuid::parse_str(id).ok());

    let reply = match session_id {
        Some(id) => state.sessions.answer(&id, &req.message),
        None => Reply::NotStarted,
    };
    render_reply(reply, session_id, false)
}

async fn analyze(
    state: web::Data<AppState>,
    req: web::Json<AnalyzeRequest>,
) -> Result<HttpResponse, ApiError> {
    let features = state.dataset.features();
    if req.responses.len() > features.len() {
        return Err(ApiError::BadRequest(format!(
            "Too many responses: got {}, dataset has {} feature columns",
            req.responses.len(),
            features.len()
        )));
    }

    let sentiments = state.sentiment.predict_many(&req.responses);

    // Bind each response to its feature by name; the rest stay 0
    let named = features
        .names()
        .iter()
        .zip(sentiments.iter())
        .map(|(name, s)| (name.as_str(), s.as_feature()));
    let query = FeatureVector::from_named(features.clone(), named)?;

    let result = predict(&query, &state.dataset)?;
    debug!(
        "Analyze: {} responses -> {} ({:.1}%)",
        sentiments.len(),
        result.predicted_label,
        result.percent
    );

    // Column order, not name order
    let feature_values: Vec<FeatureValue> = query
        .named()
        .map(|(name, value)| FeatureValue { name, value })
        .collect();
    let mut body = render_classification(&result);
    body["sentiments"] = serde_json::json!(sentiments);
    body["features"] = serde_json::json!(feature_values);

    Ok(HttpResponse::Ok().json(body))
}

async fn predict_answers(
    state: web::Data<AppState>,
    req: web::Json<PredictRequest>,
) -> Result<HttpResponse, ApiError> {
    let mut values = Vec::with_capacity(req.answers.len());
    for (name, answer) in &req.answers {
        let flag = normalize_answer(answer).ok_or_else(|| {
            ApiError::BadRequest(format!("Invalid answer for {}: expected 'Yes' or 'No'", name))
        })?;
        values.push((name.as_str(), f64::from(flag)));
    }

    let query = FeatureVector::from_named(state.dataset.features().clone(), values)?;
    let result = predict(&query, &state.dataset)?;
    debug!("Predict: {} answers -> {}", req.answers.len(), result);

    Ok(HttpResponse::Ok().json(render_classification(&result)))
}

async fn list_features(state: web::Data<AppState>) -> HttpResponse {
    let features: Vec<FeatureInfo> = state
        .dataset
        .features()
        .labels()
        .map(|(name, label)| FeatureInfo { name, label })
        .collect();
    HttpResponse::Ok().json(serde_json::json!({ "features": features }))
}

async fn sentiment(
    state: web::Data<AppState>,
    req: web::Json<SentimentRequest>,
) -> HttpResponse {
    let sentiment = state.sentiment.predict_text(&req.text);
    HttpResponse::Ok().json(serde_json::json!({
        "sentiment": sentiment,
        "label": sentiment.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test;
    use addiscreen_dataset::DatasetLoader;
    use serde_json::{json, Value};

    const DATASET: &str = "\
Experimentation,Academic_Performance_Decline,Social_Isolation,Addiction_Class
Yes,Yes,No,Yes
Yes,No,No,Yes
No,No,No,No
No,No,Yes,No
";

    fn state() -> web::Data<AppState> {
        let dataset = DatasetLoader::default().load_reader(DATASET.as_bytes()).unwrap();
        web::Data::new(AppState::new(Arc::new(dataset)))
    }

    macro_rules! app {
        ($state:expr) => {
            test::init_service(App::new().app_data($state.clone()).configure(RestApi::configure)).await
        };
    }

    #[actix_web::test]
    async fn test_start_and_answer_flow() {
        let state = state();
        let app = app!(state);

        let req = test::TestRequest::get().uri("/start-assessment").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "in_progress");
        assert_eq!(body["question_number"], 1);
        assert!(body["response"].as_str().unwrap().starts_with("Welcome to the screening."));
        let session_id = body["session_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::post()
            .uri("/get-response")
            .set_json(json!({ "message": "Yes", "session_id": session_id }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["question_number"], 2);
        assert_eq!(
            body["response"],
            format!("**Question 2:** {}", crate::chatbot::QUESTIONS[1])
        );

        let req = test::TestRequest::post()
            .uri("/get-response")
            .set_json(json!({ "message": "hmm", "session_id": session_id }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["question_number"], 2);
        assert!(body["response"].as_str().unwrap().starts_with(REASK));
    }

    #[actix_web::test]
    async fn test_full_run_completes_and_resets() {
        let state = state();
        let app = app!(state);
        let (id, _) = state.sessions().start();

        let mut last = Value::Null;
        for _ in 0..crate::chatbot::QUESTIONS.len() {
            let req = test::TestRequest::post()
                .uri("/get-response")
                .set_json(json!({ "message": "yes", "session_id": id.to_string() }))
                .to_request();
            last = test::call_and_read_body_json(&app, req).await;
        }
        assert_eq!(last["status"], "complete");
        assert_eq!(last["score"], 14);
        assert_eq!(last["category"], "ADDICTION_CONCERN");
        assert_eq!(state.sessions().active_sessions(), 0);

        let req = test::TestRequest::post()
            .uri("/get-response")
            .set_json(json!({ "message": "yes", "session_id": id.to_string() }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ready_to_start");
    }

    #[actix_web::test]
    async fn test_missing_session_is_ready_to_start() {
        let state = state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/get-response")
            .set_json(json!({ "message": "yes" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ready_to_start");
        assert_eq!(body["response"], NOT_STARTED);
    }

    #[actix_web::test]
    async fn test_analyze_binds_responses_by_name() {
        let state = state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/analyze")
            .set_json(json!({ "responses": ["I feel good", "I love great days"] }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["sentiments"], json!([1, 1]));
        assert_eq!(
            body["features"],
            json!([
                { "name": "Experimentation", "value": 1.0 },
                { "name": "Academic_Performance_Decline", "value": 1.0 },
                { "name": "Social_Isolation", "value": 0.0 },
            ])
        );
        assert_eq!(body["predicted_class"], "Addicted");
        let percent = body["addiction_percent"].as_f64().unwrap();
        assert!((percent - 83.333).abs() < 0.01);
    }

    #[actix_web::test]
    async fn test_analyze_rejects_extra_responses() {
        let state = state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/analyze")
            .set_json(json!({ "responses": ["a", "b", "c", "d"] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_predict_from_answers() {
        let state = state();
        let app = app!(state);

        let req = test::TestRequest::post()
            .uri("/predict")
            .set_json(json!({ "answers": {
                "Experimentation": "No",
                "Academic_Performance_Decline": " no ",
                "Social_Isolation": "YES"
            }}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["predicted_class"], "Not Addicted");
        assert!(body["similarity"]["not_addicted"].as_f64().unwrap() > 0.5);

        let req = test::TestRequest::post()
            .uri("/predict")
            .set_json(json!({ "answers": { "Experimentation": "maybe" } }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);

        let req = test::TestRequest::post()
            .uri("/predict")
            .set_json(json!({ "answers": { "Unknown_Column": "yes" } }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_features_and_sentiment() {
        let state = state();
        let app = app!(state);

        let req = test::TestRequest::get().uri("/features").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["features"][1]["name"], "Academic_Performance_Decline");
        assert_eq!(body["features"][1]["label"], "Academic Performance Decline");

        let req = test::TestRequest::post()
            .uri("/sentiment")
            .set_json(json!({ "text": "This is terrible and awful" }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["sentiment"], 0);
        assert_eq!(body["label"], "BAD");
    }
}
