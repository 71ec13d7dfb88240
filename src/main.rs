use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use donor_screen::config::AppConfig;
use donor_screen::error::AppError;
use donor_screen::screening::{
    screening_router, DonorAnswers, EligibilityEvaluator, EligibilityVerdict, Sex,
};
use donor_screen::telemetry;
use metrics_exporter_prometheus::PrometheusHandle;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
}

#[derive(Parser, Debug)]
#[command(
    name = "Donor Screening Service",
    about = "Run the donor eligibility screening service or check a questionnaire from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate one eligibility questionnaire and print the verdict
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Args, Debug, Default)]
struct CheckArgs {
    /// Age in years
    #[arg(long, default_value = "")]
    age: String,
    /// Weight in kilograms
    #[arg(long, default_value = "")]
    weight: String,
    /// Donor sex: male or female
    #[arg(long, default_value = "male", value_parser = parse_sex)]
    sex: Sex,
    /// Hemoglobin in g/dL
    #[arg(long, default_value = "")]
    hemoglobin: String,
    /// Systolic blood pressure in mmHg
    #[arg(long, default_value = "")]
    systolic: String,
    /// Diastolic blood pressure in mmHg
    #[arg(long, default_value = "")]
    diastolic: String,
    /// Pulse rate in beats per minute
    #[arg(long, default_value = "")]
    pulse: String,
    /// In good general health? yes/no
    #[arg(long, default_value = "yes")]
    general_health: String,
    /// Significant medical history? yes/no
    #[arg(long, default_value = "no")]
    medical_history: String,
    /// Currently taking medications? yes/no
    #[arg(long, default_value = "no")]
    medications: String,
    /// Recent travel to a high-risk area? yes/no
    #[arg(long, default_value = "no")]
    travel_history: String,
    /// Tattoo or piercing in the last 12 months? yes/no
    #[arg(long, default_value = "no")]
    tattoos_piercings: String,
    /// Currently pregnant? yes/no (only consulted for female donors)
    #[arg(long, default_value = "no")]
    pregnancy: String,
    /// Donated blood in the last 8 weeks? yes/no
    #[arg(long, default_value = "no")]
    recent_donation: String,
    /// Recent illness or infection? yes/no
    #[arg(long, default_value = "no")]
    recent_illness: String,
    /// High-risk behaviors? yes/no
    #[arg(long, default_value = "no")]
    lifestyle: String,
}

fn parse_sex(raw: &str) -> Result<Sex, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "male" => Ok(Sex::Male),
        "female" => Ok(Sex::Female),
        other => Err(format!("expected 'male' or 'female', got '{other}'")),
    }
}

impl From<CheckArgs> for DonorAnswers {
    fn from(args: CheckArgs) -> Self {
        Self {
            age: args.age,
            weight: args.weight,
            sex: args.sex,
            hemoglobin: args.hemoglobin,
            systolic: args.systolic,
            diastolic: args.diastolic,
            pulse: args.pulse,
            general_health: args.general_health,
            medical_history: args.medical_history,
            medications: args.medications,
            travel_history: args.travel_history,
            tattoos_piercings: args.tattoos_piercings,
            pregnancy: args.pregnancy,
            recent_donation: args.recent_donation,
            recent_illness: args.recent_illness,
            lifestyle: args.lifestyle,
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Check(args) => run_check(args),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
    };

    let evaluator = Arc::new(EligibilityEvaluator::new(config.criteria.clone()));

    let app = Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
        .merge(screening_router(evaluator))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "donor screening service ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_check(args: CheckArgs) -> Result<(), AppError> {
    // Same threshold overrides as the server, so a CLI check mirrors what
    // the deployment would answer.
    let config = AppConfig::load()?;
    let evaluator = EligibilityEvaluator::new(config.criteria);
    let answers = DonorAnswers::from(args);
    let verdict = evaluator.evaluate(&answers);
    render_verdict(&verdict);
    Ok(())
}

fn render_verdict(verdict: &EligibilityVerdict) {
    if verdict.eligible {
        println!("Eligible to donate");
        println!("{}", verdict.summary());
        return;
    }

    println!("Not eligible to donate");
    for reason in &verdict.reasons {
        println!("- {}", reason.message);
    }
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
