use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use portfolio_api::{app, config::Config, state::AppState};
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

fn sample_portfolio() -> Value {
    json!({
        "profile": {
            "imageUrl": "https://example.com/me.png",
            "socialMediaLinks": [{ "platform": "github", "url": "https://github.com/me" }],
            "about": ["I build things.", "Mostly on the web."],
            "randomFacts": null
        },
        "skillset": [
            { "name": "Go", "level": "experienced", "category": "Back-end" },
            { "name": "Rust", "level": "expert", "category": "Back-end" },
            { "name": "HTML", "level": "experienced", "category": "Front-end" }
        ],
        "educationalBackgrounds": [{
            "school": "State University",
            "degree": "BSc",
            "fieldOfStudy": "Computer Science",
            "startDate": "2015-09",
            "endDate": "2019-06",
            "description": "Systems track"
        }],
        "projects": [
            {
                "id": 10,
                "title": "dotfiles",
                "url": "https://github.com/me/dotfiles",
                "imageUrl": "",
                "description": "Config files",
                "createdAt": "2019-03-01T00:00:00Z",
                "topics": [{ "name": "vim" }],
                "updatedAt": "2020-01-01T00:00:00Z"
            },
            {
                "id": 11,
                "title": "portfolio",
                "url": "https://github.com/me/portfolio",
                "imageUrl": "",
                "description": "This site",
                "createdAt": "2023-01-01T00:00:00Z",
                "topics": [],
                "updatedAt": "2024-02-01T00:00:00Z"
            }
        ]
    })
}

fn write_portfolio(dir: &TempDir, name: &str, content: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write portfolio");
    path.to_string_lossy().into_owned()
}

async fn load_app(skip_invalid_skills: bool) -> (TempDir, Router) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let portfolio_path =
        write_portfolio(&temp_dir, "portfolio.json", &sample_portfolio().to_string());

    let config = Config {
        portfolio_path,
        skip_invalid_skills,
        ..Config::default()
    };
    let state = AppState::load(config).await.expect("Failed to load state");
    (temp_dir, app::router(state))
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send_json(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app
        .oneshot(req)
        .await
        .expect("Failed to send request");
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    (status, serde_json::from_slice(&bytes).expect("Failed to parse JSON"))
}

#[tokio::test]
async fn test_invalid_skill_fails_startup() {
    let temp_dir = TempDir::new().unwrap();
    let portfolio_path =
        write_portfolio(&temp_dir, "portfolio.json", &sample_portfolio().to_string());

    let config = Config {
        portfolio_path,
        ..Config::default()
    };
    let err = AppState::load(config).await.err().expect("Expected load failure");
    assert!(err.to_string().contains("unknown level 'expert'"));
}

#[tokio::test]
async fn test_missing_portfolio_fails_startup() {
    let temp_dir = TempDir::new().unwrap();
    let config = Config {
        portfolio_path: temp_dir.path().join("missing.json").to_string_lossy().into_owned(),
        ..Config::default()
    };
    assert!(AppState::load(config).await.is_err());
}

#[tokio::test]
async fn test_bad_palette_fails_startup() {
    let temp_dir = TempDir::new().unwrap();
    let portfolio_path =
        write_portfolio(&temp_dir, "portfolio.json", &sample_portfolio().to_string());
    let palette_path = write_portfolio(&temp_dir, "palette.yaml", "beginner: bluemine-100\n");

    let config = Config {
        portfolio_path,
        palette_path: Some(palette_path),
        skip_invalid_skills: true,
        ..Config::default()
    };
    let err = AppState::load(config).await.err().expect("Expected load failure");
    assert!(err.to_string().contains("Palette has no color"));
}

#[tokio::test]
async fn test_skip_invalid_skills() {
    let (_temp, app) = load_app(true).await;
    let (status, body) = send_json(app, get("/portfolio")).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<_> = body["skillset"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Go", "HTML"]);
}

#[tokio::test]
async fn test_get_profile() {
    let (_temp, app) = load_app(true).await;
    let (status, body) = send_json(app, get("/portfolio/profile")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["imageUrl"], "https://example.com/me.png");
    assert_eq!(body["about"].as_array().unwrap().len(), 2);
    assert_eq!(body["socialMediaLinks"][0]["platform"], "github");
    assert!(body["randomFacts"].is_null());
}

#[tokio::test]
async fn test_get_education() {
    let (_temp, app) = load_app(true).await;
    let (status, body) = send_json(app, get("/portfolio/education")).await;

    assert_eq!(status, StatusCode::OK);
    let backgrounds = body["educationalBackgrounds"].as_array().unwrap();
    assert_eq!(backgrounds.len(), 1);
    assert_eq!(backgrounds[0]["fieldOfStudy"], "Computer Science");
    assert_eq!(backgrounds[0]["description"], "Systems track");
}

#[tokio::test]
async fn test_projects_newest_first() {
    let (_temp, app) = load_app(true).await;
    let (status, body) = send_json(app, get("/portfolio/projects")).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<_> = body["projects"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![11, 10]);
}

#[tokio::test]
async fn test_yaml_portfolio() {
    let temp_dir = TempDir::new().unwrap();
    let yaml = serde_yaml::to_string(&json!({
        "profile": { "imageUrl": "", "about": ["hi"] },
        "skillset": [{ "name": "Docker", "level": "intermediate", "category": "Dev Tools" }]
    }))
    .unwrap();
    let portfolio_path = write_portfolio(&temp_dir, "portfolio.yaml", &yaml);

    let config = Config {
        portfolio_path,
        ..Config::default()
    };
    let state = AppState::load(config).await.expect("Failed to load state");
    let (_, body) = send_json(app::router(state), get("/skills?skip_empty=true")).await;

    assert_eq!(body["categories"][0]["label"], "Dev Tools");
    assert_eq!(body["categories"][0]["skills"][0]["name"], "Docker");
}
