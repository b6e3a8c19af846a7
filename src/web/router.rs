use super::handlers;
use super::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn build_router(state: AppState) -> Router {
    let static_dir = state.renderer.out_dir().to_path_buf();
    Router::new()
        .route("/", get(handlers::home))
        .route("/about", get(handlers::about))
        .route("/contact", get(handlers::contact))
        .route(
            "/login",
            get(handlers::login_form).post(handlers::login_submit),
        )
        .route(
            "/register",
            get(handlers::register_form).post(handlers::register_submit),
        )
        .route("/logout", get(handlers::logout))
        .route("/dashboard", get(handlers::dashboard))
        .route("/predict", post(handlers::predict))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{SessionManager, UserRepository};
    use crate::inference::{KMeansModel, StandardScaler};
    use crate::segmentation::Segmenter;
    use crate::store::ObservationStore;
    use crate::testing::stubs::InMemoryUserRepository;
    use crate::viz::{ChartKind, ChartRenderer};
    use crate::web::load_templates;
    use axum::body::Body;
    use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
    use axum::http::{Request, StatusCode};
    use std::path::Path;
    use std::sync::Arc;
    use strum::IntoEnumIterator;
    use tempfile::TempDir;
    use tower::ServiceExt;

    struct TestApp {
        router: Router,
        store: Arc<ObservationStore>,
        users: Arc<InMemoryUserRepository>,
        static_dir: TempDir,
    }

    fn test_app(users: InMemoryUserRepository) -> TestApp {
        let scaler = StandardScaler::new(
            vec![38.85, 60.56, 50.2],
            vec![13.93, 26.19, 25.76],
        )
        .unwrap();
        let kmeans = KMeansModel::new(vec![
            vec![-0.99, -1.32, 1.12],
            vec![0.3, -0.21, -0.05],
            vec![-0.42, 0.97, 1.23],
        ])
        .unwrap();

        let static_dir = tempfile::tempdir().unwrap();
        let store = Arc::new(ObservationStore::new());
        let users = Arc::new(users);
        let state = AppState {
            segmenter: Arc::new(Segmenter::new(
                Arc::new(scaler),
                Arc::new(kmeans),
                Arc::clone(&store),
            )),
            store: Arc::clone(&store),
            renderer: Arc::new(ChartRenderer::new(static_dir.path())),
            users: Arc::clone(&users) as Arc<dyn UserRepository>,
            sessions: Arc::new(SessionManager::new("test-secret", 1)),
            templates: Arc::new(load_templates(Path::new("templates")).unwrap()),
        };
        TestApp {
            router: build_router(state),
            store,
            users,
            static_dir,
        }
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(cookie) = cookie {
            builder = builder.header(COOKIE, cookie);
        }
        builder.body(Body::from(body.to_string())).unwrap()
    }

    async fn login(app: &TestApp, email: &str, password: &str) -> String {
        let response = app
            .router
            .clone()
            .oneshot(post_form(
                "/login",
                &format!("email={email}&password={password}"),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/dashboard");
        let set_cookie = response
            .headers()
            .get(SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        set_cookie.split(';').next().unwrap().to_string()
    }

    fn registered_users() -> InMemoryUserRepository {
        InMemoryUserRepository::new()
            .with_user("a@example.com", &bcrypt::hash("hunter2", 4).unwrap())
    }

    #[tokio::test]
    async fn public_pages_are_served() {
        let app = test_app(InMemoryUserRepository::new());
        for uri in ["/", "/about", "/contact", "/login", "/register"] {
            let response = app.router.clone().oneshot(get(uri)).await.unwrap();
            assert_eq!(response.status(), StatusCode::OK, "unexpected status for {uri}");
        }
    }

    #[tokio::test]
    async fn dashboard_requires_a_session() {
        let app = test_app(InMemoryUserRepository::new());
        let response = app.router.clone().oneshot(get("/dashboard")).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/login");
    }

    #[tokio::test]
    async fn garbage_session_cookie_redirects_to_login() {
        let app = test_app(registered_users());
        let mut request = get("/dashboard");
        request.headers_mut().insert(
            COOKIE,
            "segview_session=not-a-token".parse().unwrap(),
        );
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/login");
    }

    #[tokio::test]
    async fn login_with_bad_credentials_rerenders_the_form() {
        let app = test_app(registered_users());
        let response = app
            .router
            .clone()
            .oneshot(post_form(
                "/login",
                "email=a@example.com&password=wrong",
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn login_then_dashboard_succeeds() {
        let app = test_app(registered_users());
        let cookie = login(&app, "a@example.com", "hunter2").await;

        let mut request = get("/dashboard");
        request
            .headers_mut()
            .insert(COOKIE, cookie.parse().unwrap());
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn duplicate_registration_creates_no_row() {
        let app = test_app(registered_users());
        let response = app
            .router
            .clone()
            .oneshot(post_form(
                "/register",
                "email=a@example.com&password=whatever",
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(app.users.len(), 1);
    }

    #[tokio::test]
    async fn registration_then_login_round_trips() {
        let app = test_app(InMemoryUserRepository::new());
        let response = app
            .router
            .clone()
            .oneshot(post_form(
                "/register",
                "email=b@example.com&password=hunter2",
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers().get(LOCATION).unwrap(),
            "/login?registered=1"
        );
        assert_eq!(app.users.len(), 1);

        login(&app, "b@example.com", "hunter2").await;
    }

    #[tokio::test]
    async fn predict_appends_and_writes_charts() {
        let app = test_app(registered_users());
        let cookie = login(&app, "a@example.com", "hunter2").await;

        let response = app
            .router
            .clone()
            .oneshot(post_form(
                "/predict",
                "age=25&income=40&score=60",
                Some(&cookie),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(app.store.len(), 1);
        for kind in ChartKind::iter() {
            assert!(app.static_dir.path().join(kind.file_name()).exists());
        }
    }

    #[tokio::test]
    async fn invalid_prediction_input_leaves_store_unchanged() {
        let app = test_app(registered_users());
        let cookie = login(&app, "a@example.com", "hunter2").await;

        for body in [
            "age=0&income=40&score=60",
            "age=-1&income=40&score=60",
            "age=25&income=40&score=101",
            "age=abc&income=40&score=60",
        ] {
            let response = app
                .router
                .clone()
                .oneshot(post_form("/predict", body, Some(&cookie)))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "body: {body}");
        }
        assert_eq!(app.store.len(), 0);
    }

    #[tokio::test]
    async fn predict_requires_a_session() {
        let app = test_app(registered_users());
        let response = app
            .router
            .clone()
            .oneshot(post_form("/predict", "age=25&income=40&score=60", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/login");
        assert_eq!(app.store.len(), 0);
    }

    #[tokio::test]
    async fn logout_clears_the_session_cookie() {
        let app = test_app(registered_users());
        let cookie = login(&app, "a@example.com", "hunter2").await;

        let mut request = get("/logout");
        request
            .headers_mut()
            .insert(COOKIE, cookie.parse().unwrap());
        let response = app.router.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers().get(LOCATION).unwrap(), "/");
        let cleared = response
            .headers()
            .get(SET_COOKIE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(cleared.contains("Max-Age=0"));
    }
}
