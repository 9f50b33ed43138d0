//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::BookingService;
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::{
    auth, bookings, favorites, health, hostels, inquiries, photos, rooms, users,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Auth
        auth::login,
        auth::register,
        auth::me,
        // Users
        users::list_users,
        users::get_user,
        users::create_user,
        users::update_user,
        users::delete_user,
        // Hostels
        hostels::list_hostels,
        hostels::get_hostel,
        hostels::create_hostel,
        hostels::update_hostel,
        hostels::delete_hostel,
        hostels::list_hostel_rooms,
        // Rooms
        rooms::list_rooms,
        rooms::get_room,
        rooms::create_room,
        rooms::update_room,
        rooms::delete_room,
        // Bookings
        bookings::create_booking,
        bookings::list_bookings,
        bookings::get_booking,
        bookings::list_bookings_for_student,
        bookings::list_bookings_for_room,
        bookings::update_booking,
        bookings::cancel_booking,
        // Favorites
        favorites::list_favorites,
        favorites::add_favorite,
        favorites::remove_favorite,
        // Photos
        photos::list_photos,
        photos::create_photo,
        photos::delete_photo,
        // Inquiries
        inquiries::create_inquiry,
        inquiries::list_inquiries,
    ),
    components(
        schemas(
            crate::interfaces::http::common::ErrorBody,
            // Auth
            auth::LoginRequest,
            auth::RegisterRequest,
            auth::AuthResponse,
            auth::UserDto,
            auth::UserResponse,
            // Users
            users::CreateUserRequest,
            users::UpdateUserRequest,
            users::UserListResponse,
            users::DeletedResponse,
            // Hostels
            hostels::CreateHostelRequest,
            hostels::UpdateHostelRequest,
            hostels::HostelDto,
            hostels::HostelResponse,
            hostels::HostelListResponse,
            // Rooms
            rooms::CreateRoomRequest,
            rooms::UpdateRoomRequest,
            rooms::RoomDto,
            rooms::RoomResponse,
            rooms::RoomListResponse,
            // Bookings
            bookings::CreateBookingRequest,
            bookings::UpdateBookingRequest,
            bookings::BookingDto,
            bookings::BookingResponse,
            bookings::BookingListResponse,
            bookings::CancelBookingResponse,
            // Favorites
            favorites::FavoriteRequest,
            favorites::FavoriteDto,
            favorites::FavoriteResponse,
            favorites::FavoriteListResponse,
            // Photos
            photos::CreatePhotoRequest,
            photos::PhotoDto,
            photos::PhotoResponse,
            photos::PhotoListResponse,
            // Inquiries
            inquiries::CreateInquiryRequest,
            inquiries::InquiryDto,
            inquiries::InquiryResponse,
            inquiries::InquiryListResponse,
            // Health
            health::HealthResponse,
            health::DatabaseHealth,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "Login (JWT), registration, current user"),
        (name = "Users", description = "User account management"),
        (name = "Hostels", description = "Hostel listing CRUD and moderation"),
        (name = "Rooms", description = "Room CRUD within hostels"),
        (name = "Bookings", description = "Room bookings: creation, lookup, updates, cancellation"),
        (name = "Favorites", description = "Per-user hostel bookmarks"),
        (name = "Photos", description = "Photos attached to users, hostels and rooms"),
        (name = "Inquiries", description = "Student questions to hostel owners"),
    ),
    info(
        title = "Hostel Booking Service API",
        version = "1.0.0",
        description = "REST API for the hostel booking platform",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
) -> Router {
    let auth_state = AuthState {
        jwt_config: jwt_config.clone(),
    };

    let booking_service = Arc::new(BookingService::new(repos.clone()));

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Auth routes (public)
    let auth_handler_state = auth::AuthHandlerState {
        repos: repos.clone(),
        jwt_config,
    };
    let auth_public_routes = Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register))
        .with_state(auth_handler_state.clone());

    // Auth routes (protected)
    let auth_protected_routes = Router::new()
        .route("/me", get(auth::me))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_handler_state);

    // User routes (protected)
    let user_routes = Router::new()
        .route("/", get(users::list_users).post(users::create_user))
        .route(
            "/{id}",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(users::UserAppState {
            repos: repos.clone(),
        });

    // Hostel routes (protected)
    let hostel_routes = Router::new()
        .route(
            "/",
            get(hostels::list_hostels).post(hostels::create_hostel),
        )
        .route(
            "/{id}",
            get(hostels::get_hostel)
                .put(hostels::update_hostel)
                .delete(hostels::delete_hostel),
        )
        .route("/{id}/rooms", get(hostels::list_hostel_rooms))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(hostels::HostelAppState {
            repos: repos.clone(),
        });

    // Room routes (protected)
    let room_routes = Router::new()
        .route("/", get(rooms::list_rooms).post(rooms::create_room))
        .route(
            "/{id}",
            get(rooms::get_room)
                .put(rooms::update_room)
                .delete(rooms::delete_room),
        )
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(rooms::RoomAppState {
            repos: repos.clone(),
        });

    // Booking routes (protected)
    let booking_routes = Router::new()
        .route(
            "/",
            get(bookings::list_bookings).post(bookings::create_booking),
        )
        .route(
            "/{id}",
            get(bookings::get_booking)
                .put(bookings::update_booking)
                .delete(bookings::cancel_booking),
        )
        .route(
            "/student/{student_id}",
            get(bookings::list_bookings_for_student),
        )
        .route("/room/{room_id}", get(bookings::list_bookings_for_room))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(bookings::BookingAppState {
            service: booking_service,
            repos: repos.clone(),
        });

    // Favorite routes (protected)
    let favorite_routes = Router::new()
        .route(
            "/",
            get(favorites::list_favorites)
                .post(favorites::add_favorite)
                .delete(favorites::remove_favorite),
        )
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(favorites::FavoriteAppState {
            repos: repos.clone(),
        });

    // Photo routes (protected)
    let photo_routes = Router::new()
        .route("/", get(photos::list_photos).post(photos::create_photo))
        .route("/{id}", delete(photos::delete_photo))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(photos::PhotoAppState {
            repos: repos.clone(),
        });

    // Inquiry routes (protected)
    let inquiry_routes = Router::new()
        .route(
            "/",
            get(inquiries::list_inquiries).post(inquiries::create_inquiry),
        )
        .layer(middleware::from_fn_with_state(auth_state, auth_middleware))
        .with_state(inquiries::InquiryAppState { repos });

    let health_state = health::HealthState {
        db,
        started_at: Arc::new(Instant::now()),
    };

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        .with_state(health_state)
        // Auth
        .nest("/api/v1/auth", auth_public_routes)
        .nest("/api/v1/auth", auth_protected_routes)
        // Users
        .nest("/api/v1/users", user_routes)
        // Hostels
        .nest("/api/v1/hostels", hostel_routes)
        // Rooms
        .nest("/api/v1/rooms", room_routes)
        // Bookings
        .nest("/api/v1/bookings", booking_routes)
        // Favorites
        .nest("/api/v1/favorites", favorite_routes)
        // Photos
        .nest("/api/v1/photos", photo_routes)
        // Inquiries
        .nest("/api/v1/inquiries", inquiry_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;
    use serde_json::{json, Value};
    use tower::{Service, ServiceExt};

    use crate::domain::{Hostel, Room, User, UserRole};
    use crate::infrastructure::crypto::jwt::create_token;
    use crate::infrastructure::crypto::password::hash_password;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::SeaOrmRepositoryProvider;

    fn test_jwt_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret".to_string(),
            expiration_hours: 1,
            issuer: "hostel-service".to_string(),
        }
    }

    struct TestApp {
        router: Router,
        repos: Arc<SeaOrmRepositoryProvider>,
    }

    async fn spawn_app() -> TestApp {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        let repos = Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
        let router = create_api_router(repos.clone(), db, test_jwt_config());
        TestApp { router, repos }
    }

    async fn seed_user(app: &TestApp, name: &str, email: &str, role: UserRole) -> (User, String) {
        let hashed = hash_password("password123").unwrap();
        let user = app
            .repos
            .users()
            .save(User::new(name, email, hashed, role))
            .await
            .unwrap();
        let token =
            create_token(&user.id, &user.email, user.role.as_str(), &test_jwt_config()).unwrap();
        (user, token)
    }

    async fn seed_room(app: &TestApp, owner_id: &str) -> Room {
        let hostel = app
            .repos
            .hostels()
            .save(Hostel::new(
                owner_id,
                "Sunrise Hostel",
                "A hostel",
                "1 Main St",
                41.3,
                69.2,
                "+998901234567",
            ))
            .await
            .unwrap();
        app.repos
            .rooms()
            .save(Room::new(&hostel.id, "double", 120.0, 2))
            .await
            .unwrap()
    }

    async fn send(app: &TestApp, req: Request<Body>) -> axum::http::Response<Body> {
        let mut svc = app.router.clone().into_service();
        svc.ready().await.unwrap();
        svc.call(req).await.unwrap()
    }

    fn json_request(method: &str, uri: &str, token: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, format!("Bearer {}", token))
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    async fn body_json(response: axum::http::Response<Body>) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn booking_body(room_id: &str, check_in: &str, check_out: &str) -> Value {
        json!({
            "roomId": room_id,
            "checkInDate": check_in,
            "checkOutDate": check_out,
        })
    }

    #[tokio::test]
    async fn booking_conflict_returns_400_with_error_body() {
        let app = spawn_app().await;
        let (owner, _) = seed_user(&app, "Owner", "owner@test.dev", UserRole::Owner).await;
        let (_, student_a) = seed_user(&app, "A", "a@test.dev", UserRole::Student).await;
        let (_, student_b) = seed_user(&app, "B", "b@test.dev", UserRole::Student).await;
        let room = seed_room(&app, &owner.id).await;

        let resp = send(
            &app,
            json_request(
                "POST",
                "/api/v1/bookings",
                &student_a,
                booking_body(&room.id, "2025-08-01", "2025-08-05"),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = body_json(resp).await;
        assert_eq!(body["booking"]["status"], "pending");

        // boundary-sharing range: inclusive overlap, must be a 400
        let resp = send(
            &app,
            json_request(
                "POST",
                "/api/v1/bookings",
                &student_b,
                booking_body(&room.id, "2025-08-05", "2025-08-10"),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Room is already booked for the selected dates");
    }

    #[tokio::test]
    async fn booking_requires_authentication() {
        let app = spawn_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/bookings")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::to_vec(&booking_body("room", "2025-08-01", "2025-08-05")).unwrap(),
            ))
            .unwrap();
        let resp = send(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body = body_json(resp).await;
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn wrong_role_is_forbidden() {
        let app = spawn_app().await;
        let (_, student) = seed_user(&app, "S", "s@test.dev", UserRole::Student).await;

        let req = Request::builder()
            .method("GET")
            .uri("/api/v1/users")
            .header(header::AUTHORIZATION, format!("Bearer {}", student))
            .body(Body::empty())
            .unwrap();
        let resp = send(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn register_then_login_round_trip() {
        let app = spawn_app().await;

        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/auth/register")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::to_vec(&json!({
                    "name": "New Student",
                    "email": "new@test.dev",
                    "password": "password123",
                }))
                .unwrap(),
            ))
            .unwrap();
        let resp = send(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body = body_json(resp).await;
        assert_eq!(body["user"]["role"], "student");

        let req = Request::builder()
            .method("POST")
            .uri("/api/v1/auth/login")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                serde_json::to_vec(&json!({
                    "email": "new@test.dev",
                    "password": "password123",
                }))
                .unwrap(),
            ))
            .unwrap();
        let resp = send(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body = body_json(resp).await;
        assert!(body["token"].is_string());
    }

    #[tokio::test]
    async fn favorites_duplicate_and_missing() {
        let app = spawn_app().await;
        let (owner, _) = seed_user(&app, "Owner", "owner@test.dev", UserRole::Owner).await;
        let (_, student) = seed_user(&app, "S", "s@test.dev", UserRole::Student).await;
        let room = seed_room(&app, &owner.id).await;
        let hostel_id = room.hostel_id.clone();

        let add = |hostel_id: String, token: String| {
            json_request(
                "POST",
                "/api/v1/favorites",
                &token,
                json!({ "hostelId": hostel_id }),
            )
        };

        let resp = send(&app, add(hostel_id.clone(), student.clone())).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let resp = send(&app, add(hostel_id.clone(), student.clone())).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = send(
            &app,
            json_request(
                "DELETE",
                "/api/v1/favorites",
                &student,
                json!({ "hostelId": "missing-hostel" }),
            ),
        )
        .await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn empty_room_bookings_is_404() {
        let app = spawn_app().await;
        let (owner, _) = seed_user(&app, "Owner", "owner@test.dev", UserRole::Owner).await;
        let (_, student) = seed_user(&app, "S", "s@test.dev", UserRole::Student).await;
        let room = seed_room(&app, &owner.id).await;

        let req = Request::builder()
            .method("GET")
            .uri(format!("/api/v1/bookings/room/{}", room.id))
            .header(header::AUTHORIZATION, format!("Bearer {}", student))
            .body(Body::empty())
            .unwrap();
        let resp = send(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "No bookings found for this room");
    }

    #[tokio::test]
    async fn health_is_public() {
        let app = spawn_app().await;
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();
        let resp = send(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
