//! Shared fixtures: a scripted in-process backend that rotates tokens the way
//! the real one does.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{json, Value};

use leoneta::{
    ApiClient, ApiRequest, ApiResponse, DomainError, HttpMethod, HttpTransport,
    InMemoryTokenStore, SessionObserver,
};

pub const STALE_ACCESS: &str = "access-0";
pub const FIRST_REFRESH: &str = "refresh-1";

pub fn user_json() -> Value {
    json!({
        "id": "u1",
        "email": "juan.perez@alumnos.udg.mx",
        "nombre": "Juan",
        "apellido": "Pérez",
        "rol": "estudiante",
        "registroCompleto": true,
        "ratingPromedio": 4.8
    })
}

pub fn vehicle_json() -> Value {
    json!({
        "id": "v1", "marca": "Nissan", "modelo": "Versa", "anio": 2020, "color": "gris",
        "capacidadPasajeros": 4, "verificado": true, "activo": true, "esPrincipal": true,
        "createdAt": "2025-01-10T12:00:00Z"
    })
}

pub fn trip_json(id: &str) -> Value {
    json!({
        "id": id, "origen": "Plaza del Sol", "destino": "CUCEI", "fecha": "2025-01-12",
        "hora": "07:30", "asientosTotales": 4, "asientosDisponibles": 2, "precio": 35.0,
        "metodosPago": ["efectivo"], "estado": "programado", "createdAt": "2025-01-01"
    })
}

pub fn trip_page_json() -> Value {
    json!({ "data": [trip_json("t1"), trip_json("t2")], "total": 2, "page": 1, "limit": 10 })
}

#[derive(Debug, Clone)]
pub struct Hit {
    pub method: HttpMethod,
    pub path: String,
    pub bearer: Option<String>,
    pub status: u16,
}

struct BackendState {
    access: String,
    refresh: String,
    rotations: u32,
    refresh_calls: usize,
    hits: Vec<Hit>,
}

/// Answers like the carpool backend: accepts only the current access token
/// and rotates both tokens on every successful refresh.
pub struct ScriptedBackend {
    state: Mutex<BackendState>,
    refresh_delay: Duration,
    refresh_fails: bool,
    rejects_everything: bool,
    logout_fails: bool,
    failing_route: Option<(String, Duration)>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(BackendState {
                access: "access-1".to_string(),
                refresh: FIRST_REFRESH.to_string(),
                rotations: 1,
                refresh_calls: 0,
                hits: Vec::new(),
            }),
            refresh_delay: Duration::from_millis(0),
            refresh_fails: false,
            rejects_everything: false,
            logout_fails: false,
            failing_route: None,
        }
    }

    pub fn with_refresh_delay(mut self, delay: Duration) -> Self {
        self.refresh_delay = delay;
        self
    }

    pub fn failing_refresh(mut self) -> Self {
        self.refresh_fails = true;
        self
    }

    pub fn rejecting_everything(mut self) -> Self {
        self.rejects_everything = true;
        self
    }

    pub fn failing_logout(mut self) -> Self {
        self.logout_fails = true;
        self
    }

    /// Answers `path` with a 500 after `delay`, whatever the bearer.
    pub fn failing_route(mut self, path: &str, delay: Duration) -> Self {
        self.failing_route = Some((path.to_string(), delay));
        self
    }

    pub fn current_access(&self) -> String {
        self.state.lock().unwrap().access.clone()
    }

    pub fn current_refresh(&self) -> String {
        self.state.lock().unwrap().refresh.clone()
    }

    pub fn refresh_calls(&self) -> usize {
        self.state.lock().unwrap().refresh_calls
    }

    /// Every non-refresh request, in arrival order.
    pub fn hits(&self) -> Vec<Hit> {
        self.state.lock().unwrap().hits.clone()
    }

    pub fn hits_for(&self, path: &str) -> Vec<Hit> {
        self.hits().into_iter().filter(|h| h.path == path).collect()
    }

    fn refresh(&self, request: &ApiRequest) -> ApiResponse {
        let mut state = self.state.lock().unwrap();
        state.refresh_calls += 1;

        let presented = request
            .body
            .as_ref()
            .and_then(|b| b.get("refreshToken"))
            .and_then(Value::as_str);

        if self.refresh_fails || presented != Some(state.refresh.as_str()) {
            return ApiResponse::json(401, &json!({ "message": "Refresh token inválido" }));
        }

        state.rotations += 1;
        state.access = format!("access-{}", state.rotations);
        state.refresh = format!("refresh-{}", state.rotations);

        ApiResponse::json(
            200,
            &json!({
                "accessToken": state.access,
                "refreshToken": state.refresh,
                "expiresIn": 900
            }),
        )
    }

    fn record(&self, request: &ApiRequest, bearer: Option<&str>, status: u16) {
        self.state.lock().unwrap().hits.push(Hit {
            method: request.method,
            path: request.path(),
            bearer: bearer.map(str::to_string),
            status,
        });
    }

    fn route(&self, request: &ApiRequest, state: &BackendState) -> ApiResponse {
        let path = request.path();
        let path = path.as_str();
        match (request.method, path) {
            (HttpMethod::Get, "/auth/me") => ApiResponse::json(200, &user_json()),
            (HttpMethod::Get, "/viajes") => ApiResponse::json(200, &trip_page_json()),
            (HttpMethod::Get, "/viajes/missing") => {
                ApiResponse::json(404, &json!({ "message": "Viaje no encontrado" }))
            }
            (HttpMethod::Get, _) if path.starts_with("/viajes/") => {
                ApiResponse::json(200, &trip_json(&path["/viajes/".len()..]))
            }
            (HttpMethod::Get, "/vehiculos") => ApiResponse::json(200, &json!([vehicle_json()])),
            (HttpMethod::Delete, _) => ApiResponse::no_content(),
            (HttpMethod::Patch, "/usuarios/u1/change-password") => ApiResponse::json(
                200,
                &json!({ "message": "Contraseña actualizada exitosamente" }),
            ),
            (HttpMethod::Post, "/auth/logout") if self.logout_fails => {
                ApiResponse::json(500, &json!({ "message": "Error interno del servidor" }))
            }
            (HttpMethod::Post, "/auth/logout") => ApiResponse::no_content(),
            (HttpMethod::Post, "/auth/login") => ApiResponse::json(
                200,
                &json!({
                    "user": user_json(),
                    "tokens": {
                        "accessToken": state.access,
                        "refreshToken": state.refresh,
                        "expiresIn": 900
                    }
                }),
            ),
            _ => ApiResponse::json(404, &json!({ "message": format!("No route for {}", request) })),
        }
    }
}

#[async_trait]
impl HttpTransport for ScriptedBackend {
    async fn send(
        &self,
        request: &ApiRequest,
        bearer: Option<&str>,
    ) -> Result<ApiResponse, DomainError> {
        let path = request.path();

        if path == "/auth/refresh" {
            // The rotation is committed before the reply goes out, so a caller
            // that stops listening still leaves the old pair revoked.
            let response = self.refresh(request);
            tokio::time::sleep(self.refresh_delay).await;
            return Ok(response);
        }

        if let Some((failing, delay)) = &self.failing_route {
            if *failing == path {
                tokio::time::sleep(*delay).await;
                let response = ApiResponse::json(500, &json!({ "message": "boom" }));
                self.record(request, bearer, response.status);
                return Ok(response);
            }
        }

        // Yield so concurrent callers interleave like real round-trips.
        tokio::task::yield_now().await;

        let mut state = self.state.lock().unwrap();
        let public = path == "/auth/login";
        let authorized =
            public || (!self.rejects_everything && bearer == Some(state.access.as_str()));

        let response = if authorized {
            self.route(request, &state)
        } else {
            ApiResponse::json(401, &json!({ "message": "Unauthorized", "statusCode": 401 }))
        };

        state.hits.push(Hit {
            method: request.method,
            path,
            bearer: bearer.map(str::to_string),
            status: response.status,
        });

        Ok(response)
    }
}

pub struct Harness {
    pub backend: Arc<ScriptedBackend>,
    pub tokens: Arc<InMemoryTokenStore>,
    pub client: Arc<ApiClient>,
    pub expirations: Arc<AtomicUsize>,
}

impl Harness {
    pub fn new(backend: ScriptedBackend, tokens: InMemoryTokenStore) -> Self {
        let backend = Arc::new(backend);
        let tokens = Arc::new(tokens);
        let expirations = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&expirations);
        let observer: Arc<dyn SessionObserver> = Arc::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let client = Arc::new(ApiClient::new(
            "http://backend.test",
            backend.clone(),
            tokens.clone(),
            observer,
        ));

        Self {
            backend,
            tokens,
            client,
            expirations,
        }
    }

    /// Client holding an access token the backend no longer accepts.
    pub fn with_stale_session(backend: ScriptedBackend) -> Self {
        Self::new(
            backend,
            InMemoryTokenStore::with_tokens(STALE_ACCESS, FIRST_REFRESH),
        )
    }

    pub fn with_valid_session(backend: ScriptedBackend) -> Self {
        let access = backend.current_access();
        let refresh = backend.current_refresh();
        Self::new(backend, InMemoryTokenStore::with_tokens(&access, &refresh))
    }

    pub fn expirations(&self) -> usize {
        self.expirations.load(Ordering::SeqCst)
    }
}
