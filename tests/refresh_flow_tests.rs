mod common;

use std::time::Duration;

use futures_util::future::join_all;

use common::{Harness, ScriptedBackend, FIRST_REFRESH, STALE_ACCESS};
use leoneta::{
    AuthUseCase, DashboardUseCase, DomainError, InMemoryTokenStore, ProfileUseCase, TokenStore,
    TripSearch, TripsUseCase, VehiclesUseCase,
};

#[tokio::test]
async fn test_valid_token_never_refreshes() {
    let harness = Harness::with_valid_session(ScriptedBackend::new());
    let auth = AuthUseCase::new(harness.client.clone());

    let user = auth.me().await.unwrap();

    assert_eq!(user.first_name, "Juan");
    assert_eq!(harness.backend.refresh_calls(), 0);
    assert_eq!(harness.backend.hits().len(), 1);
}

#[tokio::test]
async fn test_single_rejection_refreshes_and_retries_with_new_token() {
    let harness = Harness::with_stale_session(ScriptedBackend::new());
    let trips = TripsUseCase::new(harness.client.clone());

    let trip = trips.get("t9").await.unwrap();
    assert_eq!(trip.id, "t9");

    assert_eq!(harness.backend.refresh_calls(), 1);

    let hits = harness.backend.hits_for("/viajes/t9");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].bearer.as_deref(), Some(STALE_ACCESS));
    assert_eq!(hits[0].status, 401);
    assert_eq!(hits[1].bearer.as_deref(), Some("access-2"));
    assert_eq!(hits[1].status, 200);

    let pair = harness.tokens.snapshot().await.unwrap();
    assert_eq!(pair.access_token, "access-2");
    assert_eq!(pair.refresh_token, "refresh-2");
}

#[tokio::test]
async fn test_dashboard_with_stale_token_refreshes_once() {
    let backend = ScriptedBackend::new().with_refresh_delay(Duration::from_millis(30));
    let harness = Harness::with_stale_session(backend);
    let dashboard = DashboardUseCase::new(harness.client.clone());

    let view = dashboard.execute(&TripSearch::new()).await.unwrap();

    assert_eq!(view.trips.data.len(), 2);
    assert_eq!(view.profile.email, "juan.perez@alumnos.udg.mx");
    assert_eq!(view.vehicles.len(), 1);

    assert_eq!(harness.backend.refresh_calls(), 1);
    assert_eq!(harness.expirations(), 0);

    for path in ["/viajes", "/auth/me", "/vehiculos"] {
        let hits = harness.backend.hits_for(path);
        assert_eq!(hits.len(), 2, "{} should be sent twice", path);
        assert_eq!(hits[1].bearer.as_deref(), Some("access-2"));
    }

    assert_eq!(
        harness.tokens.access_token().await.unwrap().as_deref(),
        Some("access-2")
    );
    assert_eq!(
        harness.tokens.refresh_token().await.unwrap().as_deref(),
        Some("refresh-2")
    );
    assert!(!harness.client.coordinator().is_refreshing());
    assert_eq!(harness.client.coordinator().queued(), 0);
}

#[tokio::test]
async fn test_abandoned_dashboard_still_stores_rotated_tokens() {
    let backend = ScriptedBackend::new()
        .with_refresh_delay(Duration::from_millis(100))
        .failing_route("/viajes", Duration::from_millis(20));
    let harness = Harness::with_stale_session(backend);
    let dashboard = DashboardUseCase::new(harness.client.clone());
    let auth = AuthUseCase::new(harness.client.clone());

    // /viajes fails while the exchange started by its siblings is in flight;
    // the siblings are dropped with the dashboard.
    let err = dashboard.execute(&TripSearch::new()).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(harness.backend.refresh_calls(), 1);

    let user = auth.me().await.unwrap();
    assert_eq!(user.id, "u1");

    assert_eq!(harness.backend.refresh_calls(), 1);
    assert_eq!(harness.expirations(), 0);
    let pair = harness.tokens.snapshot().await.unwrap();
    assert_eq!(pair.access_token, "access-2");
    assert_eq!(pair.refresh_token, "refresh-2");
}

#[tokio::test]
async fn test_many_concurrent_rejections_share_one_refresh() {
    let backend = ScriptedBackend::new().with_refresh_delay(Duration::from_millis(20));
    let harness = Harness::with_stale_session(backend);
    let trips = TripsUseCase::new(harness.client.clone());

    let ids: Vec<String> = (0..8).map(|i| format!("t{}", i)).collect();
    let results = join_all(ids.iter().map(|id| trips.get(id))).await;

    for (id, result) in ids.iter().zip(results) {
        assert_eq!(&result.unwrap().id, id);
    }
    assert_eq!(harness.backend.refresh_calls(), 1);
}

#[tokio::test]
async fn test_spawned_tasks_share_one_refresh() {
    let backend = ScriptedBackend::new().with_refresh_delay(Duration::from_millis(20));
    let harness = Harness::with_stale_session(backend);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let trips = TripsUseCase::new(harness.client.clone());
            tokio::spawn(async move { trips.get(&format!("t{}", i)).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }
    assert_eq!(harness.backend.refresh_calls(), 1);
}

#[tokio::test]
async fn test_failed_refresh_expires_session_once() {
    let backend = ScriptedBackend::new()
        .failing_refresh()
        .with_refresh_delay(Duration::from_millis(20));
    let harness = Harness::with_stale_session(backend);
    let dashboard = DashboardUseCase::new(harness.client.clone());
    let trips = TripsUseCase::new(harness.client.clone());
    let vehicles = VehiclesUseCase::new(harness.client.clone());
    let auth = AuthUseCase::new(harness.client.clone());

    let search = TripSearch::new();
    let (a, b, c) = tokio::join!(
        trips.search(&search),
        auth.me(),
        vehicles.list_mine()
    );

    assert!(a.unwrap_err().is_session_expired());
    assert!(b.unwrap_err().is_session_expired());
    assert!(c.unwrap_err().is_session_expired());

    assert_eq!(harness.backend.refresh_calls(), 1);
    assert_eq!(harness.expirations(), 1);
    assert!(harness.tokens.snapshot().await.is_none());

    // No retries after a failed exchange.
    assert_eq!(harness.backend.hits().len(), 3);

    // With the store cleared the next call is rejected without another exchange.
    let err = dashboard.execute(&TripSearch::new()).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(harness.backend.refresh_calls(), 1);
    assert_eq!(harness.expirations(), 1);
}

#[tokio::test]
async fn test_second_rejection_is_surfaced_without_another_refresh() {
    let harness = Harness::with_stale_session(ScriptedBackend::new().rejecting_everything());
    let auth = AuthUseCase::new(harness.client.clone());

    let err = auth.me().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(err.status(), Some(401));
    assert_eq!(harness.backend.refresh_calls(), 1);
    assert_eq!(harness.backend.hits_for("/auth/me").len(), 2);
    assert_eq!(harness.expirations(), 0);

    // The rotated pair is kept; only a failed exchange clears the store.
    assert_eq!(
        harness.tokens.access_token().await.unwrap().as_deref(),
        Some("access-2")
    );
}

#[tokio::test]
async fn test_missing_refresh_token_surfaces_rejection() {
    let harness = Harness::new(ScriptedBackend::new(), InMemoryTokenStore::new());
    let auth = AuthUseCase::new(harness.client.clone());

    let err = auth.me().await.unwrap_err();

    assert!(err.is_unauthorized());
    assert_eq!(harness.backend.refresh_calls(), 0);
    assert_eq!(harness.expirations(), 0);

    let hits = harness.backend.hits();
    assert_eq!(hits.len(), 1);
    assert!(hits[0].bearer.is_none());
}

#[tokio::test]
async fn test_rotated_refresh_token_cannot_be_reused() {
    let harness = Harness::with_stale_session(ScriptedBackend::new());
    let auth = AuthUseCase::new(harness.client.clone());

    auth.me().await.unwrap();
    assert_eq!(harness.backend.refresh_calls(), 1);

    let err = auth.refresh(FIRST_REFRESH).await.unwrap_err();
    assert!(err.is_unauthorized());
    assert_eq!(err.to_string(), "Refresh token inválido");

    let fresh = auth.refresh("refresh-2").await.unwrap();
    assert_eq!(fresh.access_token, "access-3");
}

#[tokio::test]
async fn test_login_stores_issued_tokens() {
    let harness = Harness::new(ScriptedBackend::new(), InMemoryTokenStore::new());
    let auth = AuthUseCase::new(harness.client.clone());

    let response = auth
        .login("juan.perez@alumnos.udg.mx", "secreto123")
        .await
        .unwrap();
    assert_eq!(response.user.id, "u1");

    let pair = harness.tokens.snapshot().await.unwrap();
    assert_eq!(pair.access_token, "access-1");
    assert_eq!(pair.refresh_token, FIRST_REFRESH);

    auth.me().await.unwrap();
    assert_eq!(harness.backend.refresh_calls(), 0);
}

#[tokio::test]
async fn test_login_rejects_blank_credentials_locally() {
    let harness = Harness::new(ScriptedBackend::new(), InMemoryTokenStore::new());
    let auth = AuthUseCase::new(harness.client.clone());

    let err = auth.login("  ", "secreto123").await.unwrap_err();

    assert!(matches!(err, DomainError::Validation(_)));
    assert!(harness.backend.hits().is_empty());
}

#[tokio::test]
async fn test_logout_clears_tokens_even_when_backend_fails() {
    let harness = Harness::with_valid_session(ScriptedBackend::new().failing_logout());
    let auth = AuthUseCase::new(harness.client.clone());

    auth.logout().await.unwrap();

    assert!(harness.tokens.snapshot().await.is_none());
    let hits = harness.backend.hits_for("/auth/logout");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].status, 500);
}

#[tokio::test]
async fn test_delete_accepts_empty_response() {
    let harness = Harness::with_stale_session(ScriptedBackend::new());
    let trips = TripsUseCase::new(harness.client.clone());

    trips.delete("t1").await.unwrap();

    assert_eq!(harness.backend.refresh_calls(), 1);
}

#[tokio::test]
async fn test_backend_message_is_surfaced() {
    let harness = Harness::with_valid_session(ScriptedBackend::new());
    let trips = TripsUseCase::new(harness.client.clone());

    let err = trips.get("missing").await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Viaje no encontrado");
    assert_eq!(harness.backend.refresh_calls(), 0);
}

#[tokio::test]
async fn test_acknowledgement_body_is_discarded() {
    let harness = Harness::with_stale_session(ScriptedBackend::new());
    let profile = ProfileUseCase::new(harness.client.clone());

    profile
        .change_password("u1", "secreto123", "nuevoSecreto456")
        .await
        .unwrap();

    let hits = harness.backend.hits_for("/usuarios/u1/change-password");
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[1].status, 200);
}
