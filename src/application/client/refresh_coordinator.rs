use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::Serialize;
use tokio::sync::oneshot;
use tracing::{debug, info, warn};

use crate::application::{ApiRequest, HttpTransport, SessionObserver, TokenStore};
use crate::domain::{DomainError, TokenPair};

pub const REFRESH_PATH: &str = "/auth/refresh";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RefreshBody<'a> {
    refresh_token: &'a str,
}

type Waiter = oneshot::Sender<Option<String>>;

#[derive(Default)]
struct RefreshState {
    in_progress: bool,
    /// Callers parked behind the in-flight exchange, in arrival order.
    waiters: Vec<Waiter>,
    /// Bumped every time an exchange finishes, successfully or not.
    generation: u64,
}

enum Step {
    Reuse,
    Wait(oneshot::Receiver<Option<String>>),
    Exchange(oneshot::Receiver<Option<String>>),
}

/// Deduplicates refresh-token exchanges for one client session.
///
/// The first caller that reports an authorization failure starts the
/// exchange; callers failing while it is in flight are parked and resolved
/// with its single outcome. A caller whose request predates a finished
/// exchange (its `generation` is stale) reuses the stored token instead of
/// starting another one.
///
/// The exchange runs on its own task and parks its initiator like any other
/// caller. Once the backend has rotated the pair, dropping the initiator
/// cannot keep the new pair from being stored.
pub struct RefreshCoordinator {
    shared: Arc<Shared>,
}

struct Shared {
    transport: Arc<dyn HttpTransport>,
    tokens: Arc<dyn TokenStore>,
    observer: Arc<dyn SessionObserver>,
    state: Mutex<RefreshState>,
}

impl RefreshCoordinator {
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        tokens: Arc<dyn TokenStore>,
        observer: Arc<dyn SessionObserver>,
    ) -> Self {
        Self {
            shared: Arc::new(Shared {
                transport,
                tokens,
                observer,
                state: Mutex::new(RefreshState::default()),
            }),
        }
    }

    /// Current exchange generation. Read it before sending a request and pass
    /// it to [`Self::recover`] if that request is rejected.
    pub fn generation(&self) -> u64 {
        lock(&self.shared.state).generation
    }

    pub fn is_refreshing(&self) -> bool {
        lock(&self.shared.state).in_progress
    }

    /// Number of callers waiting on the in-flight exchange, its initiator
    /// included.
    pub fn queued(&self) -> usize {
        lock(&self.shared.state).waiters.len()
    }

    /// Obtains an access token to retry a rejected request with.
    ///
    /// Fails with [`DomainError::SessionExpired`] when the exchange fails; in
    /// that case the token store has been cleared and the session observer
    /// notified once for the whole burst.
    pub async fn recover(&self, seen_generation: u64) -> Result<String, DomainError> {
        let step = {
            let mut state = lock(&self.shared.state);
            if state.generation != seen_generation {
                Step::Reuse
            } else {
                let (tx, rx) = oneshot::channel();
                state.waiters.push(tx);
                if state.in_progress {
                    Step::Wait(rx)
                } else {
                    state.in_progress = true;
                    Step::Exchange(rx)
                }
            }
        };

        let rx = match step {
            Step::Reuse => {
                debug!("Token refreshed since request was sent; retrying with stored token");
                return self
                    .shared
                    .tokens
                    .access_token()
                    .await?
                    .ok_or(DomainError::SessionExpired);
            }
            Step::Wait(rx) => {
                debug!("Token refresh already in flight; waiting for its outcome");
                rx
            }
            Step::Exchange(rx) => {
                tokio::spawn(Arc::clone(&self.shared).run_exchange());
                rx
            }
        };

        match rx.await {
            Ok(Some(token)) => Ok(token),
            Ok(None) => Err(DomainError::SessionExpired),
            Err(_) => Err(DomainError::network("token refresh was aborted")),
        }
    }
}

impl Shared {
    async fn run_exchange(self: Arc<Self>) {
        let mut flight = InFlight {
            state: &self.state,
            done: false,
        };

        info!("Access token rejected; exchanging refresh token");

        match self.exchange().await {
            Ok(pair) => {
                let resumed = flight.finish(Some(&pair.access_token));
                info!("Token refresh succeeded; resuming {} request(s)", resumed);
            }
            Err(e) => {
                warn!("Token refresh failed: {}", e);
                if let Err(clear_err) = self.tokens.clear().await {
                    warn!("Failed to clear tokens after refresh failure: {}", clear_err);
                }
                let dropped = flight.finish(None);
                debug!("Failing {} request(s) with expired session", dropped);
                self.observer.session_expired();
            }
        }
    }

    async fn exchange(&self) -> Result<TokenPair, DomainError> {
        let refresh_token = self
            .tokens
            .refresh_token()
            .await?
            .ok_or(DomainError::SessionExpired)?;

        let request = ApiRequest::post(REFRESH_PATH).with_json(&RefreshBody {
            refresh_token: &refresh_token,
        })?;

        let response = self.transport.send(&request, None).await?;
        let pair: TokenPair = response.decode()?;
        self.tokens.store_pair(&pair).await?;

        Ok(pair)
    }
}

/// Marks an exchange as in flight. Dropping it unfinished (the exchange task
/// was torn down with its runtime) resets the flag and releases parked
/// callers.
struct InFlight<'a> {
    state: &'a Mutex<RefreshState>,
    done: bool,
}

impl InFlight<'_> {
    /// Resolves every parked caller in arrival order.
    fn finish(&mut self, token: Option<&str>) -> usize {
        self.done = true;
        let waiters = {
            let mut state = lock(self.state);
            state.in_progress = false;
            state.generation += 1;
            std::mem::take(&mut state.waiters)
        };

        let count = waiters.len();
        for waiter in waiters {
            // The receiver is gone if that caller was cancelled.
            let _ = waiter.send(token.map(str::to_string));
        }
        count
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if !self.done {
            let mut state = lock(self.state);
            state.in_progress = false;
            state.waiters.clear();
        }
    }
}

fn lock(state: &Mutex<RefreshState>) -> MutexGuard<'_, RefreshState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}
