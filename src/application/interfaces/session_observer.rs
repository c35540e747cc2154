/// Notified when the session cannot be recovered and the user has to log in
/// again. Front ends use it to navigate to their login entry point.
pub trait SessionObserver: Send + Sync {
    fn session_expired(&self);
}

impl<F> SessionObserver for F
where
    F: Fn() + Send + Sync,
{
    fn session_expired(&self) {
        self()
    }
}
