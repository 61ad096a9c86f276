use std::sync::Arc;

use tokio::sync::watch;

use super::client::GithubClient;
use super::types::{GithubRepo, GithubUser, ProfileViewState};

/// Stateful loader bound to a single GitHub username for its lifetime.
///
/// One loader owns one observable [`ProfileViewState`], held in a watch
/// channel. Clones share the same state; consumers either poll the accessors
/// or [`ProfileLoader::subscribe`] for change notifications.
#[derive(Clone)]
pub struct ProfileLoader {
    username: String,
    client: GithubClient,
    state: Arc<watch::Sender<ProfileViewState>>,
}

impl ProfileLoader {
    /// Bind a loader to `username`. Performs no network activity.
    pub fn new(username: impl Into<String>, client: GithubClient) -> Self {
        let (state, _) = watch::channel(ProfileViewState::default());
        Self {
            username: username.into(),
            client,
            state: Arc::new(state),
        }
    }

    /// Kick off both GitHub requests in the background and return at once.
    ///
    /// Marks the state as loading, clears any previous error text, and spawns
    /// one task per endpoint. Each task applies its own outcome when its
    /// request settles; neither waits for the other and there is no combined
    /// completion event. The loading flag follows the profile request alone.
    ///
    /// Calling this again while a previous round is still in flight is
    /// allowed; stale completions then race with fresh ones and the last
    /// write wins.
    pub fn fetch_user_data(&self) {
        self.state.send_modify(|state| {
            state.loading = true;
            state.error_message = None;
        });

        let loader = self.clone();
        tokio::spawn(async move { loader.settle_profile().await });

        let loader = self.clone();
        tokio::spawn(async move { loader.settle_repos().await });
    }

    async fn settle_profile(&self) {
        match self.client.get_user(&self.username).await {
            Ok(user) => {
                tracing::debug!("Loaded profile for {}", self.username);
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.user = Some(user);
                });
            }
            Err(e) => {
                tracing::error!("Profile fetch for {} failed: {}", self.username, e);
                let message = e.to_string();
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.push_error(message);
                });
            }
        }
    }

    async fn settle_repos(&self) {
        match self.client.get_repos(&self.username).await {
            Ok(repos) => {
                // A repository named after the account itself is the profile
                // README repo; it never shows in the list.
                let repos: Vec<GithubRepo> = repos
                    .into_iter()
                    .filter(|repo| repo.name != self.username)
                    .collect();
                tracing::debug!("Loaded {} repos for {}", repos.len(), self.username);
                self.state.send_modify(|state| state.repos = repos);
            }
            Err(e) => {
                tracing::error!("Repo list fetch for {} failed: {}", self.username, e);
                let message = e.to_string();
                self.state.send_modify(|state| state.push_error(message));
            }
        }
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ProfileViewState {
        self.state.borrow().clone()
    }

    /// Change notifications; the receiver always observes the latest state.
    pub fn subscribe(&self) -> watch::Receiver<ProfileViewState> {
        self.state.subscribe()
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn error_message(&self) -> Option<String> {
        self.state.borrow().error_message.clone()
    }

    pub fn user(&self) -> Option<GithubUser> {
        self.state.borrow().user.clone()
    }

    pub fn repos(&self) -> Vec<GithubRepo> {
        self.state.borrow().repos.clone()
    }
}
