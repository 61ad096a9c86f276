use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A GitHub account's public profile, from `GET /users/{username}`.
///
/// Fields GitHub may omit or null out are optional; everything else is
/// required and a payload missing one fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GithubUser {
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: String,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

/// One public repository summary, from `GET /users/{username}/repos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GithubRepo {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
}

/// Observable presentation state owned by a ProfileLoader.
///
/// `loading` follows the profile request only; the repository list lands
/// whenever its own request settles, loading flag untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ProfileViewState {
    pub loading: bool,
    pub error_message: Option<String>,
    pub user: Option<GithubUser>,
    pub repos: Vec<GithubRepo>,
}

impl ProfileViewState {
    /// Record a fetch failure without discarding one already recorded.
    pub(crate) fn push_error(&mut self, message: String) {
        match &mut self.error_message {
            Some(existing) => {
                existing.push_str("; ");
                existing.push_str(&message);
            }
            None => self.error_message = Some(message),
        }
    }
}
