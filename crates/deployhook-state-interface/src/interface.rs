use async_trait::async_trait;
use deployhook_models::{Project, User};

use crate::{Result, StateError};

/// Process-wide deploy state: toggles, overrides, target branch and seen pushes.
#[async_trait]
pub trait StateService: Send + Sync {
    async fn projects_get(&self, name: &str) -> Result<Option<Project>>;
    async fn projects_get_expect(&self, name: &str) -> Result<Project> {
        self.projects_get(name)
            .await?
            .ok_or_else(|| StateError::UnknownProject(name.into()))
    }
    /// Creates the project when unknown.
    async fn projects_set_hook_enabled(&self, name: &str, value: bool) -> Result<Project>;
    /// Creates the project when unknown.
    async fn projects_set_shell_override(&self, name: &str, path: &str) -> Result<Project>;

    async fn users_get(&self, name: &str) -> Result<Option<User>>;
    async fn users_get_expect(&self, name: &str) -> Result<User> {
        self.users_get(name)
            .await?
            .ok_or_else(|| StateError::UnknownUser(name.into()))
    }
    /// Creates the user when unknown.
    async fn users_set_deploy_enabled(&self, name: &str, value: bool) -> Result<User>;

    async fn target_branch_get(&self) -> Result<String>;
    async fn target_branch_set(&self, branch: &str) -> Result<()>;

    /// Records a commit for a project branch.
    ///
    /// Returns `false` if the commit was already recorded. Lookup and insertion
    /// happen as one atomic step for a given project branch.
    async fn push_events_check_and_insert(
        &self,
        project: &str,
        branch_ref: &str,
        commit_id: &str,
    ) -> Result<bool>;
    async fn push_events_contains(
        &self,
        project: &str,
        branch_ref: &str,
        commit_id: &str,
    ) -> Result<bool>;

    async fn health_check(&self) -> Result<()>;
}
