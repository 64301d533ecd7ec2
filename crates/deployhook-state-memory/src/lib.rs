use std::{collections::HashSet, sync::RwLock};

use async_trait::async_trait;
use dashmap::DashMap;
use deployhook_models::{Project, PushEvent, User};
use deployhook_state_interface::{Result, StateError, StateService};

/// In-memory state, lost on restart.
///
/// Seen commits are never evicted.
#[derive(Debug, Default)]
pub struct MemoryState {
    projects: DashMap<String, Project>,
    users: DashMap<String, User>,
    target_branch: RwLock<String>,
    push_events: DashMap<String, HashSet<String>>,
}

impl MemoryState {
    pub fn new<T: Into<String>>(target_branch: T) -> Self {
        Self {
            target_branch: RwLock::new(target_branch.into()),
            ..Default::default()
        }
    }
}

fn poisoned<E: ToString>(e: E) -> StateError {
    StateError::ImplementationError {
        source: e.to_string().into(),
    }
}

#[async_trait]
impl StateService for MemoryState {
    async fn projects_get(&self, name: &str) -> Result<Option<Project>> {
        Ok(self.projects.get(name).map(|p| p.value().clone()))
    }

    async fn projects_set_hook_enabled(&self, name: &str, value: bool) -> Result<Project> {
        let mut entry = self
            .projects
            .entry(name.to_owned())
            .or_insert_with(|| Project::new(name));
        entry.hook_enabled = value;
        Ok(entry.value().clone())
    }

    async fn projects_set_shell_override(&self, name: &str, path: &str) -> Result<Project> {
        let mut entry = self
            .projects
            .entry(name.to_owned())
            .or_insert_with(|| Project::new(name));
        entry.shell_override = Some(path.to_owned());
        Ok(entry.value().clone())
    }

    async fn users_get(&self, name: &str) -> Result<Option<User>> {
        Ok(self.users.get(name).map(|u| u.value().clone()))
    }

    async fn users_set_deploy_enabled(&self, name: &str, value: bool) -> Result<User> {
        let mut entry = self
            .users
            .entry(name.to_owned())
            .or_insert_with(|| User::new(name));
        entry.deploy_enabled = value;
        Ok(entry.value().clone())
    }

    async fn target_branch_get(&self) -> Result<String> {
        Ok(self.target_branch.read().map_err(poisoned)?.clone())
    }

    async fn target_branch_set(&self, branch: &str) -> Result<()> {
        *self.target_branch.write().map_err(poisoned)? = branch.to_owned();
        Ok(())
    }

    async fn push_events_check_and_insert(
        &self,
        project: &str,
        branch_ref: &str,
        commit_id: &str,
    ) -> Result<bool> {
        // The entry guard holds the shard lock until the insertion is done.
        let mut commits = self
            .push_events
            .entry(PushEvent::dedup_key_for(project, branch_ref))
            .or_default();
        Ok(commits.insert(commit_id.to_owned()))
    }

    async fn push_events_contains(
        &self,
        project: &str,
        branch_ref: &str,
        commit_id: &str,
    ) -> Result<bool> {
        Ok(self
            .push_events
            .get(&PushEvent::dedup_key_for(project, branch_ref))
            .map(|commits| commits.contains(commit_id))
            .unwrap_or(false))
    }

    async fn health_check(&self) -> Result<()> {
        let _guard = self.target_branch.read().map_err(poisoned)?;
        Ok(())
    }
}
