//! Storage contract for planning drafts.

use std::future::Future;

use models_planning::draft::{DraftScope, PlanningDraft};
use models_planning::tenant::TenantContext;

use crate::domain::model::{DraftError, SaveDraftError};

/// Store of planning drafts.
///
/// A draft row is keyed by its scope: location, template and resolved week.
/// The store tolerates several rows for one scope; reads prefer the most
/// recently updated.
pub trait DraftRepository: Clone + Send + Sync + 'static {
    /// Saves planning work for a scope, updating the given draft or
    /// inserting a new one. The saved row always carries draft status,
    /// also when it was published before.
    fn save(
        &self,
        ctx: &TenantContext,
        scope: DraftScope,
        draft_id: Option<&str>,
    ) -> impl Future<Output = Result<PlanningDraft, SaveDraftError>> + Send;

    /// Publishes planning work for a scope, same upsert as `save`.
    /// Publishing only flips the status; the planned shifts stay editable.
    fn publish(
        &self,
        ctx: &TenantContext,
        scope: DraftScope,
        draft_id: Option<&str>,
    ) -> impl Future<Output = Result<PlanningDraft, SaveDraftError>> + Send;

    /// Deletes a draft without touching its shifts. Removing an id that is
    /// already gone succeeds and reports `false`.
    fn delete(
        &self,
        ctx: &TenantContext,
        draft_id: &str,
    ) -> impl Future<Output = Result<bool, DraftError>> + Send;

    /// Work in progress, most recently updated first.
    fn list_drafts(
        &self,
        ctx: &TenantContext,
    ) -> impl Future<Output = Result<Vec<PlanningDraft>, DraftError>> + Send;

    /// Published plans, week descending with the `no-week` sentinel last,
    /// then most recently updated first.
    fn list_published(
        &self,
        ctx: &TenantContext,
    ) -> impl Future<Output = Result<Vec<PlanningDraft>, DraftError>> + Send;

    /// The most recently updated draft row for a scope, or `None`.
    fn latest_for_scope(
        &self,
        ctx: &TenantContext,
        scope: &DraftScope,
    ) -> impl Future<Output = Result<Option<PlanningDraft>, DraftError>> + Send;
}

/// Checks a draft scope before it reaches the store. The week key needs no
/// check; resolution already turned blank input into the sentinel.
pub fn validate_scope(scope: &DraftScope) -> Result<(), SaveDraftError> {
    if scope.location_id.trim().is_empty() {
        return Err(SaveDraftError::MissingField("location_id"));
    }
    if scope.planning_id.trim().is_empty() {
        return Err(SaveDraftError::MissingField("planning_id"));
    }
    Ok(())
}
