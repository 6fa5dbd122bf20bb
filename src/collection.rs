//! Collection fetcher: list of references, then every detail at once

use futures_util::future::try_join_all;

use crate::api::wire::{ListResponse, NamedResource};
use crate::api::{Endpoints, FetchError, Phase, Upstream};
use crate::mapper;
use crate::state::EntitySummary;

/// All-or-nothing: the first failed detail aborts the whole fetch.
/// Results keep list-endpoint order regardless of completion order.
pub async fn fetch_collection<U>(
    upstream: &U,
    endpoints: &Endpoints,
    limit: usize,
) -> Result<Vec<EntitySummary>, FetchError>
where
    U: Upstream + ?Sized,
{
    let references = fetch_references(upstream, endpoints, limit).await?;
    tracing::debug!(count = references.len(), "fetching details");

    let summaries = try_join_all(
        references
            .iter()
            .map(|reference| fetch_summary(upstream, endpoints, reference)),
    )
    .await?;

    tracing::info!(count = summaries.len(), "collection loaded");
    Ok(summaries)
}

async fn fetch_references<U>(
    upstream: &U,
    endpoints: &Endpoints,
    limit: usize,
) -> Result<Vec<NamedResource>, FetchError>
where
    U: Upstream + ?Sized,
{
    let raw = upstream
        .get_json(&endpoints.list(limit))
        .await
        .map_err(|err| err.in_phase(Phase::List))?;
    let response: ListResponse = serde_json::from_value(raw)
        .map_err(|err| FetchError::MalformedData(err.to_string()).in_phase(Phase::List))?;
    Ok(response.results)
}

async fn fetch_summary<U>(
    upstream: &U,
    endpoints: &Endpoints,
    reference: &NamedResource,
) -> Result<EntitySummary, FetchError>
where
    U: Upstream + ?Sized,
{
    let url = if reference.url.is_empty() {
        endpoints.detail(&reference.name)
    } else {
        reference.url.clone()
    };
    let raw = upstream.get_json(&url).await.map_err(|err| {
        tracing::warn!(name = %reference.name, error = %err, "detail fetch failed");
        err.in_phase(Phase::Detail)
    })?;
    mapper::map_summary(&raw).map_err(|err| err.in_phase(Phase::Detail))
}
