//! AI overview shape classification and resolution.
//!
//! The provider's `ai_overview` object arrives in several shapes. They are
//! first classified into [`AiOverviewShape`]; [`resolve`] then turns a shape
//! into a [`Resolution`], issuing the page-token fetch for the deferred shape.

use serp_api_service::{
    SearchProvider,
    types::{AiOverviewPageResponse, RawAiOverview, Reference, SearchResponse},
};
use tracing::{debug, warn};

use crate::model::{AiLink, AiOverviewStatus};

/// Every shape an `ai_overview` field can take, checked in this order.
#[derive(Debug, Clone)]
pub enum AiOverviewShape<'a> {
    /// Field missing.
    Absent,
    /// At least one reference with a link is inline.
    Embedded(&'a [Reference]),
    /// Content must be fetched with this page token.
    Deferred { page_token: &'a str },
    /// The overview object reports an error.
    ProviderError(String),
    /// Present, but none of the above.
    Empty,
}

impl<'a> AiOverviewShape<'a> {
    pub fn classify(overview: Option<&'a RawAiOverview>) -> Self {
        let Some(overview) = overview else {
            return Self::Absent;
        };

        if let Some(refs) = overview
            .reference_list()
            .filter(|refs| refs.iter().any(|r| r.href().is_some()))
        {
            return Self::Embedded(refs);
        }
        if let Some(page_token) = non_blank(overview.page_token.as_deref()) {
            return Self::Deferred { page_token };
        }
        if let Some(msg) = overview.error_message() {
            return Self::ProviderError(msg);
        }
        Self::Empty
    }
}

/// Outcome of AI overview resolution for one query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    pub status: AiOverviewStatus,
    pub links: Vec<AiLink>,
    pub has_ai: bool,
}

impl Resolution {
    fn without_links(status: AiOverviewStatus) -> Self {
        Self {
            status,
            links: Vec::new(),
            has_ai: false,
        }
    }

    fn with_links(status: AiOverviewStatus, links: Vec<AiLink>) -> Self {
        Self {
            status,
            has_ai: !links.is_empty(),
            links,
        }
    }
}

/// Resolves the AI overview of a primary search response.
///
/// Never fails: errors from the page-token fetch are reported as
/// [`AiOverviewStatus::ErrorFetchingAsync`].
pub async fn resolve<P>(provider: &P, response: &SearchResponse) -> Resolution
where
    P: SearchProvider,
{
    match AiOverviewShape::classify(response.ai_overview.as_ref()) {
        AiOverviewShape::Absent => Resolution::without_links(AiOverviewStatus::NotPresent),
        AiOverviewShape::Embedded(refs) => {
            Resolution::with_links(AiOverviewStatus::Embedded, map_references(refs))
        }
        AiOverviewShape::Deferred { page_token } => {
            debug!("AI overview deferred, fetching by page token");
            match provider.fetch_ai_overview_page(page_token).await {
                Ok(page) => resolve_page(&page),
                Err(err) => {
                    warn!(error = %err, "AI overview page fetch failed");
                    Resolution::without_links(AiOverviewStatus::ErrorFetchingAsync)
                }
            }
        }
        AiOverviewShape::ProviderError(msg) => {
            debug!(error = %msg, "AI overview reported an error");
            Resolution::without_links(AiOverviewStatus::ErrorReportedByProvider)
        }
        AiOverviewShape::Empty => {
            Resolution::without_links(AiOverviewStatus::PresentNoLinksOrToken)
        }
    }
}

/// Classifies a successful page-token response.
pub fn resolve_page(page: &AiOverviewPageResponse) -> Resolution {
    let Some(overview) = page.ai_overview.as_ref() else {
        return Resolution::without_links(AiOverviewStatus::AsyncNoLinks);
    };

    let links = overview
        .reference_list()
        .map(map_references)
        .unwrap_or_default();

    if !links.is_empty() {
        return Resolution::with_links(AiOverviewStatus::Asynchronous, links);
    }
    if let Some(msg) = overview.error_message() {
        warn!(error = %msg, "AI overview page carried an error");
        return Resolution::without_links(AiOverviewStatus::ErrorFetchingAsync);
    }
    Resolution::without_links(AiOverviewStatus::AsyncNoLinks)
}

/// References with a link, in provider order; a missing title becomes `""`.
pub fn map_references(refs: &[Reference]) -> Vec<AiLink> {
    refs.iter()
        .filter_map(|r| {
            Some(AiLink {
                text: r.title.clone().unwrap_or_default(),
                href: r.href()?.to_string(),
            })
        })
        .collect()
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.trim().is_empty())
}
