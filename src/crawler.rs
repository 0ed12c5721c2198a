use crate::fetch::PageFetcher;
use crate::filter::LinkResolver;
use crate::parsers::html;
use crate::results::PageRecord;
use crate::visited::VisitedSet;
use scraper::Selector;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// State shared by every branch of one crawl. Built once per seed; two
/// concurrent seeds never share trackers.
pub struct CrawlContext {
    fetcher: Arc<dyn PageFetcher>,
    selection: Selector,
    resolver: LinkResolver,
    visited: VisitedSet,
    permits: Semaphore,
}

impl CrawlContext {
    pub fn new(
        fetcher: Arc<dyn PageFetcher>,
        selection: Selector,
        resolver: LinkResolver,
        max_concurrency: usize,
    ) -> Self {
        Self {
            fetcher,
            selection,
            resolver,
            visited: VisitedSet::new(),
            permits: Semaphore::new(max_concurrency.max(1)),
        }
    }
}

/// Crawl one site starting from `seed`, following same-origin links
/// down to `max_depth` hops, and return every harvested record.
///
/// Each node fans its surviving links out as concurrent sub-crawls and
/// waits for all of them before returning, so the returned collection
/// is complete for the whole subtree. A node's own record precedes its
/// descendants'; siblings merge in completion order, which is not
/// deterministic.
pub async fn crawl_site(ctx: Arc<CrawlContext>, seed: String, max_depth: usize) -> Vec<PageRecord> {
    visit(ctx, seed, max_depth).await
}

type VisitFuture = Pin<Box<dyn Future<Output = Vec<PageRecord>> + Send>>;

/// One node of the traversal. Boxed because the recursion happens
/// through spawned child tasks.
fn visit(ctx: Arc<CrawlContext>, url: String, depth_budget: usize) -> VisitFuture {
    Box::pin(async move {
        // Budget exhausted: no fetch, no claim
        if depth_budget == 0 {
            return Vec::new();
        }

        // Exactly one branch ever owns a URL
        if !ctx.visited.try_claim(&url).await {
            ::log::debug!("already visited: {}", url);
            return Vec::new();
        }

        ::log::info!("visiting: {}", url);

        // The permit caps in-flight fetches across the whole crawl. It
        // must be released before the fan-out below, or deep crawls
        // would starve their own children.
        let body = {
            let _permit = ctx.permits.acquire().await.expect("crawl semaphore closed");
            match ctx.fetcher.fetch(&url).await {
                Ok(body) => body,
                Err(err) => {
                    ::log::warn!("fetch failed for {}: {}", url, err);
                    return Vec::new();
                }
            }
        };

        let page = html::extract(&body, &ctx.selection);

        let mut records = Vec::new();
        if !page.text.is_empty() {
            records.push(PageRecord::new(page.title, url.clone(), page.text));
        }

        let targets = ctx.resolver.resolve_page_links(&page.links, &url);

        let mut children = JoinSet::new();
        for link in targets {
            children.spawn(visit(Arc::clone(&ctx), link, depth_budget - 1));
        }

        // Fan-in: wait for every child, merging in completion order
        while let Some(joined) = children.join_next().await {
            match joined {
                Ok(sub_records) => records.extend(sub_records),
                Err(err) => ::log::error!("crawl task failed: {}", err),
            }
        }

        records
    })
}
