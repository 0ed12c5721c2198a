use std::collections::HashSet;
use tokio::sync::Mutex;

/// Set of URLs already dispatched for visiting, shared by every branch
/// of one crawl. Entries are never removed; the crawl is single-pass.
#[derive(Debug, Default)]
pub struct VisitedSet {
    inner: Mutex<HashSet<String>>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically check membership and insert if absent. Returns true
    /// iff this call performed the insertion, i.e. the caller owns the
    /// visit. Check and insert happen under one lock so two branches
    /// can never both claim the same URL.
    pub async fn try_claim(&self, url: &str) -> bool {
        let mut seen = self.inner.lock().await;
        if seen.contains(url) {
            return false;
        }
        seen.insert(url.to_string());
        true
    }

    /// Number of URLs claimed so far
    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_first_claim_wins() {
        let visited = VisitedSet::new();
        assert!(visited.try_claim("https://a.test/").await);
        assert!(!visited.try_claim("https://a.test/").await);
        assert_eq!(visited.len().await, 1);
    }

    #[tokio::test]
    async fn test_distinct_urls_claim_independently() {
        let visited = VisitedSet::new();
        assert!(visited.try_claim("https://a.test/").await);
        assert!(visited.try_claim("https://a.test/b").await);
        assert_eq!(visited.len().await, 2);
    }

    #[tokio::test]
    async fn test_concurrent_claims_grant_exactly_one_owner() {
        let visited = Arc::new(VisitedSet::new());

        let mut handles = Vec::new();
        for _ in 0..32 {
            let visited = Arc::clone(&visited);
            handles.push(tokio::spawn(async move {
                visited.try_claim("https://a.test/race").await
            }));
        }

        let mut owners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                owners += 1;
            }
        }

        assert_eq!(owners, 1);
        assert_eq!(visited.len().await, 1);
    }
}
