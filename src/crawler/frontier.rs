//! Frontier and visited-set bookkeeping
//!
//! The frontier holds URLs that were discovered but not yet claimed for
//! fetching. It is a FIFO queue so crawl order is breadth-first and
//! reproducible, paired with a membership set so that a URL is queued at
//! most once. The visited set records every URL a fetch was attempted for.
//!
//! Both structures are owned by the coordinator task and are never shared
//! across threads.

use std::collections::{HashSet, VecDeque};
use url::Url;

/// URLs discovered but not yet fetched
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Url>,
    queued: HashSet<Url>,
}

impl Frontier {
    /// Creates a frontier holding exactly the seed URL
    pub fn new(seed: Url) -> Self {
        let mut frontier = Self::default();
        frontier.push(seed);
        frontier
    }

    /// Removes the oldest queued URL
    pub fn pop(&mut self) -> Option<Url> {
        let url = self.queue.pop_front()?;
        self.queued.remove(&url);
        Some(url)
    }

    /// Merges newly extracted links into the frontier
    ///
    /// Links already visited or already queued are skipped, which keeps the
    /// invariant that the frontier never holds a visited URL. New links are
    /// appended in iteration order.
    ///
    /// # Returns
    ///
    /// The number of links actually added
    pub fn merge<I>(&mut self, links: I, visited: &VisitedSet) -> usize
    where
        I: IntoIterator<Item = Url>,
    {
        let mut added = 0;
        for link in links {
            if !visited.contains(&link) && self.push(link) {
                added += 1;
            }
        }
        added
    }

    /// Returns true if the URL is waiting in the frontier
    pub fn contains(&self, url: &Url) -> bool {
        self.queued.contains(url)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    fn push(&mut self, url: Url) -> bool {
        if !self.queued.insert(url.clone()) {
            return false;
        }
        self.queue.push_back(url);
        true
    }
}

/// URLs for which a fetch has been attempted
///
/// The set only grows. Its size is the authoritative pages-crawled counter.
#[derive(Debug, Default)]
pub struct VisitedSet {
    urls: HashSet<Url>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims a URL for fetching
    ///
    /// Compare-and-insert: returns `true` if the URL was not visited before
    /// and is now, `false` if it had already been claimed.
    pub fn claim(&mut self, url: &Url) -> bool {
        if self.urls.contains(url) {
            return false;
        }
        self.urls.insert(url.clone())
    }

    pub fn contains(&self, url: &Url) -> bool {
        self.urls.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    /// Consumes the set, returning URLs sorted by their string form
    pub fn into_sorted_vec(self) -> Vec<Url> {
        let mut urls: Vec<Url> = self.urls.into_iter().collect();
        urls.sort();
        urls
    }
}
