// ---------------------------------------------------------------------------
// Display-node cache – stale/fresh tracking shared by charts and tables
// ---------------------------------------------------------------------------

/// Caches one display artifact, keyed by the filtered-view version plus the
/// node's own parameters.
///
/// A node is *fresh* while the stored key equals the current one and
/// *stale* otherwise; reading a stale cache rebuilds the artifact exactly
/// once, synchronously. Sibling nodes are independent: each owns its cache.
#[derive(Debug)]
pub struct DisplayCache<P, A> {
    key: Option<(u64, P)>,
    artifact: Option<A>,
    rebuilds: u64,
}

impl<P: PartialEq, A> DisplayCache<P, A> {
    pub fn new() -> Self {
        Self {
            key: None,
            artifact: None,
            rebuilds: 0,
        }
    }

    /// Current artifact, rebuilding it first when the view version or the
    /// parameters changed since the last read.
    pub fn read(&mut self, view_version: u64, params: P, build: impl FnOnce() -> A) -> &A {
        let key = (view_version, params);
        if self.key.as_ref() != Some(&key) {
            self.key = Some(key);
            self.artifact = None;
            self.rebuilds += 1;
        }
        self.artifact.get_or_insert_with(build)
    }

    /// Number of artifact rebuilds so far, observable in tests.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}

impl<P: PartialEq, A> Default for DisplayCache<P, A> {
    fn default() -> Self {
        Self::new()
    }
}
