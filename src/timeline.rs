/// A bounded cursor over a newest-first commit hash sequence.
///
/// Directionality inverts array-growth intuition on purpose: "next" moves
/// toward newer commits, which is a *lower* index, because the sequence is
/// stored time-descending like the graph input. The cursor is owned by one
/// UI session; it is not meant for concurrent mutation.
#[derive(Debug, Default)]
pub struct TimelineCursor {
    hashes: Vec<String>,
    current_index: usize,
}

impl TimelineCursor {
    pub fn new() -> Self {
        TimelineCursor::default()
    }

    /// Replace the hash sequence and reset the cursor to the newest commit.
    /// Safe to call repeatedly, e.g. after a "load more" refetch.
    pub fn initialize(&mut self, hashes: Vec<String>) {
        self.hashes = hashes;
        self.current_index = 0;
    }

    /// Move toward newer commits. Returns the new current hash, or None
    /// (leaving the cursor untouched) when already at the newest.
    pub fn next(&mut self) -> Option<&str> {
        if self.current_index == 0 {
            return None;
        }
        self.current_index -= 1;
        self.current_hash()
    }

    /// Move toward older commits. Returns the new current hash, or None
    /// (leaving the cursor untouched) when already at the oldest.
    pub fn previous(&mut self) -> Option<&str> {
        if self.current_index + 1 >= self.hashes.len() {
            return None;
        }
        self.current_index += 1;
        self.current_hash()
    }

    /// Jump the cursor to `hash`. On a miss the cursor stays where it was and
    /// the caller gets `false`; a miss usually means the commit fell outside
    /// the currently fetched window, not a fatal condition.
    pub fn jump_to(&mut self, hash: &str) -> bool {
        match self.hashes.iter().position(|h| h == hash) {
            Some(index) => {
                self.current_index = index;
                true
            }
            None => false,
        }
    }

    pub fn count(&self) -> usize {
        self.hashes.len()
    }

    pub fn current_hash(&self) -> Option<&str> {
        self.hashes.get(self.current_index).map(|h| h.as_str())
    }

    pub fn can_go_next(&self) -> bool {
        !self.hashes.is_empty() && self.current_index > 0
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_index + 1 < self.hashes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(hashes: &[&str]) -> TimelineCursor {
        let mut c = TimelineCursor::new();
        c.initialize(hashes.iter().map(|h| h.to_string()).collect());
        c
    }

    #[test]
    fn test_empty_cursor() {
        let c = TimelineCursor::new();
        assert_eq!(c.count(), 0);
        assert_eq!(c.current_hash(), None);
        assert!(!c.can_go_next());
        assert!(!c.can_go_previous());
    }

    #[test]
    fn test_initialize_resets_to_newest() {
        let mut c = cursor(&["c3", "c2", "c1"]);
        c.previous();
        c.initialize(vec!["d2".to_string(), "d1".to_string()]);
        assert_eq!(c.current_hash(), Some("d2"));
        assert_eq!(c.count(), 2);
    }

    #[test]
    fn test_next_is_noop_at_newest() {
        let mut c = cursor(&["c3", "c2", "c1"]);
        assert_eq!(c.next(), None);
        assert_eq!(c.current_hash(), Some("c3"));
    }

    #[test]
    fn test_previous_walks_toward_older() {
        let mut c = cursor(&["c3", "c2", "c1"]);
        assert_eq!(c.previous(), Some("c2"));
        assert_eq!(c.previous(), Some("c1"));
        // At the oldest commit: no-op.
        assert_eq!(c.previous(), None);
        assert_eq!(c.current_hash(), Some("c1"));
    }

    #[test]
    fn test_next_walks_toward_newer() {
        let mut c = cursor(&["c3", "c2", "c1"]);
        c.jump_to("c1");
        assert_eq!(c.next(), Some("c2"));
        assert_eq!(c.next(), Some("c3"));
        assert_eq!(c.next(), None);
    }

    #[test]
    fn test_jump_to_hit_and_miss() {
        let mut c = cursor(&["c3", "c2", "c1"]);
        assert!(c.jump_to("c2"));
        assert_eq!(c.current_hash(), Some("c2"));

        // Miss: state unchanged, boolean failure.
        assert!(!c.jump_to("unknown"));
        assert_eq!(c.current_hash(), Some("c2"));
    }

    #[test]
    fn test_bounds_flags() {
        let mut c = cursor(&["c2", "c1"]);
        assert!(!c.can_go_next());
        assert!(c.can_go_previous());
        c.previous();
        assert!(c.can_go_next());
        assert!(!c.can_go_previous());
    }
}
