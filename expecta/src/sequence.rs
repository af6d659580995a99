//! The [`sequence`](self) module orders call expectations.
//!
//! A [`Sequence`] is a chain of links, one per expectation that was added to
//! it. A cursor points at the oldest link that may still be called. An
//! expectation may be matched if every link between the cursor and its own
//! link is ready (has reached its minimum call count). Accepting such a call
//! moves the cursor forward, which retires the skipped links for good.

use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// Ordering constraint shared by a group of call expectations.
///
/// Expectations join a sequence explicitly with `in_sequence` or
/// `add_sequence` on the expectation builder, or implicitly while an
/// [`InSequence`] guard is alive. Clones refer to the same sequence.
#[must_use]
#[derive(Default, Debug, Clone)]
pub struct Sequence {
    chain: Arc<Mutex<Chain>>,
}

impl Sequence {
    /// Create a new empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process wide unique id of the sequence.
    #[must_use]
    pub fn id(&self) -> usize {
        self.chain.lock().id
    }

    /// Append a new link to the end of the sequence.
    #[must_use]
    pub fn create_handle(&self) -> SequenceHandle {
        Chain::append(&self.chain)
    }
}

/// One link of a [`Sequence`], owned by the expectation it was created for.
///
/// From the point of view of a link, the sequence is in one of these states:
///   - blocked: an earlier link has not reached its minimum call count
///   - active:  all earlier links that were not retired are ready
///   - retired: a later link was called, this one must not be called again
///
/// Dropping a handle marks its link as ready, so an expectation that is
/// removed never blocks the rest of its sequence.
#[derive(Debug)]
pub struct SequenceHandle {
    position: usize,
    sequence_id: usize,
    chain: Arc<Mutex<Chain>>,
}

impl SequenceHandle {
    /// `true` if the expectation of this link may be called now.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.chain.lock().is_active(self.position)
    }

    /// Move the cursor to this link, retiring every link before it.
    /// Does nothing while the link is blocked.
    pub fn activate(&self) {
        self.chain.lock().activate(self.position);
    }

    #[must_use]
    pub fn is_done(&self) -> bool {
        self.chain.lock().cursor > self.position
    }

    #[must_use]
    pub fn sequence_id(&self) -> usize {
        self.sequence_id
    }

    /// Mark the link as ready, unblocking the links after it.
    pub fn set_ready(&self) {
        self.chain.lock().update(self.position, |link| link.ready = true);
    }

    /// Retire the link if the cursor currently points at it.
    pub fn set_done(&self) {
        let mut chain = self.chain.lock();
        if chain.cursor == self.position {
            chain.cursor += 1;
        }
    }

    /// Set the text used for this link in out of sequence reports.
    pub fn set_description(&self, value: String) {
        self.chain.lock().update(self.position, |link| link.label = value);
    }

    /// Labels of the links that still block this one.
    #[must_use]
    pub fn unsatisfied(&self) -> Vec<String> {
        let chain = self.chain.lock();
        let blocking = chain.links.get(chain.cursor..self.position).unwrap_or_default();

        blocking
            .iter()
            .filter(|link| !link.ready)
            .map(|link| link.label.clone())
            .collect()
    }
}

impl Drop for SequenceHandle {
    fn drop(&mut self) {
        self.set_ready();
    }
}

/// Guard that adds every expectation declared on the current thread to its
/// sequence while it is alive.
///
/// Guards nest. Dropping a guard restores the one that was active before.
#[must_use]
#[derive(Debug)]
pub struct InSequence {
    previous: Option<Arc<Mutex<Chain>>>,
}

impl InSequence {
    /// Add expectations to `sequence` until the guard is dropped.
    pub fn new(sequence: &Sequence) -> Self {
        Self::enter(sequence.chain.clone())
    }

    /// Create a link in the sequence of the innermost guard of the current
    /// thread, `None` if no guard is alive.
    #[must_use]
    pub fn create_handle() -> Option<SequenceHandle> {
        CURRENT.with(|current| current.borrow().as_ref().map(Chain::append))
    }

    fn enter(chain: Arc<Mutex<Chain>>) -> Self {
        let previous = CURRENT.with(|current| current.borrow_mut().replace(chain));

        Self { previous }
    }
}

impl Default for InSequence {
    fn default() -> Self {
        Self::enter(Arc::default())
    }
}

impl Drop for InSequence {
    fn drop(&mut self) {
        let previous = self.previous.take();
        CURRENT.with(|current| *current.borrow_mut() = previous);
    }
}

#[derive(Debug)]
struct Chain {
    id: usize,
    links: Vec<Link>,
    cursor: usize,
}

#[derive(Default, Debug)]
struct Link {
    ready: bool,
    label: String,
}

impl Chain {
    fn append(chain: &Arc<Mutex<Self>>) -> SequenceHandle {
        let mut guard = chain.lock();
        let position = guard.links.len();
        guard.links.push(Link::default());

        tracing::trace!(sequence = guard.id, position, "sequence link created");

        SequenceHandle {
            position,
            sequence_id: guard.id,
            chain: chain.clone(),
        }
    }

    fn is_active(&self, position: usize) -> bool {
        self.links
            .get(self.cursor..position)
            .is_some_and(|links| links.iter().all(|link| link.ready))
    }

    fn activate(&mut self, position: usize) {
        if self.is_active(position) {
            self.cursor = position;
        }
    }

    fn update<F: FnOnce(&mut Link)>(&mut self, position: usize, f: F) {
        if let Some(link) = self.links.get_mut(position) {
            f(link);
        }
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self {
            id: NEXT_ID.fetch_add(1, Ordering::Relaxed),
            links: Vec::new(),
            cursor: 0,
        }
    }
}

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static CURRENT: RefCell<Option<Arc<Mutex<Chain>>>> = const { RefCell::new(None) };
}

#[cfg(test)]
mod tests {
    use super::{InSequence, Sequence};

    #[test]
    fn only_first_link_starts_active() {
        let seq = Sequence::new();
        let a = seq.create_handle();
        let b = seq.create_handle();

        assert!(a.is_active());
        assert!(!b.is_active());
        assert!(!a.is_done());
    }

    #[test]
    fn calling_a_later_link_retires_earlier_ones() {
        let seq = Sequence::new();
        let a = seq.create_handle();
        let b = seq.create_handle();

        a.set_ready();
        assert!(b.is_active());
        assert!(!a.is_done());

        b.activate();
        assert!(a.is_done());
        assert!(!a.is_active());
    }

    #[test]
    fn blocked_link_does_not_move_the_cursor() {
        let seq = Sequence::new();
        let a = seq.create_handle();
        let _b = seq.create_handle();
        let c = seq.create_handle();

        a.set_ready();
        assert!(!c.is_active());

        c.activate();
        assert!(!a.is_done());
        assert!(a.is_active());
    }

    #[test]
    fn set_done_only_retires_the_current_link() {
        let seq = Sequence::new();
        let a = seq.create_handle();
        let b = seq.create_handle();

        b.set_done();
        assert!(!a.is_done());

        a.set_done();
        assert!(a.is_done());
        assert!(b.is_active());
    }

    #[test]
    fn unsatisfied_lists_blocking_links() {
        let seq = Sequence::new();
        let a = seq.create_handle();
        let b = seq.create_handle();
        let c = seq.create_handle();

        a.set_description("a".into());
        b.set_description("b".into());
        b.set_ready();

        assert!(!c.is_active());
        assert_eq!(vec!["a".to_owned()], c.unsatisfied());
        assert!(a.unsatisfied().is_empty());
    }

    #[test]
    fn dropped_handle_counts_as_ready() {
        let seq = Sequence::new();
        let a = seq.create_handle();
        let b = seq.create_handle();

        drop(a);
        assert!(b.is_active());
    }

    #[test]
    fn in_sequence_scopes_nest() {
        assert!(InSequence::create_handle().is_none());

        {
            let _outer = InSequence::default();
            assert!(InSequence::create_handle().is_some());

            {
                let seq = Sequence::new();
                let _inner = InSequence::new(&seq);
                let handle = InSequence::create_handle().map(|h| h.sequence_id());
                assert_eq!(Some(seq.id()), handle);
            }

            assert!(InSequence::create_handle().is_some());
        }

        assert!(InSequence::create_handle().is_none());
    }
}
