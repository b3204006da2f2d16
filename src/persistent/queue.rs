//! Persistent (immutable) FIFO queue.
//!
//! This module provides [`PersistentQueue`], an immutable queue built from
//! two [`PersistentStack`]s with an amortized rebalancing step.
//!
//! # Overview
//!
//! `PersistentQueue` uses the classic two-stack queue encoding:
//!
//! - O(1) `enqueue`
//! - O(1) amortized `dequeue` (worst case O(n) when the output stack
//!   must be rebuilt)
//! - O(1) `head`
//! - O(1) `len` and `is_empty`
//!
//! All operations return new queues without modifying the original,
//! and structural sharing ensures memory efficiency.
//!
//! # Two-Stack Encoding
//!
//! A non-empty queue holds an `input` stack (most recently enqueued
//! element on top) and an `output` stack (oldest element on top), plus a
//! cached copy of the current head. The front-to-back order of the queue
//! is `output` from top to bottom, followed by `input` from bottom to top:
//!
//! ```text
//! enqueue 1, 2, 3, 4:      input: 4 -> 3 -> 2 (top to bottom)   output: 1
//! dequeue once (rebuild):  input: (empty)                       output: 2 -> 3 -> 4
//! ```
//!
//! `enqueue` pushes onto `input`. When a `dequeue` finds the output stack
//! exhausted, it drains `input` into a fresh reversed stack, paying O(n)
//! once for the n elements enqueued since the last rebuild; each element
//! moves through exactly one rebuild before it is dequeued, which yields
//! the amortized O(1) bound for any single chain of derived versions.
//!
//! Every value stays valid after derived versions are created, so an old
//! version may be dequeued again at any time. Re-dequeuing the same stale
//! version repeats its rebuild work; results are unaffected.
//!
//! # Examples
//!
//! ```rust
//! use batchq::persistent::PersistentQueue;
//!
//! let queue = PersistentQueue::new().enqueue(1).enqueue(2).enqueue(3);
//! assert_eq!(queue.head(), Ok(&1));
//! assert_eq!(queue.len(), 3);
//!
//! // Structural sharing: the original queue is preserved
//! let dequeued = queue.dequeue().unwrap();
//! assert_eq!(queue.head(), Ok(&1));    // Original unchanged
//! assert_eq!(dequeued.head(), Ok(&2)); // New version
//! ```
//!
//! # References
//!
//! - Okasaki, "Purely Functional Data Structures" (1998), batched queues

use std::fmt;
use std::hash::{Hash, Hasher};

use super::EmptyError;
use super::PersistentStack;

const STRUCTURE_NAME: &str = "PersistentQueue";

/// Internal representation of the queue.
///
/// The `NonEmpty` variant maintains two invariants: `output` is never
/// empty, and `cached_head` equals the top of `output`. Normalization
/// happens when values are constructed, so `head` never has to rebuild.
#[derive(Clone)]
enum QueueInner<T> {
    /// The empty queue sentinel.
    Empty,
    /// A queue holding at least one element.
    NonEmpty {
        /// Elements in enqueue order, most recently enqueued on top.
        input: PersistentStack<T>,
        /// Elements in dequeue order, oldest on top. Never empty.
        output: PersistentStack<T>,
        /// Copy of the top of `output`, so `head` is O(1).
        cached_head: T,
    },
}

/// A persistent (immutable) FIFO queue.
///
/// `PersistentQueue` is an immutable data structure built from two
/// [`PersistentStack`]s. Enqueueing and dequeueing return new queues that
/// share structure with the original, so every prior version remains
/// valid and independently usable.
///
/// Most operations require `T: Clone` because rebalancing re-conses
/// elements out of shared stack nodes; clones happen at most once per
/// element per rebuild.
///
/// # Time Complexity
///
/// | Operation  | Complexity               |
/// |------------|--------------------------|
/// | `new`      | O(1)                     |
/// | `enqueue`  | O(1)                     |
/// | `dequeue`  | O(1) amortized, O(n) worst case |
/// | `head`     | O(1)                     |
/// | `len`      | O(1)                     |
///
/// # Examples
///
/// ```rust
/// use batchq::persistent::PersistentQueue;
///
/// let queue = PersistentQueue::singleton(42);
/// assert_eq!(queue.head(), Ok(&42));
/// ```
#[derive(Clone)]
pub struct PersistentQueue<T> {
    /// Tagged empty/non-empty representation.
    inner: QueueInner<T>,
    /// Cached length for O(1) access.
    length: usize,
}

impl<T> PersistentQueue<T> {
    /// Creates a new empty queue.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use batchq::persistent::PersistentQueue;
    ///
    /// let queue: PersistentQueue<i32> = PersistentQueue::new();
    /// assert!(queue.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: QueueInner::Empty,
            length: 0,
        }
    }

    /// Returns a reference to the oldest element of the queue.
    ///
    /// Reads the cached head of the normalized representation, so no
    /// rebuild is ever triggered here.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use batchq::persistent::PersistentQueue;
    ///
    /// let queue = PersistentQueue::new().enqueue(1).enqueue(2);
    /// assert_eq!(queue.head(), Ok(&1));
    ///
    /// let empty: PersistentQueue<i32> = PersistentQueue::new();
    /// assert!(empty.head().is_err());
    /// ```
    pub fn head(&self) -> Result<&T, EmptyError> {
        match &self.inner {
            QueueInner::Empty => Err(EmptyError {
                structure_name: STRUCTURE_NAME,
                operation_name: "head",
            }),
            QueueInner::NonEmpty { cached_head, .. } => Ok(cached_head),
        }
    }

    /// Returns the number of elements in the queue.
    ///
    /// # Complexity
    ///
    /// O(1) - the length is cached
    ///
    /// # Examples
    ///
    /// ```rust
    /// use batchq::persistent::PersistentQueue;
    ///
    /// let queue = PersistentQueue::new().enqueue(1).enqueue(2);
    /// assert_eq!(queue.len(), 2);
    /// ```
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the queue contains no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use batchq::persistent::PersistentQueue;
    ///
    /// let empty: PersistentQueue<i32> = PersistentQueue::new();
    /// assert!(empty.is_empty());
    ///
    /// let non_empty = empty.enqueue(1);
    /// assert!(!non_empty.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self.inner, QueueInner::Empty)
    }

    /// Collects references to the elements in front-to-back order.
    ///
    /// The queue front is `output` read top to bottom, followed by `input`
    /// read bottom to top.
    fn elements_front_to_back(&self) -> Vec<&T> {
        match &self.inner {
            QueueInner::Empty => Vec::new(),
            QueueInner::NonEmpty { input, output, .. } => {
                let mut elements = Vec::with_capacity(self.length);
                output.for_each_top_down(|element| elements.push(element));
                let input_start = elements.len();
                input.for_each_top_down(|element| elements.push(element));
                elements[input_start..].reverse();
                elements
            }
        }
    }
}

impl<T: Clone> PersistentQueue<T> {
    /// Creates a queue containing a single element.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to store in the queue
    ///
    /// # Examples
    ///
    /// ```rust
    /// use batchq::persistent::PersistentQueue;
    ///
    /// let queue = PersistentQueue::singleton(42);
    /// assert_eq!(queue.head(), Ok(&42));
    /// assert_eq!(queue.len(), 1);
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(element: T) -> Self {
        Self::new().enqueue(element)
    }

    /// Adds an element to the back of the queue.
    ///
    /// On an empty queue the element becomes the head immediately, so it
    /// is placed directly in the output stack and the head cache rather
    /// than the input stack, avoiding a needless later rebuild. On a
    /// non-empty queue the element is pushed onto the input stack and the
    /// output stack and head cache are unchanged.
    ///
    /// # Arguments
    ///
    /// * `element` - The element to add
    ///
    /// # Returns
    ///
    /// A new queue with the element at the back
    ///
    /// # Complexity
    ///
    /// O(1) time and space
    ///
    /// # Examples
    ///
    /// ```rust
    /// use batchq::persistent::PersistentQueue;
    ///
    /// let queue = PersistentQueue::new().enqueue(1).enqueue(2);
    /// assert_eq!(queue.head(), Ok(&1));
    /// assert_eq!(queue.len(), 2);
    /// ```
    #[must_use]
    pub fn enqueue(&self, element: T) -> Self {
        match &self.inner {
            QueueInner::Empty => Self {
                inner: QueueInner::NonEmpty {
                    input: PersistentStack::new(),
                    output: PersistentStack::singleton(element.clone()),
                    cached_head: element,
                },
                length: 1,
            },
            QueueInner::NonEmpty {
                input,
                output,
                cached_head,
            } => Self {
                inner: QueueInner::NonEmpty {
                    input: input.push(element),
                    output: output.clone(),
                    cached_head: cached_head.clone(),
                },
                length: self.length + 1,
            },
        }
    }

    /// Returns the queue without its oldest element.
    ///
    /// Drops the current head off the output stack. If the remaining
    /// output is non-empty, its top becomes the new head. If both stacks
    /// are exhausted, the result is the empty queue. Otherwise the input
    /// stack is drained into a fresh reversed output stack, paying O(k)
    /// for the k elements enqueued since the last rebuild.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    ///
    /// # Complexity
    ///
    /// O(1) amortized, O(n) worst case when the output stack is rebuilt
    ///
    /// # Examples
    ///
    /// ```rust
    /// use batchq::persistent::PersistentQueue;
    ///
    /// let queue = PersistentQueue::new().enqueue(1).enqueue(2);
    /// let dequeued = queue.dequeue().unwrap();
    /// assert_eq!(dequeued.head(), Ok(&2));
    ///
    /// let empty: PersistentQueue<i32> = PersistentQueue::new();
    /// assert!(empty.dequeue().is_err());
    /// ```
    pub fn dequeue(&self) -> Result<Self, EmptyError> {
        match &self.inner {
            QueueInner::Empty => Err(EmptyError {
                structure_name: STRUCTURE_NAME,
                operation_name: "dequeue",
            }),
            QueueInner::NonEmpty { input, output, .. } => {
                let after_pop = output
                    .uncons()
                    .map_or_else(PersistentStack::new, |(_, rest)| rest);
                Ok(Self::from_stacks(input.clone(), after_pop, self.length - 1))
            }
        }
    }

    /// Builds a normalized queue from the two stacks.
    ///
    /// Restores the representation invariants: if `output` ran dry, the
    /// input stack is drained into a fresh reversed output stack; the head
    /// cache is refreshed from the resulting output top. If both stacks
    /// are empty, the result is the empty queue.
    fn from_stacks(input: PersistentStack<T>, output: PersistentStack<T>, length: usize) -> Self {
        let (input, output) = if output.is_empty() {
            (PersistentStack::new(), input.reverse())
        } else {
            (input, output)
        };
        let Ok(head) = output.peek() else {
            return Self::new();
        };
        let cached_head = head.clone();
        Self {
            inner: QueueInner::NonEmpty {
                input,
                output,
                cached_head,
            },
            length,
        }
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T> Default for PersistentQueue<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Compares queues by their logical front-to-back element order.
///
/// Two queues that reached the same element sequence through different
/// enqueue/dequeue histories have different input/output splits but still
/// compare equal.
impl<T: PartialEq> PartialEq for PersistentQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.elements_front_to_back() == other.elements_front_to_back()
    }
}

impl<T: Eq> Eq for PersistentQueue<T> {}

/// Computes a hash value for this queue.
///
/// The hash is computed by first hashing the length, then hashing each
/// element in front-to-back order, so equal queues produce equal hash
/// values regardless of their internal input/output split.
impl<T: Hash> Hash for PersistentQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.length.hash(state);
        for element in self.elements_front_to_back() {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PersistentQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.elements_front_to_back())
            .finish()
    }
}

/// Formats the queue from front to back as `[front, ..., back]`.
impl<T: fmt::Display> fmt::Display for PersistentQueue<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self.elements_front_to_back() {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Auto-Trait Expectations
// =============================================================================

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(PersistentQueue<i32>: Send, Sync);
#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(PersistentQueue<i32>: Send, Sync);

// =============================================================================
// Tests
// =============================================================================
