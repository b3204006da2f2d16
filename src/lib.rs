//! # batchq
//!
//! Persistent (immutable) stack and batched queue data structures with
//! structural sharing.
//!
//! ## Overview
//!
//! This library provides two functional data structures whose values are
//! never mutated after construction:
//!
//! - [`PersistentStack`]: an immutable singly-linked stack with O(1)
//!   `push`, `pop`, and `peek`
//! - [`PersistentQueue`]: an immutable FIFO queue built from two stacks,
//!   with amortized O(1) `enqueue`, `dequeue`, and `head`
//!
//! Every operation returns a new value that shares structure with its
//! predecessor, so prior versions stay valid and independently usable
//! after derived versions are created.
//!
//! ## Feature Flags
//!
//! - `arc`: use `Arc` instead of `Rc` for node sharing, so overlapping
//!   versions may be held from multiple threads
//!
//! ## Example
//!
//! ```rust
//! use batchq::prelude::*;
//!
//! let queue = PersistentQueue::new().enqueue(1).enqueue(2);
//! let dequeued = queue.dequeue().unwrap();
//!
//! assert_eq!(queue.head(), Ok(&1));    // Original unchanged
//! assert_eq!(dequeued.head(), Ok(&2)); // New version
//! ```
//!
//! [`PersistentStack`]: persistent::PersistentStack
//! [`PersistentQueue`]: persistent::PersistentQueue

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types.
///
/// # Usage
///
/// ```rust
/// use batchq::prelude::*;
/// ```
pub mod prelude {
    pub use crate::persistent::*;
}

pub mod persistent;
