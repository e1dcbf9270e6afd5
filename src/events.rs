//! Explicit observer registration with scoped unsubscription.
//!
//! A [`Subscription`] keeps its callback registered for exactly as long as it
//! is alive. Dropping it unregisters the callback.

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use uuid::Uuid;

type Callback<E> = Arc<dyn Fn(&E) + Send + Sync>;

struct Registry<E> {
	next_id:   u64,
	callbacks: Vec<(u64, Callback<E>)>,
}

/// A set of callbacks interested in events of type `E`.
pub struct Observers<E> {
	registry: Arc<Mutex<Registry<E>>>,
}

impl<E> Default for Observers<E> {
	fn default() -> Self { Self { registry: Arc::new(Mutex::new(Registry { next_id: 0, callbacks: Vec::new() })) } }
}

impl<E: 'static> Observers<E> {
	pub fn new() -> Self { Self::default() }

	/// Registers `callback` until the returned subscription is dropped.
	#[must_use = "dropping the subscription unregisters the callback immediately"]
	pub fn subscribe<F>(&self, callback: F) -> Subscription<E>
	where
		F: Fn(&E) + Send + Sync + 'static,
	{
		let mut registry = self.registry.lock();
		let id = registry.next_id;
		registry.next_id += 1;
		let callback: Callback<E> = Arc::new(callback);
		registry.callbacks.push((id, callback));
		Subscription { id, registry: Arc::downgrade(&self.registry) }
	}

	/// Calls every live callback with `event`.
	///
	/// Callbacks run outside the registry lock, so they may subscribe or drop
	/// subscriptions themselves.
	pub fn publish(&self, event: &E) {
		let callbacks: Vec<Callback<E>> = self.registry.lock().callbacks.iter().map(|(_, cb)| Arc::clone(cb)).collect();
		for callback in callbacks {
			callback(event);
		}
	}

	pub fn len(&self) -> usize { self.registry.lock().callbacks.len() }

	pub fn is_empty(&self) -> bool { self.len() == 0 }
}

impl<E> std::fmt::Debug for Observers<E> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Observers").field("subscribers", &self.registry.lock().callbacks.len()).finish()
	}
}

/// Handle tying a callback's registration to a scope.
pub struct Subscription<E> {
	id:       u64,
	registry: Weak<Mutex<Registry<E>>>,
}

impl<E> Drop for Subscription<E> {
	fn drop(&mut self) {
		if let Some(registry) = self.registry.upgrade() {
			registry.lock().callbacks.retain(|(id, _)| *id != self.id);
		}
	}
}

/// Changes to a [`crate::memory::MemoryBook`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryEvent {
	Added(Uuid),
	Updated(Uuid),
	Removed(Uuid),
}

impl MemoryEvent {
	pub const fn memory_id(&self) -> Uuid {
		match self {
			Self::Added(id) | Self::Updated(id) | Self::Removed(id) => *id,
		}
	}
}
