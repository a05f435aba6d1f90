// ============================================================================
// REACTIVITY - Sistema de notificaciones/subscribers para reactividad
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

type Callback = Rc<dyn Fn()>;

/// Handle devuelto por `subscribe`, sirve para desuscribirse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Registry {
    next_id: u64,
    callbacks: Vec<(SubscriptionId, Callback)>,
}

/// Lista compartida de subscribers; los clones notifican a los mismos
#[derive(Clone, Default)]
pub struct Subscribers {
    registry: Rc<RefCell<Registry>>,
}

impl Subscribers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suscribirse a cambios
    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let mut registry = self.registry.borrow_mut();
        registry.next_id += 1;
        let id = SubscriptionId(registry.next_id);
        registry.callbacks.push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.registry
            .borrow_mut()
            .callbacks
            .retain(|(existing, _)| *existing != id);
    }

    pub fn len(&self) -> usize {
        self.registry.borrow().callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Notificar a todos los subscribers
    ///
    /// Se copia la lista antes de llamar: un callback puede (des)suscribirse.
    pub fn notify(&self) {
        let callbacks: Vec<Callback> = self
            .registry
            .borrow()
            .callbacks
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in callbacks {
            callback();
        }
    }
}

impl std::fmt::Debug for Subscribers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscribers").field("len", &self.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn notify_reaches_every_subscriber_until_unsubscribed() {
        let subscribers = Subscribers::new();
        let hits = Rc::new(Cell::new(0));
        assert!(subscribers.is_empty());

        let first = {
            let hits = hits.clone();
            subscribers.subscribe(move || hits.set(hits.get() + 1))
        };
        {
            let hits = hits.clone();
            subscribers.subscribe(move || hits.set(hits.get() + 10));
        }

        subscribers.notify();
        assert_eq!(hits.get(), 11);

        subscribers.unsubscribe(first);
        subscribers.notify();
        assert_eq!(hits.get(), 21);
        assert_eq!(subscribers.len(), 1);
    }

    #[test]
    fn callback_may_subscribe_during_notify() {
        let subscribers = Subscribers::new();
        let inner = subscribers.clone();
        subscribers.subscribe(move || {
            inner.subscribe(|| {});
        });

        subscribers.notify();
        assert_eq!(subscribers.len(), 2);
    }
}
