use leptos::prelude::*;
use leptos::tachys::html::element::ElementType;
use leptos::wasm_bindgen::JsCast;

use super::{Scope, Target};

/// The animatable element behind a node ref, once it is mounted.
///
/// Reads the ref without tracking so a setup closure never re-runs.
pub fn target<E>(node: NodeRef<E>) -> Option<Target>
where
    E: ElementType,
    E::Output: JsCast + Clone + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        node.get_untracked().map(JsCast::unchecked_into)
    }

    #[cfg(not(feature = "hydrate"))]
    {
        let _ = node;
        None
    }
}

/// Open an animation scope for the calling component.
///
/// `setup` runs once, after the component's node refs are mounted, and
/// receives the scope every primitive should be registered in. The scope is
/// reverted when the component is cleaned up, which also covers re-mounts
/// caused by a parent re-rendering it with new props.
pub fn use_animation_scope(setup: impl FnOnce(&Scope) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use crate::core::motion::AnimationScope;

        let scope = StoredValue::new_local(None::<Scope>);
        let mut pending = Some(setup);

        Effect::new(move |_| {
            if let Some(setup) = pending.take() {
                let opened = AnimationScope::new(super::driver::shared_engine());
                setup(&opened);
                scope.set_value(Some(opened));
            }
        });

        on_cleanup(move || {
            if let Some(opened) = scope.try_update_value(Option::take).flatten() {
                opened.revert();
            }
        });
    }

    #[cfg(not(feature = "hydrate"))]
    drop(setup);
}

/// Listen on `window` while the calling component is mounted.
///
/// The listener is detached when the component is cleaned up; dropping a
/// [`WindowListenerHandle`] alone leaves it registered.
#[cfg(feature = "hydrate")]
pub fn use_window_listener<E>(event: E, handler: impl Fn(E::EventType) + 'static)
where
    E: leptos::ev::EventDescriptor + 'static,
    E::EventType: JsCast,
{
    let handle = window_event_listener(event, handler);
    detach_on_cleanup(move || handle.remove());
}

#[cfg(any(feature = "hydrate", test))]
fn detach_on_cleanup(detach: impl FnOnce() + Send + Sync + 'static) {
    on_cleanup(detach);
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use leptos::reactive::owner::Owner;

    use super::*;

    #[test]
    fn test_listener_is_detached_once_on_cleanup() {
        let detached = Arc::new(AtomicUsize::new(0));
        let owner = Owner::new();

        owner.with(|| {
            let detached = Arc::clone(&detached);
            detach_on_cleanup(move || {
                detached.fetch_add(1, Ordering::SeqCst);
            });
        });
        assert_eq!(detached.load(Ordering::SeqCst), 0);

        owner.cleanup();
        assert_eq!(detached.load(Ordering::SeqCst), 1);

        owner.cleanup();
        assert_eq!(detached.load(Ordering::SeqCst), 1);
    }
}
