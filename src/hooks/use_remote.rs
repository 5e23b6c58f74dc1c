use std::cell::Cell;
use std::future::Future;
use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::models::error::AppError;

/// Fetch-state wrapper around one network call's result.
///
/// The payload exists only inside `Success` and the message only inside
/// `Error`, so the invariant "no payload without success" holds by
/// construction.
#[derive(Clone, PartialEq, Debug)]
pub enum RemoteResource<T: PartialEq> {
    Idle,
    Loading,
    Success(Rc<T>),
    Error(String),
}

impl<T: PartialEq> RemoteResource<T> {
    /// Returns true if a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, RemoteResource::Loading)
    }

    /// Returns the payload if it has arrived
    pub fn data(&self) -> Option<&Rc<T>> {
        match self {
            RemoteResource::Success(data) => Some(data),
            _ => None,
        }
    }

    /// Returns the error message if the fetch failed
    pub fn error(&self) -> Option<&str> {
        match self {
            RemoteResource::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// A resource plus the callback that re-runs its fetch. Recovery from a
/// failed fetch is remount or this explicit refresh — never an automatic
/// retry.
#[derive(Clone, PartialEq)]
pub struct RemoteHandle<T: PartialEq> {
    pub resource: RemoteResource<T>,
    pub refresh: Callback<()>,
}

/// Hands out request tokens and remembers which issue is newest. A token
/// may commit state only while it is still the latest; parameter changes
/// issue a fresh token and unmount invalidates outright, so a slow response
/// that resolves out of order can never overwrite a newer one.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: Rc<Cell<u64>>,
}

impl RequestSequence {
    pub fn issue(&self) -> RequestToken {
        let id = self.latest.get() + 1;
        self.latest.set(id);
        RequestToken {
            id,
            latest: self.latest.clone(),
        }
    }

    /// Marks every outstanding token stale without issuing a new one.
    pub fn invalidate(&self) {
        self.latest.set(self.latest.get() + 1);
    }
}

/// Generation token for one logical request.
#[derive(Debug, Clone)]
pub struct RequestToken {
    id: u64,
    latest: Rc<Cell<u64>>,
}

impl RequestToken {
    pub fn is_current(&self) -> bool {
        self.id == self.latest.get()
    }
}

/// Generic fetch hook: one logical request per parameter set.
///
/// On mount and on every `params` change the previous request is cancelled
/// (cooperatively — the transport may still finish, its result is just
/// dropped), the state resets to `Loading` so stale data never shows under
/// a spinner, and the fetcher runs on the event loop.
#[hook]
pub fn use_remote<P, T, F, Fut>(params: P, fetch: F) -> RemoteHandle<T>
where
    P: Clone + PartialEq + 'static,
    T: Clone + PartialEq + 'static,
    F: Fn(P) -> Fut + 'static,
    Fut: Future<Output = Result<T, AppError>> + 'static,
{
    let resource = use_state(|| RemoteResource::<T>::Idle);
    let trigger = use_state(|| 0u32); // Manual refresh trigger
    let sequence = use_mut_ref(RequestSequence::default);

    {
        let resource = resource.clone();
        let sequence = sequence.clone();
        let trigger_value = *trigger;

        use_effect_with((params, trigger_value), move |(params, _)| {
            let token = sequence.borrow().issue();
            let params = params.clone();

            resource.set(RemoteResource::Loading);

            spawn_local(async move {
                let outcome = fetch(params).await;
                if !token.is_current() {
                    return; // Superseded or unmounted; drop the result
                }
                match outcome {
                    Ok(data) => resource.set(RemoteResource::Success(Rc::new(data))),
                    Err(e) => resource.set(RemoteResource::Error(e.to_string())),
                }
            });

            move || sequence.borrow().invalidate()
        });
    }

    let refresh = {
        let trigger = trigger.clone();
        Callback::from(move |()| trigger.set(*trigger + 1))
    };

    RemoteHandle {
        resource: (*resource).clone(),
        refresh,
    }
}
