//! The process-wide unhandled-error interceptor slot.
//!
//! The runtime's ambient hook is shared mutable global state. Modelling it as
//! an injected [`InterceptorSlot`] keeps that dependency visible: the session
//! mutates whatever slot it was built with, and tests substitute a recording
//! fake for the real [`PanicSlot`].

use std::{
    panic::PanicHookInfo,
    sync::{Arc, Mutex, OnceLock, PoisonError},
};

use crate::panic::Fault;

/// Routine the slot delivers each unhandled error to.
pub type Interceptor = Box<dyn Fn(Fault) + Send + Sync + 'static>;

/// A mutable reference to the "current global handler".
///
/// Exactly one writer mutates the slot at a time by construction: `enable`
/// and the capture routine never run concurrently, because capture is only
/// reachable through an installed interceptor and restores the default as its
/// first step.
pub trait InterceptorSlot: Send + Sync {
    /// Make `interceptor` the process-wide handler, replacing any previous
    /// one. Repeated installation simply re-installs.
    fn install(&self, interceptor: Interceptor);

    /// Return the process to default error reporting.
    ///
    /// Must be callable from inside a delivery, on the thread the error is
    /// unwinding through.
    fn restore_default(&self);
}

type Armed = Arc<dyn Fn(Fault) + Send + Sync + 'static>;
type Fallback = Box<dyn Fn(&PanicHookInfo<'_>) + Send + Sync + 'static>;

static ARMED: Mutex<Option<Armed>> = Mutex::new(None);
static FALLBACK: OnceLock<Fallback> = OnceLock::new();

/// [`InterceptorSlot`] backed by the runtime panic hook.
///
/// The std hook cannot be modified from a panicking thread, and the capture
/// pipeline runs on exactly that thread. The slot therefore registers one
/// permanent dispatch hook and arms an interceptor behind it: `install` and
/// `restore_default` only mutate the armed state, never the std hook. While
/// disarmed, dispatch falls through to the hook that was current before
/// registration, normally the runtime default.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicSlot;

fn dispatch(info: &PanicHookInfo<'_>) {
    // Clone out and release the lock: the interceptor's first act is to
    // disarm the slot, which takes the same lock.
    let armed = ARMED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    match armed {
        Some(interceptor) => interceptor(Fault::from_panic(info)),
        None => {
            if let Some(fallback) = FALLBACK.get() {
                fallback(info);
            }
        }
    }
}

impl InterceptorSlot for PanicSlot {
    fn install(&self, interceptor: Interceptor) {
        FALLBACK.get_or_init(|| {
            let previous = std::panic::take_hook();
            std::panic::set_hook(Box::new(dispatch));
            previous
        });
        *ARMED.lock().unwrap_or_else(PoisonError::into_inner) = Some(Arc::from(interceptor));
    }

    fn restore_default(&self) {
        *ARMED.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
