//! Handler trait and type erasure.
//!
//! # How handlers are stored
//!
//! The route table holds handlers of *different* concrete types in a single
//! `Vec`, so handlers are stored as **trait objects** (`dyn ErasedHandler`)
//! behind a common interface. A handler is any function of the shape
//!
//! ```text
//! fn name(body: &Body, params: &[String]) -> impl IntoEnvelope
//! ```
//!
//! The body capability arrives as an explicit parameter; no implicit
//! request context is bound behind the scenes. Captured parameters
//! arrive positionally, in pattern order; pattern and handler are authored
//! symmetrically and the router does not validate arity.
//!
//! The chain from user code to vtable call is:
//!
//! ```text
//! fn show(body: &Body, params: &[String]) -> Envelope { … }   ← user writes this
//!        ↓ router.get("/api/(:any)/(:num)", show)
//! show.into_boxed_handler()                                   ← Handler blanket impl
//!        ↓
//! Arc::new(FnHandler(show))                                   ← heap-allocated wrapper
//!        ↓  stored as BoxedHandler = Arc<dyn ErasedHandler>
//! handler.call(&body, &params)  at request time               ← one vtable dispatch
//! ```
//!
//! Handlers are synchronous on purpose: resolution is a purely computational
//! traversal, and the body has already been collected by the time a handler
//! runs. The async world stops at the server boundary.

use std::sync::Arc;

use crate::body::Body;
use crate::envelope::{Envelope, IntoEnvelope};

// ── Internal types ────────────────────────────────────────────────────────────

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of the public `Handler` trait's `into_boxed_handler` method.
/// External crates cannot usefully interact with this trait.
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, body: &Body, params: &[String]) -> Envelope;
}

/// A heap-allocated, type-erased handler shared across concurrent requests.
///
/// `Arc` gives cheap, thread-safe shared ownership (one atomic reference
/// count increment per request) without copying the handler.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

// ── Public Handler trait ──────────────────────────────────────────────────────

/// Implemented for every valid route handler.
///
/// You never implement this yourself. It is automatically satisfied for any
/// function with the signature:
///
/// ```text
/// fn name(body: &Body, params: &[String]) -> impl IntoEnvelope
/// ```
///
/// The trait is **sealed** (via the private `Sealed` supertrait): only the
/// blanket impl below can satisfy it. This prevents accidental misuse and
/// keeps the API surface stable across versions.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

/// The sealing module. Because `Sealed` is private, external crates cannot
/// name it and therefore cannot implement `Handler` on their own types.
mod private {
    pub trait Sealed {}
}

// ── Blanket implementations ───────────────────────────────────────────────────

/// Implement the sealing trait for any function with the right signature.
///
/// `Fn(&Body, &[String]) -> R` covers:
///   - named `fn` items
///   - closures
///   - any struct that implements `Fn`
impl<F, R> private::Sealed for F
where
    F: Fn(&Body, &[String]) -> R + Send + Sync + 'static,
    R: IntoEnvelope,
{
}

/// Implement `Handler` for any function with the right signature.
impl<F, R> Handler for F
where
    F: Fn(&Body, &[String]) -> R + Send + Sync + 'static,
    R: IntoEnvelope,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

/// Newtype wrapper that holds a concrete handler `F` and implements
/// [`ErasedHandler`], bridging the typed world to the trait-object world.
struct FnHandler<F>(F);

impl<F, R> ErasedHandler for FnHandler<F>
where
    F: Fn(&Body, &[String]) -> R + Send + Sync,
    R: IntoEnvelope,
{
    fn call(&self, body: &Body, params: &[String]) -> Envelope {
        (self.0)(body, params).into_envelope()
    }
}
