//! Type-keyed request dispatch.
//!
//! Every [`Request`] type has exactly one [`RequestHandler`], registered
//! explicitly at startup through [`MediatorBuilder`]. [`Mediator::send`] is a
//! single lookup by the request's type; there is no handler pipeline.

use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::{ApplicationError, ApplicationResult};

/// A command or query value dispatched through the [`Mediator`].
pub trait Request: Send + 'static {
    /// Value produced by the request's handler.
    type Response: Send + 'static;

    /// Whether [`Mediator::send`] may drop the handler once it has started.
    ///
    /// Requests that write to storage set this to `false`: after dispatch
    /// they run to completion, so the caller never sees `Cancelled` for a
    /// write that was committed.
    const ABANDON_ON_CANCEL: bool = true;
}

/// Performs the use case behind one [`Request`] type.
///
/// Handlers are stateless apart from their injected services.
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    async fn handle(
        &self,
        request: R,
        cancel: CancellationToken,
    ) -> ApplicationResult<R::Response>;
}

/// Type-erased slot: always an `Arc<dyn RequestHandler<R>>` for the `R`
/// whose `TypeId` keys it.
type HandlerSlot = Arc<dyn Any + Send + Sync>;

/// Collects request-to-handler bindings before the [`Mediator`] is built.
#[derive(Default)]
pub struct MediatorBuilder {
    handlers: HashMap<TypeId, HandlerSlot>,
}

impl MediatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to request type `R`. A later binding for the same
    /// type replaces the earlier one.
    pub fn register<R, H>(mut self, handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let handler: Arc<dyn RequestHandler<R>> = Arc::new(handler);
        let replaced = self
            .handlers
            .insert(TypeId::of::<R>(), Arc::new(handler))
            .is_some();
        if replaced {
            tracing::warn!(
                request = short_type_name::<R>(),
                "Replacing previously registered request handler"
            );
        }
        self
    }

    pub fn build(self) -> Mediator {
        tracing::debug!(handlers = self.handlers.len(), "Mediator built");
        Mediator {
            handlers: Arc::new(self.handlers),
        }
    }
}

/// Routes each request to its registered handler. Cheap to clone.
#[derive(Clone)]
pub struct Mediator {
    handlers: Arc<HashMap<TypeId, HandlerSlot>>,
}

impl Mediator {
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::new()
    }

    /// Whether a handler is bound for request type `R`.
    pub fn handles<R: Request>(&self) -> bool {
        self.handler::<R>().is_some()
    }

    /// Dispatch `request` to its handler.
    ///
    /// Fails with [`ApplicationError::HandlerNotRegistered`] if nothing is
    /// bound for `R`, and with [`ApplicationError::Cancelled`] if `cancel`
    /// has already fired. Once dispatched, a request with
    /// [`Request::ABANDON_ON_CANCEL`] is raced against `cancel` and its
    /// handler future is dropped at the current suspension point when the
    /// token fires first. Other requests always run to completion.
    pub async fn send<R: Request>(
        &self,
        request: R,
        cancel: CancellationToken,
    ) -> ApplicationResult<R::Response> {
        let request_name = short_type_name::<R>();
        let handler = self
            .handler::<R>()
            .ok_or(ApplicationError::HandlerNotRegistered(request_name))?;

        if cancel.is_cancelled() {
            tracing::debug!(request = request_name, "Request cancelled before dispatch");
            return Err(ApplicationError::Cancelled);
        }

        tracing::debug!(request = request_name, "Dispatching request");
        let result = if R::ABANDON_ON_CANCEL {
            tokio::select! {
                biased;
                () = cancel.cancelled() => {
                    tracing::warn!(request = request_name, "Request cancelled while in flight");
                    return Err(ApplicationError::Cancelled);
                }
                result = handler.handle(request, cancel.clone()) => result,
            }
        } else {
            handler.handle(request, cancel).await
        };

        if let Err(e) = &result {
            tracing::debug!(request = request_name, error = %e, "Request failed");
        }
        result
    }

    fn handler<R: Request>(&self) -> Option<Arc<dyn RequestHandler<R>>> {
        self.handlers
            .get(&TypeId::of::<R>())
            .and_then(|slot| slot.downcast_ref::<Arc<dyn RequestHandler<R>>>())
            .cloned()
    }
}

/// Last path segment of a type name, e.g. `GetProductsQuery`.
fn short_type_name<T>() -> &'static str {
    let full = type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}
