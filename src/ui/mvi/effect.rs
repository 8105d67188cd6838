//! Side effects returned by reducers.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// Boxed future that resolves to the intent fed back into the store.
pub type EffectFuture<I> = Pin<Box<dyn Future<Output = I> + Send + 'static>>;

/// Work a reducer wants done after a transition.
pub enum Effect<I> {
    /// Nothing to do.
    None,

    /// Process another intent right after the current one.
    Send(I),

    /// Run asynchronous work; its output is dispatched when it completes.
    Task(EffectFuture<I>),

    /// Like `Task`, but serialized with earlier tasks carrying the same
    /// key: it starts after they finished and its intent is applied after
    /// theirs. Tasks with other keys, and plain tasks, are not affected.
    Ordered(String, EffectFuture<I>),
}

impl<I: Send + 'static> Effect<I> {
    pub fn task<F>(future: F) -> Self
    where
        F: Future<Output = I> + Send + 'static,
    {
        Effect::Task(Box::pin(future))
    }

    pub fn ordered<F>(key: impl Into<String>, future: F) -> Self
    where
        F: Future<Output = I> + Send + 'static,
    {
        Effect::Ordered(key.into(), Box::pin(future))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }

    /// Lift a child effect into the parent's intent type.
    pub fn map<J, F>(self, f: F) -> Effect<J>
    where
        J: Send + 'static,
        F: FnOnce(I) -> J + Send + 'static,
    {
        match self {
            Effect::None => Effect::None,
            Effect::Send(intent) => Effect::Send(f(intent)),
            Effect::Task(future) => Effect::Task(Box::pin(async move { f(future.await) })),
            Effect::Ordered(key, future) => {
                Effect::Ordered(key, Box::pin(async move { f(future.await) }))
            }
        }
    }
}

impl<I: fmt::Debug> fmt::Debug for Effect<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::None => f.write_str("None"),
            Effect::Send(intent) => f.debug_tuple("Send").field(intent).finish(),
            Effect::Task(_) => f.write_str("Task(..)"),
            Effect::Ordered(key, _) => write!(f, "Ordered({key:?}, ..)"),
        }
    }
}
