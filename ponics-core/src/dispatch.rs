//! Typed query and command dispatch.
//!
//! Every operation payload is a plain struct; its handler is looked up by
//! the payload's concrete type. Registries are populated by explicit
//! `register` calls at startup and never change afterwards, so dispatch is
//! a read-only map lookup and safe to share across threads.
//!
//! For queries the result type travels with the payload type through
//! [`Query::Output`], so a successful dispatch can only ever produce the
//! result type declared by the payload.

use crate::error::PonicsError;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;

/// A read-only operation. `Output` is the result type the operation
/// resolves to.
pub trait Query: 'static {
    type Output;
}

/// A state-changing operation. Commands yield no data on success.
pub trait Command: 'static {}

pub trait QueryHandler<Q: Query>: Send + Sync {
    fn handle(&self, query: Q) -> Result<Q::Output, PonicsError>;
}

pub trait CommandHandler<C: Command>: Send + Sync {
    fn handle(&self, command: C) -> Result<(), PonicsError>;
}

type AnyHandler = Box<dyn Any + Send + Sync>;

/// Registry mapping query payload types to their handlers.
#[derive(Default)]
pub struct QueryProcessor {
    handlers: HashMap<TypeId, AnyHandler>,
}

impl QueryProcessor {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers the handler for the payload type `Q`.
    ///
    /// # Errors
    ///
    /// Returns [`PonicsError::HandlerConflict`] if `Q` already has a
    /// handler. Conflicts are wiring mistakes, so callers should fail
    /// startup rather than ignore them.
    pub fn register<Q, H>(&mut self, handler: H) -> Result<(), PonicsError>
    where
        Q: Query,
        H: QueryHandler<Q> + 'static,
    {
        let key = TypeId::of::<Q>();
        if self.handlers.contains_key(&key) {
            return Err(PonicsError::HandlerConflict(type_name::<Q>()));
        }
        let boxed: Box<dyn QueryHandler<Q> + Send + Sync> = Box::new(handler);
        self.handlers.insert(key, Box::new(boxed));
        tracing::debug!(operation = type_name::<Q>(), "registered query handler");
        Ok(())
    }

    /// Routes the payload to its registered handler.
    ///
    /// # Errors
    ///
    /// Returns [`PonicsError::HandlerNotFound`] if nothing was registered
    /// for the payload type, plus whatever the handler itself raises.
    pub fn process<Q: Query>(&self, query: Q) -> Result<Q::Output, PonicsError> {
        let handler = self
            .handlers
            .get(&TypeId::of::<Q>())
            .and_then(|h| h.downcast_ref::<Box<dyn QueryHandler<Q> + Send + Sync>>())
            .ok_or(PonicsError::HandlerNotFound(type_name::<Q>()))?;
        handler.handle(query)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Registry mapping command payload types to their handlers.
#[derive(Default)]
pub struct CommandProcessor {
    handlers: HashMap<TypeId, AnyHandler>,
}

impl CommandProcessor {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Registers the handler for the payload type `C`.
    ///
    /// # Errors
    ///
    /// Returns [`PonicsError::HandlerConflict`] if `C` already has a
    /// handler.
    pub fn register<C, H>(&mut self, handler: H) -> Result<(), PonicsError>
    where
        C: Command,
        H: CommandHandler<C> + 'static,
    {
        let key = TypeId::of::<C>();
        if self.handlers.contains_key(&key) {
            return Err(PonicsError::HandlerConflict(type_name::<C>()));
        }
        let boxed: Box<dyn CommandHandler<C> + Send + Sync> = Box::new(handler);
        self.handlers.insert(key, Box::new(boxed));
        tracing::debug!(operation = type_name::<C>(), "registered command handler");
        Ok(())
    }

    /// Routes the payload to its registered handler.
    ///
    /// # Errors
    ///
    /// Returns [`PonicsError::HandlerNotFound`] if nothing was registered
    /// for the payload type, plus whatever the handler itself raises.
    pub fn process<C: Command>(&self, command: C) -> Result<(), PonicsError> {
        let handler = self
            .handlers
            .get(&TypeId::of::<C>())
            .and_then(|h| h.downcast_ref::<Box<dyn CommandHandler<C> + Send + Sync>>())
            .ok_or(PonicsError::HandlerNotFound(type_name::<C>()))?;
        handler.handle(command)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
