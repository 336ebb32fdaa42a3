/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/

//! Lazily created HTTP transport owned by a single session client

use crate::constants::USER_AGENT;
use crate::error::AppError;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// The live resource held by a [`TransportHandle`]
struct LiveTransport {
    client: Client,
    alive: bool,
}

/// Holds at most one HTTP client, building it on demand
///
/// The handle is exclusively owned by one session client. A resource that was
/// released or invalidated is never handed out again: the next
/// [`acquire`](TransportHandle::acquire) builds a new one.
pub struct TransportHandle {
    timeout: Duration,
    inner: Option<LiveTransport>,
    generation: u64,
}

impl TransportHandle {
    /// Creates an empty handle; nothing is built until the first `acquire`
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            inner: None,
            generation: 0,
        }
    }

    /// Returns a usable client, building a new one if none is held or the held one is not live
    ///
    /// The returned `Client` shares its internals with the held resource.
    ///
    /// # Returns
    /// * `Ok(Client)` - A live client
    /// * `Err(AppError::Transport)` - If the client could not be built
    pub fn acquire(&mut self) -> Result<Client, AppError> {
        if let Some(live) = self.inner.as_ref().filter(|live| live.alive) {
            return Ok(live.client.clone());
        }

        // Drop the stale resource before building its replacement
        self.inner = None;

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(self.timeout)
            .pool_max_idle_per_host(0)
            .build()?;

        self.generation += 1;
        debug!(
            "Transport created (generation {}, timeout {:?})",
            self.generation, self.timeout
        );

        self.inner = Some(LiveTransport {
            client: client.clone(),
            alive: true,
        });
        Ok(client)
    }

    /// Marks the held resource as unusable, so the next `acquire` builds a fresh one
    pub fn invalidate(&mut self) {
        if let Some(live) = self.inner.as_mut().filter(|live| live.alive) {
            live.alive = false;
            debug!("Transport generation {} invalidated", self.generation);
        }
    }

    /// Closes the held resource, if any. Calling it on an empty handle is a no-op.
    pub fn release(&mut self) {
        if self.inner.take().is_some() {
            debug!("Transport generation {} released", self.generation);
        }
    }

    /// Whether a live resource is currently held
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.inner.as_ref().is_some_and(|live| live.alive)
    }

    /// Number of resources built by this handle so far
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Timeout applied to every resource built by this handle
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
