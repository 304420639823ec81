//! Liveness and readiness probes.
//!
//! The process moves through three phases: `Starting` until the listener
//! is bound, `Serving` afterwards, and `Draining` once shutdown begins.
//! Readiness holds only while serving; liveness fails only while draining.

use std::sync::atomic::{AtomicU8, Ordering};

use actix_web::{HttpResponse, get, http::header, web};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
enum Phase {
    Starting = 0,
    Serving = 1,
    Draining = 2,
}

impl Phase {
    const fn from_raw(raw: u8) -> Self {
        match raw {
            0 => Self::Starting,
            1 => Self::Serving,
            _ => Self::Draining,
        }
    }
}

/// Server lifecycle shared between the bootstrap and the probe handlers.
#[derive(Debug)]
pub struct HealthState {
    phase: AtomicU8,
}

impl Default for HealthState {
    fn default() -> Self {
        Self {
            phase: AtomicU8::new(Phase::Starting as u8),
        }
    }
}

impl HealthState {
    /// A fresh state in the starting phase.
    pub fn new() -> Self {
        Self::default()
    }

    fn phase(&self) -> Phase {
        Phase::from_raw(self.phase.load(Ordering::Acquire))
    }

    /// Enter the serving phase. Has no effect once draining.
    pub fn mark_ready(&self) {
        let _previous = self.phase.compare_exchange(
            Phase::Starting as u8,
            Phase::Serving as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }

    /// Enter the draining phase; both probes fail from now on.
    pub fn begin_draining(&self) {
        self.phase.store(Phase::Draining as u8, Ordering::Release);
    }

    /// Whether the users API should receive traffic.
    pub fn is_ready(&self) -> bool {
        self.phase() == Phase::Serving
    }

    /// Whether the process is still up and not shutting down.
    pub fn is_alive(&self) -> bool {
        self.phase() != Phase::Draining
    }
}

fn probe_response(ok: bool) -> HttpResponse {
    let mut builder = if ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    builder
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .finish()
}

/// Readiness probe.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    operation_id = "readiness",
    responses(
        (status = 200, description = "Listener bound; serving users"),
        (status = 503, description = "Starting up or draining")
    )
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_ready())
}

/// Liveness probe.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    operation_id = "liveness",
    responses(
        (status = 200, description = "Process is up"),
        (status = 503, description = "Shutdown in progress")
    )
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(state.is_alive())
}
