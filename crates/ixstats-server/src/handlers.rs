//! REST API endpoint handlers for the dashboard server.
//!
//! All handlers read from the in-memory [`DashboardState`] via the shared
//! [`AppState`]. When `PostgreSQL`/Redis handles are attached, mutations
//! are persisted and caches invalidated best-effort: a failed side write
//! is logged and the request still succeeds from memory (the stores
//! reconverge on the next write).
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/` | Minimal HTML status page |
//! | `GET` | `/api/time` | Current IxTime state |
//! | `POST` | `/api/time/multiplier` | Set or clear the override multiplier |
//! | `GET` | `/api/countries` | List country summaries |
//! | `GET` | `/api/countries/:id` | Full country detail |
//! | `PUT` | `/api/countries/:id/components` | Replace the component selection |
//! | `GET` | `/api/countries/:id/effectiveness` | Effectiveness report |
//! | `GET` | `/api/countries/:id/tax` | Tax profile |
//! | `GET` | `/api/countries/:id/stability` | Stability report |
//! | `GET` | `/api/countries/:id/intelligence` | Intelligence advisories |
//! | `GET` | `/api/countries/:id/vault` | Vault history and balance |
//! | `POST` | `/api/countries/:id/vault` | Record a vault transaction |
//! | `GET` | `/api/notifications` | List notifications |
//! | `POST` | `/api/notifications/:id/read` | Mark a notification read |

use std::collections::BTreeSet;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::response::{Html, IntoResponse};
use axum::Json;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use ixstats_core::IxClock;
use ixstats_db::{NotificationStore, SelectionStore, VaultStore};
use ixstats_engine::economy;
use ixstats_types::{
    AppliedModifier, AtomicState, AtomicStateUpdate, ComponentType, Country, CountryId,
    Notification, NotificationId, RiskLevel, Severity, VaultEntry,
};

use crate::error::ApiError;
use crate::state::{AppState, CountryEntry};

// ---------------------------------------------------------------------------
// Request / response payloads
// ---------------------------------------------------------------------------

/// Response body for `GET /api/time`.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct TimeResponse {
    /// The real-world instant the response was computed at.
    pub real_time: DateTime<Utc>,
    /// The corresponding in-game instant.
    pub ix_time: DateTime<Utc>,
    /// The in-game instant in display form.
    pub formatted: String,
    /// The multiplier currently in effect.
    pub multiplier: f64,
    /// Whether the clock is paused.
    pub paused: bool,
}

/// Request body for `POST /api/time/multiplier`.
///
/// `multiplier: null` clears the operator override and returns to the
/// configured base multiplier.
#[derive(Debug, serde::Deserialize)]
pub struct MultiplierRequest {
    /// The override multiplier to apply, or `None` to clear.
    pub multiplier: Option<f64>,
}

/// One row of the `GET /api/countries` listing.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CountrySummary {
    /// The country record.
    pub country: Country,
    /// Overall effectiveness of the current selection.
    pub overall_effectiveness: f64,
    /// Stability risk band.
    pub risk: RiskLevel,
    /// Number of selected components.
    pub component_count: u32,
    /// Current vault balance.
    pub vault_balance: Decimal,
}

/// Response body for `GET /api/countries/:id`.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct CountryDetail {
    /// The country record.
    pub country: Country,
    /// The component selection, sorted.
    pub components: Vec<ComponentType>,
    /// The full derived state.
    pub state: AtomicState,
    /// Current vault balance.
    pub vault_balance: Decimal,
    /// Nominal GDP compounded one in-game year ahead at the current
    /// growth rate.
    pub gdp_projection: f64,
}

/// Request body for `PUT /api/countries/:id/components`.
#[derive(Debug, serde::Deserialize)]
pub struct ComponentsRequest {
    /// The replacement selection. Duplicates collapse into the set.
    pub components: Vec<ComponentType>,
}

/// Request body for `POST /api/countries/:id/vault`.
#[derive(Debug, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VaultRequest {
    /// Credit the vault from outside.
    Deposit {
        /// Amount of credits.
        amount: Decimal,
        /// Reason string recorded on the entry.
        reason: String,
    },
    /// Debit the vault to the owner.
    Withdraw {
        /// Amount of credits.
        amount: Decimal,
        /// Reason string recorded on the entry.
        reason: String,
    },
    /// Spend credits against a catalog purchase.
    Purchase {
        /// Amount of credits.
        amount: Decimal,
        /// Reason string recorded on the entry.
        reason: String,
        /// The purchase order this entry pays for.
        reference_id: Uuid,
    },
    /// Grant credits from the simulation.
    Reward {
        /// Amount of credits.
        amount: Decimal,
        /// Reason string recorded on the entry.
        reason: String,
    },
    /// Move credits to another country's vault.
    Transfer {
        /// Amount of credits.
        amount: Decimal,
        /// Reason string recorded on the entry.
        reason: String,
        /// The receiving country.
        counterparty: CountryId,
    },
    /// Apply a signed administrative correction.
    Adjust {
        /// Signed amount: positive credits, negative debits.
        amount: Decimal,
        /// Reason string recorded on the entry.
        reason: String,
    },
}

/// Response body for `POST /api/countries/:id/vault`.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct VaultResponse {
    /// The recorded entry.
    pub entry: VaultEntry,
    /// The balance after the entry.
    pub balance: Decimal,
}

/// Response body for `GET /api/countries/:id/vault`.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct VaultHistory {
    /// All entries, oldest first.
    pub entries: Vec<VaultEntry>,
    /// The current balance.
    pub balance: Decimal,
}

/// Query parameters for `GET /api/notifications`.
#[derive(Debug, serde::Deserialize)]
pub struct NotificationsQuery {
    /// Return only unread notifications.
    pub unread: Option<bool>,
    /// Maximum number of notifications to return (default 100).
    pub limit: Option<usize>,
}

// ---------------------------------------------------------------------------
// GET / -- minimal HTML status page
// ---------------------------------------------------------------------------

/// Serve a minimal HTML page showing server status and API links.
///
/// This is the placeholder dashboard until the frontend consumes the
/// JSON API.
pub async fn index(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let dashboard = state.dashboard.read().await;
    let now = Utc::now();
    let ix_display = dashboard
        .clock
        .ix_time(now)
        .map_or_else(|_e| String::from("unavailable"), IxClock::format_ix);
    let multiplier = dashboard.clock.multiplier();
    let country_count = dashboard.countries.len();
    let notification_count = dashboard.notifications.len();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>IxStats</title>
    <style>
        body {{
            background: #0d1117;
            color: #c9d1d9;
            font-family: 'Cascadia Code', 'Fira Code', 'Consolas', monospace;
            padding: 2rem;
            max-width: 800px;
            margin: 0 auto;
        }}
        h1 {{ color: #58a6ff; margin-bottom: 0.25rem; }}
        .subtitle {{ color: #8b949e; margin-top: 0; }}
        .metric {{
            display: inline-block;
            background: #161b22;
            border: 1px solid #30363d;
            border-radius: 6px;
            padding: 1rem 1.5rem;
            margin: 0.5rem 0.5rem 0.5rem 0;
            min-width: 120px;
        }}
        .metric .label {{ color: #8b949e; font-size: 0.85rem; }}
        .metric .value {{ color: #58a6ff; font-size: 1.5rem; font-weight: bold; }}
        a {{ color: #58a6ff; text-decoration: none; }}
        a:hover {{ text-decoration: underline; }}
        ul {{ list-style: none; padding: 0; }}
        li {{ padding: 0.3rem 0; }}
        li::before {{ content: "GET "; color: #7ee787; font-weight: bold; }}
        .status {{ color: #3fb950; font-weight: bold; }}
        hr {{ border: none; border-top: 1px solid #30363d; margin: 1.5rem 0; }}
    </style>
</head>
<body>
    <h1>IxStats</h1>
    <p class="subtitle">Nation simulation dashboard API</p>

    <p>Status: <span class="status">RUNNING</span></p>

    <div>
        <div class="metric">
            <div class="label">IxTime</div>
            <div class="value">{ix_display}</div>
        </div>
        <div class="metric">
            <div class="label">Multiplier</div>
            <div class="value">{multiplier}x</div>
        </div>
        <div class="metric">
            <div class="label">Countries</div>
            <div class="value">{country_count}</div>
        </div>
        <div class="metric">
            <div class="label">Notifications</div>
            <div class="value">{notification_count}</div>
        </div>
    </div>

    <hr>

    <h2>API Endpoints</h2>
    <ul>
        <li><a href="/api/time">/api/time</a> -- IxTime state</li>
        <li><a href="/api/countries">/api/countries</a> -- List countries</li>
        <li><a href="/api/countries/:id">/api/countries/:id</a> -- Country detail</li>
        <li><a href="/api/countries/:id/effectiveness">/api/countries/:id/effectiveness</a> -- Effectiveness report</li>
        <li><a href="/api/countries/:id/tax">/api/countries/:id/tax</a> -- Tax profile</li>
        <li><a href="/api/countries/:id/stability">/api/countries/:id/stability</a> -- Stability report</li>
        <li><a href="/api/countries/:id/intelligence">/api/countries/:id/intelligence</a> -- Advisories</li>
        <li><a href="/api/countries/:id/vault">/api/countries/:id/vault</a> -- Vault history</li>
        <li><a href="/api/notifications">/api/notifications</a> -- Notifications</li>
    </ul>

    <h2>WebSocket</h2>
    <ul>
        <li style="list-style:none;"><code>ws://host:port/ws/updates</code> -- Live state update stream</li>
    </ul>
</body>
</html>"#
    ))
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// Return the current IxTime state.
pub async fn get_time(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let dashboard = state.dashboard.read().await;
    let now = Utc::now();
    let ix = dashboard.clock.ix_time(now)?;
    Ok(Json(TimeResponse {
        real_time: now,
        ix_time: ix,
        formatted: IxClock::format_ix(ix),
        multiplier: dashboard.clock.multiplier(),
        paused: dashboard.clock.is_paused(),
    }))
}

/// Set or clear the operator override multiplier.
pub async fn set_multiplier(
    State(state): State<Arc<AppState>>,
    Json(body): Json<MultiplierRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let mut dashboard = state.dashboard.write().await;
    let now = Utc::now();

    match body.multiplier {
        Some(multiplier) => dashboard.clock.set_override(multiplier, now)?,
        None => dashboard.clock.clear_override(now)?,
    }

    let ix = dashboard.clock.ix_time(now)?;
    tracing::info!(
        multiplier = dashboard.clock.multiplier(),
        paused = dashboard.clock.is_paused(),
        "IxTime multiplier changed"
    );
    Ok(Json(TimeResponse {
        real_time: now,
        ix_time: ix,
        formatted: IxClock::format_ix(ix),
        multiplier: dashboard.clock.multiplier(),
        paused: dashboard.clock.is_paused(),
    }))
}

// ---------------------------------------------------------------------------
// Countries
// ---------------------------------------------------------------------------

/// List all countries as dashboard summaries.
pub async fn list_countries(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let dashboard = state.dashboard.read().await;
    let summaries: Vec<CountrySummary> = dashboard
        .countries
        .values()
        .map(|entry| CountrySummary {
            country: entry.country.clone(),
            overall_effectiveness: entry.manager.state().effectiveness.overall,
            risk: entry.manager.state().stability.risk,
            component_count: entry.manager.state().effectiveness.component_count,
            vault_balance: entry.vault.balance(),
        })
        .collect();
    Ok(Json(summaries))
}

/// Return the full detail for a single country.
pub async fn get_country(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let country_id = parse_country_id(&id)?;
    let dashboard = state.dashboard.read().await;
    let entry = find_country(&dashboard.countries, country_id)?;

    Ok(Json(CountryDetail {
        country: entry.country.clone(),
        components: entry.manager.selection().iter().copied().collect(),
        state: entry.manager.state().clone(),
        vault_balance: entry.vault.balance(),
        gdp_projection: economy::project_gdp(entry.country.gdp, entry.country.growth_rate, 1.0),
    }))
}

/// Replace a country's component selection.
///
/// Recomputes the derived state, broadcasts the update, raises a
/// notification for each newly introduced severe conflict, and persists
/// the selection when a database is attached.
pub async fn put_components(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<ComponentsRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let country_id = parse_country_id(&id)?;
    let selection: BTreeSet<ComponentType> = body.components.into_iter().collect();

    let mut dashboard = state.dashboard.write().await;

    let (update, detail, new_conflicts) = {
        let entry = dashboard
            .countries
            .get_mut(&country_id)
            .ok_or_else(|| ApiError::NotFound(format!("country {country_id}")))?;

        let previous = severe_conflicts(&entry.manager.state().effectiveness.conflicts);
        entry.manager.set_components(selection)?;
        let current = severe_conflicts(&entry.manager.state().effectiveness.conflicts);

        let new_conflicts: Vec<AppliedModifier> = entry
            .manager
            .state()
            .effectiveness
            .conflicts
            .iter()
            .filter(|c| {
                let pair = conflict_pair(c);
                current.contains(&pair) && !previous.contains(&pair)
            })
            .cloned()
            .collect();

        let update = AtomicStateUpdate {
            country_id,
            revision: entry.manager.revision(),
            components: entry.manager.selection().iter().copied().collect(),
            state: entry.manager.state().clone(),
        };
        let detail = CountryDetail {
            country: entry.country.clone(),
            components: entry.manager.selection().iter().copied().collect(),
            state: entry.manager.state().clone(),
            vault_balance: entry.vault.balance(),
            gdp_projection: economy::project_gdp(
                entry.country.gdp,
                entry.country.growth_rate,
                1.0,
            ),
        };
        (update, detail, new_conflicts)
    };

    let mut notifications = Vec::new();
    for conflict in &new_conflicts {
        let notification = Notification {
            id: NotificationId::new(),
            country_id: Some(country_id),
            level: Severity::Critical,
            title: String::from("Severe component conflict"),
            message: format!(
                "{:?} conflicts with {:?} (x{:.2})",
                conflict.first, conflict.second, conflict.multiplier
            ),
            read: false,
            created_at: Utc::now(),
        };
        dashboard.push_notification(notification.clone());
        notifications.push(notification);
    }
    drop(dashboard);

    // Best-effort persistence: a failed side write is logged, the
    // in-memory state remains authoritative for this request.
    if let Some(db) = &state.db {
        let selection_set: BTreeSet<ComponentType> = detail.components.iter().copied().collect();
        if let Err(e) = SelectionStore::new(db.pool())
            .replace(country_id, &selection_set)
            .await
        {
            tracing::warn!(error = %e, country = %country_id, "Selection persist failed");
        }
        for notification in &notifications {
            if let Err(e) = NotificationStore::new(db.pool()).insert(notification).await {
                tracing::warn!(error = %e, "Notification persist failed");
            }
        }
    }
    if let Some(cache) = &state.cache {
        if let Err(e) = cache
            .invalidate_country_snapshot(country_id.into_inner())
            .await
        {
            tracing::warn!(error = %e, country = %country_id, "Snapshot invalidation failed");
        }
    }

    state.broadcast(update);
    Ok(Json(detail))
}

/// Return a country's effectiveness report.
pub async fn get_effectiveness(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    project_state(&state, &id, |s| serde_json::to_value(&s.effectiveness)).await
}

/// Return a country's tax profile.
pub async fn get_tax(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    project_state(&state, &id, |s| serde_json::to_value(&s.tax)).await
}

/// Return a country's stability report.
pub async fn get_stability(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    project_state(&state, &id, |s| serde_json::to_value(&s.stability)).await
}

/// Return a country's intelligence advisories.
pub async fn get_intelligence(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    project_state(&state, &id, |s| serde_json::to_value(&s.intelligence)).await
}

// ---------------------------------------------------------------------------
// Vault
// ---------------------------------------------------------------------------

/// Return a country's vault history and balance.
pub async fn get_vault(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let country_id = parse_country_id(&id)?;
    let dashboard = state.dashboard.read().await;
    let entry = find_country(&dashboard.countries, country_id)?;

    Ok(Json(VaultHistory {
        entries: entry.vault.entries().to_vec(),
        balance: entry.vault.balance(),
    }))
}

/// Record a vault transaction.
///
/// Transfers debit the sender and credit the counterparty's vault in the
/// same request; the counterparty must exist and overdraws are rejected
/// before anything is recorded.
pub async fn post_vault(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(body): Json<VaultRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let country_id = parse_country_id(&id)?;
    let mut dashboard = state.dashboard.write().await;
    let now = Utc::now();
    let ix_now = dashboard.clock.ix_time(now)?;

    let mut recorded: Vec<VaultEntry> = Vec::new();

    let entry = match body {
        VaultRequest::Deposit { amount, reason } => {
            let entry = find_country_mut(&mut dashboard, country_id)?;
            entry.vault.deposit(amount, reason, ix_now)?.clone()
        }
        VaultRequest::Withdraw { amount, reason } => {
            let entry = find_country_mut(&mut dashboard, country_id)?;
            entry.vault.withdraw(amount, reason, ix_now)?.clone()
        }
        VaultRequest::Purchase {
            amount,
            reason,
            reference_id,
        } => {
            let entry = find_country_mut(&mut dashboard, country_id)?;
            entry
                .vault
                .purchase(amount, reason, reference_id, ix_now)?
                .clone()
        }
        VaultRequest::Reward { amount, reason } => {
            let entry = find_country_mut(&mut dashboard, country_id)?;
            entry.vault.reward(amount, reason, ix_now)?.clone()
        }
        VaultRequest::Transfer {
            amount,
            reason,
            counterparty,
        } => {
            if counterparty == country_id {
                return Err(ApiError::InvalidRequest(String::from(
                    "cannot transfer to the same vault",
                )));
            }
            // The receiver must exist before the sender is debited.
            if !dashboard.countries.contains_key(&counterparty) {
                return Err(ApiError::NotFound(format!("country {counterparty}")));
            }

            let out = {
                let sender = find_country_mut(&mut dashboard, country_id)?;
                sender
                    .vault
                    .transfer_out(amount, counterparty, reason.clone(), ix_now)?
                    .clone()
            };
            let inbound = {
                let receiver = find_country_mut(&mut dashboard, counterparty)?;
                receiver
                    .vault
                    .transfer_in(amount, country_id, reason, ix_now)?
                    .clone()
            };
            recorded.push(inbound);
            out
        }
        VaultRequest::Adjust { amount, reason } => {
            let entry = find_country_mut(&mut dashboard, country_id)?;
            entry.vault.adjust(amount, reason, ix_now)?.clone()
        }
    };
    recorded.push(entry.clone());

    let balance = find_country(&dashboard.countries, country_id)?.vault.balance();
    drop(dashboard);

    // Best-effort persistence of every entry this request produced.
    if let Some(db) = &state.db {
        if let Err(e) = VaultStore::new(db.pool()).batch_insert(&recorded).await {
            tracing::warn!(error = %e, country = %country_id, "Vault persist failed");
        }
    }

    Ok(Json(VaultResponse { entry, balance }))
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

/// List notifications, newest first.
pub async fn list_notifications(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NotificationsQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let dashboard = state.dashboard.read().await;
    let unread_only = query.unread.unwrap_or(false);
    let limit = query.limit.unwrap_or(100);

    let notifications: Vec<Notification> = dashboard
        .notifications
        .iter()
        .filter(|n| !unread_only || !n.read)
        .take(limit)
        .cloned()
        .collect();
    Ok(Json(notifications))
}

/// Mark a notification as read.
pub async fn mark_notification_read(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let raw = Uuid::parse_str(&id).map_err(|_e| ApiError::InvalidUuid(id.clone()))?;
    let notification_id = NotificationId::from(raw);

    let mut dashboard = state.dashboard.write().await;
    let found = dashboard
        .notifications
        .iter_mut()
        .find(|n| n.id == notification_id);

    let Some(notification) = found else {
        return Err(ApiError::NotFound(format!("notification {notification_id}")));
    };
    notification.read = true;
    let snapshot = notification.clone();
    drop(dashboard);

    if let Some(db) = &state.db {
        if let Err(e) = NotificationStore::new(db.pool()).mark_read(notification_id).await {
            tracing::warn!(error = %e, "Notification read-mark persist failed");
        }
    }

    Ok(Json(snapshot))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a path segment into a [`CountryId`].
fn parse_country_id(raw: &str) -> Result<CountryId, ApiError> {
    Uuid::parse_str(raw)
        .map(CountryId::from)
        .map_err(|_e| ApiError::InvalidUuid(raw.to_owned()))
}

/// Look up a country entry or produce a 404.
fn find_country(
    countries: &std::collections::BTreeMap<CountryId, CountryEntry>,
    id: CountryId,
) -> Result<&CountryEntry, ApiError> {
    countries
        .get(&id)
        .ok_or_else(|| ApiError::NotFound(format!("country {id}")))
}

/// Look up a mutable country entry or produce a 404.
fn find_country_mut(
    dashboard: &mut crate::state::DashboardState,
    id: CountryId,
) -> Result<&mut CountryEntry, ApiError> {
    dashboard
        .countries
        .get_mut(&id)
        .ok_or_else(|| ApiError::NotFound(format!("country {id}")))
}

/// Serve a projection of a country's derived state.
async fn project_state(
    state: &Arc<AppState>,
    raw_id: &str,
    project: impl Fn(&AtomicState) -> Result<serde_json::Value, serde_json::Error>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let country_id = parse_country_id(raw_id)?;
    let dashboard = state.dashboard.read().await;
    let entry = find_country(&dashboard.countries, country_id)?;
    Ok(Json(project(entry.manager.state())?))
}

/// The set of severe conflict pairs (multiplier at or below 0.75).
fn severe_conflicts(conflicts: &[AppliedModifier]) -> BTreeSet<(ComponentType, ComponentType)> {
    conflicts
        .iter()
        .filter(|c| c.multiplier <= 0.75)
        .map(conflict_pair)
        .collect()
}

/// Normalize a conflict to an ordered pair for set membership.
fn conflict_pair(conflict: &AppliedModifier) -> (ComponentType, ComponentType) {
    if conflict.first <= conflict.second {
        (conflict.first, conflict.second)
    } else {
        (conflict.second, conflict.first)
    }
}
