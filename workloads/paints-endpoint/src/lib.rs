//! Paint equivalence endpoint - Spin component.
//!
//! Serves `GET /api/paints[?refresh=true]`. Configuration comes from Spin
//! variables (`source_url`, `source_format`, `source_delimiter`,
//! `column_key`, `column_name`, `column_category`, `cache_max_age_secs`,
//! `cache_stale_while_revalidate_secs`, `log_level`); unset variables keep
//! their defaults.

#[cfg(target_arch = "wasm32")]
mod component;

/// Workload name used in logs.
pub const WORKLOAD: &str = "paints-endpoint";
