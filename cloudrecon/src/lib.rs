//! Post-migration reconciliation of networking resources between clouds.
//!
//! After a bulk migration of networks, subnets, routers, security groups,
//! and floating IPs between two independently operated clouds, this
//! library checks that the migration completed correctly. Identifiers are
//! not preserved across migration, so correspondence is established by
//! name, and intentional translations (external-network remaps, tenant
//! renames) are read from static mapping documents.
//!
//! # Architecture
//!
//! ## Inputs
//!
//! - [`config`] — Run configuration: SNAT-compatible releases, gateway
//!   rotation flag, floating IP tolerance, tenant map
//! - [`resource_map`] — External-network id remapping document
//! - [`tenant_map`] — Project rename translation
//!
//! ## Checks
//!
//! - [`verify_params`] — Per-field comparison across matched pairs
//! - [`verify_idempotency`] — Resources migrated more than once
//! - [`verify_floating_ips`] — Address-set reconciliation with remap
//!   exceptions
//! - [`verify_ports`] — Router network attachments
//! - [`verify_gateway`] — Gateway address rotation
//! - [`verify_tenants`] — Tenant ownership after renames
//!
//! ## Orchestration & Reporting
//!
//! - [`compare`] — Field equality policies and gateway normalization
//! - [`scenario`] — Static scenario table and the shared runner
//! - [`report`] — Terminal rendering of the aggregate report
//! - [`inspect`] — Single-snapshot summaries
//!
//! # Built on recon-core
//!
//! Snapshot documents, the typed resource model, name-based matching, and
//! field diffing live in `recon-core`. All migration-policy logic is
//! contained in this crate.

pub mod compare;
pub mod config;
pub mod inspect;
pub mod report;
pub mod resource_map;
pub mod scenario;
pub mod tenant_map;
pub mod verify_floating_ips;
pub mod verify_gateway;
pub mod verify_idempotency;
pub mod verify_params;
pub mod verify_ports;
pub mod verify_tenants;
