//! CurseForge integration
//!
//! - `api`: request/response types and the client with mirror fallback
//! - `resolve`: download URL resolution for pack entries

pub mod api;
pub mod resolve;

pub use api::{ApiResponse, ApiTransport, CfFile, CfLinks, CfMod, CurseForgeClient, HttpTransport};
pub use resolve::{resolve_metadata, ResolveFailure, ResolveFailureKind};
