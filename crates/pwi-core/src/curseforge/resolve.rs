//! CurseForge metadata resolution
//!
//! Turns the CurseForge file IDs of pack entries into download URLs. Files
//! the API refuses to hand out (or does not list at all, e.g. shaderpacks)
//! are reported with the project page where they can be downloaded by hand.

use reqwest::Url;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

use super::api::{ApiTransport, CurseForgeClient};
use crate::error::InstallerError;
use crate::index::IndexEntry;

/// Name used for failures not tied to a single entry
pub const GENERAL_FAILURE_NAME: &str = "Other";

/// Why an entry could not be resolved
#[derive(Error, Debug)]
pub enum ResolveFailureKind {
    #[error("Failed to resolve CurseForge metadata: no CurseForge update section")]
    MissingUpdateSection,

    #[error("Failed to find file from result: ID {file_id}, Project ID {project_id}")]
    UnknownFile { file_id: u32, project_id: u32 },

    #[error("Failed to parse URL: {url} for ID {file_id}, Project ID {project_id}")]
    InvalidDownloadUrl {
        url: String,
        file_id: u32,
        project_id: u32,
    },

    #[error("Failed to find project from result: ID {project_id}")]
    UnknownProject { project_id: u32 },

    #[error(
        "This mod is excluded from the CurseForge API and must be downloaded manually.\nPlease go to {url} and save this file to {}",
        .dest.display()
    )]
    ManualDownloadRequired { url: String, dest: PathBuf },

    #[error(transparent)]
    Request(#[from] InstallerError),
}

/// A resolution failure, reported under the affected entry's name
#[derive(Debug)]
pub struct ResolveFailure {
    pub name: String,
    pub kind: ResolveFailureKind,
    /// Page where the file can be fetched manually
    pub url: Option<String>,
}

impl ResolveFailure {
    fn new(name: impl Into<String>, kind: ResolveFailureKind) -> Self {
        Self {
            name: name.into(),
            kind,
            url: None,
        }
    }
}

/// Resolves download URLs for every entry with a CurseForge update section,
/// setting `resolved_url` on success. Returns one failure per problem found.
pub async fn resolve_metadata<T: ApiTransport>(
    client: &CurseForgeClient<T>,
    entries: &mut [IndexEntry],
    pack_folder: &Path,
) -> Vec<ResolveFailure> {
    let mut failures = Vec::new();
    let mut file_entries: BTreeMap<u32, Vec<usize>> = BTreeMap::new();

    for (i, entry) in entries.iter().enumerate() {
        match entry.curseforge() {
            Some(data) => file_entries.entry(data.file_id).or_default().push(i),
            None => failures.push(ResolveFailure::new(
                &entry.name,
                ResolveFailureKind::MissingUpdateSection,
            )),
        }
    }

    if file_entries.is_empty() {
        return failures;
    }

    let file_ids: Vec<u32> = file_entries.keys().copied().collect();
    let files = match client.get_files(&file_ids).await {
        Ok(files) => files,
        Err(e) => {
            failures.push(ResolveFailure::new(GENERAL_FAILURE_NAME, e.into()));
            return failures;
        }
    };

    // project ID -> file IDs that need a manual download
    let mut manual: BTreeMap<u32, Vec<u32>> = BTreeMap::new();

    for file in files {
        let Some(indices) = file_entries.get(&file.id) else {
            failures.push(ResolveFailure::new(
                file.id.to_string(),
                ResolveFailureKind::UnknownFile {
                    file_id: file.id,
                    project_id: file.mod_id,
                },
            ));
            continue;
        };

        let Some(download_url) = file.download_url else {
            push_unique(manual.entry(file.mod_id).or_default(), file.id);
            continue;
        };

        match parse_download_url(&download_url) {
            Some(url) => {
                for &i in indices {
                    entries[i].resolved_url = Some(url.clone());
                }
            }
            None => failures.push(ResolveFailure::new(
                file.id.to_string(),
                ResolveFailureKind::InvalidDownloadUrl {
                    url: download_url,
                    file_id: file.id,
                    project_id: file.mod_id,
                },
            )),
        }
    }

    // Some file types never show up in the files endpoint
    for (&file_id, indices) in &file_entries {
        for &i in indices {
            let entry = &entries[i];
            if entry.resolved_url.is_some() {
                continue;
            }
            if let Some(data) = entry.curseforge() {
                push_unique(manual.entry(data.project_id).or_default(), file_id);
            }
        }
    }

    let resolved = entries.iter().filter(|e| e.resolved_url.is_some()).count();
    info!("Resolved {} CurseForge download URLs", resolved);

    if manual.is_empty() {
        return failures;
    }

    debug!("{} projects need a manual download", manual.len());
    let project_ids: Vec<u32> = manual.keys().copied().collect();
    let projects = match client.get_mods(&project_ids).await {
        Ok(projects) => projects,
        Err(e) => {
            failures.push(ResolveFailure::new(GENERAL_FAILURE_NAME, e.into()));
            return failures;
        }
    };

    for project in projects {
        let Some(project_files) = manual.get(&project.id) else {
            failures.push(ResolveFailure::new(
                &project.name,
                ResolveFailureKind::UnknownProject { project_id: project.id },
            ));
            continue;
        };

        let website_url = project
            .links
            .as_ref()
            .map(|links| links.website_url.trim_end_matches('/'))
            .unwrap_or_default();

        for &file_id in project_files {
            // every queued ID came from file_entries
            for &i in file_entries.get(&file_id).into_iter().flatten() {
                let entry = &entries[i];
                let url = format!("{}/files/{}", website_url, file_id);
                failures.push(ResolveFailure {
                    name: entry.name.clone(),
                    kind: ResolveFailureKind::ManualDownloadRequired {
                        url: url.clone(),
                        dest: destination(pack_folder, &entry.dest),
                    },
                    url: Some(url),
                });
            }
        }
    }

    failures
}

fn push_unique(ids: &mut Vec<u32>, id: u32) {
    if !ids.contains(&id) {
        ids.push(id);
    }
}

fn parse_download_url(raw: &str) -> Option<Url> {
    Url::parse(raw)
        .ok()
        .filter(|url| matches!(url.scheme(), "http" | "https"))
}

fn destination(pack_folder: &Path, dest: &Path) -> PathBuf {
    let joined = pack_folder.join(dest);
    std::path::absolute(&joined).unwrap_or(joined)
}
