//! Agent log browsing, search and archive download (`/logs`).
//!
//! Every operation accepts an optional region, forwarded as the `region`
//! query parameter so the backend can route to the right collector.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, error, info};

use opsconsole_core::error::AppError;
use opsconsole_core::result::AppResult;
use opsconsole_core::traits::download::{DownloadSink, SavedFile};
use opsconsole_core::types::{AgentId, LogSelection, Record, RegionId};

use crate::transport::{ApiPath, ApiResponse, FailureExt, RequestOptions, ResponseType, Transport};

const BASE: &str = "/logs";

/// Content types accepted for a log archive.
const ARCHIVE_CONTENT_TYPES: [&str; 2] = ["application/zip", "application/octet-stream"];

/// Wire format of the date query parameter.
const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SearchSelectedRequest<'a> {
    id_transaction: &'a str,
    selected_files: Vec<&'a str>,
}

/// Log operations against the agents' collectors.
#[derive(Debug, Clone)]
pub struct LogService {
    transport: Arc<Transport>,
    sink: Arc<dyn DownloadSink>,
    archive_name: String,
}

impl LogService {
    /// Create the service. Archives are saved through `sink` as
    /// `archive_name`.
    pub fn new(
        transport: Arc<Transport>,
        sink: Arc<dyn DownloadSink>,
        archive_name: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            sink,
            archive_name: archive_name.into(),
        }
    }

    /// File name used for saved archives.
    pub fn archive_name(&self) -> &str {
        &self.archive_name
    }

    /// Log files available on an agent.
    pub async fn list(&self, agent: &AgentId, region: Option<&RegionId>) -> AppResult<Value> {
        self.transport
            .get(&ApiPath::new(BASE).join(agent), options(region))
            .await
            .or_fallback("Error fetching logs")?
            .json_or_null()
    }

    /// Raw content of one log file.
    pub async fn get_file(
        &self,
        agent: &AgentId,
        filename: &str,
        region: Option<&RegionId>,
    ) -> AppResult<String> {
        let response = self
            .transport
            .get(
                &ApiPath::new(BASE).join(agent).join(filename),
                options(region).response_type(ResponseType::Text),
            )
            .await
            .or_fallback("Error fetching log file")?;
        Ok(response.text())
    }

    /// Current log files for a day.
    pub async fn filter_by_date(
        &self,
        agent: &AgentId,
        date: NaiveDate,
        region: Option<&RegionId>,
    ) -> AppResult<Value> {
        self.transport
            .get(
                &ApiPath::new(BASE).join("filter").join(agent),
                options(region).query("date", date.format(DATE_FORMAT)),
            )
            .await
            .or_fallback("Error fetching logs by date")?
            .json_or_null()
    }

    /// Archived log files for a day.
    pub async fn filter_archive_by_date(
        &self,
        agent: &AgentId,
        date: NaiveDate,
        region: Option<&RegionId>,
    ) -> AppResult<Value> {
        self.transport
            .get(
                &ApiPath::new(BASE).join("filter_archive").join(agent),
                options(region).query("date", date.format(DATE_FORMAT)),
            )
            .await
            .or_fallback("Error fetching archived logs by date")?
            .json_or_null()
    }

    /// Download the selected files as one ZIP archive and save it.
    ///
    /// A single file name is sent as a one-element list. Nothing is saved
    /// unless the backend answers with an archive content type.
    pub async fn zip_files(
        &self,
        agent: &AgentId,
        selection: impl Into<LogSelection>,
        region: Option<&RegionId>,
    ) -> AppResult<SavedFile> {
        let selection = selection.into();
        if selection.is_empty() {
            return Err(AppError::validation("At least one log file must be selected."));
        }

        let filenames = selection.filenames();
        debug!(agent = %agent, files = filenames.len(), "Requesting log archive");
        let response = self
            .transport
            .post(
                &ApiPath::new(BASE).join("zip").join(agent),
                Some(serde_json::to_value(&filenames)?),
                options(region).response_type(ResponseType::Binary),
            )
            .await
            .or_fallback("Error downloading log file")?;

        ensure_archive(&response)?;

        let saved = self
            .sink
            .save(&self.archive_name, response.body.clone())
            .await
            .inspect_err(|e| error!(error = %e, "Error downloading log file"))?;
        info!(
            path = %saved.path.display(),
            size_bytes = saved.size_bytes,
            "Log archive saved"
        );
        Ok(saved)
    }

    /// Log lines belonging to one transaction on a given day.
    pub async fn by_transaction(
        &self,
        agent: &AgentId,
        transaction_id: &str,
        date: NaiveDate,
        region: Option<&RegionId>,
    ) -> AppResult<Value> {
        self.transport
            .get(
                &ApiPath::new(BASE).join("transaction").join(agent),
                options(region)
                    .query("transactionId", transaction_id)
                    .query("date", date.format(DATE_FORMAT)),
            )
            .await
            .or_fallback("Error fetching transaction logs")?
            .json_or_null()
    }

    /// Search a transaction id inside the selected files.
    pub async fn search_selected(
        &self,
        agent: &AgentId,
        transaction_id: &str,
        files: &[String],
        region: Option<&RegionId>,
    ) -> AppResult<Vec<Record>> {
        let selected_files: Vec<&str> = files
            .iter()
            .map(String::as_str)
            .filter(|f| !f.trim().is_empty())
            .collect();
        if transaction_id.trim().is_empty() || selected_files.is_empty() {
            return Err(AppError::validation(
                "idTransaction and selectedFiles are required.",
            ));
        }

        let body = SearchSelectedRequest {
            id_transaction: transaction_id,
            selected_files,
        };
        let response = self
            .transport
            .post(
                &ApiPath::new(BASE).join("search_selected").join(agent),
                Some(serde_json::to_value(&body)?),
                options(region),
            )
            .await
            .or_fallback("Error searching logs in selected files")?;

        match response.json_or_null()? {
            Value::Null => Ok(Vec::new()),
            Value::Array(items) => Ok(items),
            other => Ok(vec![other]),
        }
    }
}

fn options(region: Option<&RegionId>) -> RequestOptions {
    RequestOptions::new().query_opt("region", region)
}

fn ensure_archive(response: &ApiResponse) -> AppResult<()> {
    let content_type = response.content_type();
    let essence = content_type
        .and_then(|ct| ct.split(';').next())
        .map(|ct| ct.trim().to_ascii_lowercase());

    match essence {
        Some(essence) if ARCHIVE_CONTENT_TYPES.contains(&essence.as_str()) => Ok(()),
        _ => {
            error!(content_type = ?content_type, "Unexpected archive content type");
            Err(AppError::invalid_content_type(content_type))
        }
    }
}
