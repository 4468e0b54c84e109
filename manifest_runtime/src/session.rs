//! Session: derive, assemble, persist.
//!
//! Order per request:
//!   1. engine derives the reading (panics only on an invariant bug)
//!   2. report assembled, request sealed if configured
//!   3. report written to `<output_dir>/report_<stem>.json`

use std::path::PathBuf;

use chrono::{Local, NaiveDateTime};
use log::{debug, info};

use manifest_engine::domain::QuantumCode;
use manifest_engine::engine::derive_reading;
use manifest_engine::request::ManifestationRequest;

use crate::config::RuntimeConfig;
use crate::logging::fingerprint;
use crate::report::{build_report, report_file_name, ManifestationReport};
use crate::report_codec::{export_report_to_file, import_report_from_file, report_hash, ReportError};

/// What a session returns for one request.
#[derive(Debug, Clone)]
pub struct ManifestOutcome {
    pub report: ManifestationReport,
    pub path: PathBuf,
    pub hash: String,
}

pub struct Session {
    config: RuntimeConfig,
}

impl Session {
    pub fn new(config: RuntimeConfig) -> Self {
        Self { config }
    }

    /// Manifest at the local wall-clock instant.
    pub fn manifest(&self, request: &ManifestationRequest) -> Result<ManifestOutcome, ReportError> {
        self.manifest_at(request, &Local::now().naive_local())
    }

    /// Manifest at a given instant.
    pub fn manifest_at(
        &self,
        request: &ManifestationRequest,
        now: &NaiveDateTime,
    ) -> Result<ManifestOutcome, ReportError> {
        debug!(
            "event=manifest_start module=session status=start name_fp={} intention_fp={} pantacle={}",
            fingerprint(&request.name),
            fingerprint(&request.intention),
            request.pantacle
        );

        let reading = derive_reading(request, now);
        let code = reading.quantum_code.clone();
        let report = build_report(request, reading, now, self.config.seal_reports)?;

        let path = self.report_path(&code);
        export_report_to_file(&report, &path)?;
        let hash = report_hash(&report)?;

        info!(
            "event=manifest_written module=session status=ok code={} lunar_deg={:.1} sealed={} path={}",
            code,
            report.reading.lunar_phase.degrees(),
            report.sealed_payload.is_some(),
            path.display()
        );

        Ok(ManifestOutcome { report, path, hash })
    }

    /// Re-import a report written earlier for `code`.
    pub fn load(&self, code: &QuantumCode) -> Result<ManifestationReport, ReportError> {
        import_report_from_file(&self.report_path(code))
    }

    pub fn report_path(&self, code: &QuantumCode) -> PathBuf {
        self.config.output_dir.join(report_file_name(code))
    }
}
