//! # JSON Export
//!
//! Serializes the completed form as 2-space indented JSON. There is no
//! schema version and no checksum; the file is the form document as is.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{FormError, FormResult};
use crate::form::OnboardingForm;

/// Default export file name for a given instant.
///
/// Format: `onboarding-<yyyymmddHHMMSS>.json` in UTC.
pub fn default_export_file_name(at: DateTime<Utc>) -> String {
    format!("onboarding-{}.json", at.format("%Y%m%d%H%M%S"))
}

/// Render the form as indented JSON with a trailing newline.
pub fn to_export_json(form: &OnboardingForm) -> FormResult<String> {
    let mut json = serde_json::to_string_pretty(form)?;
    json.push('\n');
    Ok(json)
}

/// Write the export to `path`, creating parent directories as needed.
pub fn write_export(form: &OnboardingForm, path: &Path) -> FormResult<PathBuf> {
    let json = to_export_json(form)?;
    let write_err = |source| FormError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(path, json.as_bytes()).map_err(write_err)?;
    tracing::info!(
        path = %path.display(),
        bytes = json.len(),
        consent_params = form.consent_params.len(),
        "form exported"
    );
    Ok(path.to_path_buf())
}

/// Write the export into `dir` under the default file name for `at`.
pub fn write_export_to_dir(
    form: &OnboardingForm,
    dir: &Path,
    at: DateTime<Utc>,
) -> FormResult<PathBuf> {
    write_export(form, &dir.join(default_export_file_name(at)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn instant() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 9, 7, 5, 1).unwrap()
    }

    #[test]
    fn default_name_is_utc_timestamp() {
        assert_eq!(
            default_export_file_name(instant()),
            "onboarding-20240309070501.json"
        );
    }

    #[test]
    fn export_is_two_space_indented() {
        let mut form = OnboardingForm::new("RBI");
        form.set_field("Entity Details", "entityName", json!("Acme"));
        let json = to_export_json(&form).unwrap();
        assert!(json.starts_with("{\n  \"regulator\": \"RBI\",\n  \"sections\": {\n    \"Entity Details\""));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn export_reloads_to_same_form() {
        let dir = tempfile::tempdir().unwrap();
        let mut form = OnboardingForm::new("RBI");
        form.add_consent_param();
        let path = write_export_to_dir(&form, &dir.path().join("out"), instant()).unwrap();
        assert!(path.ends_with("onboarding-20240309070501.json"));
        let back = OnboardingForm::load(&path).unwrap();
        assert_eq!(back, form);
    }

    #[test]
    fn unwritable_target_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "x").unwrap();
        let target = blocker.join("nested.json");
        let err = write_export(&OnboardingForm::default(), &target).unwrap_err();
        assert!(matches!(err, FormError::Write { .. }));
    }
}
