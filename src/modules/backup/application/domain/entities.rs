use std::fmt;
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::Serialize;
use utoipa::ToSchema;

#[allow(clippy::expect_used)]
static FILE_NAME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^backup_\d{8}_\d{6}\.db$").expect("static regex should not panic")
});

/// Name of a snapshot inside the backup directory. Only names of the form
/// `backup_YYYYmmdd_HHMMSS.db` exist, so no path can escape the directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BackupFileName(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid backup file name")]
pub struct InvalidFileName;

impl BackupFileName {
    pub fn parse(name: &str) -> Result<Self, InvalidFileName> {
        if FILE_NAME_PATTERN.is_match(name) {
            Ok(Self(name.to_string()))
        } else {
            Err(InvalidFileName)
        }
    }

    pub fn for_time(at: DateTime<Utc>) -> Self {
        Self(at.format("backup_%Y%m%d_%H%M%S.db").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BackupFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct BackupFile {
    #[schema(example = "backup_20251105_143022.db")]
    pub filename: String,
    pub size_bytes: u64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn generated_names_pass_validation() {
        let at = Utc.with_ymd_and_hms(2025, 11, 5, 14, 30, 22).unwrap();
        let name = BackupFileName::for_time(at);

        assert_eq!(name.as_str(), "backup_20251105_143022.db");
        assert_eq!(BackupFileName::parse(name.as_str()), Ok(name));
    }

    #[test]
    fn rejects_anything_else() {
        for bad in [
            "../dental_clinic.db",
            "backup_20251105_143022.db/../../etc/passwd",
            "backup_2025115_143022.db",
            "backup_20251105_143022.sqlite",
            "dental_clinic.db",
            "",
        ] {
            assert_eq!(BackupFileName::parse(bad), Err(InvalidFileName), "{bad}");
        }
    }
}
