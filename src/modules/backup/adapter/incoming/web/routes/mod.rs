mod create_backup;
mod download_backup;
mod list_backups;
mod restore_backup;

pub use create_backup::*;
pub use download_backup::*;
pub use list_backups::*;
pub use restore_backup::*;
