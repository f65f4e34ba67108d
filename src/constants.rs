//! Constants used throughout the scaffolder

/// Suffix every bundle name and bundle namespace must end with
pub const BUNDLE_SUFFIX: &str = "Bundle";

/// Separator used between PHP namespace segments
pub const NAMESPACE_SEPARATOR: char = '\\';

/// Suffix of the skeleton template files
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Target directory suggested by the interactive flow
pub const DEFAULT_TARGET_DIR: &str = "src";

/// Host kernel file, relative to the project root
pub const DEFAULT_KERNEL_FILE: &str = "app/AppKernel.php";

/// Composer manifest, relative to the project root
pub const COMPOSER_FILE: &str = "composer.json";

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
