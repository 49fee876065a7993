/// Constants used throughout the application
///
/// This module centralises the layout markers, transpiler defaults and
/// command-line help texts.

/// Qualifier string used for application identification
pub const QUALIFIER: &str = "com";

/// Organisation name used for application identification
pub const ORGANIZATION: &str = "Ondřej Vágner";

/// Application name used for the platform configuration folder
pub const APPLICATION: &str = "asset_compile";

/// Name of the configuration file looked up in the platform configuration folder
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Root segment of the core project tree
pub const CORE_MARKER: &str = "Core";

/// Segments that identify the admin cabinet asset folder inside the core tree
pub const ADMIN_CABINET_MARKERS: [&str; 2] = ["admin-cabinet", "assets"];

/// Root segment of the extensions tree
pub const EXTENSIONS_MARKER: &str = "Extensions";

/// Segments that identify an extension's public source folder
pub const EXTENSION_SOURCE_MARKERS: [&str; 4] = ["public", "assets", "js", "src"];

/// Script folder segment
pub const JS_SEGMENT: &str = "js";

/// Source folder segment
pub const SRC_SEGMENT: &str = "src";

/// Compiled output folder segment used by the core tree
pub const PBX_SEGMENT: &str = "pbx";

/// Extension given to compiled files
pub const OUTPUT_EXTENSION: &str = "js";

/// Default transpiler executable, relative to the configuration folder
pub const DEFAULT_PROGRAM: &str = "node_modules/.bin/babel";

/// Default Babel preset
pub const DEFAULT_PRESET: &str = "airbnb";

/// Help text for the file argument
pub const FILE_HELP: &str = "JavaScript source file to compile";

/// Help text for the config command-line option
pub const CONFIG_HELP: &str = "Read from a specific config file";

/// Help text for the dry-run command-line option
pub const DRY_RUN_HELP: &str = "Resolve the output folder without running the transpiler";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the log file option
pub const LOG_FILE_HELP: &str = "Also write log messages to this file";

/// Help text for the transpiler override
pub const BABEL_HELP: &str = "Path to the Babel executable (overrides the config file)";

/// Help text for the preset override
pub const PRESET_HELP: &str = "Babel preset to compile with (overrides the config file)";
