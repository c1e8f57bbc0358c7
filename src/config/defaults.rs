//! Default configuration values
//!
//! Named constants for all tunable parameters

/// Default server host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default server port
pub const DEFAULT_PORT: u16 = 3000;

/// Directory served at `/` (client pages)
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Directory served at `/static`, also where synthesized audio lands
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Largest accepted `/classify-image` request body (20 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

/// Default number of landmarks announced per location
pub const DEFAULT_TOP_N: usize = crate::constants::guide::DEFAULT_TOP_N;

/// Default interpreter for the external scripts
pub const DEFAULT_PROGRAM: &str = "python";

/// Default text-to-speech script
pub const DEFAULT_SPEECH_SCRIPT: &str = "audio_conversion.py";

/// Default image classifier script
pub const DEFAULT_CLASSIFIER_SCRIPT: &str = "model_1.py";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Application directory name (for XDG paths)
pub const APP_DIR_NAME: &str = "landmark-guide";
