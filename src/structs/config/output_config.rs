use serde::{Deserialize, Serialize};
use crate::enums::output_format::OutputFormat;

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    /// Reports are written here as `<repository>-gap-report.<ext>` when set.
    #[serde(default)]
    pub output_dir: Option<String>,
}
