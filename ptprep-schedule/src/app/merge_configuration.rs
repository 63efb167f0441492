use super::{MergeApp, MergeCliError};
use crate::merge::PrefixPolicy;
use config::{Config, Environment};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// environment variables starting with this prefix override configuration
/// file values, e.g. `PTPREP_MERGE_VALIDATE_OUTPUT=false`
pub const ENV_PREFIX: &str = "PTPREP_MERGE";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MergeConfiguration {
    #[serde(default)]
    pub prefix_policy: PrefixPolicy,
    /// check that every reference of the merged dataset resolves before writing
    #[serde(default = "default_true")]
    pub validate_output: bool,
    /// when false, existing output files abort the run before merging
    #[serde(default = "default_true")]
    pub overwrite: bool,
    #[serde(default)]
    pub summary_file: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

impl Default for MergeConfiguration {
    fn default() -> Self {
        MergeConfiguration {
            prefix_policy: PrefixPolicy::default(),
            validate_output: true,
            overwrite: true,
            summary_file: None,
        }
    }
}

impl MergeConfiguration {
    /// loads settings from an optional file followed by the environment
    pub fn load(filepath: Option<&Path>) -> Result<MergeConfiguration, MergeCliError> {
        Self::load_with(filepath, Some(Environment::with_prefix(ENV_PREFIX)))
    }

    fn load_with(
        filepath: Option<&Path>,
        environment: Option<Environment>,
    ) -> Result<MergeConfiguration, MergeCliError> {
        let description = filepath
            .map(|f| format!("failed reading merge configuration '{}'", f.display()))
            .unwrap_or_else(|| String::from("failed reading merge configuration"));
        let mut builder = Config::builder();
        if let Some(f) = filepath {
            builder = builder.add_source(config::File::from(f));
        }
        if let Some(env) = environment {
            builder = builder.add_source(env);
        }
        let config = builder
            .build()
            .map_err(|source| MergeCliError::Configuration {
                msg: description.clone(),
                source,
            })?;
        config
            .try_deserialize::<MergeConfiguration>()
            .map_err(|source| MergeCliError::Configuration {
                msg: description,
                source,
            })
    }

    /// command line arguments take precedence over every other source
    pub fn with_overrides(mut self, app: &MergeApp) -> MergeConfiguration {
        if let Some(policy) = app.prefix_policy {
            self.prefix_policy = policy;
        }
        if let Some(summary_file) = &app.summary_file {
            self.summary_file = Some(summary_file.clone());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_without_sources() {
        let conf = MergeConfiguration::load_with(None, None).unwrap();
        assert_eq!(conf, MergeConfiguration::default());
        assert_eq!(conf.prefix_policy, PrefixPolicy::Disambiguated);
        assert!(conf.validate_output);
        assert!(conf.overwrite);
    }

    #[test]
    fn test_file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merge.toml");
        std::fs::write(
            &path,
            "prefix_policy = \"derived\"\noverwrite = false\nsummary_file = \"summary.json\"\n",
        )
        .unwrap();
        let conf = MergeConfiguration::load_with(Some(&path), None).unwrap();
        assert_eq!(conf.prefix_policy, PrefixPolicy::Derived);
        assert!(!conf.overwrite);
        assert!(conf.validate_output);
        assert_eq!(conf.summary_file, Some(PathBuf::from("summary.json")));
    }

    #[test]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merge.toml");
        std::fs::write(&path, "validate_output = true\noverwrite = false\n").unwrap();
        let variables = config::Map::from([
            (
                String::from("PTPREP_MERGE_PREFIX_POLICY"),
                String::from("derived"),
            ),
            (
                String::from("PTPREP_MERGE_VALIDATE_OUTPUT"),
                String::from("false"),
            ),
            (String::from("UNRELATED_OVERWRITE"), String::from("true")),
        ]);
        let environment = Environment::with_prefix(ENV_PREFIX).source(Some(variables));
        let conf = MergeConfiguration::load_with(Some(&path), Some(environment)).unwrap();
        assert_eq!(conf.prefix_policy, PrefixPolicy::Derived);
        assert!(!conf.validate_output);
        assert!(!conf.overwrite);
    }

    #[test]
    fn test_invalid_environment_value_is_a_configuration_error() {
        let variables = config::Map::from([(
            String::from("PTPREP_MERGE_PREFIX_POLICY"),
            String::from("random"),
        )]);
        let environment = Environment::with_prefix(ENV_PREFIX).source(Some(variables));
        let result = MergeConfiguration::load_with(None, Some(environment));
        assert!(matches!(result, Err(MergeCliError::Configuration { .. })));
    }

    #[test]
    fn test_invalid_policy_is_a_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("merge.toml");
        std::fs::write(&path, "prefix_policy = \"random\"\n").unwrap();
        let result = MergeConfiguration::load_with(Some(&path), None);
        assert!(matches!(result, Err(MergeCliError::Configuration { .. })));
    }

    #[test]
    fn test_command_line_overrides() {
        let app = MergeApp::try_parse_from([
            "merge_schedules",
            "--prefix-policy",
            "derived",
            "--summary-file",
            "run/summary.json",
            "s.xml",
            "v.xml",
            "a/s.xml",
            "a/v.xml",
        ])
        .unwrap();
        let conf = MergeConfiguration::default().with_overrides(&app);
        assert_eq!(conf.prefix_policy, PrefixPolicy::Derived);
        assert_eq!(conf.summary_file, Some(PathBuf::from("run/summary.json")));
    }
}
