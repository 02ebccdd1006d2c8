use proptest::prelude::*;
use secrets_backend::{build_default_path, build_path, SecretPaths, DEFAULT_SEPARATOR};

#[test]
fn build_path_examples() {
    assert_eq!(build_default_path("airflow/connections", "db_main"), "airflow/connections/db_main");
    assert_eq!(build_path("secrets", "api_key", "-"), "secrets-api_key");
    assert_eq!(DEFAULT_SEPARATOR, "/");
}

proptest! {
    #[test]
    fn build_path_concatenates(prefix in ".*", id in ".*", sep in ".{0,3}") {
        prop_assert_eq!(build_path(&prefix, &id, &sep), format!("{}{}{}", prefix, sep, id));
    }

    #[test]
    fn default_separator_is_slash(prefix in ".*", id in ".*") {
        prop_assert_eq!(build_default_path(&prefix, &id), format!("{}/{}", prefix, id));
    }

    #[test]
    fn build_path_is_deterministic(prefix in "[a-z/]{0,16}", id in "[a-z_]{0,16}") {
        prop_assert_eq!(build_default_path(&prefix, &id), build_default_path(&prefix, &id));
    }

    #[test]
    fn secret_paths_use_build_path(prefix in "[a-z/]{1,16}", id in "[a-z_]{1,16}", sep in "[/:-]") {
        let paths = SecretPaths {
            connections_prefix: Some(prefix.clone()),
            variables_prefix: None,
            config_prefix: Some(prefix.clone()),
            sep: sep.clone(),
        };
        prop_assert_eq!(paths.connection_path(&id), Some(build_path(&prefix, &id, &sep)));
        prop_assert_eq!(paths.config_path(&id), Some(build_path(&prefix, &id, &sep)));
        prop_assert_eq!(paths.variable_path(&id), None);
    }
}
