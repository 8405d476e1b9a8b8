#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todo::db::tasks::Tasks;
    use todo::libs::config::{Config, CONFIG_FILE_NAME, DB_FILE_NAME, ENV_DATE_FORMAT, ENV_DB_PATH};
    use todo::libs::data_storage::DataStorage;
    use todo::libs::error::TodoError;

    /// A fresh data directory standing in for the platform one.
    struct ConfigTestContext {
        temp_dir: TempDir,
        storage: DataStorage,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let storage = DataStorage::at(temp_dir.path().join("todo"));
            ConfigTestContext { temp_dir, storage }
        }
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_defaults_without_config_file(ctx: &mut ConfigTestContext) {
        let config = Config::read_from(&ctx.storage, no_env).unwrap();
        assert_eq!(config.db_path, ctx.storage.path(DB_FILE_NAME));
        assert_eq!(config.date_format, "%Y-%m-%d");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_config(ctx: &mut ConfigTestContext) {
        let config = Config {
            db_path: ctx.temp_dir.path().join("elsewhere").join("tasks.db"),
            date_format: "%d.%m.%Y".to_string(),
        };
        config.save(&ctx.storage).unwrap();

        let read_config = Config::read_from(&ctx.storage, no_env).unwrap();
        assert_eq!(read_config, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_file_keeps_defaults(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(path, r#"{ "date_format": "%m/%d/%Y" }"#).unwrap();

        let config = Config::read_from(&ctx.storage, no_env).unwrap();
        assert_eq!(config.date_format, "%m/%d/%Y");
        assert_eq!(config.db_path, ctx.storage.path(DB_FILE_NAME));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_environment_overrides_config_file(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(path, r#"{ "date_format": "%m/%d/%Y" }"#).unwrap();

        let env: HashMap<&str, String> = HashMap::from([
            (ENV_DB_PATH, "/tmp/override.db".to_string()),
            (ENV_DATE_FORMAT, "%Y.%m.%d".to_string()),
        ]);
        let config = Config::read_from(&ctx.storage, |key| env.get(key).cloned()).unwrap();
        assert_eq!(config.db_path.to_str(), Some("/tmp/override.db"));
        assert_eq!(config.date_format, "%Y.%m.%d");
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_date_format_is_a_config_error(ctx: &mut ConfigTestContext) {
        let err = Config::read_from(&ctx.storage, |key| (key == ENV_DATE_FORMAT).then(|| "%Y-%".to_string())).unwrap_err();
        assert!(matches!(err, TodoError::Config(_)));

        let err = Config::read_from(&ctx.storage, |key| (key == ENV_DATE_FORMAT).then(|| "%H:%M".to_string())).unwrap_err();
        assert!(matches!(err, TodoError::Config(_)));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_empty_environment_values_are_ignored(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(path, r#"{ "date_format": "%m/%d/%Y" }"#).unwrap();

        let config = Config::read_from(&ctx.storage, |key| {
            (key == ENV_DATE_FORMAT || key == ENV_DB_PATH).then(String::new)
        })
        .unwrap();
        assert_eq!(config.date_format, "%m/%d/%Y");
        assert_eq!(config.db_path, ctx.storage.path(DB_FILE_NAME));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_corrupted_config_file(ctx: &mut ConfigTestContext) {
        let path = ctx.storage.get_path(CONFIG_FILE_NAME).unwrap();
        fs::write(path, "{ not json").unwrap();

        let err = Config::read_from(&ctx.storage, no_env).unwrap_err();
        assert!(matches!(err, TodoError::Json(_)));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_open_db_creates_missing_directories(ctx: &mut ConfigTestContext) {
        let config = Config {
            db_path: ctx.temp_dir.path().join("nested").join("dir").join("todo.db"),
            date_format: "%Y-%m-%d".to_string(),
        };
        let db = config.open_db().unwrap();
        Tasks::new(&db).unwrap();
        db.close().unwrap();
        assert!(config.db_path.exists());
    }
}
