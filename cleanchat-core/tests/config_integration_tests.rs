// cleanchat-core/tests/config_integration_tests.rs
use anyhow::Result;
use std::io::Write;
use tempfile::NamedTempFile;

use cleanchat_core::{ContentFilter, FilterError, FilterOptions, ProfanityFilter, DEFAULT_BACKTRACK_LIMIT};

#[test]
fn test_load_from_file() -> Result<()> {
    let yaml_content = r##"
placeholder: "#"
max_input_chars: 280
"##;
    let mut file = NamedTempFile::new()?;
    file.write_all(yaml_content.as_bytes())?;
    let options = FilterOptions::load_from_file(file.path())?;
    assert_eq!(options.placeholder, '#');
    assert_eq!(options.max_input_chars, 280);
    assert_eq!(options.backtrack_limit, DEFAULT_BACKTRACK_LIMIT);

    let filter = ProfanityFilter::builder().options(options).build();
    assert_eq!(filter.mask("you are a bitch"), "you are a #####");
    Ok(())
}

#[test]
fn test_load_from_missing_file() {
    let err = FilterOptions::load_from_file("/definitely/not/here.yaml").unwrap_err();
    assert!(format!("{err:#}").contains("Failed to read config file"));
    assert!(
        matches!(err.downcast_ref::<FilterError>(), Some(FilterError::Io(_))),
        "unexpected error: {err:?}"
    );
}

#[test]
fn test_load_invalid_yaml() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"placeholder: [not, a, char]\n")?;
    let err = FilterOptions::load_from_file(file.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config file"));
    Ok(())
}

#[test]
fn test_load_rejects_zero_limits() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"delegate_size_limit: 0\n")?;
    assert!(FilterOptions::load_from_file(file.path()).is_err());
    Ok(())
}
