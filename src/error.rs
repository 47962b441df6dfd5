// src/error.rs
use thiserror::Error;

/// Failures raised between locating the embedded payload and filling the
/// last target region. Section renderers surface these instead of touching
/// the page, so one bad sub-tree never blanks an unrelated region.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The element carrying the JSON payload is not in the page.
    #[error("configuration element `#{0}` not found in page")]
    ConfigMissing(&'static str),

    /// The embedded payload is not valid JSON or violates the schema.
    #[error("configuration payload did not parse: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// A section renderer ran without its required configuration sub-tree.
    #[error("required section `{section}` missing from configuration")]
    MissingField { section: &'static str },

    /// A section renderer could not find its target region in the page.
    #[error("target region `#{region}` not found in page")]
    RegionMissing { region: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_piece() {
        let err = RenderError::ConfigMissing("resume-config");
        assert_eq!(
            err.to_string(),
            "configuration element `#resume-config` not found in page"
        );

        let err = RenderError::MissingField { section: "basic" };
        assert_eq!(
            err.to_string(),
            "required section `basic` missing from configuration"
        );

        let err = RenderError::RegionMissing { region: "skills-container" };
        assert_eq!(
            err.to_string(),
            "target region `#skills-container` not found in page"
        );
    }

    #[test]
    fn test_json_errors_convert() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{nope").unwrap_err();
        let err: RenderError = parse_err.into();
        assert!(matches!(err, RenderError::ConfigParse(_)));
        assert!(err.to_string().starts_with("configuration payload did not parse"));
    }
}
