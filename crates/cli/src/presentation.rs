// crates/cli/src/presentation.rs
use std::borrow::Cow;
use std::io::Write;

use version_info_domain::Classification;
use version_info_shared_kernel::ErrorContext;

use crate::error::Result;
use crate::options::OutputFormat;

/// Escapes control characters so one identifier always stays on one line.
fn escape_controls(value: &str) -> Cow<'_, str> {
    if !value.chars().any(char::is_control) {
        return Cow::Borrowed(value);
    }
    value
        .chars()
        .map(|c| if c.is_control() { c.escape_default().to_string() } else { c.to_string() })
        .collect::<String>()
        .into()
}

/// Renders classifications in the requested format, newline-terminated.
///
/// Text output is one `<version>\t<kind>` line per identifier, with tabs,
/// newlines and other control characters in the version escaped.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn render(classifications: &[Classification], format: OutputFormat) -> Result<String> {
    let mut out = match format {
        OutputFormat::Text => classifications
            .iter()
            .map(|c| format!("{}\t{}", escape_controls(&c.version), c.kind))
            .collect::<Vec<_>>()
            .join("\n"),
        OutputFormat::Json => {
            serde_json::to_string_pretty(classifications).context("rendering JSON report")?
        }
        // serde_yaml already ends documents with a newline
        OutputFormat::Yaml => {
            return Ok(serde_yaml::to_string(classifications).context("rendering YAML report")?);
        }
    };
    out.push('\n');
    Ok(out)
}

/// Writes the rendered report to `writer`.
///
/// # Errors
/// Returns an error if rendering or writing fails.
pub fn write_report<W: Write>(
    writer: &mut W,
    classifications: &[Classification],
    format: OutputFormat,
) -> Result<()> {
    let rendered = render(classifications, format)?;
    writer.write_all(rendered.as_bytes()).context("writing report")?;
    writer.flush().context("flushing report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use version_info_domain::classify;
    use version_info_shared_kernel::VersionIdentifier;

    fn sample() -> Vec<Classification> {
        ["2.21.4.dev0", "2.21.4"]
            .into_iter()
            .map(|v| classify(&VersionIdentifier::from(v)))
            .collect()
    }

    #[test]
    fn text_lists_one_line_per_version() {
        let text = render(&sample(), OutputFormat::Text).unwrap();
        assert_eq!(text, "2.21.4.dev0\tpre-release\n2.21.4\trelease\n");
    }

    #[test]
    fn json_is_an_array_of_records() {
        let json = render(&sample(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[0]["kind"], "pre-release");
        assert!(value[0]["components"].is_null());
        assert_eq!(value[1]["components"]["minor"], 21);
    }

    #[test]
    fn yaml_mentions_every_version() {
        let yaml = render(&sample(), OutputFormat::Yaml).unwrap();
        assert!(yaml.contains("version: 2.21.4.dev0"));
        assert!(yaml.contains("kind: pre-release"));
        assert!(yaml.contains("kind: release"));
        assert!(yaml.ends_with('\n'));
    }

    #[test]
    fn text_escapes_control_characters() {
        let classifications: Vec<_> = ["1.0.0\n", "1.0.0\tx", "\u{0661}.0.0"]
            .into_iter()
            .map(|v| classify(&VersionIdentifier::from(v)))
            .collect();
        let text = render(&classifications, OutputFormat::Text).unwrap();
        assert_eq!(
            text,
            "1.0.0\\n\tpre-release\n1.0.0\\tx\tpre-release\n\u{0661}.0.0\trelease\n"
        );
        assert_eq!(text.lines().count(), 3);
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::from(std::io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_carries_context() {
        let err = write_report(&mut ClosedPipe, &sample(), OutputFormat::Text).unwrap_err();
        assert!(err.to_string().starts_with("writing report: "));
    }

    #[test]
    fn write_report_writes_rendered_bytes() {
        let mut buf = Vec::new();
        write_report(&mut buf, &sample(), OutputFormat::Text).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), render(&sample(), OutputFormat::Text).unwrap());
    }
}
