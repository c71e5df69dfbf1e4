use crate::profile::ProfileRecord;
use tracing::debug;

struct ExportPrefix {
    prefix: &'static str,
    key: &'static str,
    is_key_id: bool,
}

macro_rules! export_prefixes {
    ($($shell:literal),+) => {
        [$(
            ExportPrefix {
                prefix: concat!($shell, "AWS_ACCESS_KEY_ID="),
                key: "aws_access_key_id",
                is_key_id: true,
            },
            ExportPrefix {
                prefix: concat!($shell, "AWS_SECRET_ACCESS_KEY="),
                key: "aws_secret_access_key",
                is_key_id: false,
            },
            ExportPrefix {
                prefix: concat!($shell, "AWS_SESSION_TOKEN="),
                key: "aws_session_token",
                is_key_id: false,
            },
        )+]
    };
}

// POSIX shell, Windows cmd, PowerShell
static EXPORT_PREFIXES: [ExportPrefix; 9] = export_prefixes!("export ", "SET ", "$Env:");

const KEY_ID: &str = "aws_access_key_id";

/// Parses credentials copied from an identity center login page, either the
/// environment variable exports or the credentials file section.
///
/// Returns `None` when nothing in the text looks like an access key id.
pub fn parse_snippet(raw: &str, name_override: Option<&str>) -> Option<ProfileRecord> {
    let name_override = name_override.filter(|n| !n.is_empty());

    let mut profile = ProfileRecord::default();
    let mut found_key_id = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        if let Some((export, value)) = match_export(trimmed) {
            found_key_id |= export.is_key_id;
            profile.lines.push(format!("{}={}", export.key, unquote(value)));
        } else if let Some(name) = section_name(trimmed) {
            match name_override {
                Some(name_override) => {
                    profile.name = name_override.to_owned();
                    profile.lines.push(format!("[{}]", name_override));
                }
                None => {
                    profile.name = name.to_owned();
                    profile.lines.push(trimmed.to_owned());
                }
            }
        } else {
            found_key_id |= trimmed.contains(KEY_ID);
            profile.lines.push(line.trim_end().to_owned());
        }
    }

    if !found_key_id {
        debug!("No {} found in {} clipboard lines", KEY_ID, raw.lines().count());
        return None;
    }

    profile.needs_synthetic_header = profile.name.is_empty();

    debug!(
        "Parsed {} credential lines, section header {}",
        profile.lines.len(),
        if profile.needs_synthetic_header {
            "missing"
        } else {
            "present"
        }
    );

    Some(profile)
}

fn match_export(line: &str) -> Option<(&'static ExportPrefix, &str)> {
    EXPORT_PREFIXES
        .iter()
        .find_map(|export| line.strip_prefix(export.prefix).map(|value| (export, value)))
}

fn section_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.strip_suffix(']')
}

fn unquote(value: &str) -> &str {
    value.trim().trim_matches(|c: char| c == '"' || c == '\'')
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: [&str; 3] = [
        "aws_access_key_id=AKIAEXAMPLE",
        "aws_secret_access_key=secret/key+value",
        "aws_session_token=token==",
    ];

    #[test]
    fn posix_exports() {
        let raw = "export AWS_ACCESS_KEY_ID=\"AKIAEXAMPLE\"\n\
                   export AWS_SECRET_ACCESS_KEY=\"secret/key+value\"\n\
                   export AWS_SESSION_TOKEN=\"token==\"\n";
        let profile = parse_snippet(raw, None).unwrap();

        assert_eq!(profile.lines, CANONICAL);
        assert_eq!(profile.name, "");
        assert!(profile.needs_synthetic_header);
    }

    #[test]
    fn windows_exports() {
        let raw = "SET AWS_ACCESS_KEY_ID=AKIAEXAMPLE\r\n\
                   SET AWS_SECRET_ACCESS_KEY=secret/key+value\r\n\
                   SET AWS_SESSION_TOKEN=token==\r\n";
        let profile = parse_snippet(raw, None).unwrap();

        assert_eq!(profile.lines, CANONICAL);
        assert!(profile.needs_synthetic_header);
    }

    #[test]
    fn powershell_exports() {
        let raw = "$Env:AWS_ACCESS_KEY_ID=\"AKIAEXAMPLE\"\n\
                   $Env:AWS_SECRET_ACCESS_KEY=\"secret/key+value\"\n\
                   $Env:AWS_SESSION_TOKEN=\"token==\"";
        let profile = parse_snippet(raw, None).unwrap();

        assert_eq!(profile.lines, CANONICAL);
        assert!(profile.needs_synthetic_header);
    }

    #[test]
    fn credentials_file_section() {
        let raw = "[123456789012_AdministratorAccess]\n\
                   aws_access_key_id=AKIAEXAMPLE\n\
                   aws_secret_access_key=secret\n\
                   aws_session_token=token\n";
        let profile = parse_snippet(raw, None).unwrap();

        assert_eq!(profile.name, "123456789012_AdministratorAccess");
        assert_eq!(profile.lines[0], "[123456789012_AdministratorAccess]");
        assert_eq!(profile.lines.len(), 4);
        assert!(!profile.needs_synthetic_header);
    }

    #[test]
    fn override_replaces_section_header() {
        let raw = "[123456789012_AdministratorAccess]\naws_access_key_id = AKIAEXAMPLE\n";
        let profile = parse_snippet(raw, Some("personal")).unwrap();

        assert_eq!(profile.name, "personal");
        assert_eq!(profile.lines, ["[personal]", "aws_access_key_id = AKIAEXAMPLE"]);
        assert!(!profile.needs_synthetic_header);
    }

    #[test]
    fn empty_override_is_ignored() {
        let raw = "[work]\naws_access_key_id=AKIAEXAMPLE\n";
        let profile = parse_snippet(raw, Some("")).unwrap();

        assert_eq!(profile.name, "work");
        assert_eq!(profile.lines[0], "[work]");
    }

    #[test]
    fn unrecognized_without_key_id() {
        assert!(parse_snippet("", None).is_none());
        assert!(parse_snippet("\n\n  \n", None).is_none());
        assert!(parse_snippet("export AWS_SECRET_ACCESS_KEY=\"secret\"", None).is_none());
        assert!(parse_snippet("[default]\nregion=eu-west-1\n", None).is_none());
        assert!(parse_snippet("just some text someone copied", Some("work")).is_none());
    }

    #[test]
    fn passthrough_key_id_is_evidence() {
        let profile = parse_snippet("aws_access_key_id = AKIAEXAMPLE", None).unwrap();

        assert_eq!(profile.lines, ["aws_access_key_id = AKIAEXAMPLE"]);
        assert!(profile.needs_synthetic_header);
    }

    #[test]
    fn blank_lines_are_dropped() {
        let raw = "\nexport AWS_ACCESS_KEY_ID=AKIA1\n\n\nexport AWS_SECRET_ACCESS_KEY=s\n\n";
        let profile = parse_snippet(raw, None).unwrap();

        assert_eq!(
            profile.lines,
            ["aws_access_key_id=AKIA1", "aws_secret_access_key=s"]
        );
    }

    #[test]
    fn malformed_values_are_tolerated() {
        let raw = "export AWS_ACCESS_KEY_ID=\"AKIA1\nexport AWS_SESSION_TOKEN=\n";
        let profile = parse_snippet(raw, None).unwrap();

        assert_eq!(profile.lines, ["aws_access_key_id=AKIA1", "aws_session_token="]);
    }

    #[test]
    fn single_quotes_and_padding_are_stripped() {
        let profile = parse_snippet("  export AWS_ACCESS_KEY_ID='AKIA1'  ", None).unwrap();

        assert_eq!(profile.lines, ["aws_access_key_id=AKIA1"]);
    }
}
