use crate::clipboard::ClipboardSource;
use crate::error::CredsError;
use file_manager::aws_credentials::AwsCredentials;
use file_manager::snippet::parse_snippet;
use shared::args::Args;
use tracing::info;

/// Writes the credentials on the clipboard into the credentials file and
/// returns the name of the profile that was updated.
pub fn update_profile(
    clipboard: &mut dyn ClipboardSource,
    args: &Args,
) -> Result<String, CredsError> {
    let name_override = args.profile_override();

    let raw = clipboard.read_text()?;
    let mut profile = parse_snippet(&raw, name_override).ok_or(CredsError::UnrecognizedSnippet)?;
    profile.resolve_name(name_override);

    let profile_name = profile.name.clone();
    let persistence_failure = |source: anyhow::Error| CredsError::PersistenceFailure {
        profile: profile_name.clone(),
        source,
    };

    info!("Updating profile: {}", profile_name);

    let path = AwsCredentials::file_path(args.credentials_file.as_deref())
        .map_err(persistence_failure)?;
    let profiles = AwsCredentials::read_file(&path)
        .map_err(persistence_failure)?
        .merge(Some(profile));
    AwsCredentials::write(&path, &profiles).map_err(persistence_failure)?;

    Ok(profile_name)
}
