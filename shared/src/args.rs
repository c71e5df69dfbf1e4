use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// The name of the profile to write the clipboard credentials to, overrides any section header in the copied text
    pub profile: Option<String>,

    /// Path to the AWS credentials file [default: ~/.aws/credentials]
    #[arg(short = 'f', long, env = "AWS_SHARED_CREDENTIALS_FILE")]
    pub credentials_file: Option<PathBuf>,

    /// Enables verbose logging to the console
    #[arg(short, long, default_value_t = false)]
    pub debug: bool,
}

impl Args {
    /// The profile override, an empty argument counts as no override
    pub fn profile_override(&self) -> Option<&str> {
        self.profile.as_deref().filter(|p| !p.is_empty())
    }
}
