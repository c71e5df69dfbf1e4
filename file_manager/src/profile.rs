use tracing::debug;

pub const DEFAULT_PROFILE_NAME: &str = "default";

/// A named section of the credentials file, kept as its raw lines so that
/// anything the tool doesn't understand survives a rewrite.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileRecord {
    pub name: String,
    pub lines: Vec<String>,
    /// Set when the lines carry no `[name]` header of their own
    pub needs_synthetic_header: bool,
}

impl ProfileRecord {
    /// Settles the name the record is written under: the override when given,
    /// otherwise the copied section header, otherwise `default`.
    pub fn resolve_name(&mut self, name_override: Option<&str>) {
        let name_override = name_override.filter(|n| !n.is_empty());

        if name_override.is_some() || self.needs_synthetic_header {
            self.name = name_override.unwrap_or(DEFAULT_PROFILE_NAME).to_owned();
        }
    }

    fn is_writable(&self) -> bool {
        !self.name.is_empty() && !self.lines.is_empty()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProfileCollection {
    pub profiles: Vec<ProfileRecord>,
}

impl ProfileCollection {
    pub fn parse(raw: &str) -> Self {
        let mut profiles = Vec::new();
        let mut current: Option<ProfileRecord> = None;

        for line in raw.lines() {
            if line.trim().is_empty() {
                continue;
            }

            if let Some(name) = header_name(line) {
                profiles.extend(current.take());
                current = Some(ProfileRecord {
                    name: name.to_owned(),
                    lines: Vec::with_capacity(4),
                    needs_synthetic_header: false,
                });
            }

            match current.as_mut() {
                Some(profile) => profile.lines.push(line.to_owned()),
                None => debug!("Ignoring line outside of any profile section"),
            }
        }
        profiles.extend(current);

        Self { profiles }
    }

    /// Replaces the first profile with the incoming name, or appends it.
    pub fn merge(mut self, incoming: Option<ProfileRecord>) -> Self {
        if let Some(incoming) = incoming.filter(|p| !p.lines.is_empty()) {
            self.upsert(incoming);
        }
        self
    }

    fn upsert(&mut self, incoming: ProfileRecord) {
        match self.profiles.iter_mut().find(|p| p.name == incoming.name) {
            Some(existing) => {
                debug!("Replacing profile: {}", incoming.name);
                *existing = incoming;
            }
            None => {
                debug!("Adding profile: {}", incoming.name);
                self.profiles.push(incoming);
            }
        }
    }

    pub fn render(&self) -> String {
        let mut out = String::new();

        for profile in self.profiles.iter().filter(|p| p.is_writable()) {
            if profile.needs_synthetic_header {
                out.push_str(&format!("[{}]\n", profile.name));
            }
            for line in profile.lines.iter().filter(|l| !l.trim().is_empty()) {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }

        out
    }
}

fn header_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let end = rest.find(']')?;
    Some(&rest[..end])
}
