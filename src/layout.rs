use anyhow::{Result, bail};
use camino::Utf8PathBuf;

/// A fixed, ordered list of folders to scaffold under the base directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub name: &'static str,
    /// Qualifier for the completion message; `None` for the unqualified layout.
    pub scope: Option<&'static str>,
    pub folders: &'static [&'static str],
}

/// Client-only layout with sources nested under `src/`.
pub const CLIENT: Layout = Layout {
    name: "client",
    scope: Some("Client"),
    folders: &[
        "app/client/public",
        "app/client/src",
        "app/client/src/components",
        "app/client/src/pages",
        "app/client/src/styles",
        "app/client/src/utils",
        "app/client/src/context",
    ],
};

/// Full client, server, and config layout.
pub const FULL: Layout = Layout {
    name: "full",
    scope: None,
    folders: &[
        "app/client/components",
        "app/client/pages",
        "app/client/styles",
        "app/server/routes",
        "app/server/controllers",
        "app/server/models",
        "app/server/utils",
        "app/prisma",
        "app/config",
    ],
};

impl Layout {
    pub fn completion_message(&self) -> String {
        match self.scope {
            Some(scope) => format!("{scope} folder structure created successfully!"),
            None => "Folder structure created successfully!".to_owned(),
        }
    }
}

/// Convert a forward-slash folder spec into a native relative path.
pub fn relative_path(spec: &str) -> Result<Utf8PathBuf> {
    if spec.is_empty() {
        bail!("folder spec must not be empty");
    }
    if spec.starts_with('/') {
        bail!("folder spec must be relative: {spec}");
    }

    let mut path = Utf8PathBuf::new();
    for segment in spec.split('/') {
        match segment {
            "" | "." | ".." => bail!("folder spec has invalid segment {segment:?}: {spec}"),
            _ => path.push(segment),
        }
    }
    Ok(path)
}
