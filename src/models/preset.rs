use std::ffi::OsString;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// What to do when the destination directory is absent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationPolicy {
    CreateIfMissing,
    RequireExisting,
}

/// Built-in copy variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    ExcalidrawScripts,
    Mirror,
    Strict,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::ExcalidrawScripts, Preset::Mirror, Preset::Strict];

    pub fn name(self) -> &'static str {
        match self {
            Preset::ExcalidrawScripts => "excalidraw-scripts",
            Preset::Mirror => "mirror",
            Preset::Strict => "strict",
        }
    }

    /// Hardcoded destination of the preset, relative to the working directory.
    ///
    /// Only the `Scripts` folder comes from the Excalidraw copy script;
    /// `Mirror` is a placeholder for the variant without renaming, whose
    /// real path is unknown. Override it with `--dest` or `FLAT_COPY_DEST`.
    pub fn destination(self) -> PathBuf {
        let base = PathBuf::from("..").join("Zero").join("Excalidraw");
        match self {
            Preset::ExcalidrawScripts | Preset::Strict => base.join("Scripts"),
            Preset::Mirror => base.join("Mirror"),
        }
    }

    pub fn policy(self) -> DestinationPolicy {
        match self {
            Preset::ExcalidrawScripts | Preset::Mirror => DestinationPolicy::CreateIfMissing,
            Preset::Strict => DestinationPolicy::RequireExisting,
        }
    }

    pub fn excludes_self(self) -> bool {
        !matches!(self, Preset::Strict)
    }

    pub fn renames_js(self) -> bool {
        matches!(self, Preset::ExcalidrawScripts)
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let known: Vec<&str> = Preset::ALL.iter().map(|p| p.name()).collect();
                format!("Unknown preset '{}', expected one of: {}", s, known.join(", "))
            })
    }
}

/// Configuration for a single flat copy run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatCopyConfig {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub policy: DestinationPolicy,
    /// File name skipped during copying, usually the running executable
    pub exclude_name: Option<OsString>,
    pub rename_js: bool,
}

impl FlatCopyConfig {
    /// Build a config from a preset; self-exclusion resolves to `self_name`
    pub fn from_preset(preset: Preset, source: PathBuf, self_name: Option<OsString>) -> Self {
        Self {
            source,
            destination: preset.destination(),
            policy: preset.policy(),
            exclude_name: if preset.excludes_self() { self_name } else { None },
            rename_js: preset.renames_js(),
        }
    }

    pub fn excludes_self(&self) -> bool {
        self.exclude_name.is_some()
    }
}

impl Default for FlatCopyConfig {
    fn default() -> Self {
        Self::from_preset(Preset::default(), PathBuf::from("."), None)
    }
}
