use crate::error::ValidationResult;
use std::path::Path;
use walkdir::WalkDir;

/// Conventional subdirectories of a skill package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceDir {
    Scripts,
    References,
    Assets,
}

impl ResourceDir {
    pub const ALL: [ResourceDir; 3] =
        [ResourceDir::Scripts, ResourceDir::References, ResourceDir::Assets];

    pub fn dir_name(&self) -> &'static str {
        match self {
            ResourceDir::Scripts => "scripts",
            ResourceDir::References => "references",
            ResourceDir::Assets => "assets",
        }
    }

    /// Whether a direct child counts as a resource of this kind.
    fn qualifies(&self, file_name: &str) -> bool {
        match self {
            ResourceDir::References => file_name.ends_with(".md"),
            ResourceDir::Scripts | ResourceDir::Assets => true,
        }
    }

    /// Message for a directory that exists without qualifying entries.
    pub fn empty_message(&self) -> String {
        match self {
            ResourceDir::References => {
                format!("'{}/' directory exists but has no .md files", self.dir_name())
            }
            ResourceDir::Scripts | ResourceDir::Assets => {
                format!("'{}/' directory exists but is empty", self.dir_name())
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirState {
    Absent,
    Empty,
    Populated(usize),
}

impl DirState {
    pub fn count(&self) -> usize {
        match self {
            DirState::Populated(n) => *n,
            DirState::Absent | DirState::Empty => 0,
        }
    }
}

/// Snapshot of the convention directories under a skill root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillLayout {
    pub scripts: DirState,
    pub references: DirState,
    pub assets: DirState,
}

impl SkillLayout {
    pub fn scan(root: &Path) -> ValidationResult<Self> {
        Ok(Self {
            scripts: scan_dir(root, ResourceDir::Scripts)?,
            references: scan_dir(root, ResourceDir::References)?,
            assets: scan_dir(root, ResourceDir::Assets)?,
        })
    }

    pub fn state(&self, dir: ResourceDir) -> DirState {
        match dir {
            ResourceDir::Scripts => self.scripts,
            ResourceDir::References => self.references,
            ResourceDir::Assets => self.assets,
        }
    }
}

fn scan_dir(root: &Path, kind: ResourceDir) -> ValidationResult<DirState> {
    let dir = root.join(kind.dir_name());
    if !dir.is_dir() {
        return Ok(DirState::Absent);
    }

    let mut count = 0;
    for entry in WalkDir::new(&dir).min_depth(1).max_depth(1) {
        let entry = entry?;
        if kind.qualifies(&entry.file_name().to_string_lossy()) {
            count += 1;
        }
    }

    Ok(if count == 0 { DirState::Empty } else { DirState::Populated(count) })
}
