//! Filesystem presence probe

use std::io;
use std::path::Path;

/// What the probe found at a path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Presence {
    pub present: bool,
    pub is_directory: bool,
}

impl Presence {
    pub const ABSENT: Presence = Presence {
        present: false,
        is_directory: false,
    };

    pub fn is_file(&self) -> bool {
        self.present && !self.is_directory
    }

    pub fn is_dir(&self) -> bool {
        self.present && self.is_directory
    }
}

/// Check whether `relative` exists under `root`
///
/// A path that does not exist is a normal answer, not an error. Only other
/// failures (permissions, broken mounts) come back as `Err`.
pub fn probe(root: &Path, relative: &str) -> io::Result<Presence> {
    match std::fs::metadata(root.join(relative)) {
        Ok(meta) => Ok(Presence {
            present: true,
            is_directory: meta.is_dir(),
        }),
        Err(e) if is_absent(&e) => Ok(Presence::ABSENT),
        Err(e) => Err(e),
    }
}

fn is_absent(err: &io::Error) -> bool {
    // A file used as a directory component reports NotADirectory on unix
    matches!(
        err.kind(),
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
    )
}
