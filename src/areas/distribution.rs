use crate::areas::cmake::CMake;
use crate::areas::staging::Staging;
use crate::artifacts::build::settings::BuildSettings;
use std::cell::{RefCell, RefMut};

/// Coordinator for the configure/build/stage pipeline.
///
/// Owns the CMake runner, the install-tree staging helper and the output
/// writer; the pipeline itself lives in `commands::build`.
pub struct Distribution {
    settings: BuildSettings,
    cmake: CMake,
    staging: Staging,
    writer: RefCell<Box<dyn std::io::Write>>,
}

impl Distribution {
    pub fn new(settings: BuildSettings, writer: Box<dyn std::io::Write>) -> Self {
        let cmake = CMake::new(&settings.build_dir());
        let staging = Staging::new(&settings.install_dir());

        Distribution {
            settings,
            cmake,
            staging,
            writer: RefCell::new(writer),
        }
    }

    pub fn settings(&self) -> &BuildSettings {
        &self.settings
    }

    pub(crate) fn cmake(&self) -> &CMake {
        &self.cmake
    }

    pub(crate) fn staging(&self) -> &Staging {
        &self.staging
    }

    pub(crate) fn writer(&self) -> RefMut<'_, Box<dyn std::io::Write>> {
        self.writer.borrow_mut()
    }
}
