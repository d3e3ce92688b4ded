use crate::areas::toolchain;
use crate::artifacts::build::settings::BuildSettings;
use std::path::PathBuf;

/// Auxiliary build tools located before configuring, each overridable
/// through its `USE_<TOOL>` environment variable.
#[derive(Debug, Clone, Default)]
pub struct DetectedTools {
    pub ninja: Option<PathBuf>,
    pub ccache: Option<PathBuf>,
    pub lld: Option<PathBuf>,
}

impl DetectedTools {
    pub fn detect() -> Self {
        DetectedTools {
            ninja: toolchain::use_tool_path("ninja"),
            ccache: toolchain::use_tool_path("ccache"),
            lld: toolchain::use_tool_path("lld"),
        }
    }
}

/// The assembled argument list for one CMake configure invocation.
#[derive(Debug, Clone)]
pub struct ConfigurePlan {
    args: Vec<String>,
}

impl ConfigurePlan {
    pub fn assemble(settings: &BuildSettings, tools: &DetectedTools) -> Self {
        let source_dir = settings.llvm_repo_dir().join("llvm");
        let build_type = if settings.release_mode() {
            "Release"
        } else {
            "RelWithDebInfo"
        };

        let mut args = vec![
            format!("-S{}", source_dir.display()),
            format!("-B{}", settings.build_dir().display()),
            "-DCMAKE_CXX_VISIBILITY_PRESET=hidden".to_string(),
            "-DCMAKE_VISIBILITY_INLINES_HIDDEN=ON".to_string(),
            // The distribution links against private libs and relies on
            // fixups to find everything, so sonames stay unversioned.
            "-DCMAKE_PLATFORM_NO_VERSIONED_SONAME=ON".to_string(),
            format!("-DCMAKE_INSTALL_PREFIX={}", settings.install_dir().display()),
            format!("-DCMAKE_BUILD_TYPE={build_type}"),
            format!(
                "-DLLVM_ENABLE_ASSERTIONS={}",
                if settings.assertions() { "ON" } else { "OFF" }
            ),
            "-DLLVM_TARGETS_TO_BUILD=host".to_string(),
            "-DLLVM_ENABLE_PROJECTS=mlir".to_string(),
            "-DMLIR_BINDINGS_PYTHON_ENABLED=ON".to_string(),
            "-DMLIR_PYTHON_BINDINGS_VERSION_LOCKED=OFF".to_string(),
        ];

        if let Some(python) = settings.python_executable() {
            args.push(format!("-DPython3_EXECUTABLE:FILEPATH={}", python.display()));
        }
        if let Some(include_dir) = settings.python_include_dir() {
            args.push(format!("-DPython3_INCLUDE_DIR:PATH={}", include_dir.display()));
        }

        if tools.ninja.is_some() {
            args.push("-GNinja".to_string());
        } else if cfg!(windows) {
            args.extend(["-G".to_string(), "NMake Makefiles".to_string()]);
        }

        if let Some(ccache) = &tools.ccache {
            args.push(format!("-DCMAKE_CXX_COMPILER_LAUNCHER={}", ccache.display()));
        }
        if !cfg!(windows) && tools.lld.is_some() {
            args.push("-DLLVM_USE_LINKER=lld".to_string());
        }

        ConfigurePlan { args }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Install targets for the distribution: headers, python binding sources and
/// dialects, the public C API and the python extensions. Release builds use
/// the `-stripped` install variants.
pub fn install_targets(release_mode: bool) -> Vec<String> {
    let stripped = if release_mode { "-stripped" } else { "" };

    vec![
        "install-mlir-headers".to_string(),
        "install-MLIRBindingsPythonSources".to_string(),
        "install-MLIRBindingsPythonDialects".to_string(),
        format!("install-MLIRPublicAPI{stripped}"),
        format!("install-MLIRTransformsBindingsPythonExtension{stripped}"),
        format!("install-MLIRCoreBindingsPythonExtension{stripped}"),
    ]
}
