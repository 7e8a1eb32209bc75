use std::ffi::OsString;
use std::path::{Path, PathBuf};

const BINARY_SUFFIX: &str = ".bin";
const OUTPUT_SUFFIX: &str = "_fota_image.bin";

/// Files involved in one run, all derived from the user-supplied target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePaths {
    pub target: PathBuf,
    pub binary: PathBuf,
    pub output: PathBuf,
}

impl ImagePaths {
    /// Strips the last extension of the target's file name and appends the
    /// binary and output suffixes to what remains. The target itself is never
    /// opened.
    pub fn derive(target: impl AsRef<Path>) -> Self {
        let target = target.as_ref().to_path_buf();
        let base = target.with_extension("");

        Self {
            binary: with_suffix(&base, BINARY_SUFFIX),
            output: with_suffix(&base, OUTPUT_SUFFIX),
            target,
        }
    }
}

fn with_suffix(base: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(base.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elf_target() {
        let paths = ImagePaths::derive("foo.elf");
        assert_eq!(paths.target, PathBuf::from("foo.elf"));
        assert_eq!(paths.binary, PathBuf::from("foo.bin"));
        assert_eq!(paths.output, PathBuf::from("foo_fota_image.bin"));
    }

    #[test]
    fn test_bin_target_maps_to_itself() {
        let paths = ImagePaths::derive("build/app.bin");
        assert_eq!(paths.binary, PathBuf::from("build/app.bin"));
        assert_eq!(paths.output, PathBuf::from("build/app_fota_image.bin"));
    }

    #[test]
    fn test_only_last_extension_is_stripped() {
        let paths = ImagePaths::derive("out/firmware.v2.elf");
        assert_eq!(paths.binary, PathBuf::from("out/firmware.v2.bin"));
        assert_eq!(paths.output, PathBuf::from("out/firmware.v2_fota_image.bin"));
    }

    #[test]
    fn test_no_extension() {
        let paths = ImagePaths::derive("firmware");
        assert_eq!(paths.binary, PathBuf::from("firmware.bin"));
        assert_eq!(paths.output, PathBuf::from("firmware_fota_image.bin"));
    }

    #[test]
    fn test_dotted_directory_is_not_an_extension() {
        let paths = ImagePaths::derive("build.rp2040/firmware");
        assert_eq!(paths.binary, PathBuf::from("build.rp2040/firmware.bin"));
        assert_eq!(
            paths.output,
            PathBuf::from("build.rp2040/firmware_fota_image.bin")
        );
    }

    #[test]
    fn test_dotfile_keeps_its_name() {
        let paths = ImagePaths::derive("dir/.elf");
        assert_eq!(paths.binary, PathBuf::from("dir/.elf.bin"));
        assert_eq!(paths.output, PathBuf::from("dir/.elf_fota_image.bin"));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_name() {
        use std::os::unix::ffi::OsStrExt;

        let raw = std::ffi::OsStr::from_bytes(b"fw\xff.elf");
        let paths = ImagePaths::derive(raw);
        assert_eq!(paths.binary.as_os_str().as_bytes(), b"fw\xff.bin");
        assert_eq!(
            paths.output.as_os_str().as_bytes(),
            b"fw\xff_fota_image.bin"
        );
    }
}
