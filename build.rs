use std::path::{Path, PathBuf};
use std::{fs, io};

fn main() {
    // prevent running for docs.rs
    #[cfg(not(feature = "docsrs"))]
    {
        println!("cargo:rerun-if-env-changed=OPENNI2_REDIST");
        println!("cargo:rerun-if-env-changed=OPENNI2_LIB");

        /*
        Shared libraries need to be within the target dir, see
        https://doc.rust-lang.org/cargo/reference/environment-variables.html#dynamic-library-paths

        Therefore, the libraries from the OpenNI2 redistributable are symlinked
        into target/<buildType>/deps/ so that both the linker and the loader
        find them without a system-wide install.
        */
        if let Some(lib_path) = redist_path() {
            let deps_path = std::env::current_exe().unwrap().join("../../../deps");

            // create symlinks
            symlink_dir_all(&lib_path, deps_path.clone())
                .expect("failed to create symlinks to OpenNI2 libraries");

            // tell cargo to look for shared libraries in the specified directory
            println!("cargo:rustc-link-search={}", deps_path.to_str().unwrap());

            // necessary for runtime to find shared libraries
            println!(
                "cargo:rustc-link-arg=-Wl,-rpath,{}",
                deps_path.to_str().unwrap()
            );
        }

        // tell rustc to link the shared library; without a redistributable
        // path the system locations (e.g. the libopenni2 distro package) are
        // searched
        println!("cargo:rustc-link-lib=OpenNI2");
    }
}

/// Looks for the OpenNI2 redistributable, first via the environment variables
/// `OPENNI2_REDIST` and `OPENNI2_LIB`, then in common install locations.
fn redist_path() -> Option<PathBuf> {
    for var in ["OPENNI2_REDIST", "OPENNI2_LIB"] {
        if let Ok(path) = std::env::var(var) {
            let path = PathBuf::from(path);
            if existing(&path) {
                return Some(path);
            }
            println!("cargo:warning=\x1b[33m{var} is set but {path:?} does not exist\x1b[0m");
        }
    }
    ["/usr/lib/OpenNI2-Linux-x64/Redist", "/opt/OpenNI2/Redist"]
        .into_iter()
        .map(PathBuf::from)
        .find(|path| existing(path))
}

fn existing(path: impl AsRef<Path>) -> bool {
    let path = path.as_ref();
    path.try_exists()
        .unwrap_or_else(|_| panic!("cannot check if {path:?} exists"))
}

/// create symlinks recursively to whole directory
fn symlink_dir_all(src: impl AsRef<Path>, dst: impl AsRef<Path>) -> io::Result<()> {
    fs::create_dir_all(&dst)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let file = dst.as_ref().join(entry.file_name());
        let ty = entry.file_type()?;
        if ty.is_dir() {
            symlink_dir_all(entry.path(), file)?;
        } else if !file.exists() {
            std::os::unix::fs::symlink(entry.path(), file)?;
        }
    }
    Ok(())
}
