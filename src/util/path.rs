use directories::BaseDirs;
use snafu::{OptionExt, Snafu};
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, Snafu)]
pub enum Error {
    #[snafu(display("The home directory could not be determined"))]
    NoHome,
}

/// Replaces a leading `~` with the home directory of the current user.
/// Other paths are returned as is.
pub fn expand_home(path: &Path) -> Result<PathBuf, Error> {
    match path.strip_prefix("~") {
        Ok(rest) => {
            let dirs = BaseDirs::new().context(NoHomeSnafu)?;
            Ok(join_home(dirs.home_dir(), rest))
        }
        Err(_) => Ok(path.to_path_buf()),
    }
}

fn join_home(home: &Path, rest: &Path) -> PathBuf {
    if rest.as_os_str().is_empty() {
        home.to_path_buf()
    } else {
        home.join(rest)
    }
}

#[test]
fn keep_absolute_and_relative_paths() {
    let p = Path::new("/etc/yotarc");
    assert_eq!(expand_home(p).unwrap(), p.to_path_buf());
    let p = Path::new("conf/yotarc");
    assert_eq!(expand_home(p).unwrap(), p.to_path_buf());
}

#[test]
fn tilde_only_in_first_component() {
    let p = Path::new("~user/yotarc");
    assert_eq!(expand_home(p).unwrap(), p.to_path_buf());
}

#[test]
fn expand_tilde() {
    let home = Path::new("/home/joe");
    assert_eq!(
        join_home(home, Path::new(".config/yotarc")),
        PathBuf::from("/home/joe/.config/yotarc")
    );
    assert_eq!(join_home(home, Path::new("")), PathBuf::from("/home/joe"));
    if let Some(dirs) = BaseDirs::new() {
        let expanded = expand_home(Path::new("~/.config/yotarc")).unwrap();
        assert_eq!(expanded, dirs.home_dir().join(".config/yotarc"));
    }
}
