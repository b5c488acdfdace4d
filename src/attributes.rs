use std::path::Path;

/// Clear attributes that make a delete fail: read-only, hidden and system.
///
/// Callers discard the result; the delete that follows reports the real outcome.
#[cfg(windows)]
pub fn normalize_attributes(path: &Path) -> std::io::Result<()> {
    use std::os::windows::ffi::OsStrExt;
    use winapi::um::fileapi::{GetFileAttributesW, SetFileAttributesW, INVALID_FILE_ATTRIBUTES};
    use winapi::um::winnt::{
        FILE_ATTRIBUTE_HIDDEN, FILE_ATTRIBUTE_NORMAL, FILE_ATTRIBUTE_READONLY,
        FILE_ATTRIBUTE_SYSTEM,
    };

    const BLOCKING: u32 = FILE_ATTRIBUTE_READONLY | FILE_ATTRIBUTE_HIDDEN | FILE_ATTRIBUTE_SYSTEM;

    let wide: Vec<u16> = path.as_os_str().encode_wide().chain(Some(0)).collect();

    let current = unsafe { GetFileAttributesW(wide.as_ptr()) };
    if current == INVALID_FILE_ATTRIBUTES {
        return Err(std::io::Error::last_os_error());
    }
    if current & BLOCKING == 0 {
        return Ok(());
    }

    let mut cleared = current & !BLOCKING;
    if cleared == 0 {
        cleared = FILE_ATTRIBUTE_NORMAL;
    }
    if unsafe { SetFileAttributesW(wide.as_ptr(), cleared) } == 0 {
        return Err(std::io::Error::last_os_error());
    }
    Ok(())
}

/// Clear permission bits that make a delete fail. Unlinking depends on the
/// parent directory, so directories get owner write and search restored;
/// files get owner write.
#[cfg(unix)]
pub fn normalize_attributes(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let meta = std::fs::symlink_metadata(path)?;
    if meta.file_type().is_symlink() {
        return Ok(());
    }
    let required = if meta.is_dir() { 0o300 } else { 0o200 };
    let mut perms = meta.permissions();
    let mode = perms.mode();
    if mode & required == required {
        return Ok(());
    }
    perms.set_mode(mode | required);
    std::fs::set_permissions(path, perms)
}

#[cfg(not(any(windows, unix)))]
pub fn normalize_attributes(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    #[test]
    fn restores_owner_write_on_read_only_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("locked.txt");
        std::fs::write(&file, b"data").unwrap();
        std::fs::set_permissions(&file, std::fs::Permissions::from_mode(0o444)).unwrap();

        normalize_attributes(&file).unwrap();

        let mode = std::fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o200, 0o200);
    }

    #[test]
    fn restores_owner_write_and_search_on_read_only_dir() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("pkg@v1");
        std::fs::create_dir(&sub).unwrap();
        std::fs::set_permissions(&sub, std::fs::Permissions::from_mode(0o555)).unwrap();

        normalize_attributes(&sub).unwrap();

        let mode = std::fs::metadata(&sub).unwrap().permissions().mode();
        assert_eq!(mode & 0o700, 0o700);
    }

    #[test]
    fn missing_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(normalize_attributes(&dir.path().join("gone")).is_err());
    }
}
