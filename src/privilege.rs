/// Whether the process runs as administrator.
#[cfg(windows)]
pub fn is_elevated() -> bool {
    unsafe { winapi::um::shlobj::IsUserAnAdmin() != 0 }
}

/// Whether the process runs as root.
#[cfg(unix)]
pub fn is_elevated() -> bool {
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(any(windows, unix)))]
pub fn is_elevated() -> bool {
    false
}
