mod recycle_bin;
mod temp_dirs;

use std::path::PathBuf;

use crate::cleaner::Cleaner;

pub fn all_cleaners() -> Vec<Box<dyn Cleaner>> {
    vec![
        Box::new(temp_dirs::UserTemp::new()),
        Box::new(temp_dirs::SystemTemp::new()),
        Box::new(recycle_bin::RecycleBin),
    ]
}

pub fn find_cleaner(name: &str) -> Option<Box<dyn Cleaner>> {
    all_cleaners().into_iter().find(|c| c.name() == name)
}

pub fn all_cleaner_names() -> Vec<&'static str> {
    vec!["user-temp", "system-temp", "recycle-bin"]
}

/// One cleaner per `--path` directory.
pub fn path_cleaners(paths: &[PathBuf]) -> Vec<Box<dyn Cleaner>> {
    paths
        .iter()
        .map(|p| Box::new(temp_dirs::CustomDir::new(p)) as Box<dyn Cleaner>)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_registered_cleaners() {
        let names: Vec<String> = all_cleaners().iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, all_cleaner_names());
    }

    #[test]
    fn finds_by_name() {
        assert_eq!(find_cleaner("recycle-bin").unwrap().label(), "Recycle Bin");
        assert!(find_cleaner("downloads").is_none());
    }
}
