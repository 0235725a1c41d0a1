//! File-name grammar for scene files.
//!
//! ```text
//! edit version:     <name>_E_<NNN><ext>
//! publish snapshot: <name>_P<ext>
//! publish backup:   <name>_P_<NNN><ext>
//! ```

use std::fmt;

use crate::NamingError;

pub const EDIT_SEPARATOR: &str = "_E_";
pub const PUBLISH_SUFFIX: &str = "_P";
pub const BACKUP_SEPARATOR: &str = "_P_";
pub const VERSION_WIDTH: usize = 3;

/// Zero-pads a version number to [`VERSION_WIDTH`] digits. Larger numbers keep
/// all of their digits.
#[must_use]
pub fn pad_version(number: u32) -> String {
    format!("{number:0width$}", width = VERSION_WIDTH)
}

/// Splits `file_name` into `(stem, extension)`; the extension keeps its dot.
///
/// A leading dot does not start an extension, so `.hidden` has no extension.
#[must_use]
pub fn split_file_name(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => file_name.split_at(idx),
        _ => (file_name, ""),
    }
}

#[must_use]
pub fn is_publish_stem(stem: &str) -> bool {
    stem.ends_with(PUBLISH_SUFFIX)
}

fn parse_number(digits: &str) -> Option<u32> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// An edit increment: `<base>_E_<number>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditName {
    pub base: String,
    pub number: u32,
}

impl EditName {
    pub fn new(base: impl Into<String>, number: u32) -> Self {
        Self {
            base: base.into(),
            number,
        }
    }

    /// First version of a lineage.
    pub fn initial(base: impl Into<String>) -> Self {
        Self::new(base, 1)
    }

    /// Parses a file stem; the stem must split on `_E_` into exactly a name and a number.
    pub fn parse(stem: &str) -> Result<Self, NamingError> {
        let invalid = || NamingError::EditName {
            stem: stem.to_string(),
        };
        let parts: Vec<&str> = stem.split(EDIT_SEPARATOR).collect();
        let [base, number] = parts.as_slice() else {
            return Err(invalid());
        };
        let number = parse_number(number).ok_or_else(invalid)?;
        Ok(Self::new(*base, number))
    }

    pub fn next(&self) -> Result<Self, NamingError> {
        let number = self
            .number
            .checked_add(1)
            .ok_or_else(|| NamingError::VersionOverflow { stem: self.stem() })?;
        Ok(Self::new(self.base.clone(), number))
    }

    pub fn stem(&self) -> String {
        format!("{}{EDIT_SEPARATOR}{}", self.base, pad_version(self.number))
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}{extension}", self.stem())
    }

    pub fn publish(&self) -> PublishName {
        PublishName::new(self.base.clone())
    }
}

impl fmt::Display for EditName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stem())
    }
}

/// The live publish of a lineage: `<base>_P`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PublishName {
    pub base: String,
}

impl PublishName {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn stem(&self) -> String {
        format!("{}{PUBLISH_SUFFIX}", self.base)
    }

    /// Full file name, checked against the publish grammar before it is handed out.
    pub fn file_name(&self, extension: &str) -> Result<String, NamingError> {
        let stem = self.stem();
        if !is_publish_stem(&stem) {
            return Err(NamingError::PublishName { stem });
        }
        Ok(format!("{stem}{extension}"))
    }

    pub fn backup(&self, number: u32) -> BackupName {
        BackupName::new(self.base.clone(), number)
    }
}

/// A retired publish: `<base>_P_<number>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BackupName {
    pub base: String,
    pub number: u32,
}

impl BackupName {
    pub fn new(base: impl Into<String>, number: u32) -> Self {
        Self {
            base: base.into(),
            number,
        }
    }

    /// Returns `None` for stems that are not publish backups.
    pub fn parse(stem: &str) -> Option<Self> {
        let (base, number) = stem.rsplit_once(BACKUP_SEPARATOR)?;
        Some(Self::new(base, parse_number(number)?))
    }

    pub fn stem(&self) -> String {
        format!("{}{BACKUP_SEPARATOR}{}", self.base, pad_version(self.number))
    }

    pub fn file_name(&self, extension: &str) -> String {
        format!("{}{extension}", self.stem())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_name_round_trips_through_stem() {
        let parsed = EditName::parse("hero_modeling_E_007").unwrap();
        assert_eq!(parsed.base, "hero_modeling");
        assert_eq!(parsed.number, 7);
        assert_eq!(parsed.stem(), "hero_modeling_E_007");
    }

    #[test]
    fn next_version_is_zero_padded() {
        let next = EditName::parse("hero_E_009").unwrap().next().unwrap();
        assert_eq!(next.file_name(".ma"), "hero_E_010.ma");
        let wide = EditName::new("hero", 999).next().unwrap();
        assert_eq!(wide.stem(), "hero_E_1000");
    }

    #[test]
    fn edit_name_rejects_wrong_separator_count() {
        for stem in ["foo001", "foo_E_E_001", "a_E_1_E_2", "foo_E_", "foo_E_abc"] {
            let err = EditName::parse(stem).unwrap_err();
            assert_eq!(err.subject(), stem);
        }
    }

    #[test]
    fn empty_base_is_still_an_edit_name() {
        let parsed = EditName::parse("_E_001").unwrap();
        assert_eq!(parsed.base, "");
        assert_eq!(parsed.number, 1);
    }

    #[test]
    fn publish_and_backup_names() {
        let publish = EditName::parse("hero_E_003").unwrap().publish();
        assert_eq!(publish.file_name(".ma").unwrap(), "hero_P.ma");
        assert_eq!(publish.backup(12).file_name(".ma"), "hero_P_012.ma");
        assert!(is_publish_stem("hero_P"));
        assert!(!is_publish_stem("hero_P_001"));
    }

    #[test]
    fn backup_parse_ignores_foreign_files() {
        assert_eq!(
            BackupName::parse("hero_P_004"),
            Some(BackupName::new("hero", 4))
        );
        assert_eq!(BackupName::parse("hero_P"), None);
        assert_eq!(BackupName::parse("notes"), None);
        assert_eq!(BackupName::parse("hero_P_x1"), None);
    }

    #[test]
    fn split_file_name_keeps_dot() {
        assert_eq!(split_file_name("hero_E_001.ma"), ("hero_E_001", ".ma"));
        assert_eq!(split_file_name("archive.tar.gz"), ("archive.tar", ".gz"));
        assert_eq!(split_file_name("README"), ("README", ""));
        assert_eq!(split_file_name(".hidden"), (".hidden", ""));
    }
}
