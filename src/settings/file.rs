//! Settings file persistence.
//!
//! One line: `length,upper,lower,digit,symbol,exclude_ambiguous,show_strength`.

use std::env;
use std::fs::{self, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use super::Settings;
use crate::error::SettingsError;
use crate::pass::{CharacterClass, ClassSet};

const FIELDS: usize = 7;

pub fn default_path() -> PathBuf {
    let home = env::var("HOME").unwrap_or_else(|_| ".".into());
    Path::new(&home).join(".config").join("passgen").join("settings")
}

pub fn save(settings: &Settings, path: &Path) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)?;

    file.write_all(serialize(settings).as_bytes())?;
    Ok(())
}

pub fn load(path: &Path) -> Result<Settings, SettingsError> {
    if !path.exists() {
        let settings = Settings::default();
        save(&settings, path)?;
        log::info!("created settings file {}", path.display());
        return Ok(settings);
    }

    let mut reader = BufReader::new(fs::File::open(path)?);
    let mut line = String::new();
    reader.read_line(&mut line)?;

    if line.trim().is_empty() {
        let settings = Settings::default();
        save(&settings, path)?;
        return Ok(settings);
    }

    parse(line.trim())
}

fn serialize(settings: &Settings) -> String {
    let [upper, lower, digit, symbol] = CharacterClass::ALL.map(|c| settings.classes.contains(c));
    format!(
        "{},{},{},{},{},{},{}\n",
        settings.length,
        upper,
        lower,
        digit,
        symbol,
        settings.exclude_ambiguous,
        settings.show_strength
    )
}

fn parse(line: &str) -> Result<Settings, SettingsError> {
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();
    if parts.len() != FIELDS {
        return Err(SettingsError::Malformed {
            field: "line",
            value: line.to_string(),
        });
    }

    let length: usize = field("length", parts[0])?;
    if length == 0 {
        return Err(SettingsError::Malformed {
            field: "length",
            value: parts[0].to_string(),
        });
    }

    let mut classes = ClassSet::empty();
    for (class, (name, raw)) in CharacterClass::ALL
        .into_iter()
        .zip([("upper", parts[1]), ("lower", parts[2]), ("digit", parts[3]), ("symbol", parts[4])])
    {
        classes.set(class, field(name, raw)?);
    }

    Ok(Settings {
        length,
        classes,
        exclude_ambiguous: field("exclude_ambiguous", parts[5])?,
        show_strength: field("show_strength", parts[6])?,
    })
}

fn field<T: FromStr>(name: &'static str, raw: &str) -> Result<T, SettingsError> {
    raw.parse().map_err(|_| SettingsError::Malformed {
        field: name,
        value: raw.to_string(),
    })
}
