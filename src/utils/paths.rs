use anyhow::{Result, anyhow};
use std::path::PathBuf;

pub fn get_sniplink_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".sniplink"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let sniplink_dir = get_sniplink_dir()?;
    Ok(sniplink_dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_sniplink_dir() {
        let dir = get_sniplink_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".sniplink"));
    }

    #[test]
    fn test_get_config_path() {
        let path = get_config_path().unwrap();
        assert!(path.to_string_lossy().contains(".sniplink"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }
}
