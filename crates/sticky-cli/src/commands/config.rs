use std::path::Path;

use anyhow::{bail, Result};

use sticky_core::AppConfig;

pub fn show(config: &AppConfig) -> Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "Config file already exists at {} (use --force to overwrite)",
            path.display()
        );
    }

    AppConfig::default().save_to(path)?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}

pub fn path(path: &Path) -> Result<()> {
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("sticky-cli-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir.join("config.toml")
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let path = temp_path("refuse");
        std::fs::write(&path, "# mine\n").unwrap();

        assert!(init(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine\n");

        init(&path, true).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.interaction.threshold, 130.0);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_init_creates_file() {
        let path = temp_path("create");
        let _ = std::fs::remove_file(&path);

        init(&path, false).unwrap();
        assert!(path.exists());

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }
}
