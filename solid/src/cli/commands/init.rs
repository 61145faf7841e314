use crate::cli::app::InitArgs;
use anyhow::{Context, Result, bail};
use solid_core::Config;
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};

pub fn execute(args: InitArgs) -> Result<()> {
    let content = Config::default().to_toml()?;

    // create_new makes the existence check and the create one step
    let mut options = OpenOptions::new();
    options.write(true);
    if args.force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = match options.open(&args.path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            bail!("{:?} already exists (use --force to overwrite)", args.path);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to open {:?}", args.path));
        }
    };
    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write config to {:?}", args.path))?;

    println!("Wrote default scenarios to {}", args.path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn init_args(dir: &TempDir, force: bool) -> InitArgs {
        InitArgs { path: dir.path().join("solid.toml"), force }
    }

    #[test]
    fn test_init_writes_loadable_config() {
        let dir = TempDir::new().unwrap();
        execute(init_args(&dir, false)).unwrap();

        let config = Config::load_from_file(&dir.path().join("solid.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_init_refuses_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("solid.toml");
        std::fs::write(&path, "keep me").unwrap();

        let err = execute(init_args(&dir, false)).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_init_force_overwrites() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("solid.toml");
        std::fs::write(&path, "x".repeat(10_000)).unwrap();

        execute(init_args(&dir, true)).unwrap();
        assert_eq!(Config::load_from_file(&path).unwrap(), Config::default());
    }
}
