use std::fs;
use std::path::PathBuf;

use kmldom::{parse_with_config, serialize, Config, Mode};

fn fixtures(kind: &str) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(kind);
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        paths.push(entry?.path());
    }
    paths.sort();
    Ok(paths)
}

#[test]
fn test_valid_fixtures_parse_strictly() -> Result<(), Box<dyn std::error::Error>> {
    for path in fixtures("valid")? {
        let content = fs::read_to_string(&path)?;
        if let Err(err) = parse_with_config(&content, Config::strict()) {
            return Err(
                std::io::Error::other(format!("Failed to parse valid file {path:?}: {err}")).into(),
            );
        }
    }
    Ok(())
}

#[test]
fn test_valid_fixtures_serialize_to_a_fixed_point() -> Result<(), Box<dyn std::error::Error>> {
    for path in fixtures("valid")? {
        let content = fs::read_to_string(&path)?;
        let tree = parse_with_config(&content, Config::strict())?;
        for mode in [Mode::Pretty, Mode::Compact] {
            let first = serialize(&tree, mode);
            let reparsed = parse_with_config(&first, Config::strict())?;
            assert_eq!(reparsed, tree, "{path:?} {mode:?}");
            assert_eq!(serialize(&reparsed, mode), first, "{path:?} {mode:?}");
        }
    }
    Ok(())
}

#[test]
fn test_invalid_fixtures() -> Result<(), Box<dyn std::error::Error>> {
    for path in fixtures("invalid")? {
        let content = fs::read_to_string(&path)?;
        if parse_with_config(&content, Config::strict()).is_ok() {
            return Err(std::io::Error::other(format!(
                "Should fail to parse invalid file: {path:?}"
            ))
            .into());
        }
    }
    Ok(())
}
