// src/filtering/skip_names.rs

use std::path::Path;

// Dependency, cache, and build-output directories that never hold authored source.
const SKIP_DIR_NAMES: &[&str] = &[
    // --- JavaScript/TypeScript ---
    "node_modules",
    "bower_components",
    "jspm_packages",
    // --- Python ---
    "__pycache__",
    "venv",
    "virtualenv",
    "site-packages",
    "__pypackages__",
    // --- PHP / Go / Ruby ---
    "vendor",
    // --- Build output ---
    "dist",
    "target",
    "out",
    // --- Version control (usually hidden already) ---
    ".git",
    ".svn",
    ".hg",
];

// List of common lockfile names (case-insensitive check)
const LOCKFILE_NAMES: &[&str] = &[
    // --- Web Development (JavaScript/TypeScript) ---
    "package-lock.json",     // npm v5+
    "yarn.lock",             // Yarn v1 (and often checked for v2+ PnP)
    "pnpm-lock.yaml",        // pnpm
    "npm-shrinkwrap.json",   // Older npm, or for library publishing
    "bun.lockb",             // Bun (binary format)
    "deno.lock",             // Deno

    // --- PHP ---
    "composer.lock",

    // --- Ruby ---
    "Gemfile.lock",

    // --- Python ---
    "poetry.lock",
    "Pipfile.lock",
    "pdm.lock",
    "uv.lock",
    "conda-lock.yml",

    // --- Go ---
    "go.sum",
    "Gopkg.lock",
    "glide.lock",

    // --- Java / .NET ---
    "gradle.lockfile",
    "packages.lock.json",
    "paket.lock",

    // --- Swift / Objective-C ---
    "Package.resolved",
    "Podfile.lock",
    "Cartfile.resolved",

    // --- Elixir / Erlang / Dart ---
    "mix.lock",
    "rebar.lock",
    "pubspec.lock",

    // --- Haskell ---
    "stack.yaml.lock",
    "cabal.project.freeze",

    // --- Rust ---
    "Cargo.lock",

    // --- Nix ---
    "flake.lock",

    // --- Perl / R / Julia ---
    "cpanfile.snapshot",
    "renv.lock",
    "Manifest.toml",

    // --- Crystal / C/C++ / Lua / Bazel ---
    "shard.lock",
    "conan.lock",
    "luarocks.lock",
    "MODULE.bazel.lock",
];

/// The built-in directory skip-set, lower-cased.
pub fn default_skip_dirs() -> Vec<String> {
    SKIP_DIR_NAMES.iter().map(|n| n.to_lowercase()).collect()
}

/// The built-in file skip-set (lockfiles), lower-cased.
pub fn default_skip_files() -> Vec<String> {
    LOCKFILE_NAMES.iter().map(|n| n.to_lowercase()).collect()
}

/// Checks whether the path's base name is in `names` (which must be lower-case).
pub(crate) fn name_in_set(path: &Path, names: &[String]) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
        .is_some_and(|lower_name| names.iter().any(|n| *n == lower_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_lockfile_matches() {
        let files = default_skip_files();
        assert!(name_in_set(&PathBuf::from("path/to/Cargo.lock"), &files));
        assert!(name_in_set(&PathBuf::from("package-lock.json"), &files));
        assert!(name_in_set(&PathBuf::from("Yarn.lock"), &files)); // Case insensitive
        assert!(name_in_set(&PathBuf::from("PNPM-LOCK.YAML"), &files));
        assert!(name_in_set(&PathBuf::from("go.sum"), &files));
    }

    #[test]
    fn test_lockfile_no_match() {
        let files = default_skip_files();
        assert!(!name_in_set(&PathBuf::from("src/main.rs"), &files));
        assert!(!name_in_set(&PathBuf::from("Cargo.toml"), &files));
        assert!(!name_in_set(&PathBuf::from("lockfile.txt"), &files));
        assert!(!name_in_set(&PathBuf::from("/"), &files));
    }

    #[test]
    fn test_skip_dirs() {
        let dirs = default_skip_dirs();
        assert!(name_in_set(&PathBuf::from("/p/node_modules"), &dirs));
        assert!(name_in_set(&PathBuf::from("/p/__pycache__"), &dirs));
        assert!(name_in_set(&PathBuf::from("/p/Vendor"), &dirs));
        assert!(!name_in_set(&PathBuf::from("/p/src"), &dirs));
        // Only the base name counts.
        assert!(!name_in_set(&PathBuf::from("/node_modules/src"), &dirs));
    }
}
