use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;

// One level of plain packages, one level of scoped @scope/name packages.
// Anything vendored deeper is out of scope for hoisting.
const NESTED_MANIFEST_GLOBS: [&str; 2] = [
    "src/compiled/*/package.json",
    "src/compiled/@*/*/package.json",
];

fn nested_manifest_globset() -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in NESTED_MANIFEST_GLOBS {
        let glob = GlobBuilder::new(pattern)
            .literal_separator(true)
            .build()
            .expect("glob");
        builder.add(glob);
    }
    builder.build().expect("globset")
}

/// Finds the manifests of vendored packages under `<root>/src/compiled`,
/// sorted so discovery order is stable across platforms.
pub fn find_nested_manifests(package_path: &Path) -> Vec<PathBuf> {
    let compiled_root = package_path.join("src").join("compiled");
    if !compiled_root.is_dir() {
        return Vec::new();
    }

    let matcher = nested_manifest_globset();
    let mut manifests = WalkBuilder::new(&compiled_root)
        .standard_filters(false)
        .max_depth(Some(3))
        .build()
        .filter_map(Result::ok)
        .map(ignore::DirEntry::into_path)
        .filter(|path| {
            path.strip_prefix(package_path)
                .ok()
                .and_then(|rel| rel.to_str())
                .map(|rel| rel.replace('\\', "/"))
                .is_some_and(|rel| matcher.is_match(Path::new(&rel)))
        })
        .collect::<Vec<_>>();
    manifests.sort();
    manifests
}
