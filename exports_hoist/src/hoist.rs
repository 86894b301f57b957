use std::path::Path;

use indexmap::IndexMap;
use path_slash::PathExt;

use crate::base::BASE_EXPORTS;
use crate::error::HoistError;
use crate::exports::{ExportValue, prefixed_subpath, rewrite_export_value};
use crate::locate::find_nested_manifests;
use crate::manifest::{NestedManifest, read_nested_manifest, rewrite_manifest_exports};

/// Regenerates the `exports` map of the package at `package_path`: hoists
/// every vendored manifest under `src/compiled`, checks the hand-maintained
/// base entrypoints against the result, and rewrites the root package.json.
pub fn hoist_package_exports(package_path: &Path) -> Result<(), HoistError> {
    let vendored = collect_vendored_exports(package_path)?;
    guard_base_entrypoints(&BASE_EXPORTS, &vendored)?;
    let merged = merge_exports(vendored, &BASE_EXPORTS);
    rewrite_manifest_exports(&package_path.join("package.json"), &merged)
}

pub fn collect_vendored_exports(
    package_path: &Path,
) -> Result<IndexMap<String, ExportValue>, HoistError> {
    let mut vendored: IndexMap<String, ExportValue> = IndexMap::new();
    for manifest_path in find_nested_manifests(package_path) {
        let manifest = read_nested_manifest(&manifest_path)?;
        let dist_path = dist_path_for(package_path, &manifest_path);
        let entries = hoisted_entries(&manifest, &dist_path);
        if entries.is_empty() {
            // Non-fatal: consumers referencing this dist path will fail to resolve.
            eprintln!(
                "exports-hoist: no exports, main, module, or types in {}; skipping",
                manifest_path.display()
            );
            continue;
        }
        vendored.extend(entries);
    }
    Ok(vendored)
}

/// The entries a single vendored manifest contributes, keyed by hoisted
/// entrypoint. A manifest with an `exports` field contributes one entry per
/// declared entrypoint; a legacy manifest contributes at most one entry for
/// its dist directory.
pub(crate) fn hoisted_entries(
    manifest: &NestedManifest,
    dist_path: &str,
) -> Vec<(String, ExportValue)> {
    if let Some(exports) = &manifest.exports {
        return exports
            .iter()
            .map(|(entrypoint, declaration)| {
                (
                    prefixed_subpath(dist_path, entrypoint),
                    rewrite_export_value(declaration, dist_path),
                )
            })
            .collect();
    }
    legacy_declaration(manifest, dist_path)
        .map(|declaration| vec![(format!("./{dist_path}"), declaration)])
        .unwrap_or_default()
}

fn legacy_declaration(manifest: &NestedManifest, dist_path: &str) -> Option<ExportValue> {
    let mut conditions: IndexMap<String, ExportValue> = IndexMap::new();
    if let Some(types) = &manifest.types {
        conditions.insert(
            "types".to_string(),
            ExportValue::Target(prefixed_subpath(dist_path, types)),
        );
    }
    if let Some(module) = &manifest.module {
        conditions.insert(
            "module".to_string(),
            ExportValue::Target(prefixed_subpath(dist_path, module)),
        );
    }
    if let Some(main) = &manifest.main {
        let resolved = ExportValue::Target(prefixed_subpath(dist_path, main));
        if conditions.is_empty() {
            // A lone main collapses to the bare path; it resolves the same as
            // { default: path } and saves bytes in the output.
            return Some(resolved);
        }
        conditions.insert("default".to_string(), resolved);
    }
    (!conditions.is_empty()).then(|| ExportValue::Conditions(conditions))
}

/// Manifest directory relative to the package root with the authored `src/`
/// prefix swapped for the shipped `dist/` prefix.
pub(crate) fn dist_path_for(package_path: &Path, manifest_path: &Path) -> String {
    let manifest_dir = manifest_path.parent().unwrap_or(manifest_path);
    let relative_dir = manifest_dir.strip_prefix(package_path).unwrap_or(manifest_dir);
    let relative_dir = relative_dir.to_slash_lossy();
    relative_dir
        .strip_prefix("src/")
        .map(|rest| format!("dist/{rest}"))
        .unwrap_or_else(|| relative_dir.to_string())
}

/// Fails when a base entrypoint collides with a hoisted one under a different
/// declaration: the base list has gone stale and must be pruned by hand.
pub fn guard_base_entrypoints(
    base: &IndexMap<String, ExportValue>,
    vendored: &IndexMap<String, ExportValue>,
) -> Result<(), HoistError> {
    for (entrypoint, declaration) in base {
        if vendored
            .get(entrypoint)
            .is_some_and(|hoisted| hoisted != declaration)
        {
            return Err(HoistError::StaleBaseEntry {
                entrypoint: entrypoint.clone(),
            });
        }
    }
    Ok(())
}

/// Vendored entries first, base entries overlaid: a shared key keeps its
/// vendored position but takes the base declaration, base-only keys append.
pub fn merge_exports(
    vendored: IndexMap<String, ExportValue>,
    base: &IndexMap<String, ExportValue>,
) -> IndexMap<String, ExportValue> {
    let mut merged = vendored;
    for (entrypoint, declaration) in base {
        merged.insert(entrypoint.clone(), declaration.clone());
    }
    merged
}
