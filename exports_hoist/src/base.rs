use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::exports::ExportValue;

/// Hand-maintained entrypoints that cannot be derived from vendored package
/// manifests. The conflict guard in `hoist` keeps this list from going stale:
/// once a vendored manifest starts producing one of these keys, the entry
/// here must be deleted.
pub static BASE_EXPORTS: Lazy<IndexMap<String, ExportValue>> = Lazy::new(|| {
    [
        (
            ".",
            conditions(&[
                ("types", "./index.d.ts"),
                ("default", "./dist/server/index.js"),
            ]),
        ),
        // Entrypoints that used to resolve through automatic index.js lookup.
        // TODO: drop these once downstream imports are codemodded to explicit file paths.
        ("./dist/trace", target("./dist/trace/index.js")),
        (
            "./dist/compiled/scheduler",
            target("./dist/compiled/scheduler/index.js"),
        ),
        (
            "./dist/build/babel/loader",
            target("./dist/build/babel/loader/index.js"),
        ),
        (
            "./dist/esm/server/api-utils",
            target("./dist/esm/server/api-utils/index.js"),
        ),
        ("./package", target("./package.json")),
        // Pattern entrypoints are plain data here; resolvers expand them.
        (
            "./dist/compiled/babel/*",
            target("./dist/compiled/babel/*.js"),
        ),
        // misc assets
        ("./*.css", target("./*.css")),
        ("./*.json", target("./*.json")),
        ("./*.js", target("./*.js")),
        // Extensionless imports keep resolving to .js modules.
        ("./*", target("./*.js")),
    ]
    .into_iter()
    .map(|(entrypoint, declaration)| (entrypoint.to_string(), declaration))
    .collect()
});

fn target(path: &str) -> ExportValue {
    ExportValue::Target(path.to_string())
}

fn conditions(entries: &[(&str, &str)]) -> ExportValue {
    ExportValue::Conditions(
        entries
            .iter()
            .map(|(condition, path)| ((*condition).to_string(), target(path)))
            .collect(),
    )
}
