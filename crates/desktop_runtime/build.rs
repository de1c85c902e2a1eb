use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const WIDGET_KINDS: [(&str, &str); 3] = [
    ("pomodoro", "Pomodoro"),
    ("todo", "Todo"),
    ("video", "Video"),
];

#[derive(Debug, Clone, Deserialize)]
struct WindowDefaults {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    min_width: f64,
    min_height: f64,
}

#[derive(Debug, Clone, Deserialize)]
struct WidgetManifest {
    schema_version: u32,
    widget: String,
    title: String,
    window_defaults: WindowDefaults,
}

fn widget_manifest_paths(root: &Path) -> Vec<PathBuf> {
    ["ambient", "pomodoro", "todo"]
        .iter()
        .map(|name| {
            root.join("..")
                .join("apps")
                .join(name)
                .join("app.manifest.toml")
        })
        .collect()
}

fn render_arm(variant: &str, manifest: &WidgetManifest) -> String {
    let d = &manifest.window_defaults;
    format!(
        "        WidgetKind::{variant} => WindowConfig {{\n\
            title: {title:?},\n\
            default_rect: WindowRect {{ x: {x:?}, y: {y:?}, width: {w:?}, height: {h:?} }},\n\
            min_width: {min_w:?},\n\
            min_height: {min_h:?},\n\
        }},\n",
        title = manifest.title,
        x = d.x,
        y = d.y,
        w = d.width,
        h = d.height,
        min_w = d.min_width,
        min_h = d.min_height,
    )
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut manifests = Vec::<WidgetManifest>::new();

    for path in widget_manifest_paths(&crate_root) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let manifest: WidgetManifest = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        if manifest.schema_version != 1 {
            panic!(
                "manifest schema mismatch in {}: expected 1 found {}",
                path.display(),
                manifest.schema_version
            );
        }
        let d = &manifest.window_defaults;
        if d.width < d.min_width || d.height < d.min_height {
            panic!(
                "default window size below minimum in {}",
                path.display()
            );
        }
        manifests.push(manifest);
    }

    let mut arms = String::new();
    for (key, variant) in WIDGET_KINDS {
        let matching = manifests
            .iter()
            .filter(|m| m.widget == key)
            .collect::<Vec<_>>();
        match matching.as_slice() {
            [manifest] => arms.push_str(&render_arm(variant, manifest)),
            [] => panic!("no widget manifest declares `{key}`"),
            _ => panic!("widget `{key}` declared by more than one manifest"),
        }
    }
    if let Some(unknown) = manifests
        .iter()
        .find(|m| !WIDGET_KINDS.iter().any(|(key, _)| *key == m.widget))
    {
        panic!("unknown widget kind `{}` in manifest", unknown.widget);
    }

    let generated = format!(
        "/// Build-time generated widget window catalog.\n\
pub(crate) fn generated_window_config(kind: WidgetKind) -> WindowConfig {{\n    match kind {{\n{arms}    }}\n}}\n"
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("widget_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
