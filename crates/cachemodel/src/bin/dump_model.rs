//! Decode model records from a directory store and print a JSON summary.
//!
//! The store directory holds one file per record at `<index>/<record>.dat`.
//!
//! Run: `cargo run -p cachemodel --features test-tools --bin dump_model -- <store_dir> <model_id>...`
//!
//! Set `RUST_LOG=debug` to see fetch and decode logging.

use std::env;
use std::process::ExitCode;

use cachemodel::{DirectoryStore, ModelDefinition, ModelLoader, RenderPriority};
use serde_json::{Value, json};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some((store_dir, ids)) = args.split_first() else {
        eprintln!("usage: dump_model <store_dir> <model_id>...");
        return ExitCode::FAILURE;
    };

    let loader = ModelLoader::new(DirectoryStore::new(store_dir));
    let mut failed = false;

    for arg in ids {
        let Ok(model_id) = arg.parse::<u32>() else {
            eprintln!("invalid model id: {arg}");
            failed = true;
            continue;
        };

        let summary = match loader.get_model(model_id) {
            Ok(Some(model)) => summarize(&model),
            Ok(None) => json!({ "id": model_id, "found": false }),
            Err(e) => {
                failed = true;
                json!({ "id": model_id, "error": e.to_string() })
            }
        };

        match serde_json::to_string_pretty(&summary) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("failed to serialize summary for {model_id}: {e}");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn summarize(model: &ModelDefinition) -> Value {
    let priority = match &model.priority {
        RenderPriority::Uniform(p) => json!(p),
        RenderPriority::PerFace(_) => json!("per-face"),
    };

    let bounds = (0..model.vertex_count)
        .filter_map(|i| model.vertex(i))
        .fold(None, |acc: Option<(_, _)>, v| match acc {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
        .map(|(min, max)| json!({ "min": min.to_array(), "max": max.to_array() }));

    json!({
        "id": model.id,
        "found": true,
        "vertex_count": model.vertex_count,
        "face_count": model.face_count,
        "texture_triangle_count": model.texture_triangle_count,
        "priority": priority,
        "textured": model.is_textured(),
        "has_alphas": model.face_alphas.is_some(),
        "has_face_skins": model.face_skins.is_some(),
        "has_vertex_skins": model.vertex_skins.is_some(),
        "has_texture_coordinates": model.texture_coordinates.is_some(),
        "bounds": bounds,
    })
}
