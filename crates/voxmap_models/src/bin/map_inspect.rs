//! # Map Inspector
//!
//! Loads a map document and lists the grid models it produces.
//!
//! ```bash
//! map_inspect maps/harbor.json
//! map_inspect maps/harbor.json voxmap.toml
//! ```

use std::path::Path;
use std::process::ExitCode;

use voxmap_models::{EditorConfig, GridEntity, GridModel, MapDocument};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    let Some(map_path) = args.get(1) else {
        println!("Usage: map_inspect <map.json> [config.toml]");
        return ExitCode::FAILURE;
    };

    let config = match args.get(2) {
        Some(path) => match EditorConfig::from_file(Path::new(path)) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => EditorConfig::default(),
    };

    let map = match std::fs::read_to_string(map_path)
        .map_err(|e| e.to_string())
        .and_then(|text| MapDocument::from_json(&text).map_err(|e| e.to_string()))
    {
        Ok(map) => map,
        Err(e) => {
            eprintln!("Error: could not load {map_path}: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = map.validate(&config) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    print!("{}", report(&map));

    ExitCode::SUCCESS
}

/// Renders the header, one line per produced model and the totals.
fn report(map: &MapDocument) -> String {
    let base = map
        .color
        .to_rgb()
        .map_or_else(|| map.color.to_string(), |rgb| rgb.to_string());
    let visibility = if map.private { "private" } else { "public" };

    let mut out = format!(
        "{} ({}x{}x{}, base {base}, {visibility})\n",
        map.name, map.width, map.height, map.depth
    );

    let models = map.grid_models();
    for (index, model) in models.iter().enumerate() {
        out.push_str(&format!("  [{index:>4}] {}\n", describe(model)));
    }

    out.push('\n');
    out.push_str(&format!("Produced: {}\n", models.len()));
    out.push_str(&format!("Skipped:  {}\n", map.models.len() - models.len()));
    out
}

fn describe(model: &GridModel) -> String {
    let position = model.position().as_value();
    match model {
        GridModel::Voxel(voxel) => {
            let color = voxel.color();
            match color.to_rgb() {
                Some(rgb) => format!("{} at {position} color {color} ({rgb})", model.model_type()),
                None => format!("{} at {position} color {color}", model.model_type()),
            }
        }
    }
}
