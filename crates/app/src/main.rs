//! Entry point for Orbital Overture.
//! Loads the model (and optionally its material library), then runs the
//! scene simulation headless for a fixed number of frames. Rendering is a
//! separate collaborator; this binary exercises everything up to it.

use anyhow::Result;
use scene::SceneState;

/// Fallback mesh when no --model is given, so the binary runs standalone.
const SAMPLE_OBJ: &str = "\
# unit quad
v -0.5 -0.5 0
v 0.5 -0.5 0
v 0.5 0.5 0
v -0.5 0.5 0
vn 0 0 1
f 1//1 2//1 3//1 4//1
";

fn parse_path_arg(name: &str) -> Option<String> {
    // Accept: --<name>=<path>
    let prefix = format!("--{}=", name);
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix(&prefix) {
            return Some(val.to_owned());
        }
    }
    None
}

fn parse_frames_arg() -> u32 {
    // Accept: --frames=N, default 300.
    let mut frames = 300;
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--frames=") {
            match val.parse::<u32>() {
                Ok(n) => frames = n,
                Err(_) => eprintln!("[warn] Bad --frames '{}', keeping {}.", val, frames),
            }
        }
    }
    frames
}

fn parse_keys_arg() -> Vec<scene::Command> {
    // Accept: --keys=tawd (replayed one per frame; space randomizes colors)
    let mut commands = Vec::new();
    for arg in std::env::args() {
        if let Some(val) = arg.strip_prefix("--keys=") {
            for key in val.chars() {
                match scene::Command::from_key(key) {
                    Some(cmd) => commands.push(cmd),
                    None => eprintln!("[warn] Key '{}' is not bound, skipping.", key),
                }
            }
        }
    }
    commands
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let frames = parse_frames_arg();
    let keys = parse_keys_arg();

    let mesh = match parse_path_arg("model") {
        Some(path) => asset::obj::load_obj_from_path(&path)?,
        None => {
            log::info!("No --model given; using the built-in sample mesh.");
            asset::obj::parse_obj(SAMPLE_OBJ)?
        }
    };
    log::info!(
        "Mesh ready: {} triangles ({} position / {} texcoord / {} normal floats)",
        mesh.triangle_count(),
        mesh.position.len(),
        mesh.texcoord.len(),
        mesh.normal.len(),
    );

    if let Some(path) = parse_path_arg("materials") {
        let materials = asset::mtl::load_mtl_from_path(&path)?;
        for (name, material) in &materials {
            log::info!(
                "Material '{}': diffuse={:?} shininess={:?}",
                name,
                material.diffuse,
                material.shininess
            );
        }
    }

    let mut rng = rand::thread_rng();
    let mut state = SceneState::new(16.0 / 9.0, &mut rng);

    let mut keys = keys.into_iter();
    for frame in 0..frames {
        if let Some(command) = keys.next() {
            state.apply(command, &mut rng);
        }
        state.tick(&mut rng);

        let t = frame as f32 / 60.0;
        let mvp = state.spin_matrix(t);
        if frame % 60 == 0 {
            log::info!(
                "frame {:4}: eye_y={:.1} color0={:.2?} mvp_col3={:.2?}",
                frame,
                state.rig.camera.eye.y,
                state.drift.colors[0],
                mvp.col(3).to_array(),
            );
        }
    }

    log::info!("Graceful shutdown. Bye!");
    Ok(())
}
