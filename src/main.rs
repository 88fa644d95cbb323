use std::env;
use std::process::ExitCode;

use tracing::{error, info};

use softras::logging::init_logging;
use softras::prelude::*;

const DEFAULT_OUTPUT: &str = "frame.png";

fn run() -> Result<()> {
    let mut args = env::args().skip(1);
    let mesh_path = args.next();
    let output = args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let config = RenderConfig::default();
    let mut scene = Scene::from_config(&config)?;

    let mut mesh = match &mesh_path {
        Some(path) => Mesh::from_source(&ObjMeshSource::new(path))?,
        None => Mesh::cube(),
    };
    let mut transform = Transform::new();
    transform
        .set_position(Vec3::new(0.0, 0.0, 5.0))
        .set_rotation(Vec3::new(0.4, 0.6, 0.0));
    mesh.set_world_matrix(transform.to_matrix());
    mesh.set_fill_color(config.fill_color);
    info!(mesh = mesh.name(), triangles = mesh.triangles().len(), "rendering");
    scene.add_mesh(mesh);

    let stats = scene.render()?;
    info!(
        triangles = stats.triangles,
        culled = stats.culled,
        fragments = stats.fragments,
        "frame complete"
    );

    scene.present(&mut PngPresenter::new(&output))
}

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
