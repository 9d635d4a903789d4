use std::env;
use std::io::Write;
use std::process;
use std::time::Instant;

use log::{debug, error, info, Level};

use layer_slice::error::Result;
use layer_slice::{stl_op, Settings, SliceError, Slicer};

fn main(){
    init_logger();

    let mut args = env::args().skip(1);
    let Some(stl_path) = args.next() else {
        error!("usage: layer-slice <stl_file> [settings.json]");
        process::exit(2);
    };
    let settings = match args.next() {
        Some(settings_path) => match Settings::from_json_file(&settings_path) {
            Ok(settings) => settings,
            Err(err) => {
                error!("{err}");
                process::exit(1);
            }
        },
        None => Settings::default(),
    };
    debug!("{settings:?}");

    if let Err(err) = run(&stl_path, &settings) {
        error!("{err}");
        process::exit(1);
    }
}

fn run(stl_path:&str, settings:&Settings) -> Result<()> {
    let start_time = Instant::now();

    let mut mesh = stl_op::load_mesh_from_file(stl_path)?;
    if mesh.is_empty() {
        return Err(SliceError::EmptyMesh)
    }
    settings.apply_transforms(&mut mesh)?;

    let bounds = mesh.bounding_box();
    println!("Successfully read {} triangles ({} rejected).", mesh.triangle_count(), mesh.rejected_count());
    println!("The total surface area of the part is {:.4} mm^2.", mesh.surface_area());
    println!("The total volume of the part is {:.4} mm^3.", mesh.volume());
    println!("The model bounding box is: Minimum: ({}, {}, {}) and Maximum: ({}, {}, {})",
        bounds.min.x, bounds.min.y, bounds.min.z,
        bounds.max.x, bounds.max.y, bounds.max.z);

    let mut slicer = Slicer::new(&mesh, settings.layer_height)?.with_anchor(settings.anchor);
    slicer.slice_model();

    for (i,layer) in slicer.layers().iter().enumerate() {
        println!("layer {i:04} z = {:>9.4}: {:>6} lines", layer.height, layer.line_count());
    }
    if !slicer.anomalies().is_empty() {
        info!("{} triangles produced no line because of an unexpected intersection", slicer.anomalies().len());
    }
    println!("\x1b[034mSliced {} layers in {} sec\x1b[0m",
        slicer.layers().len(), start_time.elapsed().as_secs_f64());
    Ok(())
}

fn init_logger(){
    env_logger::builder()
        .format(|buf, record|{
            match record.level() {
                Level::Error => write!(buf,"\x1b[031mError\x1b[0m")?,
                Level::Warn  => write!(buf,"\x1b[033mWarn \x1b[0m")?,
                Level::Info  => write!(buf,"\x1b[032mInfo \x1b[0m")?,
                Level::Debug => write!(buf,"\x1b[034mDebug\x1b[0m")?,
                Level::Trace => write!(buf,"\x1b[035mTrace\x1b[0m")?,
            };
            writeln!(buf,": {}",record.args())
        })
    .init();
}
